//! Command line argument parsing for the synswap CLI using clap.

use std::path::PathBuf;

use clap::Parser;

/// Default text transformed when neither `--text` nor `--file` is given.
pub const DEFAULT_TEXT: &str = "SaaS has dramatically lowered the intrinsic total \
cost of ownership for adopting software, solved scaling challenges and taken away \
the burden of issues with local hardware.";

/// synswap - swap words for synonyms from a lexical dictionary
#[derive(Parser, Debug, Clone)]
#[command(name = "synswap")]
#[command(about = "Swap words for synonyms drawn from a lexical dictionary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SynswapArgs {
    /// Literal text to transform when --file is not given
    #[arg(long, default_value = DEFAULT_TEXT)]
    pub text: String,

    /// Path to a text file; each line is transformed and printed independently
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// One in N swap chance per word
    #[arg(long, default_value = "5", value_name = "N")]
    pub chance: u32,

    /// Path to a JSON lexicon file (word -> senses -> lemmas); embedded
    /// default lexicon when absent
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl SynswapArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let args = SynswapArgs::try_parse_from(["synswap"]).unwrap();

        assert_eq!(args.text, DEFAULT_TEXT);
        assert_eq!(args.file, None);
        assert_eq!(args.chance, 5);
        assert_eq!(args.lexicon, None);
    }

    #[test]
    fn test_text_and_chance() {
        let args = SynswapArgs::try_parse_from([
            "synswap",
            "--text",
            "hello world",
            "--chance",
            "2",
        ])
        .unwrap();

        assert_eq!(args.text, "hello world");
        assert_eq!(args.chance, 2);
    }

    #[test]
    fn test_file_mode() {
        let args = SynswapArgs::try_parse_from(["synswap", "--file", "input.txt"]).unwrap();
        assert_eq!(args.file, Some(PathBuf::from("input.txt")));
    }

    #[test]
    fn test_lexicon_path() {
        let args =
            SynswapArgs::try_parse_from(["synswap", "--lexicon", "senses.json"]).unwrap();
        assert_eq!(args.lexicon, Some(PathBuf::from("senses.json")));
    }

    #[test]
    fn test_non_integer_chance_rejected() {
        assert!(SynswapArgs::try_parse_from(["synswap", "--chance", "lots"]).is_err());
        assert!(SynswapArgs::try_parse_from(["synswap", "--chance", "-3"]).is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let args = SynswapArgs::try_parse_from(["synswap"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = SynswapArgs::try_parse_from(["synswap", "-vv"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = SynswapArgs::try_parse_from(["synswap", "--quiet"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }
}

//! Command implementation for the synswap CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::sync::Arc;

use log::{debug, info};

use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::cli::args::SynswapArgs;
use crate::error::{Result, SynswapError};
use crate::lexicon::SenseDictionary;
use crate::swapper::SynonymSwapper;

/// Execute the CLI: transform `--text` or each line of `--file` and print
/// the results to standard output.
pub fn execute_command(args: SynswapArgs) -> Result<()> {
    let lexicon = load_lexicon(&args)?;
    info!(
        "lexicon ready with {} words, swap chance 1 in {}",
        lexicon.len(),
        args.chance
    );

    let mut swapper = SynonymSwapper::new(Arc::new(lexicon));
    let tokenizer = WhitespaceTokenizer::new();

    match &args.file {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                SynswapError::other(format!("Failed to open '{}': {}", path.display(), e))
            })?;
            for line in transform_lines(BufReader::new(file), &tokenizer, &mut swapper, args.chance)?
            {
                println!("{line}");
            }
        }
        None => {
            let tokens = tokenize(&tokenizer, &args.text)?;
            println!("{}", swapper.swap(&tokens, args.chance)?);
        }
    }

    Ok(())
}

/// Transform every line of `reader` independently, preserving line order.
/// Trailing whitespace (including the newline) is stripped before splitting.
pub fn transform_lines<R: BufRead>(
    reader: R,
    tokenizer: &dyn Tokenizer,
    swapper: &mut SynonymSwapper,
    swap_rate: u32,
) -> Result<Vec<String>> {
    let mut output = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let tokens = tokenize(tokenizer, line.trim_end())?;
        debug!("transforming line with {} tokens", tokens.len());
        output.push(swapper.swap(&tokens, swap_rate)?);
    }

    Ok(output)
}

fn tokenize(tokenizer: &dyn Tokenizer, text: &str) -> Result<Vec<Token>> {
    Ok(tokenizer.tokenize(text)?.collect())
}

fn load_lexicon(args: &SynswapArgs) -> Result<SenseDictionary> {
    match &args.lexicon {
        Some(path) => {
            let path = path.to_str().ok_or_else(|| {
                SynswapError::invalid_argument("lexicon path is not valid UTF-8")
            })?;
            SenseDictionary::load_from_file(path)
        }
        None => SenseDictionary::embedded(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::io::Cursor;

    use crate::random::SequenceRandom;

    fn forced_swapper() -> SynonymSwapper {
        let mut entries = HashMap::new();
        entries.insert("cat".to_string(), vec![vec!["feline".to_string()]]);
        let lexicon = Arc::new(SenseDictionary::from_entries(entries).unwrap());
        SynonymSwapper::with_random(lexicon, Box::new(SequenceRandom::new(vec![0])))
    }

    #[test]
    fn test_transform_lines_preserves_count_and_order() {
        let input = Cursor::new("cat runs\ndog sits\n");
        let tokenizer = WhitespaceTokenizer::new();
        let mut swapper = forced_swapper();

        let lines = transform_lines(input, &tokenizer, &mut swapper, 1).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "feline runs");
        assert_eq!(lines[1], "dog sits");
    }

    #[test]
    fn test_transform_lines_strips_trailing_whitespace() {
        let input = Cursor::new("cat  \n");
        let tokenizer = WhitespaceTokenizer::new();
        let mut swapper = forced_swapper();

        let lines = transform_lines(input, &tokenizer, &mut swapper, 1).unwrap();
        assert_eq!(lines, vec!["feline".to_string()]);
    }

    #[test]
    fn test_transform_empty_line() {
        let input = Cursor::new("\n");
        let tokenizer = WhitespaceTokenizer::new();
        let mut swapper = forced_swapper();

        let lines = transform_lines(input, &tokenizer, &mut swapper, 1).unwrap();
        assert_eq!(lines, vec![String::new()]);
    }
}

//! FST-backed sense dictionary.
//!
//! Uses FST (Finite State Transducer) for memory-efficient storage and fast
//! lookup of the word-to-senses mapping.

use std::collections::HashMap;
use std::sync::Arc;

use fst::{Map, MapBuilder};
use log::debug;

use crate::error::{Result, SynswapError};
use crate::lexicon::{Lexicon, Sense};

/// Embedded default lexicon, loaded when no file is supplied.
const DEFAULT_LEXICON_JSON: &str = include_str!("../../resources/lexicon.json");

/// A sense dictionary backed by an FST map.
///
/// Maps words to their sense lists using an FST for the key set, with the
/// actual senses stored in a side table indexed by the FST values. The FST
/// keeps the key storage compact and lookups fast for large dictionaries.
#[derive(Debug, Clone)]
pub struct SenseDictionary {
    /// FST map: word -> index into sense_lists
    fst_map: Arc<Map<Arc<[u8]>>>,
    /// Sense lists indexed by FST values
    sense_lists: Arc<Vec<Vec<Sense>>>,
}

impl SenseDictionary {
    /// Create an empty dictionary.
    pub fn empty() -> Self {
        let builder = MapBuilder::memory();
        // An empty FST build cannot fail.
        let fst_bytes = builder.into_inner().expect("empty FST build");
        let fst_map = Map::new(Arc::from(fst_bytes)).expect("empty FST map");

        SenseDictionary {
            fst_map: Arc::new(fst_map),
            sense_lists: Arc::new(Vec::new()),
        }
    }

    /// Load the embedded default lexicon.
    pub fn embedded() -> Result<Self> {
        Self::from_json(DEFAULT_LEXICON_JSON)
    }

    /// Load a sense dictionary from a JSON file.
    ///
    /// The file maps each word to an array of senses, where each sense is an
    /// array of candidate synonym lemmas:
    ///
    /// ```json
    /// {
    ///   "cat": [["feline", "kitty"], ["guy", "hombre"]],
    ///   "big": [["large", "huge"]]
    /// }
    /// ```
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SynswapError::lexicon(format!("Failed to read lexicon file '{}': {}", path, e))
        })?;

        Self::from_json(&content)
    }

    /// Parse a sense dictionary from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        let entries: HashMap<String, Vec<Vec<String>>> =
            serde_json::from_str(content).map_err(|e| {
                SynswapError::lexicon(format!("Failed to parse lexicon JSON: {}", e))
            })?;

        Self::from_entries(entries)
    }

    /// Build a sense dictionary from an in-memory word-to-senses map.
    pub fn from_entries(entries: HashMap<String, Vec<Vec<String>>>) -> Result<Self> {
        // FST insertion requires sorted keys.
        let mut sorted_words: Vec<_> = entries.keys().cloned().collect();
        sorted_words.sort();

        let mut sense_lists = Vec::with_capacity(sorted_words.len());
        let mut builder = MapBuilder::memory();

        for word in sorted_words {
            let senses: Vec<Sense> = entries[&word]
                .iter()
                .map(|lemmas| Sense::new(lemmas.clone()))
                .collect();
            let index = sense_lists.len() as u64;
            sense_lists.push(senses);
            builder
                .insert(word.as_bytes(), index)
                .map_err(|e| SynswapError::lexicon(format!("FST build error: {}", e)))?;
        }

        let fst_bytes = builder
            .into_inner()
            .map_err(|e| SynswapError::lexicon(format!("FST finalize error: {}", e)))?;
        let fst_map = Map::new(Arc::from(fst_bytes))
            .map_err(|e| SynswapError::lexicon(format!("FST creation error: {}", e)))?;

        debug!("sense dictionary built with {} words", sense_lists.len());

        Ok(SenseDictionary {
            fst_map: Arc::new(fst_map),
            sense_lists: Arc::new(sense_lists),
        })
    }

    /// Number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.sense_lists.len()
    }

    /// Check whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.sense_lists.is_empty()
    }
}

impl Lexicon for SenseDictionary {
    fn senses_for(&self, word: &str) -> Vec<Sense> {
        match self.fst_map.get(word.as_bytes()) {
            Some(index) => self
                .sense_lists
                .get(index as usize)
                .cloned()
                .unwrap_or_default(),
            None => Vec::new(),
        }
    }

    fn name(&self) -> &'static str {
        "sense_dictionary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dict() -> SenseDictionary {
        let mut entries = HashMap::new();
        entries.insert(
            "cat".to_string(),
            vec![
                vec!["feline".to_string(), "kitty".to_string()],
                vec!["guy".to_string(), "hombre".to_string()],
            ],
        );
        entries.insert("big".to_string(), vec![vec!["large".to_string()]]);
        SenseDictionary::from_entries(entries).unwrap()
    }

    #[test]
    fn test_dictionary_lookup() {
        let dict = sample_dict();

        let senses = dict.senses_for("cat");
        assert_eq!(senses.len(), 2);
        assert_eq!(senses[0].candidates(), ["feline", "kitty"]);
        assert_eq!(senses[1].candidates(), ["guy", "hombre"]);
    }

    #[test]
    fn test_dictionary_miss() {
        let dict = sample_dict();
        assert!(dict.senses_for("xylophone").is_empty());
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = SenseDictionary::empty();
        assert!(dict.is_empty());
        assert!(dict.senses_for("anything").is_empty());
    }

    #[test]
    fn test_from_json() {
        let dict = SenseDictionary::from_json(
            r#"{"run": [["sprint", "dash"], ["operate"]], "walk": [["stroll"]]}"#,
        )
        .unwrap();

        assert_eq!(dict.len(), 2);
        let senses = dict.senses_for("run");
        assert_eq!(senses.len(), 2);
        assert_eq!(senses[1].candidates(), ["operate"]);
    }

    #[test]
    fn test_malformed_json_is_a_lexicon_error() {
        let result = SenseDictionary::from_json("not json at all");
        assert!(matches!(result, Err(SynswapError::Lexicon(_))));
    }

    #[test]
    fn test_embedded_lexicon_loads() {
        let dict = SenseDictionary::embedded().unwrap();
        assert!(!dict.is_empty());
        // A word from the default sample sentence must resolve.
        assert!(!dict.senses_for("software").is_empty());
    }
}

//! In-memory [`LexicalStore`] for tests, benches, and offline fixtures.
//!
//! Rows are kept in insertion order and every lookup scans them in that
//! order, which mirrors how SQLite returns rows from an unsorted query.

use super::LexicalStore;
use crate::error::Result;
use crate::types::{SynsetId, WordId};

#[derive(Debug, Clone)]
struct WordRow {
    word_id: WordId,
    lemma: String,
    lang: String,
}

#[derive(Debug, Clone)]
struct SenseRow {
    word_id: WordId,
    synset: SynsetId,
}

#[derive(Debug, Clone)]
struct SynsetRow {
    synset: SynsetId,
    pos: String,
}

#[derive(Debug, Clone)]
struct DefinitionRow {
    synset: SynsetId,
    lang: String,
    text: String,
}

/// Lexicon held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLexicon {
    words: Vec<WordRow>,
    senses: Vec<SenseRow>,
    synsets: Vec<SynsetRow>,
    definitions: Vec<DefinitionRow>,
}

impl MemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_word(&mut self, word_id: WordId, lemma: &str, lang: &str) -> &mut Self {
        self.words.push(WordRow {
            word_id,
            lemma: lemma.to_string(),
            lang: lang.to_string(),
        });
        self
    }

    pub fn add_sense(&mut self, word_id: WordId, synset: &str) -> &mut Self {
        self.senses.push(SenseRow {
            word_id,
            synset: synset.to_string(),
        });
        self
    }

    pub fn add_synset(&mut self, synset: &str, pos: &str) -> &mut Self {
        self.synsets.push(SynsetRow {
            synset: synset.to_string(),
            pos: pos.to_string(),
        });
        self
    }

    pub fn add_definition(&mut self, synset: &str, lang: &str, text: &str) -> &mut Self {
        self.definitions.push(DefinitionRow {
            synset: synset.to_string(),
            lang: lang.to_string(),
            text: text.to_string(),
        });
        self
    }
}

impl LexicalStore for MemoryLexicon {
    fn find_word_ids(&self, lemma: &str) -> Result<Vec<WordId>> {
        Ok(self
            .words
            .iter()
            .filter(|w| w.lemma == lemma)
            .map(|w| w.word_id)
            .collect())
    }

    fn find_synsets_for_word_id(&self, word_id: WordId) -> Result<Vec<SynsetId>> {
        Ok(self
            .senses
            .iter()
            .filter(|s| s.word_id == word_id)
            .map(|s| s.synset.clone())
            .collect())
    }

    fn find_pos_for_synset(&self, synset: &str) -> Result<Option<String>> {
        Ok(self
            .synsets
            .iter()
            .find(|s| s.synset == synset)
            .map(|s| s.pos.clone()))
    }

    fn find_japanese_definition(&self, synset: &str) -> Result<Option<String>> {
        Ok(self
            .definitions
            .iter()
            .find(|d| d.synset == synset && d.lang == "jpn")
            .map(|d| d.text.clone()))
    }

    fn find_english_synonyms(&self, synset: &str) -> Result<Vec<String>> {
        // Sense-driven join: one lemma per matching sense row.
        let mut lemmas = Vec::new();
        for sense in self.senses.iter().filter(|s| s.synset == synset) {
            for word in &self.words {
                if word.word_id == sense.word_id && word.lang == "eng" {
                    lemmas.push(word.lemma.clone());
                }
            }
        }
        Ok(lemmas)
    }
}

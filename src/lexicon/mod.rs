//! Lexical store abstraction — the five read-only lookups the graph builder
//! performs, and the providers that hand out one store handle per build.
//!
//! - [`sqlite`] — [`SqliteLexicon`] over the WordNet SQLite file
//! - [`memory`] — [`MemoryLexicon`], an in-memory fake with the same row order semantics

pub mod memory;
pub mod sqlite;

use std::path::PathBuf;

use crate::error::Result;
use crate::types::{SynsetId, WordId};

pub use memory::MemoryLexicon;
pub use sqlite::SqliteLexicon;

/// Read-only queries against the `word`/`sense`/`synset`/`synset_def`
/// relations. Every sequence is returned in the store's natural row order.
pub trait LexicalStore {
    /// All word ids whose lemma equals `lemma` exactly.
    fn find_word_ids(&self, lemma: &str) -> Result<Vec<WordId>>;

    /// Synsets the word participates in, via `sense`.
    fn find_synsets_for_word_id(&self, word_id: WordId) -> Result<Vec<SynsetId>>;

    /// The pos code of a synset, if the synset has a row.
    fn find_pos_for_synset(&self, synset: &str) -> Result<Option<String>>;

    /// The Japanese (`lang = 'jpn'`) definition of a synset.
    fn find_japanese_definition(&self, synset: &str) -> Result<Option<String>>;

    /// Lemmas of every English (`lang = 'eng'`) word sharing `synset`.
    fn find_english_synonyms(&self, synset: &str) -> Result<Vec<String>>;
}

/// Hands out a fresh store handle for each graph build. The handle is
/// released when the build drops it.
pub trait StoreProvider: Send + Sync {
    fn acquire(&self) -> Result<Box<dyn LexicalStore>>;
}

/// Opens a new read-only SQLite connection per acquisition.
#[derive(Debug, Clone)]
pub struct SqliteProvider {
    path: PathBuf,
}

impl SqliteProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StoreProvider for SqliteProvider {
    fn acquire(&self) -> Result<Box<dyn LexicalStore>> {
        Ok(Box::new(SqliteLexicon::open(&self.path)?))
    }
}

impl StoreProvider for MemoryLexicon {
    fn acquire(&self) -> Result<Box<dyn LexicalStore>> {
        Ok(Box::new(self.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn sqlite_provider_fails_for_missing_database() {
        let dir = TempDir::new().unwrap();
        let provider = SqliteProvider::new(dir.path().join("nope.db"));
        assert!(provider.acquire().is_err());
    }

    #[test]
    fn memory_provider_hands_out_independent_snapshots() {
        let mut lexicon = MemoryLexicon::new();
        lexicon.add_word(1, "bank", "eng");
        let handle = lexicon.acquire().unwrap();
        lexicon.add_word(2, "bank", "eng");
        assert_eq!(handle.find_word_ids("bank").unwrap(), vec![1]);
    }
}

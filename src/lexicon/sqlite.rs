//! SQLite-backed [`LexicalStore`].

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::LexicalStore;
use crate::db::schema::open_lexicon;
use crate::error::Result;
use crate::types::{SynsetId, WordId};

// ---------------------------------------------------------------------------
// SQL constants
// ---------------------------------------------------------------------------

const FIND_WORD_IDS_SQL: &str = "SELECT wordid FROM word WHERE lemma = ?1";

const FIND_SYNSETS_SQL: &str = "SELECT synset FROM sense WHERE wordid = ?1";

const FIND_POS_SQL: &str = "SELECT pos FROM synset WHERE synset = ?1";

const FIND_JAPANESE_DEF_SQL: &str =
    "SELECT def FROM synset_def WHERE synset = ?1 AND lang = 'jpn'";

const FIND_ENGLISH_SYNONYMS_SQL: &str = "\
SELECT w.lemma FROM word w JOIN sense s ON w.wordid = s.wordid
WHERE s.synset = ?1 AND w.lang = 'eng'";

// ---------------------------------------------------------------------------
// SqliteLexicon
// ---------------------------------------------------------------------------

/// Lexical store over one SQLite connection.
///
/// Queries go through [`Connection::prepare_cached`], so a build that visits
/// dozens of synsets compiles each statement once. Dropping the lexicon
/// closes the connection.
pub struct SqliteLexicon {
    conn: Connection,
}

impl std::fmt::Debug for SqliteLexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteLexicon").finish_non_exhaustive()
    }
}

impl SqliteLexicon {
    /// Open the database at `path` read-only.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            conn: open_lexicon(path)?,
        })
    }

    /// Wrap an already-open connection (tests use `:memory:` databases).
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// First column of the first row, if any row matches.
    fn first_text(&self, sql: &str, synset: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare_cached(sql)?;
        let value = stmt
            .query_row(params![synset], |row| row.get::<_, Option<String>>(0))
            .optional()?;
        Ok(value.flatten())
    }
}

impl LexicalStore for SqliteLexicon {
    fn find_word_ids(&self, lemma: &str) -> Result<Vec<WordId>> {
        let mut stmt = self.conn.prepare_cached(FIND_WORD_IDS_SQL)?;
        let rows = stmt.query_map(params![lemma], |row| row.get(0))?;
        Ok(rows.collect::<rusqlite::Result<Vec<WordId>>>()?)
    }

    fn find_synsets_for_word_id(&self, word_id: WordId) -> Result<Vec<SynsetId>> {
        let mut stmt = self.conn.prepare_cached(FIND_SYNSETS_SQL)?;
        let rows = stmt.query_map(params![word_id], |row| row.get::<_, Option<SynsetId>>(0))?;
        let mut synsets = Vec::new();
        for synset in rows {
            // A NULL synset can never resolve to a pos, so the sense is dropped.
            if let Some(synset) = synset? {
                synsets.push(synset);
            }
        }
        Ok(synsets)
    }

    fn find_pos_for_synset(&self, synset: &str) -> Result<Option<String>> {
        self.first_text(FIND_POS_SQL, synset)
    }

    fn find_japanese_definition(&self, synset: &str) -> Result<Option<String>> {
        self.first_text(FIND_JAPANESE_DEF_SQL, synset)
    }

    fn find_english_synonyms(&self, synset: &str) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare_cached(FIND_ENGLISH_SYNONYMS_SQL)?;
        let rows = stmt.query_map(params![synset], |row| row.get::<_, Option<String>>(0))?;
        let mut lemmas = Vec::new();
        for lemma in rows {
            // NULL lemmas carry no surface form to show.
            if let Some(lemma) = lemma? {
                lemmas.push(lemma);
            }
        }
        Ok(lemmas)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

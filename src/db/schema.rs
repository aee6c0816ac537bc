//! Opening the lexical database and, for fixtures, creating its layout.
//!
//! The production database (`wnjpn.db`) is produced elsewhere and only ever
//! opened read-only here. [`create_lexicon_schema`] reproduces the subset of
//! its layout that the graph builder queries so tests can build small
//! databases with the same shape.

use std::path::Path;
use std::time::Duration;

use rusqlite::{Connection, OpenFlags};

use crate::error::Result;

// ---------------------------------------------------------------------------
// DDL constants
// ---------------------------------------------------------------------------

const CREATE_WORD: &str = "\
CREATE TABLE IF NOT EXISTS word (
  wordid INTEGER PRIMARY KEY,
  lang TEXT,
  lemma TEXT,
  pron TEXT,
  pos TEXT
)";

const CREATE_SENSE: &str = "\
CREATE TABLE IF NOT EXISTS sense (
  synset TEXT,
  wordid INTEGER,
  lang TEXT,
  rank TEXT,
  lexid INTEGER,
  freq INTEGER,
  src TEXT
)";

const CREATE_SYNSET: &str = "\
CREATE TABLE IF NOT EXISTS synset (
  synset TEXT,
  pos TEXT,
  name TEXT,
  src TEXT
)";

const CREATE_SYNSET_DEF: &str = "\
CREATE TABLE IF NOT EXISTS synset_def (
  synset TEXT,
  lang TEXT,
  def TEXT,
  sid TEXT
)";

const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS word_lemma_idx ON word(lemma)",
    "CREATE INDEX IF NOT EXISTS sense_wordid_idx ON sense(wordid)",
    "CREATE INDEX IF NOT EXISTS sense_synset_idx ON sense(synset)",
    "CREATE INDEX IF NOT EXISTS synset_synset_idx ON synset(synset)",
    "CREATE INDEX IF NOT EXISTS synset_def_synset_idx ON synset_def(synset, lang)",
];

/// How long a reader waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Open the lexical database at `path` read-only.
///
/// Fails when the file does not exist rather than silently creating an
/// empty database, so a misconfigured path surfaces on the first query.
pub fn open_lexicon(path: impl AsRef<Path>) -> Result<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
        | OpenFlags::SQLITE_OPEN_NO_MUTEX
        | OpenFlags::SQLITE_OPEN_URI;
    let conn = Connection::open_with_flags(path.as_ref(), flags)?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(conn)
}

/// Create the `word`, `sense`, `synset`, and `synset_def` relations plus
/// their lookup indexes on a writable connection.
pub fn create_lexicon_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(CREATE_WORD)?;
    conn.execute_batch(CREATE_SENSE)?;
    conn.execute_batch(CREATE_SYNSET)?;
    conn.execute_batch(CREATE_SYNSET_DEF)?;
    for ddl in CREATE_INDEXES {
        conn.execute_batch(ddl)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

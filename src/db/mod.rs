//! Database layer — read-only access to the Japanese WordNet SQLite file.

pub mod schema;

//! wnjgraph — synonym graphs over the Japanese WordNet database.
//!
//! Given a word, collects its noun and verb senses, the Japanese gloss of
//! each sense, and the English synonyms sharing it, and returns them as a
//! node/link graph ready for force-directed rendering.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod graph;
pub mod lexicon;
pub mod observability;
pub mod service;
pub mod types;

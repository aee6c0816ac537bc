//! Graph layer — synonym tree construction and its visual encoding.

pub mod builder;
pub mod palette;

pub use builder::build_synonym_graph;

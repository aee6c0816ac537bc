//! Core domain types for wnjgraph.
//!
//! The output types serialize to the exact JSON shape the rendering front
//! end consumes: `{"nodes": [{id, label, group, color}], "links": [{source, target}]}`.

use serde::{Deserialize, Serialize};

/// Row id of the `word` relation.
pub type WordId = i64;

/// Synset identifier as stored in the `synset` relation (e.g. `"08420278-n"`).
pub type SynsetId = String;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// Parts of speech the graph covers. Every other code in the store is
/// dropped during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pos {
    Noun,
    Verb,
}

impl Pos {
    /// Map a store pos code to a variant. Only `"n"` and `"v"` qualify.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "n" => Some(Self::Noun),
            "v" => Some(Self::Verb),
            _ => None,
        }
    }

    /// The code as stored in `synset.pos`, also used in pos-node ids.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Noun => "n",
            Self::Verb => "v",
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// NodeKind
// ---------------------------------------------------------------------------

/// Structural role of a node in the synonym tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The queried word itself.
    Root,
    /// One per part of speech the word has.
    PartOfSpeech(Pos),
    /// The Japanese gloss of one synset.
    Definition(Pos),
    /// An English lemma sharing the synset.
    Synonym,
}

impl NodeKind {
    /// Group number the front end uses for layout and legend.
    pub fn group(&self) -> u8 {
        match self {
            Self::Root => 0,
            Self::PartOfSpeech(_) => 1,
            Self::Definition(_) => 2,
            Self::Synonym => 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Node ids
// ---------------------------------------------------------------------------

/// `word_pos`, e.g. `bank_n`.
pub fn pos_node_id(word: &str, pos: Pos) -> String {
    format!("{}_{}", word, pos.code())
}

/// `synset_def`, e.g. `08420278-n_def`.
pub fn definition_node_id(synset: &str) -> String {
    format!("{}_def", synset)
}

/// `lemma_synset`, e.g. `depository financial institution_08420278-n`.
pub fn synonym_node_id(lemma: &str, synset: &str) -> String {
    format!("{}_{}", lemma, synset)
}

// ---------------------------------------------------------------------------
// Graph output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub group: u8,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
}

/// Node/link graph in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl SynonymGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes belonging to a given group, in insertion order.
    pub fn nodes_in_group(&self, group: u8) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(move |n| n.group == group)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Visual encoding of graph nodes: colors and part-of-speech labels.

use crate::types::{NodeKind, Pos};

pub const ROOT_COLOR: &str = "#9e9e9e";
pub const NOUN_COLOR: &str = "#42a5f5";
pub const VERB_COLOR: &str = "#ef5350";
pub const SYNONYM_COLOR: &str = "#8bc34a";

pub const NOUN_LABEL: &str = "名詞";
pub const VERB_LABEL: &str = "動詞";

/// Color for a part of speech. Definition nodes inherit it.
pub fn pos_color(pos: Pos) -> &'static str {
    match pos {
        Pos::Noun => NOUN_COLOR,
        Pos::Verb => VERB_COLOR,
    }
}

/// Display label of a pos node.
pub fn pos_label(pos: Pos) -> &'static str {
    match pos {
        Pos::Noun => NOUN_LABEL,
        Pos::Verb => VERB_LABEL,
    }
}

/// Color for any node kind.
pub fn color_for(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Root => ROOT_COLOR,
        NodeKind::PartOfSpeech(pos) | NodeKind::Definition(pos) => pos_color(pos),
        NodeKind::Synonym => SYNONYM_COLOR,
    }
}

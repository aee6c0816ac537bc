//! Synonym graph construction.
//!
//! Walks word → sense → synset → (definition, synonyms) and emits a strict
//! tree: root word, one node per part of speech, one definition node per
//! qualifying synset, and one synonym node per English lemma of that synset.

use std::collections::HashSet;

use crate::error::Result;
use crate::graph::palette::{color_for, pos_label};
use crate::lexicon::LexicalStore;
use crate::types::{
    definition_node_id, pos_node_id, synonym_node_id, GraphLink, GraphNode, NodeKind, Pos,
    SynonymGraph, SynsetId, WordId,
};

/// Build the synonym graph for `word`.
///
/// `word` is matched against `lemma` literally; callers normalize first.
/// A word the store does not know yields an empty graph. Any store error
/// aborts the build and no partial graph is returned.
pub fn build_synonym_graph<S>(store: &S, word: &str) -> Result<SynonymGraph>
where
    S: LexicalStore + ?Sized,
{
    let word_ids = store.find_word_ids(word)?;
    if word_ids.is_empty() {
        tracing::debug!(word, "word not in lexicon");
        return Ok(SynonymGraph::default());
    }

    let senses = collect_senses(store, &word_ids)?;

    let mut builder = GraphBuilder::new(word);
    for (synset, pos) in &senses {
        let pos_id = builder.ensure_pos_node(*pos);

        let definition = store.find_japanese_definition(synset)?.unwrap_or_default();
        let def_id = builder.add_definition(&pos_id, synset, *pos, definition);

        for lemma in store.find_english_synonyms(synset)? {
            if lemma == word {
                continue;
            }
            builder.add_synonym(&def_id, synset, lemma);
        }
    }

    let graph = builder.finish();
    tracing::debug!(
        word,
        senses = senses.len(),
        nodes = graph.nodes.len(),
        links = graph.links.len(),
        "built synonym graph"
    );
    Ok(graph)
}

/// `(synset, pos)` pairs for every word id, noun and verb only, in the order
/// the store returns them.
fn collect_senses<S>(store: &S, word_ids: &[WordId]) -> Result<Vec<(SynsetId, Pos)>>
where
    S: LexicalStore + ?Sized,
{
    let mut senses = Vec::new();
    for &word_id in word_ids {
        for synset in store.find_synsets_for_word_id(word_id)? {
            let pos = store
                .find_pos_for_synset(&synset)?
                .as_deref()
                .and_then(Pos::from_code);
            if let Some(pos) = pos {
                senses.push((synset, pos));
            }
        }
    }
    Ok(senses)
}

// ---------------------------------------------------------------------------
// GraphBuilder
// ---------------------------------------------------------------------------

/// Per-request accumulator. Owns the only dedup state: the set of pos-node
/// ids already emitted.
struct GraphBuilder<'a> {
    word: &'a str,
    graph: SynonymGraph,
    pos_added: HashSet<String>,
}

impl<'a> GraphBuilder<'a> {
    fn new(word: &'a str) -> Self {
        let mut builder = Self {
            word,
            graph: SynonymGraph::default(),
            pos_added: HashSet::new(),
        };
        builder.push_node(word.to_string(), word.to_string(), NodeKind::Root);
        builder
    }

    fn push_node(&mut self, id: String, label: String, kind: NodeKind) {
        self.graph.nodes.push(GraphNode {
            id,
            label,
            group: kind.group(),
            color: color_for(kind).to_string(),
        });
    }

    fn push_link(&mut self, source: &str, target: &str) {
        self.graph.links.push(GraphLink {
            source: source.to_string(),
            target: target.to_string(),
        });
    }

    /// Emit the pos node on first sight and return its id.
    fn ensure_pos_node(&mut self, pos: Pos) -> String {
        let id = pos_node_id(self.word, pos);
        if self.pos_added.insert(id.clone()) {
            self.push_node(id.clone(), pos_label(pos).to_string(), NodeKind::PartOfSpeech(pos));
            let root = self.word;
            self.push_link(root, &id);
        }
        id
    }

    fn add_definition(&mut self, pos_id: &str, synset: &str, pos: Pos, text: String) -> String {
        let id = definition_node_id(synset);
        self.push_node(id.clone(), text, NodeKind::Definition(pos));
        self.push_link(pos_id, &id);
        id
    }

    fn add_synonym(&mut self, def_id: &str, synset: &str, lemma: String) {
        let id = synonym_node_id(&lemma, synset);
        self.push_node(id.clone(), lemma, NodeKind::Synonym);
        self.push_link(def_id, &id);
    }

    fn finish(self) -> SynonymGraph {
        self.graph
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

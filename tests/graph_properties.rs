//! Property-based tests for the synonym graph builder.
//!
//! Random lexicons are generated with one word id per (lemma, lang) and
//! unique sense rows, so every node id in a result is unique and the tree
//! invariants can be checked by id.

use std::collections::{BTreeSet, HashMap, HashSet};

use proptest::prelude::*;
use rusqlite::{params, Connection};

use wnjgraph::db::schema::create_lexicon_schema;
use wnjgraph::graph::build_synonym_graph;
use wnjgraph::lexicon::{MemoryLexicon, SqliteLexicon};
use wnjgraph::types::SynonymGraph;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

const LEMMAS: &[&str] = &["bank", "Bank", "run", "river", "set", "financial institution"];
const SYNSETS: &[&str] = &["00001-n", "00002-n", "00003-v", "00004-v", "00005-a", "00006-r"];

#[derive(Debug, Clone)]
struct LexiconRows {
    /// (wordid, lemma, lang)
    words: Vec<(i64, String, String)>,
    /// (wordid, synset)
    senses: Vec<(i64, String)>,
    /// (synset, pos)
    synsets: Vec<(String, String)>,
    /// (synset, jpn definition)
    definitions: Vec<(String, String)>,
}

fn arb_pos() -> impl Strategy<Value = String> {
    prop_oneof![Just("n"), Just("v"), Just("a"), Just("r"), Just("s")].prop_map(str::to_string)
}

fn arb_lang() -> impl Strategy<Value = String> {
    prop_oneof![3 => Just("eng"), 1 => Just("jpn")].prop_map(str::to_string)
}

fn arb_rows() -> impl Strategy<Value = LexiconRows> {
    (
        proptest::collection::vec(arb_lang(), LEMMAS.len()),
        proptest::collection::btree_set((0..LEMMAS.len(), 0..SYNSETS.len()), 0..20),
        proptest::collection::vec(proptest::option::of(arb_pos()), SYNSETS.len()),
        proptest::collection::vec(proptest::option::of("[ぁ-ん]{0,6}"), SYNSETS.len()),
    )
        .prop_map(|(langs, senses, pos, defs)| {
            let words = LEMMAS
                .iter()
                .zip(langs)
                .enumerate()
                .map(|(i, (lemma, lang))| (i as i64 + 1, lemma.to_string(), lang))
                .collect();
            let senses = senses
                .into_iter()
                .map(|(w, s)| (w as i64 + 1, SYNSETS[s].to_string()))
                .collect();
            let synsets = SYNSETS
                .iter()
                .zip(pos)
                .filter_map(|(s, p)| p.map(|p| (s.to_string(), p)))
                .collect();
            let definitions = SYNSETS
                .iter()
                .zip(defs)
                .filter_map(|(s, d)| d.map(|d| (s.to_string(), d)))
                .collect();
            LexiconRows {
                words,
                senses,
                synsets,
                definitions,
            }
        })
}

fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(LEMMAS).prop_map(str::to_string),
        Just("absent".to_string()),
    ]
}

fn memory_lexicon(rows: &LexiconRows) -> MemoryLexicon {
    let mut lex = MemoryLexicon::new();
    for (id, lemma, lang) in &rows.words {
        lex.add_word(*id, lemma, lang);
    }
    for (id, synset) in &rows.senses {
        lex.add_sense(*id, synset);
    }
    for (synset, pos) in &rows.synsets {
        lex.add_synset(synset, pos);
    }
    for (synset, def) in &rows.definitions {
        lex.add_definition(synset, "jpn", def);
    }
    lex
}

fn sqlite_lexicon(rows: &LexiconRows) -> SqliteLexicon {
    let conn = Connection::open_in_memory().unwrap();
    create_lexicon_schema(&conn).unwrap();
    for (id, lemma, lang) in &rows.words {
        conn.execute(
            "INSERT INTO word (wordid, lang, lemma) VALUES (?1, ?2, ?3)",
            params![id, lang, lemma],
        )
        .unwrap();
    }
    for (id, synset) in &rows.senses {
        conn.execute(
            "INSERT INTO sense (synset, wordid) VALUES (?1, ?2)",
            params![synset, id],
        )
        .unwrap();
    }
    for (synset, pos) in &rows.synsets {
        conn.execute(
            "INSERT INTO synset (synset, pos) VALUES (?1, ?2)",
            params![synset, pos],
        )
        .unwrap();
    }
    for (synset, def) in &rows.definitions {
        conn.execute(
            "INSERT INTO synset_def (synset, lang, def) VALUES (?1, 'jpn', ?2)",
            params![synset, def],
        )
        .unwrap();
    }
    SqliteLexicon::from_connection(conn)
}

type GraphShape = (BTreeSet<(String, String, u8)>, BTreeSet<(String, String)>);

fn sorted_shape(graph: &SynonymGraph) -> GraphShape {
    let nodes = graph
        .nodes
        .iter()
        .map(|n| (n.id.clone(), n.label.clone(), n.group))
        .collect();
    let links = graph
        .links
        .iter()
        .map(|l| (l.source.clone(), l.target.clone()))
        .collect();
    (nodes, links)
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn absent_word_gives_empty_graph(rows in arb_rows()) {
        let graph = build_synonym_graph(&memory_lexicon(&rows), "absent").unwrap();
        prop_assert!(graph.nodes.is_empty());
        prop_assert!(graph.links.is_empty());
    }

    #[test]
    fn graph_is_a_rooted_tree(rows in arb_rows(), word in arb_query()) {
        let graph = build_synonym_graph(&memory_lexicon(&rows), &word).unwrap();
        if graph.is_empty() {
            prop_assert!(graph.links.is_empty());
            return Ok(());
        }

        let roots: Vec<_> = graph.nodes_in_group(0).collect();
        prop_assert_eq!(roots.len(), 1);
        prop_assert_eq!(&roots[0].id, &word);
        prop_assert_eq!(&roots[0].label, &word);
        prop_assert_eq!(&graph.nodes[0].id, &word);

        prop_assert!(graph.nodes_in_group(1).count() <= 2);
        prop_assert!(graph.nodes_in_group(3).all(|n| n.label != word));

        let groups: HashMap<&str, u8> =
            graph.nodes.iter().map(|n| (n.id.as_str(), n.group)).collect();
        prop_assert_eq!(groups.len(), graph.nodes.len(), "node ids must be unique");

        let mut incoming: HashMap<&str, usize> = HashMap::new();
        for link in &graph.links {
            let source = groups.get(link.source.as_str());
            let target = groups.get(link.target.as_str());
            prop_assert!(source.is_some(), "dangling source {}", link.source);
            prop_assert!(target.is_some(), "dangling target {}", link.target);
            // Edges only go one level deeper, so no cycle can form.
            prop_assert_eq!(*source.unwrap() + 1, *target.unwrap());
            *incoming.entry(link.target.as_str()).or_default() += 1;
        }
        prop_assert!(!incoming.contains_key(word.as_str()));
        for node in graph.nodes.iter().skip(1) {
            prop_assert_eq!(incoming.get(node.id.as_str()).copied(), Some(1), "node {}", node.id);
        }
    }

    #[test]
    fn definitions_match_qualifying_senses(rows in arb_rows(), word in arb_query()) {
        let graph = build_synonym_graph(&memory_lexicon(&rows), &word).unwrap();
        let pos_of: HashMap<&str, &str> =
            rows.synsets.iter().map(|(s, p)| (s.as_str(), p.as_str())).collect();
        let word_ids: HashSet<i64> = rows
            .words
            .iter()
            .filter(|(_, lemma, _)| *lemma == word)
            .map(|(id, _, _)| *id)
            .collect();
        let expected = rows
            .senses
            .iter()
            .filter(|(id, _)| word_ids.contains(id))
            .filter(|(_, s)| matches!(pos_of.get(s.as_str()), Some(&"n") | Some(&"v")))
            .count();
        prop_assert_eq!(graph.nodes_in_group(2).count(), expected);
    }

    #[test]
    fn builds_are_deterministic(rows in arb_rows(), word in arb_query()) {
        let lex = memory_lexicon(&rows);
        let first = build_synonym_graph(&lex, &word).unwrap();
        let second = build_synonym_graph(&lex, &word).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn sqlite_and_memory_stores_agree(rows in arb_rows(), word in arb_query()) {
        let from_memory = build_synonym_graph(&memory_lexicon(&rows), &word).unwrap();
        let from_sqlite = build_synonym_graph(&sqlite_lexicon(&rows), &word).unwrap();
        prop_assert_eq!(sorted_shape(&from_memory), sorted_shape(&from_sqlite));
    }
}

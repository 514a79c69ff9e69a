//! Graph model: four node mappings plus one ordered edge list

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::attributes::Attributes;
use super::edge::{Edge, RelationCategory};
use super::error::Result;

/// Node mapping keyed by identifier
pub type NodeMap = BTreeMap<String, Attributes>;

/// The four node collections the transform produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCollection {
    LexicalEntries,
    Senses,
    Synsets,
    SyntacticBehaviours,
}

impl NodeCollection {
    pub const ALL: [NodeCollection; 4] = [
        NodeCollection::LexicalEntries,
        NodeCollection::Senses,
        NodeCollection::Synsets,
        NodeCollection::SyntacticBehaviours,
    ];

    /// Default collection name in the graph store
    pub fn name(&self) -> &'static str {
        match self {
            NodeCollection::LexicalEntries => "lex_entries",
            NodeCollection::Senses => "senses",
            NodeCollection::Synsets => "synsets",
            NodeCollection::SyntacticBehaviours => "syntactic_behaviours",
        }
    }
}

/// Aggregate result of one parse
///
/// Built by successive insertions; each extractor receives it by
/// exclusive reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordNetGraph {
    /// Attributes of the top-level group element (language, version, ...)
    pub set_info: BTreeMap<String, String>,
    pub lexical_entries: NodeMap,
    pub senses: NodeMap,
    pub synsets: NodeMap,
    pub syntactic_behaviours: NodeMap,
    pub edges: Vec<Edge>,
}

impl WordNetGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_set_info(set_info: BTreeMap<String, String>) -> Self {
        Self {
            set_info,
            ..Self::default()
        }
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn nodes(&self, collection: NodeCollection) -> &NodeMap {
        match collection {
            NodeCollection::LexicalEntries => &self.lexical_entries,
            NodeCollection::Senses => &self.senses,
            NodeCollection::Synsets => &self.synsets,
            NodeCollection::SyntacticBehaviours => &self.syntactic_behaviours,
        }
    }

    pub fn node_count(&self) -> usize {
        NodeCollection::ALL
            .iter()
            .map(|c| self.nodes(*c).len())
            .sum()
    }

    /// Edges of one category, in emission order
    pub fn edges_of(&self, category: RelationCategory) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.category == category)
    }

    /// Outgoing edges of a node, in emission order
    pub fn edges_from<'a>(&'a self, from: &'a str) -> impl Iterator<Item = &'a Edge> {
        self.edges.iter().filter(move |e| e.from == from)
    }

    pub fn stats(&self) -> GraphStats {
        let mut edges_by_category = BTreeMap::new();
        for edge in &self.edges {
            *edges_by_category.entry(edge.category).or_insert(0) += 1;
        }

        GraphStats {
            lexical_entries: self.lexical_entries.len(),
            senses: self.senses.len(),
            synsets: self.synsets.len(),
            syntactic_behaviours: self.syntactic_behaviours.len(),
            edges: self.edges.len(),
            edges_by_category,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Summary counts for logs and the CLI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub lexical_entries: usize,
    pub senses: usize,
    pub synsets: usize,
    pub syntactic_behaviours: usize,
    pub edges: usize,
    pub edges_by_category: BTreeMap<RelationCategory, usize>,
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "lexical entries:      {}", self.lexical_entries)?;
        writeln!(f, "senses:               {}", self.senses)?;
        writeln!(f, "synsets:              {}", self.synsets)?;
        writeln!(f, "syntactic behaviours: {}", self.syntactic_behaviours)?;
        write!(f, "edges:                {}", self.edges)?;
        for (category, count) in &self.edges_by_category {
            write!(f, "\n  {:<22}{}", category.as_str(), count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::relation_types;

    fn sample_graph() -> WordNetGraph {
        let mut graph = WordNetGraph::new();
        graph.senses.insert("E1-1".into(), Attributes::new());
        graph.synsets.insert("S1".into(), Attributes::new());
        graph.add_edge(Edge::new(
            RelationCategory::SenseToSynset,
            "E1-1",
            "S1",
            relation_types::SYNSET_MEMBER_OF,
        ));
        graph.add_edge(Edge::new(
            RelationCategory::SenseToSense,
            "E1-1",
            "E1-2",
            "antonym",
        ));
        graph.add_edge(Edge::new(
            RelationCategory::SenseToSense,
            "E1-1",
            "E1-2",
            "antonym",
        ));
        graph
    }

    #[test]
    fn test_stats_counts_parallel_edges() {
        let stats = sample_graph().stats();

        assert_eq!(stats.senses, 1);
        assert_eq!(stats.synsets, 1);
        assert_eq!(stats.edges, 3);
        assert_eq!(stats.edges_by_category[&RelationCategory::SenseToSense], 2);
        assert_eq!(stats.edges_by_category[&RelationCategory::SenseToSynset], 1);
    }

    #[test]
    fn test_edges_of_preserves_order() {
        let graph = sample_graph();
        let targets: Vec<_> = graph
            .edges_of(RelationCategory::SenseToSense)
            .map(|e| e.to.as_str())
            .collect();
        assert_eq!(targets, ["E1-2", "E1-2"]);
    }

    #[test]
    fn test_node_count_and_lookup() {
        let graph = sample_graph();
        assert_eq!(graph.node_count(), 2);
        assert!(graph.nodes(NodeCollection::Senses).contains_key("E1-1"));
        assert!(graph.nodes(NodeCollection::LexicalEntries).is_empty());
    }

    #[test]
    fn test_json_is_stable() {
        let graph = sample_graph();
        assert_eq!(graph.to_json().unwrap(), graph.clone().to_json().unwrap());

        let back: WordNetGraph = serde_json::from_str(&graph.to_json().unwrap()).unwrap();
        assert_eq!(back, graph);
    }

    #[test]
    fn test_stats_display_lists_categories() {
        let text = sample_graph().stats().to_string();
        assert!(text.contains("senses:               1"));
        assert!(text.contains("sense_to_sense"));
    }
}

//! Graph assertions

use wordnet_ir::{IdSanitizer, RelationCategory, WordNetGraph};

/// Every sense has exactly one synset edge and one lexical entry edge
pub fn assert_mandatory_edges(graph: &WordNetGraph) {
    for sense_id in graph.senses.keys() {
        for category in [
            RelationCategory::SenseToSynset,
            RelationCategory::SenseToLexEntry,
        ] {
            let count = graph
                .edges_of(category)
                .filter(|e| &e.from == sense_id)
                .count();
            assert_eq!(count, 1, "sense {sense_id} has {count} {category} edges");
        }
    }
}

/// Node keys (except frames) and all edge endpoints are sanitizer fixed points
pub fn assert_sanitized(graph: &WordNetGraph, sanitizer: &IdSanitizer) {
    let keys = graph
        .lexical_entries
        .keys()
        .chain(graph.senses.keys())
        .chain(graph.synsets.keys());
    for key in keys {
        assert_eq!(&sanitizer.sanitize(key), key, "node key {key} is not clean");
    }

    for edge in &graph.edges {
        assert!(sanitizer.is_clean(&edge.from), "edge source {} is not clean", edge.from);
        assert!(sanitizer.is_clean(&edge.to), "edge target {} is not clean", edge.to);
    }
}

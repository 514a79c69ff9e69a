//! Common test utilities for wordnet-storage

#![allow(dead_code)]

use wordnet_ir::{parse_wordnet_str, ParserConfig, WordNetGraph};

/// Small lexicon covering every edge category
pub const LEXICON: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<LexicalResource>
  <Lexicon id="test" label="Test WordNet" language="en" version="1.0">
    <LexicalEntry id="w-run-v">
      <Lemma writtenForm="run" partOfSpeech="v"/>
      <Sense id="w-run-v-1" synset="w-S1-v" subcat="vii vtai">
        <SenseRelation relType="antonym" target="w-walk-v-1"/>
      </Sense>
    </LexicalEntry>
    <LexicalEntry id="w-walk-v">
      <Lemma writtenForm="walk" partOfSpeech="v"/>
      <Sense id="w-walk-v-1" synset="w-S2-v"/>
    </LexicalEntry>
    <Synset id="w-S1-v" partOfSpeech="v">
      <Definition>move fast</Definition>
      <SynsetRelation relType="hypernym" target="w-S2-v"/>
      <Example>run home</Example>
    </Synset>
    <Synset id="w-S2-v" partOfSpeech="v">
      <Definition>move on foot</Definition>
    </Synset>
    <SyntacticBehaviour id="vii" subcategorizationFrame="Something ----s"/>
    <SyntacticBehaviour id="vtai" subcategorizationFrame="Somebody ----s something"/>
  </Lexicon>
</LexicalResource>
"#;

pub fn fixture_graph() -> WordNetGraph {
    parse_wordnet_str(LEXICON, ParserConfig::default()).unwrap()
}

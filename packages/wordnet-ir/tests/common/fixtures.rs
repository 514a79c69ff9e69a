//! LMF document fixtures

/// Wrap `body` in a `LexicalResource`/`Lexicon` envelope
pub fn fixture_lexicon(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE LexicalResource SYSTEM "http://globalwordnet.github.io/schemas/WN-LMF-1.1.dtd">
<LexicalResource xmlns:dc="https://globalwordnet.github.io/schemas/dc/">
  <Lexicon id="oewn" label="Open English WordNet" language="en" email="x@example.org" license="CC-BY 4.0" version="2024">
{body}
  </Lexicon>
</LexicalResource>
"#
    )
}

/// The "run" entry: Lemma, a Sense with one antonym relation, then a Form
pub fn fixture_run_entry() -> String {
    r#"    <LexicalEntry id="E1">
      <Lemma writtenForm="run" partOfSpeech="v"/>
      <Sense id="E1-1" synset="S1">
        <SenseRelation relType="antonym" target="E1-2"/>
      </Sense>
      <Form tense="past" value="ran"/>
    </LexicalEntry>"#
        .to_string()
}

/// Entry with one sense per synset id
pub fn fixture_entry(id: &str, written_form: &str, pos: &str, synsets: &[&str]) -> String {
    let senses: String = synsets
        .iter()
        .enumerate()
        .map(|(i, synset)| {
            format!(
                "      <Sense id=\"{id}-{n}\" synset=\"{synset}\"/>\n",
                n = i + 1
            )
        })
        .collect();

    format!(
        "    <LexicalEntry id=\"{id}\">\n      <Lemma writtenForm=\"{written_form}\" partOfSpeech=\"{pos}\"/>\n{senses}    </LexicalEntry>"
    )
}

/// Synset with a definition and the given examples
pub fn fixture_synset(id: &str, definition: &str, examples: &[&str]) -> String {
    let examples: String = examples
        .iter()
        .map(|e| format!("      <Example>{e}</Example>\n"))
        .collect();

    format!(
        "    <Synset id=\"{id}\" ili=\"i1\" partOfSpeech=\"v\">\n      <Definition>{definition}</Definition>\n{examples}    </Synset>"
    )
}

pub fn fixture_frame(id: &str, frame: &str) -> String {
    format!("    <SyntacticBehaviour id=\"{id}\" subcategorizationFrame=\"{frame}\"/>")
}

/// A document touching every element kind and every edge category
pub fn fixture_full_lexicon() -> String {
    let body = [
        r#"    <LexicalEntry id="oewn-run-v">
      <Lemma writtenForm="run" partOfSpeech="v">
        <Pronunciation variety="GB">rʌn</Pronunciation>
      </Lemma>
      <Form writtenForm="ran"/>
      <Sense id="oewn-run__2.38.00::" synset="oewn-01926311-v" subcat="vii via">
        <SenseRelation relType="derivation" target="oewn-runner__1.18.00::"/>
      </Sense>
      <Sense id="oewn-run__2.41.00::" synset="oewn-02443951-v" subcat="vtai"/>
    </LexicalEntry>"#
            .to_string(),
        fixture_entry("oewn-runner-n", "runner", "n", &["oewn-10540114-n"]),
        r#"    <Synset id="oewn-01926311-v" ili="i30986" partOfSpeech="v">
      <Definition>move fast by using one's feet</Definition>
      <ILIDefinition>move fast by using one's feet, with one foot off the ground at any given time</ILIDefinition>
      <SynsetRelation relType="hypernym" target="oewn-01835496-v"/>
      <Example>Don't run--you'll be out of breath</Example>
      <Example>The children ran to the store</Example>
    </Synset>"#
            .to_string(),
        fixture_synset("oewn-02443951-v", "direct or control", &[]),
        fixture_synset("oewn-10540114-n", "someone who travels on foot", &["a runner"]),
        fixture_frame("vii", "Something ----s"),
        fixture_frame("via", "Somebody ----s"),
        fixture_frame("vtai", "Somebody ----s something"),
    ]
    .join("\n");

    fixture_lexicon(&body)
}

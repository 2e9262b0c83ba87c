//! Output properties that must hold for any input.

use serde_json::Value;

use crate::convert;
use crate::parser::Delimiter;
use crate::tests::support::{generated_csv, memory_config};

fn run(csv: &str, delimiter: Delimiter, pretty: bool) -> (Value, String, u64) {
    let (config, sink, diagnostics) = memory_config(csv);
    let report = convert(config.with_delimiter(delimiter).pretty(pretty)).expect("convert");

    assert_eq!(report.rows_skipped, diagnostics.len() as u64);
    let text = sink.contents_string();
    let value = serde_json::from_str(&text).expect("output is JSON");
    (value, text, report.rows_skipped)
}

#[test]
fn header_only_input_is_an_empty_array() {
    let (_, text, _) = run("id,name\n", Delimiter::Comma, false);
    assert_eq!(text, "[]");
}

#[test]
fn mismatched_row_scenario() {
    let (config, sink, diagnostics) = memory_config("id,name\n1,Ann\n2,Bo\n3,4,5\n");
    let report = convert(config).unwrap();

    assert_eq!(
        sink.contents_string(),
        r#"[{"id":"1","name":"Ann"},{"id":"2","name":"Bo"}]"#
    );
    assert_eq!(report.records_written, 2);
    assert_eq!(report.rows_skipped, 1);

    let skipped = diagnostics.rows();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].line, 4);
    assert_eq!(skipped[0].fields, vec!["3", "4", "5"]);
}

#[test]
fn pretty_output_matches_reference_layout() {
    let (_, text, _) = run("id,name\n1,Ann\n2,Bo\n", Delimiter::Comma, true);
    assert_eq!(
        text,
        "[\n   {\n      \"id\": \"1\",\n      \"name\": \"Ann\"\n   },\n   {\n      \"id\": \"2\",\n      \"name\": \"Bo\"\n   }\n]"
    );
}

#[test]
fn element_count_and_keys_follow_the_header() {
    let mut csv = generated_csv(40, ',');
    csv.push_str("bad,row\nx,y,z,extra\n");
    let (value, _, skipped) = run(&csv, Delimiter::Comma, false);

    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 40);
    assert_eq!(skipped, 2);
    for item in items {
        let mut keys: Vec<_> = item.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["city", "id", "name"]);
    }
}

#[test]
fn row_order_is_preserved() {
    let (value, _, _) = run(&generated_csv(1_000, ','), Delimiter::Comma, false);

    let ids: Vec<usize> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().parse().unwrap())
        .collect();
    assert_eq!(ids, (0..1_000).collect::<Vec<_>>());
}

#[test]
fn compact_and_pretty_are_semantically_equal() {
    let csv = "a,b\n\"x,y\",z\n\"multi\nline\",\"quote \"\"q\"\"\"\n,\n";
    let (compact, _, _) = run(csv, Delimiter::Comma, false);
    let (pretty, _, _) = run(csv, Delimiter::Comma, true);

    assert_eq!(compact, pretty);
}

#[test]
fn quoted_delimiter_round_trips() {
    let (_, text, _) = run("a,b\n\"x,y\",z\n", Delimiter::Comma, false);
    assert_eq!(text, r#"[{"a":"x,y","b":"z"}]"#);
}

#[test]
fn delimiter_choice_does_not_change_output() {
    let (_, comma, _) = run(&generated_csv(2, ','), Delimiter::Comma, false);
    let (_, semicolon, _) = run(&generated_csv(2, ';'), Delimiter::Semicolon, false);

    assert_eq!(comma, semicolon);
    assert_eq!(
        comma,
        r#"[{"id":"0","name":"name-0","city":"city-0"},{"id":"1","name":"name-1","city":"city-1"}]"#
    );
}

#[test]
fn duplicate_header_last_column_wins() {
    let (_, text, _) = run("k,v,k\n1,2,3\n", Delimiter::Comma, false);
    assert_eq!(text, r#"[{"k":"3","v":"2"}]"#);
}

use serde_json::json;

use tripplan_api::services::response_parser::extract_structured_result;

#[test]
fn parses_json_tagged_fence() {
    let raw = "Here is the updated plan:\n```json\n{\"response_message\": \"done\", \"count\": 2}\n```\nLet me know!";
    let map = extract_structured_result(raw);
    assert_eq!(map.get("response_message"), Some(&json!("done")));
    assert_eq!(map.get("count"), Some(&json!(2)));
}

#[test]
fn parses_untagged_fence() {
    let raw = "```\n{\"response_message\": \"done\", \"count\": 2}\n```";
    let map = extract_structured_result(raw);
    assert_eq!(map.get("count"), Some(&json!(2)));
}

#[test]
fn parses_bare_braces_with_surrounding_prose() {
    let raw = "Sure! The result is {\"response_message\": \"done\", \"count\": 2} hope that helps.";
    let map = extract_structured_result(raw);
    assert_eq!(map.get("count"), Some(&json!(2)));
}

#[test]
fn parses_whole_text_when_already_clean() {
    let raw = "  {\"response_message\": \"done\", \"count\": 2}  ";
    let map = extract_structured_result(raw);
    assert_eq!(map.get("count"), Some(&json!(2)));
}

#[test]
fn all_wrappings_yield_the_same_object() {
    let object = "{\"a\": 1, \"b\": {\"c\": [1, 2, 3]}}";
    let variants = [
        format!("```json\n{}\n```", object),
        format!("```\n{}\n```", object),
        format!("preamble {} trailer", object),
        object.to_string(),
    ];

    let expected = extract_structured_result(object);
    assert!(!expected.is_empty());
    for variant in &variants {
        assert_eq!(extract_structured_result(variant), expected);
    }
}

#[test]
fn unclosed_fence_falls_through_to_braces() {
    // The closing fence never arrives, but the text still brackets a
    // valid object between its first { and last }.
    let raw = "```json\n{\"a\": 1}";
    let map = extract_structured_result(raw);
    assert_eq!(map.get("a"), Some(&json!(1)));
}

#[test]
fn unparseable_text_yields_empty_map() {
    assert!(extract_structured_result("no json here at all").is_empty());
    assert!(extract_structured_result("").is_empty());
    assert!(extract_structured_result("{not valid json").is_empty());
    assert!(extract_structured_result("[1, 2, 3]").is_empty());
}

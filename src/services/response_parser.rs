use serde_json::{Map, Value};

/// Pull a JSON object out of a raw model reply.
///
/// Models wrap their JSON in markdown fences or lead with prose often
/// enough that strict parsing is useless. Strategies, first success wins:
///
/// 1. content of the first ```json fenced block
/// 2. content of the first fenced block of any kind
/// 3. the substring from the first `{` to the last `}` inclusive
/// 4. the whole trimmed text
///
/// Returns an empty map when every strategy fails; callers treat that as
/// parse failure. This function never errors.
pub fn extract_structured_result(raw: &str) -> Map<String, Value> {
    let text = raw.trim();

    if let Some(inner) = fenced_block(text, "```json") {
        if let Some(map) = parse_object(inner) {
            return map;
        }
    }

    if let Some(inner) = fenced_block(text, "```") {
        if let Some(map) = parse_object(inner) {
            return map;
        }
    }

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if start < end {
            if let Some(map) = parse_object(&text[start..=end]) {
                return map;
            }
        }
    }

    parse_object(text).unwrap_or_default()
}

/// Content between an opening fence starting with `tag` and the next
/// closing fence. Anything left on the opening line (a language tag) is
/// skipped.
fn fenced_block<'a>(text: &'a str, tag: &str) -> Option<&'a str> {
    let open = text.find(tag)?;
    let after = &text[open + tag.len()..];
    let body_start = after.find('\n').map(|i| i + 1).unwrap_or(0);
    let body = &after[body_start..];
    let close = body.find("```")?;
    Some(&body[..close])
}

fn parse_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text.trim()) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

//! Lookup of loosely named fields in inbound JSON payloads.
//!
//! Upstream sources spell the same field several ways ("Recipe Name",
//! "recipeName", "recipe_name"). Each field is described by an ordered list of
//! candidate keys; the first key holding a present, non-empty value wins.

use serde_json::{Map, Value};

/// Ordered candidate keys for a single logical field.
pub type Candidates = &'static [&'static str];

/// Returns the first candidate value that is neither missing, `null` nor an
/// empty string.
pub fn first_present<'a>(data: &'a Map<String, Value>, keys: Candidates) -> Option<&'a Value> {
    keys.iter().filter_map(|key| data.get(*key)).find(|value| match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    })
}

/// First candidate rendered as text. Numbers and booleans are stringified,
/// arrays and objects are ignored.
pub fn text(data: &Map<String, Value>, keys: Candidates) -> Option<String> {
    match first_present(data, keys)? {
        Value::String(s) => Some(s.to_owned()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// First candidate as a list of lines. Accepts an array of strings or a
/// newline separated string; entries are trimmed and blank ones dropped.
pub fn lines(data: &Map<String, Value>, keys: Candidates) -> Vec<String> {
    let items: Vec<String> = match first_present(data, keys) {
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s.to_owned()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) => s.split('\n').map(str::to_owned).collect(),
        _ => return vec![],
    };

    items
        .into_iter()
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect()
}

/// First candidate as an integer. Strings contribute their leading integer,
/// so `"4 stars"` yields `4`.
pub fn integer(data: &Map<String, Value>, keys: Candidates) -> Option<i64> {
    match first_present(data, keys)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => leading_integer(s),
        _ => None,
    }
}

fn leading_integer(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let sign_len = usize::from(value.starts_with(['-', '+']));
    let digits = value[sign_len..]
        .chars()
        .take_while(char::is_ascii_digit)
        .count();

    if digits == 0 {
        return None;
    }

    value[..sign_len + digits].parse().ok()
}

//! JSON prettifier

use serde_json::{Map, Value};

use crate::error::{ToolError, ToolResult};

fn parse(input: &str) -> ToolResult<Value> {
    if input.trim().is_empty() {
        return Err(ToolError::EmptyInput);
    }
    Ok(serde_json::from_str(input)?)
}

/// Pretty-print JSON with a two space indent, keeping key order
pub fn format(input: &str) -> ToolResult<String> {
    let value = parse(input)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Print JSON without any whitespace
pub fn minify(input: &str) -> ToolResult<String> {
    let value = parse(input)?;
    Ok(serde_json::to_string(&value)?)
}

/// Pretty-print JSON with object keys sorted at every level
pub fn format_sorted(input: &str) -> ToolResult<String> {
    let mut value = parse(input)?;
    sort_keys(&mut value);
    Ok(serde_json::to_string_pretty(&value)?)
}

fn sort_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));

            let mut sorted = Map::new();
            for (key, mut child) in entries {
                sort_keys(&mut child);
                sorted.insert(key, child);
            }
            *map = sorted;
        }
        Value::Array(items) => items.iter_mut().for_each(sort_keys),
        _ => {}
    }
}

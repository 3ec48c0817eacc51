//! CLON -> JSON conversion utilities

use serde_json::{Map, Number};

use super::{CliError, FormatOptions, require_input};
use crate::{Value, View, parse};

/// Convert a node to a single-key JSON object `{ name: value }`
pub fn clon_to_json(view: View<'_>) -> serde_json::Value {
    let mut map = Map::new();
    map.insert(view.name().to_string(), value_to_json(view));
    serde_json::Value::Object(map)
}

/// Convert the value of a node.
///
/// Lists become objects keyed by child name; a name that occurs more than
/// once collects its values into an array, in document order.
pub fn value_to_json(view: View<'_>) -> serde_json::Value {
    match view.value() {
        Value::None => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(b),
        Value::Number(n) => number_to_json(n),
        Value::String(_) => serde_json::Value::String(view.as_str().unwrap_or_default().to_string()),
        Value::List => {
            let mut map = Map::new();
            for child in view.children() {
                let value = value_to_json(child);
                match map.get_mut(child.name()) {
                    // Node values are never arrays, so an array here is a repeated name
                    Some(serde_json::Value::Array(items)) => items.push(value),
                    Some(existing) => {
                        let first = existing.take();
                        *existing = serde_json::Value::Array(vec![first, value]);
                    }
                    None => {
                        map.insert(child.name().to_string(), value);
                    }
                }
            }
            serde_json::Value::Object(map)
        }
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n < u64::MAX as f64 {
        return serde_json::Value::Number(Number::from(n as u64));
    }
    Number::from_f64(n)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

/// Parse the input and render it as JSON.
pub fn execute_json(options: &FormatOptions) -> Result<String, CliError> {
    let text = require_input(options.input.as_deref())?;
    let tree = parse(text)?;
    let json = clon_to_json(tree.root());

    let rendered = if options.pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    Ok(rendered)
}

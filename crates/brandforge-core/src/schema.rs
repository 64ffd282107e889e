//! Defensive parser for the provider's blueprint payload.
//!
//! The generative source is not fully reliable: payloads arrive wrapped in
//! Markdown code fences, nodes omit optional fields, and coordinates drift
//! outside the logical canvas. Parsing therefore fills documented defaults
//! instead of failing wherever the data is recoverable, and only rejects
//! payloads whose overall shape is wrong.

use crate::error::{Error, Result};
use crate::model::{Blueprint, BlueprintNode, CANVAS_UNITS, Tier};
use serde_json::{Value, json};

/// Fallback fill color for nodes the provider left uncolored.
pub const DEFAULT_NODE_COLOR: &str = "#888888";

/// Parses a raw provider payload into a [`Blueprint`].
///
/// Accepts plain JSON or JSON wrapped in code-fence markers. Invalid JSON is
/// an [`Error::Parse`]; a valid document that does not carry a `nodes` array
/// of well-formed node objects is an [`Error::Schema`].
pub fn parse_blueprint(raw: &str) -> Result<Blueprint> {
    let stripped = strip_code_fences(raw);
    let value: Value =
        serde_json::from_str(stripped).map_err(|e| Error::parse(e.to_string()))?;

    let Some(nodes) = value.get("nodes") else {
        return Err(Error::schema("missing `nodes` field"));
    };
    let Some(items) = nodes.as_array() else {
        return Err(Error::schema("`nodes` is not an array"));
    };
    if items.is_empty() {
        return Err(Error::schema("`nodes` is empty"));
    }

    let mut out = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        out.push(parse_node(item, idx)?);
    }
    tracing::debug!(nodes = out.len(), "parsed blueprint payload");
    Ok(Blueprint { nodes: out })
}

fn parse_node(item: &Value, idx: usize) -> Result<BlueprintNode> {
    let Some(obj) = item.as_object() else {
        return Err(Error::schema(format!("node {idx} is not an object")));
    };

    let id = require_str(obj, "id", idx)?;
    let title = require_str(obj, "title", idx)?;
    let x = require_f64(obj, "x", idx)?;
    let y = require_f64(obj, "y", idx)?;

    let color = match obj.get("color").and_then(Value::as_str) {
        Some(c) if !c.trim().is_empty() => c.trim().to_string(),
        _ => DEFAULT_NODE_COLOR.to_string(),
    };

    let points = obj
        .get("points")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let icon = obj
        .get("icon")
        .and_then(Value::as_str)
        .map(str::to_string);

    let tier = obj
        .get("tier")
        .and_then(Value::as_str)
        .and_then(|s| match s {
            "input" => Some(Tier::Input),
            "engine" => Some(Tier::Engine),
            "output" => Some(Tier::Output),
            _ => None,
        });

    Ok(BlueprintNode {
        id,
        title,
        color,
        x: x.clamp(0.0, CANVAS_UNITS),
        y: y.clamp(0.0, CANVAS_UNITS),
        points,
        icon,
        tier,
    })
}

fn require_str(
    obj: &serde_json::Map<String, Value>,
    key: &str,
    idx: usize,
) -> Result<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Error::schema(format!("node {idx} is missing `{key}`")))
}

fn require_f64(obj: &serde_json::Map<String, Value>, key: &str, idx: usize) -> Result<f64> {
    obj.get(key)
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::schema(format!("node {idx} is missing numeric `{key}`")))
}

/// Strips leading/trailing Markdown code-fence markers (with an optional
/// language tag) so that `"```json\n{...}\n```"` parses like the bare JSON.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut s = raw.trim();
    if let Some(rest) = s.strip_prefix("```") {
        // Drop the language tag, if any, up to the first line break.
        let rest = match rest.find('\n') {
            Some(pos) => &rest[pos + 1..],
            None => rest,
        };
        s = rest;
        if let Some(body) = s.trim_end().strip_suffix("```") {
            s = body;
        }
    }
    s.trim()
}

/// JSON response schema supplied alongside structured generation requests,
/// describing the blueprint shape the provider must emit.
pub fn blueprint_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "nodes": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "title": { "type": "STRING" },
                        "color": { "type": "STRING" },
                        "x": { "type": "NUMBER" },
                        "y": { "type": "NUMBER" },
                        "points": { "type": "ARRAY", "items": { "type": "STRING" } }
                    }
                }
            }
        }
    })
}

pub mod csv;
pub mod table;

use anyhow::Result;
use serde::Serialize;
use serde_json::{Map, Value};

/// Pretty JSON envelope tagged with what it carries, so successive documents stay distinguishable.
pub fn render_json<T: Serialize + ?Sized>(kind: &str, value: &T) -> Result<String> {
    let mut envelope = Map::new();
    envelope.insert("kind".to_string(), Value::String(kind.to_string()));
    envelope.insert("data".to_string(), serde_json::to_value(value)?);
    Ok(serde_json::to_string_pretty(&Value::Object(envelope))?)
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::render_json;

    #[test]
    fn wraps_payload_with_kind() {
        let text = render_json("metrics", &json!({"skill_score": 40})).expect("render");
        let parsed: Value = serde_json::from_str(&text).expect("parse");
        assert_eq!(parsed["kind"], "metrics");
        assert_eq!(parsed["data"]["skill_score"], 40);
    }
}

pub mod color;
pub mod table;

use anyhow::Result;
use serde::Serialize;

/// Serialize a value as JSON with a 4-space indent.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pretty_json_uses_four_space_indent() {
        let doc = json!({ "status": "error", "message": "nope" });
        let out = to_pretty_json(&doc).unwrap();
        assert!(out.contains("    \"status\": \"error\""));
    }
}

//! Tolerant extraction of pairing candidates from model replies

use serde::Deserialize;
use serde_json::Value;

/// Candidate pairing as it appears on the wire
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPairing {
    #[serde(rename = "pastryId")]
    pub pastry_id: String,
    pub reason: String,
    #[serde(default, rename = "match")]
    pub matches: Vec<String>,
    #[serde(default, rename = "contrast")]
    pub contrasts: Vec<String>,
}

/// Pull pairing candidates out of the reply content.
///
/// Accepts a bare list, or an object whose single list-valued field
/// holds the pairings. Items missing a pastry id or reason are dropped
/// one by one; any other shape yields an empty list. Never fails.
pub fn parse_pairings(content: Option<&str>) -> Vec<RawPairing> {
    let Some(content) = content else {
        return Vec::new();
    };
    let Ok(value) = serde_json::from_str::<Value>(content) else {
        return Vec::new();
    };

    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => {
            let mut lists: Vec<Vec<Value>> = map
                .into_iter()
                .filter_map(|(_, field)| match field {
                    Value::Array(items) => Some(items),
                    _ => None,
                })
                .collect();
            // ambiguous objects (zero or several lists) are unusable
            if lists.len() != 1 {
                return Vec::new();
            }
            lists.remove(0)
        }
        _ => return Vec::new(),
    };

    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<RawPairing>(item).ok())
        .filter(|pairing| !pairing.pastry_id.is_empty() && !pairing.reason.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_bare_array() {
        let raw = parse_pairings(Some(
            r#"[{"pastryId": "croissant", "reason": "buttery lift"}]"#,
        ));
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].pastry_id, "croissant");
        assert_eq!(raw[0].reason, "buttery lift");
        assert!(raw[0].matches.is_empty());
    }

    #[test]
    fn test_parses_pairings_object() {
        let raw = parse_pairings(Some(
            r#"{"pairings": [
                {"pastryId": "zimtknoten", "reason": "spice echo", "match": ["cinnamon"], "contrast": ["cream"]},
                {"pastryId": "croissant", "reason": "neutral base"}
            ]}"#,
        ));
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0].matches, vec!["cinnamon".to_string()]);
        assert_eq!(raw[0].contrasts, vec!["cream".to_string()]);
    }

    #[test]
    fn test_accepts_any_single_list_field_name() {
        let raw = parse_pairings(Some(
            r#"{"results": [{"pastryId": "croissant", "reason": "flaky"}]}"#,
        ));
        assert_eq!(raw.len(), 1);
    }

    #[test]
    fn test_rejects_ambiguous_objects() {
        assert!(parse_pairings(Some(
            r#"{"a": [{"pastryId": "x", "reason": "y"}], "b": []}"#
        ))
        .is_empty());
        assert!(parse_pairings(Some(r#"{"count": 3}"#)).is_empty());
    }

    #[test]
    fn test_empty_on_garbage_input() {
        assert!(parse_pairings(None).is_empty());
        assert!(parse_pairings(Some("")).is_empty());
        assert!(parse_pairings(Some("here are my picks!")).is_empty());
        assert!(parse_pairings(Some("\"croissant\"")).is_empty());
        assert!(parse_pairings(Some("42")).is_empty());
    }

    #[test]
    fn test_drops_malformed_items_individually() {
        let raw = parse_pairings(Some(
            r#"[
                {"pastryId": "croissant", "reason": "good"},
                {"pastryId": "zimtknoten"},
                {"reason": "missing id"},
                {"pastryId": "", "reason": "blank id"},
                {"pastryId": "banana-bread", "reason": ""},
                "not even an object",
                {"pastryId": "kardamomknoten", "reason": "warm spice"}
            ]"#,
        ));
        let ids: Vec<&str> = raw.iter().map(|p| p.pastry_id.as_str()).collect();
        assert_eq!(ids, vec!["croissant", "kardamomknoten"]);
    }

    #[test]
    fn test_unknown_item_fields_are_ignored() {
        let raw = parse_pairings(Some(
            r#"[{"pastryId": "croissant", "reason": "fine", "confidence": 0.9}]"#,
        ));
        assert_eq!(raw.len(), 1);
    }
}

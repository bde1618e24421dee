//! Prompt template for pairing requests

use brewpair_catalog::{Coffee, Pastry};

/// Build the single-message pairing prompt.
///
/// An optional free-text context string rides along as an extra
/// tasting note. Deterministic for identical inputs - no timestamps,
/// no randomness.
pub fn build_prompt(coffee: &Coffee, pastries: &[Pastry], context: Option<&str>) -> String {
    let mut notes = coffee.tasting_notes.clone();
    if let Some(context) = context {
        if !context.trim().is_empty() {
            notes.push(context.trim().to_string());
        }
    }

    let pastry_list = pastries
        .iter()
        .map(|p| {
            format!(
                "{}: {} — price {:.2} {}; {}; notes {}",
                p.id,
                p.name,
                p.price,
                p.currency,
                p.description,
                p.tasting_notes.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    [
        "You are a barista pairing assistant. Given one coffee and a list of pastries, return the best 2–3 pastry pairings.".to_string(),
        "Use JSON only (no markdown), shape: {\"pairings\": [{\"pastryId\": string, \"reason\": string}]}.".to_string(),
        "Consider flavor contrast/complement, texture, sweetness, and cultural fit.".to_string(),
        String::new(),
        format!(
            "Coffee: {} | origin: {} | notes: {}",
            coffee.name,
            coffee.origin,
            notes.join(", ")
        ),
        String::new(),
        "Pastries:".to_string(),
        pastry_list,
    ]
    .join("\n")
}

/// Structured-output constraint sent with every completion request.
///
/// The schema demands an object holding a `pairings` list; `match` and
/// `contrast` note lists are optional per item.
pub fn response_format() -> serde_json::Value {
    serde_json::json!({
        "type": "json_schema",
        "json_schema": {
            "name": "pairings",
            "schema": {
                "type": "object",
                "properties": {
                    "pairings": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "pastryId": {"type": "string"},
                                "reason": {"type": "string"},
                                "match": {"type": "array", "items": {"type": "string"}},
                                "contrast": {"type": "array", "items": {"type": "string"}}
                            },
                            "required": ["pastryId", "reason"]
                        }
                    }
                },
                "required": ["pairings"]
            }
        }
    })
}

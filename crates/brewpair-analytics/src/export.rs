//! Event exports for the debug panel and offline analysis

use crate::AnalyticsEvent;
use chrono::SecondsFormat;

const CSV_HEADER: &str = "id,type,coffeeId,pastryId,pastryIds,sessionId,timestamp";

/// Pretty-printed JSON array, matching the on-wire event shape
pub fn events_to_json(events: &[AnalyticsEvent]) -> String {
    serde_json::to_string_pretty(events).unwrap_or_default()
}

/// CSV table with one row per event
///
/// Every value is quoted, embedded quotes are doubled, and list-valued
/// fields are flattened with `|`.
pub fn events_to_csv(events: &[AnalyticsEvent]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for event in events {
        let row = [
            event.id.to_string(),
            event.kind.as_str().to_string(),
            event.coffee_id.clone().unwrap_or_default(),
            event.pastry_id.clone().unwrap_or_default(),
            event.pastry_ids.join("|"),
            event.session_id.clone(),
            event.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        ];
        let quoted: Vec<String> = row.iter().map(|field| quote(field)).collect();
        out.push_str(&quoted.join(","));
        out.push('\n');
    }
    out
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

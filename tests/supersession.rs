//! Most-recent-wins request supersession
//!
//! The UI issues a new pairing request every time the user changes
//! coffee; an older request that resolves late must not clobber the
//! newer one's result. The tracker never cancels the underlying call,
//! it only gates whether the resolution is applied.

mod common;

use std::sync::Arc;

use brewpair::analytics::AnalyticsLog;
use brewpair::llm::{PairingEngine, PairingResult, RequestTracker};

use common::{coffee, full_menu, result_ids};

/// What the (simulated) UI currently shows
#[derive(Default)]
struct Display {
    coffee_id: Option<String>,
    results: Vec<PairingResult>,
}

impl Display {
    fn apply(&mut self, tracker: &RequestTracker, generation: u64, coffee_id: &str, results: Vec<PairingResult>) {
        if !tracker.is_current(generation) {
            return;
        }
        self.coffee_id = Some(coffee_id.to_string());
        self.results = results;
    }
}

#[tokio::test]
async fn late_resolution_of_a_superseded_request_is_a_no_op() {
    let engine = PairingEngine::new(None, Arc::new(AnalyticsLog::in_memory()));
    let tracker = RequestTracker::new();
    let menu = full_menu();
    let mut display = Display::default();

    let coffee_a = coffee("sweetspot-standard");
    let coffee_b = coffee("americano");

    // A is issued first, then superseded by B before either resolves
    let generation_a = tracker.begin();
    let generation_b = tracker.begin();

    // B resolves first and is applied
    let results_b = engine.get_pairings(&coffee_b, &menu, None).await;
    display.apply(&tracker, generation_b, &coffee_b.id, results_b.clone());
    assert_eq!(display.coffee_id.as_deref(), Some("americano"));

    // A resolves late; its application must not change the display
    let results_a = engine.get_pairings(&coffee_a, &menu, None).await;
    assert_ne!(results_a, results_b);
    display.apply(&tracker, generation_a, &coffee_a.id, results_a);

    assert_eq!(display.coffee_id.as_deref(), Some("americano"));
    assert_eq!(
        result_ids(&display.results),
        vec!["croissant", "zimtknoten", "kardamomknoten"]
    );
}

#[tokio::test]
async fn uncontested_requests_apply_in_sequence() {
    let engine = PairingEngine::new(None, Arc::new(AnalyticsLog::in_memory()));
    let tracker = RequestTracker::new();
    let menu = full_menu();
    let mut display = Display::default();

    for id in ["sweetspot-standard", "cappuccino"] {
        let c = coffee(id);
        let generation = tracker.begin();
        let results = engine.get_pairings(&c, &menu, None).await;
        display.apply(&tracker, generation, &c.id, results);
        assert_eq!(display.coffee_id.as_deref(), Some(id));
    }
}

//! Brewpair analytics - append-only session event log
//!
//! Every user-facing action records one [`AnalyticsEvent`]. Events live
//! in memory for the duration of a session and are mirrored, best
//! effort, into a [`SessionStore`] after every append so a crash or
//! restart still leaves an inspectable trail. Export comes in JSON and
//! CSV flavors for the debug panel and offline analysis.

mod export;

pub use export::{events_to_csv, events_to_json};

use std::collections::BTreeMap;
use std::fmt;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use brewpair_store::SessionStore;

/// Store key holding the persistent session identifier
const SESSION_KEY: &str = "ai-coffee-session";

/// Store key holding the mirrored event list (JSON-encoded)
const EVENTS_KEY: &str = "analytics-events";

/// What happened, in wire spelling (`coffee_selected`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    CoffeeSelected,
    PairingsRequested,
    PastryClicked,
    AddToCart,
    Checkout,
    PairingGenerated,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::CoffeeSelected => "coffee_selected",
            EventKind::PairingsRequested => "pairings_requested",
            EventKind::PastryClicked => "pastry_clicked",
            EventKind::AddToCart => "add_to_cart",
            EventKind::Checkout => "checkout",
            EventKind::PairingGenerated => "pairing_generated",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded action, as appended to the log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coffee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pastry_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pastry_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    pub session_id: String,
    pub timestamp: DateTime<Utc>,
}

/// Caller-supplied part of an event; id, session and timestamp are
/// filled in by [`AnalyticsLog::record`]
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub kind: EventKind,
    pub coffee_id: Option<String>,
    pub pastry_id: Option<String>,
    pub pastry_ids: Vec<String>,
    pub metadata: BTreeMap<String, String>,
}

impl EventDraft {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            coffee_id: None,
            pastry_id: None,
            pastry_ids: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }
}

/// Append-only event log scoped to one session
///
/// Appends preserve arrival order and never fail outward; mirror
/// writes to the backing store are best effort.
pub struct AnalyticsLog {
    session_id: String,
    events: RwLock<Vec<AnalyticsEvent>>,
    store: Option<Box<dyn SessionStore>>,
}

impl AnalyticsLog {
    /// Log with no backing store; the session id lives only in memory
    pub fn in_memory() -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            events: RwLock::new(Vec::new()),
            store: None,
        }
    }

    /// Log backed by a store; reuses the persisted session id when one
    /// exists, otherwise mints one and persists it
    pub fn with_store(store: Box<dyn SessionStore>) -> Self {
        let session_id = match store.get(SESSION_KEY) {
            Ok(Some(bytes)) => match bincode::deserialize::<String>(&bytes) {
                Ok(existing) => existing,
                Err(_) => Self::fresh_session(store.as_ref()),
            },
            Ok(None) => Self::fresh_session(store.as_ref()),
            Err(err) => {
                warn!("session lookup failed, starting ephemeral session: {err}");
                Uuid::new_v4().to_string()
            }
        };
        Self {
            session_id,
            events: RwLock::new(Vec::new()),
            store: Some(store),
        }
    }

    fn fresh_session(store: &dyn SessionStore) -> String {
        let session_id = Uuid::new_v4().to_string();
        if let Ok(bytes) = bincode::serialize(&session_id) {
            if let Err(err) = store.put(SESSION_KEY, &bytes) {
                warn!("session id write failed: {err}");
            }
        }
        session_id
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Append one event, stamped with id, session and timestamp
    pub fn record(&self, draft: EventDraft) {
        let event = AnalyticsEvent {
            id: Uuid::new_v4(),
            kind: draft.kind,
            coffee_id: draft.coffee_id,
            pastry_id: draft.pastry_id,
            pastry_ids: draft.pastry_ids,
            metadata: draft.metadata,
            session_id: self.session_id.clone(),
            timestamp: Utc::now(),
        };
        info!(kind = %event.kind, coffee = ?event.coffee_id, "analytics event");

        let mut events = self.events.write().unwrap();
        events.push(event);
        self.mirror(&events);
    }

    /// Snapshot of all events in arrival order
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.read().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.events.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pretty-printed JSON array of every event
    pub fn export_json(&self) -> String {
        events_to_json(&self.events.read().unwrap())
    }

    /// CSV table of every event
    pub fn export_csv(&self) -> String {
        events_to_csv(&self.events.read().unwrap())
    }

    fn mirror(&self, events: &[AnalyticsEvent]) {
        let Some(store) = &self.store else {
            return;
        };
        if let Ok(bytes) = serde_json::to_vec(events) {
            if let Err(err) = store.put(EVENTS_KEY, &bytes) {
                warn!("event mirror write failed: {err}");
            }
        }
    }
}

/// Read the mirrored event list out of a store, tolerating absence and
/// decode failures (both yield an empty list)
pub fn load_mirrored(store: &dyn SessionStore) -> Vec<AnalyticsEvent> {
    match store.get(EVENTS_KEY) {
        Ok(Some(bytes)) => serde_json::from_slice(&bytes).unwrap_or_default(),
        _ => Vec::new(),
    }
}

//! Pairing orchestration
//!
//! One externally visible operation, [`PairingEngine::get_pairings`],
//! which never fails outward: every failure path lands on the
//! deterministic fallback, and every call records exactly one
//! `pairing_generated` analytics event.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use brewpair_analytics::{AnalyticsLog, EventDraft, EventKind};
use brewpair_catalog::{Coffee, Pastry};

use crate::fallback::fallback_pairings;
use crate::parse::{parse_pairings, RawPairing};
use crate::prompts::build_prompt;
use crate::{GatewayError, LlmClient};

/// Upper bound on pairings returned per request
pub const MAX_PAIRINGS: usize = 3;

/// One suggested pastry with the justification attached to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairingResult {
    pub pastry: Pastry,
    pub reason: String,
}

/// Orchestrates prompt construction, the model call, parsing and
/// fallback substitution for one shop session
pub struct PairingEngine {
    client: Option<LlmClient>,
    log: Arc<AnalyticsLog>,
}

impl PairingEngine {
    pub fn new(client: Option<LlmClient>, log: Arc<AnalyticsLog>) -> Self {
        Self { client, log }
    }

    /// Engine wired from the environment; no credential routes every
    /// request straight to the fallback
    pub fn from_env(log: Arc<AnalyticsLog>) -> Self {
        Self::new(LlmClient::from_env(), log)
    }

    pub fn has_credential(&self) -> bool {
        self.client.is_some()
    }

    /// Suggest up to [`MAX_PAIRINGS`] pastries for `coffee`, drawn only
    /// from `pastries`.
    ///
    /// `context` is free-text guidance folded into the prompt. Model
    /// transport errors, undecodable replies and empty candidate sets
    /// all resolve to the fallback; the call itself cannot fail.
    pub async fn get_pairings(
        &self,
        coffee: &Coffee,
        pastries: &[Pastry],
        context: Option<&str>,
    ) -> Vec<PairingResult> {
        let results = match &self.client {
            None => fallback_pairings(coffee, pastries),
            Some(client) => match self.model_pairings(client, coffee, pastries, context).await {
                Ok(results) if !results.is_empty() => results,
                Ok(_) => {
                    info!(coffee = %coffee.id, "no usable model pairings, using fallback");
                    fallback_pairings(coffee, pastries)
                }
                Err(err) => {
                    warn!(coffee = %coffee.id, "pairing request failed, using fallback: {err}");
                    fallback_pairings(coffee, pastries)
                }
            },
        };

        self.record_generated(coffee, &results);
        results
    }

    async fn model_pairings(
        &self,
        client: &LlmClient,
        coffee: &Coffee,
        pastries: &[Pastry],
        context: Option<&str>,
    ) -> Result<Vec<PairingResult>, GatewayError> {
        let prompt = build_prompt(coffee, pastries, context);
        let completion = client.complete(&prompt).await?;
        let raw = parse_pairings(completion.content());
        Ok(resolve_candidates(pastries, raw))
    }

    fn record_generated(&self, coffee: &Coffee, results: &[PairingResult]) {
        let pastry_ids: Vec<String> = results.iter().map(|r| r.pastry.id.clone()).collect();
        info!(coffee = %coffee.id, pastries = ?pastry_ids, "pairing generated");
        self.log.record(EventDraft {
            coffee_id: Some(coffee.id.clone()),
            pastry_ids,
            ..EventDraft::new(EventKind::PairingGenerated)
        });
    }
}

/// Resolve raw candidates against the offered pastry list.
///
/// Candidates naming a pastry that is not on offer are dropped; order
/// is preserved and the result is capped at [`MAX_PAIRINGS`].
fn resolve_candidates(pastries: &[Pastry], raw: Vec<RawPairing>) -> Vec<PairingResult> {
    raw.into_iter()
        .filter_map(|candidate| {
            pastries
                .iter()
                .find(|p| p.id == candidate.pastry_id)
                .map(|pastry| PairingResult {
                    pastry: pastry.clone(),
                    reason: candidate.reason,
                })
        })
        .take(MAX_PAIRINGS)
        .collect()
}

/// Generation counter for most-recent-wins request supersession.
///
/// Each [`RequestTracker::begin`] invalidates every earlier
/// generation; callers compare with [`RequestTracker::is_current`]
/// before applying a resolved request's results. The superseded call
/// is allowed to finish - only its effect is discarded.
#[derive(Debug, Default)]
pub struct RequestTracker {
    current: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request generation, superseding all earlier ones
    pub fn begin(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `generation` is still the latest issued
    pub fn is_current(&self, generation: u64) -> bool {
        self.current.load(Ordering::SeqCst) == generation
    }
}

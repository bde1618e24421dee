//! Best-effort sync of shop records to an external PostgREST store
//!
//! Admin-side edits (added pastries, shop identity) are pushed to the
//! hosted tables as merge-upserts. Sync is advisory: failures are
//! logged and never surfaced to the flow that triggered them.

use std::env;
use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use brewpair_catalog::{Pastry, ShopInfo};

/// Error type for record sync calls
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("sync rejected: {status} {body}")]
    Rejected { status: u16, body: String },
}

/// Client for the shop's hosted PostgREST tables
pub struct SyncClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SyncClient {
    /// Create a client from the environment.
    ///
    /// Returns `None` when `SUPABASE_URL` or `SUPABASE_ANON_KEY` is
    /// unset or blank - sync is simply disabled then.
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("SUPABASE_URL").ok().filter(|v| !v.is_empty())?;
        let api_key = env::var("SUPABASE_ANON_KEY")
            .ok()
            .filter(|v| !v.is_empty())?;
        Some(Self::new(base_url, api_key))
    }

    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Upsert one record into a table, merging on duplicate keys
    async fn upsert<T: Serialize>(&self, table: &str, record: &T) -> Result<(), SyncError> {
        let response = self
            .client
            .post(self.endpoint(table))
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Prefer", "resolution=merge-duplicates")
            .json(&[record])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    pub async fn upsert_pastry(&self, pastry: &Pastry) -> Result<(), SyncError> {
        self.upsert("pastries", pastry).await
    }

    pub async fn upsert_shop(&self, info: &ShopInfo) -> Result<(), SyncError> {
        self.upsert("shop_info", info).await
    }
}

/// Fire-and-forget pastry upsert; failures are logged and swallowed
pub fn spawn_upsert_pastry(client: Arc<SyncClient>, pastry: Pastry) {
    tokio::spawn(async move {
        if let Err(err) = client.upsert_pastry(&pastry).await {
            warn!("pastry sync failed: {err}");
        }
    });
}

/// Fire-and-forget shop info upsert; failures are logged and swallowed
pub fn spawn_upsert_shop(client: Arc<SyncClient>, info: ShopInfo) {
    tokio::spawn(async move {
        if let Err(err) = client.upsert_shop(&info).await {
            warn!("shop info sync failed: {err}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewpair_catalog::pastries;

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = SyncClient::new("https://demo.supabase.co/".to_string(), "key".to_string());
        assert_eq!(
            client.endpoint("pastries"),
            "https://demo.supabase.co/rest/v1/pastries"
        );
    }

    #[test]
    fn test_upsert_body_is_a_one_element_array() {
        let pastry = pastries().remove(0);
        let body = serde_json::to_value([&pastry]).unwrap();
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], "banana-bread");
        assert!(rows[0].get("notableDescription").is_some());
    }

    #[test]
    fn test_rejected_error_carries_status_and_body() {
        let err = SyncError::Rejected {
            status: 401,
            body: "bad key".to_string(),
        };
        assert_eq!(err.to_string(), "sync rejected: 401 bad key");
    }
}

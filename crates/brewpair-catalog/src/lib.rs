//! Brewpair catalog - shop reference data and menu state
//!
//! This crate defines the coffee and pastry records the rest of the
//! system works with, the built-in Sweet Spot catalog, and the mutable
//! menu (availability plus admin additions) that produces the active
//! pastry set handed to the pairing engine.

mod data;
mod insight;
mod menu;

pub use data::{coffees, pastries};
pub use insight::{insights, PairingInsight};
pub use menu::{slug, Menu, NewPastry};

use serde::{Deserialize, Serialize};

/// A coffee on the shop menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coffee {
    pub id: String,
    pub name: String,
    pub origin: String,
    pub tasting_notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variety: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roaster: Option<String>,
    /// How the shop serves it (espresso, filter, milk drink, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// A pastry on the shop menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pastry {
    pub id: String,
    pub name: String,
    /// Supplying bakery
    pub origin: String,
    pub price: f64,
    pub currency: String,
    #[serde(rename = "notableDescription")]
    pub description: String,
    pub tasting_notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Shop identity shown in the header and synced to the external store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Default for ShopInfo {
    fn default() -> Self {
        Self {
            name: "Sweet Spot Coffee Roasters".to_string(),
            logo: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pastry_wire_names() {
        let pastry = pastries().remove(0);
        let json = serde_json::to_value(&pastry).unwrap();
        assert!(json.get("notableDescription").is_some());
        assert!(json.get("tastingNotes").is_some());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_coffee_roundtrip_skips_absent_fields() {
        let coffee = coffees()
            .into_iter()
            .find(|c| c.id == "flat-white")
            .unwrap();
        let json = serde_json::to_value(&coffee).unwrap();
        assert!(json.get("process").is_none());
        let back: Coffee = serde_json::from_value(json).unwrap();
        assert_eq!(back, coffee);
    }
}

//! Deterministic fallback pairings for when the model path is unavailable

use std::collections::HashMap;

use brewpair_catalog::{Coffee, Pastry};

use crate::pairing::PairingResult;

/// Coffee id that gets the house fallback set
const HOUSE_COFFEE: &str = "sweetspot-standard";

const HOUSE_SET: [&str; 3] = ["franzbrotchen", "pain-au-chocolat", "banana-bread"];
const GUEST_SET: [&str; 3] = ["croissant", "zimtknoten", "kardamomknoten"];

const HOUSE_REASON: &str =
    "Caramel and spice play well with the blend’s chocolate-hazelnut notes.";
const GUEST_REASON: &str = "Butter and warm spice cushion bright berry acidity.";

/// Curated substitute pairings keyed on the coffee id.
///
/// Target ids absent from `pastries` are silently skipped, so the set
/// degrades gracefully when the menu changes - down to an empty list
/// if nothing matches.
pub fn fallback_pairings(coffee: &Coffee, pastries: &[Pastry]) -> Vec<PairingResult> {
    let by_id: HashMap<&str, &Pastry> = pastries.iter().map(|p| (p.id.as_str(), p)).collect();

    let (ids, reason) = if coffee.id == HOUSE_COFFEE {
        (HOUSE_SET, HOUSE_REASON)
    } else {
        (GUEST_SET, GUEST_REASON)
    };

    ids.iter()
        .filter_map(|id| by_id.get(id))
        .map(|pastry| PairingResult {
            pastry: (*pastry).clone(),
            reason: reason.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewpair_catalog::{coffees, pastries};

    fn coffee(id: &str) -> Coffee {
        coffees().into_iter().find(|c| c.id == id).unwrap()
    }

    fn result_ids(results: &[PairingResult]) -> Vec<&str> {
        results.iter().map(|r| r.pastry.id.as_str()).collect()
    }

    #[test]
    fn test_house_coffee_gets_the_house_set() {
        let results = fallback_pairings(&coffee("sweetspot-standard"), &pastries());
        assert_eq!(
            result_ids(&results),
            vec!["franzbrotchen", "pain-au-chocolat", "banana-bread"]
        );
        for result in &results {
            assert_eq!(result.reason, HOUSE_REASON);
        }
    }

    #[test]
    fn test_other_coffees_get_the_guest_set() {
        for id in ["house-espresso", "cappuccino", "nomad-rotating"] {
            let results = fallback_pairings(&coffee(id), &pastries());
            assert_eq!(
                result_ids(&results),
                vec!["croissant", "zimtknoten", "kardamomknoten"],
                "unexpected set for {id}"
            );
            for result in &results {
                assert_eq!(result.reason, GUEST_REASON);
            }
        }
    }

    #[test]
    fn test_identical_inputs_give_identical_output() {
        let c = coffee("sweetspot-standard");
        let menu = pastries();
        assert_eq!(
            fallback_pairings(&c, &menu),
            fallback_pairings(&c, &menu)
        );
    }

    #[test]
    fn test_missing_targets_are_skipped() {
        let menu: Vec<Pastry> = pastries()
            .into_iter()
            .filter(|p| p.id != "pain-au-chocolat")
            .collect();
        let results = fallback_pairings(&coffee("sweetspot-standard"), &menu);
        assert_eq!(result_ids(&results), vec!["franzbrotchen", "banana-bread"]);
    }

    #[test]
    fn test_empty_when_no_targets_remain() {
        let menu: Vec<Pastry> = pastries()
            .into_iter()
            .filter(|p| p.id == "banana-bread")
            .collect();
        // guest set never includes banana bread
        assert!(fallback_pairings(&coffee("americano"), &menu).is_empty());
        assert!(fallback_pairings(&coffee("americano"), &[]).is_empty());
    }
}

//! Tasting-note overlap between a coffee and a pastry

use crate::{Coffee, Pastry};
use serde::Serialize;

/// Pastry notes split by whether they echo the coffee's notes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PairingInsight {
    /// Pastry notes that overlap a coffee note
    pub matches: Vec<String>,
    /// The remaining pastry notes
    pub complements: Vec<String>,
}

/// Partition the pastry's tasting notes against the coffee's.
///
/// A note matches when either note contains the other,
/// case-insensitively, so "sweet spice" pairs up with "sweet".
pub fn insights(coffee: &Coffee, pastry: &Pastry) -> PairingInsight {
    let mut insight = PairingInsight::default();
    for note in &pastry.tasting_notes {
        let lower = note.to_lowercase();
        let overlaps = coffee.tasting_notes.iter().any(|coffee_note| {
            let coffee_lower = coffee_note.to_lowercase();
            coffee_lower.contains(&lower) || lower.contains(&coffee_lower)
        });
        if overlaps {
            insight.matches.push(note.clone());
        } else {
            insight.complements.push(note.clone());
        }
    }
    insight
}

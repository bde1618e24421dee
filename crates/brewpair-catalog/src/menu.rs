//! Mutable menu state on top of the fixed catalog

use crate::Pastry;
use std::collections::HashMap;

/// Admin form input for a pastry added at runtime
#[derive(Debug, Clone, Default)]
pub struct NewPastry {
    pub name: String,
    pub origin: Option<String>,
    pub price: f64,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// The pastry case with per-item availability
///
/// Items default to available; hiding one keeps it in the list but out
/// of [`Menu::active`], which is the set the pairing engine sees.
#[derive(Debug, Clone)]
pub struct Menu {
    pastries: Vec<Pastry>,
    availability: HashMap<String, bool>,
}

impl Menu {
    pub fn new(pastries: Vec<Pastry>) -> Self {
        let availability = pastries.iter().map(|p| (p.id.clone(), true)).collect();
        Self {
            pastries,
            availability,
        }
    }

    /// Every pastry, hidden ones included
    pub fn all(&self) -> &[Pastry] {
        &self.pastries
    }

    /// Pastries currently offered to customers
    pub fn active(&self) -> Vec<Pastry> {
        self.pastries
            .iter()
            .filter(|p| self.is_active(&p.id))
            .cloned()
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&Pastry> {
        self.pastries.iter().find(|p| p.id == id)
    }

    pub fn is_active(&self, id: &str) -> bool {
        *self.availability.get(id).unwrap_or(&true)
    }

    pub fn set_active(&mut self, id: &str, active: bool) {
        self.availability.insert(id.to_string(), active);
    }

    /// Flip availability and return the new state
    pub fn toggle(&mut self, id: &str) -> bool {
        let next = !self.is_active(id);
        self.availability.insert(id.to_string(), next);
        next
    }

    /// Add an admin-created pastry and return its id.
    ///
    /// Returns `None` when the name is empty or the price is not a
    /// positive amount; absent fields get house defaults.
    pub fn add(&mut self, new: NewPastry) -> Option<String> {
        if new.name.trim().is_empty() || !new.price.is_finite() || new.price <= 0.0 {
            return None;
        }
        let id = slug(&new.name);
        let tasting_notes = match new.category {
            Some(category) if !category.trim().is_empty() => vec![category],
            _ => vec!["house special".to_string()],
        };
        let pastry = Pastry {
            id: id.clone(),
            name: new.name,
            origin: new.origin.unwrap_or_else(|| "House".to_string()),
            price: new.price,
            currency: "EUR".to_string(),
            description: new
                .description
                .unwrap_or_else(|| "Freshly added pastry.".to_string()),
            tasting_notes,
            image: Some("/images/pastry-placeholder.jpg".to_string()),
        };
        self.pastries.push(pastry);
        self.availability.insert(id.clone(), true);
        Some(id)
    }
}

/// Lowercase the name and collapse whitespace runs into single dashes
pub fn slug(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pastries;

    #[test]
    fn test_menu_starts_fully_active() {
        let menu = Menu::new(pastries());
        assert_eq!(menu.active().len(), menu.all().len());
    }

    #[test]
    fn test_hidden_pastry_leaves_active_set() {
        let mut menu = Menu::new(pastries());
        menu.set_active("croissant", false);
        assert!(menu.find("croissant").is_some());
        assert!(!menu.active().iter().any(|p| p.id == "croissant"));
        assert!(menu.toggle("croissant"));
        assert!(menu.active().iter().any(|p| p.id == "croissant"));
    }

    #[test]
    fn test_add_applies_house_defaults() {
        let mut menu = Menu::new(pastries());
        let id = menu
            .add(NewPastry {
                name: "Plum Galette".to_string(),
                price: 4.2,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(id, "plum-galette");
        let pastry = menu.find(&id).unwrap();
        assert_eq!(pastry.origin, "House");
        assert_eq!(pastry.description, "Freshly added pastry.");
        assert_eq!(pastry.tasting_notes, vec!["house special".to_string()]);
        assert!(menu.is_active(&id));
    }

    #[test]
    fn test_add_rejects_blank_or_unpriced() {
        let mut menu = Menu::new(pastries());
        assert!(menu
            .add(NewPastry {
                name: "  ".to_string(),
                price: 3.0,
                ..Default::default()
            })
            .is_none());
        assert!(menu
            .add(NewPastry {
                name: "Scone".to_string(),
                price: 0.0,
                ..Default::default()
            })
            .is_none());
    }

    #[test]
    fn test_slug_collapses_whitespace() {
        assert_eq!(slug("Pain au  Chocolat"), "pain-au-chocolat");
        assert_eq!(slug("  Plum\tGalette "), "plum-galette");
    }
}

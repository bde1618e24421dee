//! Built-in Sweet Spot catalog
//!
//! The seed data mirrors the shop's printed menu. Runtime changes
//! (admin additions, availability) belong to [`crate::Menu`], never here.

use crate::{Coffee, Pastry};

fn notes(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// The full coffee lineup
pub fn coffees() -> Vec<Coffee> {
    vec![
        Coffee {
            id: "sweetspot-standard".into(),
            name: "Sweetspot Standard".into(),
            origin: "Antioquia, Colombia - Caicedo Community".into(),
            tasting_notes: notes(&[
                "orange",
                "hazelnut",
                "caramel",
                "chocolate",
                "balanced body",
            ]),
            process: Some("Washed".into()),
            variety: Some("Caturra, Colombia".into()),
            producer: Some("9 small farmers of the Caicedo Community".into()),
            roaster: Some("Johannes Bayer".into()),
            style: Some("Espresso / Milk drinks".into()),
        },
        Coffee {
            id: "bluebird-kenia-washed-mamuto-aa".into(),
            name: "Bluebird Kenia washed Mamuto AA".into(),
            origin: "Kirinyaga, Kenya - Mamuto Single Estate".into(),
            tasting_notes: notes(&["red currants", "cherry", "bright acidity", "clean finish"]),
            process: Some("Washed".into()),
            variety: Some("SL28".into()),
            producer: Some("Mamuto Single Estate Farm".into()),
            roaster: None,
            style: Some("Guest espresso / Filter".into()),
        },
        Coffee {
            id: "sweetspot-ethiopia-filter".into(),
            name: "Sweetspot Ethiopia (filter example)".into(),
            origin: "Yirgacheffe, Ethiopia".into(),
            tasting_notes: notes(&["bergamot", "floral", "citrus", "tea-like"]),
            process: Some("Washed".into()),
            variety: Some("Heirloom".into()),
            producer: Some("Smallholder producers".into()),
            roaster: None,
            style: Some("Filter".into()),
        },
        Coffee {
            id: "sweetspot-colombia-decaf".into(),
            name: "Sweetspot Colombia Decaf".into(),
            origin: "Huila, Colombia".into(),
            tasting_notes: notes(&["caramel", "red apple", "chocolate", "smooth"]),
            process: Some("EA decaf".into()),
            variety: Some("Caturra, Castillo".into()),
            producer: None,
            roaster: None,
            style: Some("Espresso / Milk drinks".into()),
        },
        Coffee {
            id: "house-espresso".into(),
            name: "House Espresso".into(),
            origin: "Brazil / Colombia blend".into(),
            tasting_notes: notes(&[
                "hazelnut",
                "milk chocolate",
                "brown sugar",
                "low acidity",
            ]),
            process: Some("Washed / Natural blend".into()),
            variety: None,
            producer: None,
            roaster: None,
            style: Some("Espresso".into()),
        },
        Coffee {
            id: "flat-white".into(),
            name: "Flat White".into(),
            origin: "Blend".into(),
            tasting_notes: notes(&["sweet milk", "chocolate", "balanced body"]),
            process: None,
            variety: None,
            producer: None,
            roaster: None,
            style: Some("Milk drink".into()),
        },
        Coffee {
            id: "cappuccino".into(),
            name: "Cappuccino".into(),
            origin: "Blend".into(),
            tasting_notes: notes(&["cocoa", "creamy", "sweet"]),
            process: None,
            variety: None,
            producer: None,
            roaster: None,
            style: Some("Milk drink".into()),
        },
        Coffee {
            id: "americano".into(),
            name: "Americano".into(),
            origin: "Blend".into(),
            tasting_notes: notes(&["roasted nuts", "dark chocolate", "balanced"]),
            process: None,
            variety: None,
            producer: None,
            roaster: None,
            style: Some("Black coffee".into()),
        },
        Coffee {
            id: "filter-ethiopia-yirg".into(),
            name: "Filter - Ethiopia Yirgacheffe".into(),
            origin: "Yirgacheffe, Ethiopia".into(),
            tasting_notes: notes(&["lemon", "jasmine", "black tea", "high acidity"]),
            process: Some("Washed".into()),
            variety: None,
            producer: None,
            roaster: None,
            style: Some("Filter".into()),
        },
        Coffee {
            id: "filter-kenya-nyeri".into(),
            name: "Filter - Kenya Nyeri".into(),
            origin: "Nyeri, Kenya".into(),
            tasting_notes: notes(&["blackcurrant", "grapefruit", "winey"]),
            process: Some("Washed".into()),
            variety: None,
            producer: None,
            roaster: None,
            style: Some("Filter".into()),
        },
        Coffee {
            id: "nomad-rotating".into(),
            name: "Nomad Guest".into(),
            origin: "Seasonal rotating".into(),
            tasting_notes: notes(&["surprise", "adventurous", "varies"]),
            process: None,
            variety: None,
            producer: None,
            roaster: None,
            style: Some("Guest".into()),
        },
        Coffee {
            id: "decaf-espresso".into(),
            name: "Decaf Espresso".into(),
            origin: "Latin America".into(),
            tasting_notes: notes(&["chocolate", "almond", "smooth"]),
            process: Some("Decaf".into()),
            variety: None,
            producer: None,
            roaster: None,
            style: Some("Espresso".into()),
        },
    ]
}

/// The pastry case as stocked at opening
pub fn pastries() -> Vec<Pastry> {
    vec![
        Pastry {
            id: "banana-bread".into(),
            name: "Banana Bread".into(),
            origin: "Coffee Twins".into(),
            price: 3.6,
            currency: "EUR".into(),
            description: "Denser, nut-infused loaf with lower sugar than standard.".into(),
            tasting_notes: notes(&["banana", "nutty", "moderate sweetness"]),
            image: Some(
                "https://images.unsplash.com/photo-1509440159596-0249088772ff?auto=format&fit=crop&w=600&q=80"
                    .into(),
            ),
        },
        Pastry {
            id: "croissant".into(),
            name: "Croissant".into(),
            origin: "Coffee Twins".into(),
            price: 2.3,
            currency: "EUR".into(),
            description: "French butter base with light lamination.".into(),
            tasting_notes: notes(&["buttery", "light", "flaky"]),
            image: Some(
                "https://images.unsplash.com/photo-1509440159596-0259088772df?auto=format&fit=crop&w=600&q=80"
                    .into(),
            ),
        },
        Pastry {
            id: "franzbrotchen".into(),
            name: "Franzbrotchen".into(),
            origin: "Coffee Twins".into(),
            price: 2.6,
            currency: "EUR".into(),
            description: "Caramelized cinnamon layers.".into(),
            tasting_notes: notes(&["caramel", "cinnamon", "buttery"]),
            image: Some(
                "https://images.unsplash.com/photo-1509440159596-0249088772aa?auto=format&fit=crop&w=600&q=80"
                    .into(),
            ),
        },
        Pastry {
            id: "pain-au-chocolat".into(),
            name: "Pain au chocolat".into(),
            origin: "Coffee Twins".into(),
            price: 2.6,
            currency: "EUR".into(),
            description: "Dark chocolate core with butter-rich dough.".into(),
            tasting_notes: notes(&["dark chocolate", "buttery", "sweet"]),
            image: Some(
                "https://images.unsplash.com/photo-1509440159596-0249088772cc?auto=format&fit=crop&w=600&q=80"
                    .into(),
            ),
        },
        Pastry {
            id: "zimtknoten".into(),
            name: "Zimtknoten".into(),
            origin: "Bageri".into(),
            price: 3.7,
            currency: "EUR".into(),
            description: "Scandinavian cinnamon twist with cardamom accent.".into(),
            tasting_notes: notes(&["cinnamon", "cardamom", "sweet spice"]),
            image: Some(
                "https://images.unsplash.com/photo-1481390422864-46e6735f4d36?auto=format&fit=crop&w=600&q=80"
                    .into(),
            ),
        },
        Pastry {
            id: "kardamomknoten".into(),
            name: "Kardamomknoten".into(),
            origin: "Bageri".into(),
            price: 3.9,
            currency: "EUR".into(),
            description: "Spicy-sweet Nordic yeasted bun.".into(),
            tasting_notes: notes(&["cardamom", "sweet spice", "yeasted dough"]),
            image: Some(
                "https://images.unsplash.com/photo-1486427944299-d1955d23e34d?auto=format&fit=crop&w=600&q=80"
                    .into(),
            ),
        },
    ]
}

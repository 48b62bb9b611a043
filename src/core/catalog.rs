//! # Catalog
//!
//! Source of the cards for a swipe session. Either the built-in sample set
//! or a JSON file:
//!
//! ```json
//! {
//!   "restaurants": [{ "id": "pho-house", "name": "Pho House", ... }],
//!   "dishes": [{ "name": "Pho", "restaurant_ref": "pho-house", ... }]
//! }
//! ```
//!
//! The deck consumes `dishes` verbatim, in file order, on every reset.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::item::{Dish, Restaurant};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
    pub dishes: Vec<Dish>,
}

impl Catalog {
    pub fn restaurant(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    /// Restaurant serving `dish`, if the catalog knows it.
    pub fn restaurant_for(&self, dish: &Dish) -> Option<&Restaurant> {
        self.restaurant(&dish.restaurant_ref)
    }

    /// The five built-in dishes, each from its own restaurant.
    pub fn sample() -> Self {
        let dishes = vec![
            Dish::new(
                "Pho",
                "Vietnamese beef noodle soup with herbs",
                14.99,
                "bowl.fill",
                "pho-house",
                &["Gluten-Free Option"],
            ),
            Dish::new(
                "Veggie Burger",
                "Plant-based patty with lettuce, tomato, and special sauce",
                12.99,
                "leaf.fill",
                "green-grill",
                &["Vegetarian", "Vegan Option"],
            ),
            Dish::new(
                "Sushi Roll",
                "Fresh salmon, avocado, and cucumber roll",
                16.99,
                "fish.fill",
                "koi-sushi",
                &["Gluten-Free Option"],
            ),
            Dish::new(
                "Pepperoni Pizza",
                "Classic pepperoni pizza with mozzarella",
                18.99,
                "flame.fill",
                "slice-co",
                &[],
            ),
            Dish::new(
                "Pad Thai",
                "Thai stir-fried noodles with tofu, egg, and peanuts",
                13.99,
                "house.fill",
                "bangkok-kitchen",
                &["Gluten-Free Option", "Vegetarian Option"],
            ),
        ];

        let spots = [
            ("pho-house", "Pho House", "212 Clement St", 37.7830, -122.4630, "Vietnamese", 1, 4.5),
            ("green-grill", "Green Grill", "88 Valencia St", 37.7705, -122.4222, "American", 2, 4.2),
            ("koi-sushi", "Koi Sushi", "1501 Polk St", 37.7900, -122.4205, "Japanese", 3, 4.7),
            ("slice-co", "Slice Co.", "450 Haight St", 37.7722, -122.4310, "Italian", 1, 4.0),
            ("bangkok-kitchen", "Bangkok Kitchen", "930 Irving St", 37.7640, -122.4680, "Thai", 2, 4.4),
        ];

        let restaurants = spots
            .iter()
            .map(|&(id, name, address, latitude, longitude, cuisine, price_range, rating)| Restaurant {
                id: id.to_string(),
                name: name.to_string(),
                address: address.to_string(),
                latitude,
                longitude,
                cuisine_types: vec![cuisine.to_string()],
                price_range,
                rating,
                dishes: dishes
                    .iter()
                    .filter(|d| d.restaurant_ref == id)
                    .map(|d| d.id)
                    .collect(),
            })
            .collect();

        Self { restaurants, dishes }
    }
}

/// Load a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let json = fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&json)?;
    info!(
        "Loaded catalog from {} ({} dishes, {} restaurants)",
        path.display(),
        catalog.dishes.len(),
        catalog.restaurants.len()
    );
    Ok(catalog)
}

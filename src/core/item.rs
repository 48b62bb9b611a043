//! # Catalog Items
//!
//! Plain data holders for what gets swiped on. A `Dish` is one card in the
//! deck; a `Restaurant` is where it comes from. Dishes point at restaurants
//! by id only (`restaurant_ref`), never by a live reference.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Mean Earth radius in miles, used for great-circle distances.
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// A single swipeable candidate.
///
/// Immutable once built from the catalog. Identity is `id`; two dishes with
/// the same name are still different cards.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Dish {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Symbolic icon name, resolved by the renderer.
    pub image_ref: String,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    /// Opaque id of the owning restaurant.
    pub restaurant_ref: String,
}

impl Dish {
    pub fn new(
        name: &str,
        description: &str,
        price: f64,
        image_ref: &str,
        restaurant_ref: &str,
        dietary_tags: &[&str],
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.to_string(),
            price,
            image_ref: image_ref.to_string(),
            dietary_tags: dietary_tags.iter().map(|t| t.to_string()).collect(),
            restaurant_ref: restaurant_ref.to_string(),
        }
    }

    /// Price as shown on the card, e.g. `$14.99`.
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub cuisine_types: Vec<String>,
    /// 1-4, shown as `$` through `$$$$`.
    pub price_range: u8,
    /// 0-5 stars.
    pub rating: f64,
    /// Ids of dishes served here.
    #[serde(default)]
    pub dishes: Vec<Uuid>,
}

impl Restaurant {
    /// Great-circle distance from the given coordinates, in miles (haversine).
    pub fn distance_miles(&self, lat: f64, lon: f64) -> f64 {
        let (lat1, lat2) = (self.latitude.to_radians(), lat.to_radians());
        let d_lat = (lat - self.latitude).to_radians();
        let d_lon = (lon - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_MILES * a.sqrt().min(1.0).asin()
    }

    pub fn price_label(&self) -> String {
        "$".repeat(self.price_range.clamp(1, 4) as usize)
    }
}

//! Domain Models
//!
//! The grocery item record and its display-image locator.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// A single grocery entry on the list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Unique identifier, stable for the screen's lifetime
    pub id: String,
    /// Display name
    pub name: String,
    /// Amount on hand, never negative
    pub quantity: f64,
    /// Free-form unit label ("kg", "dozen", ...)
    pub unit: String,
    /// Placeholder image URL derived from the name at creation
    pub image: String,
}

impl GroceryItem {
    pub fn new(id: String, name: String, quantity: f64, unit: String) -> Self {
        let image = placeholder_image(&name);
        Self { id, name, quantity, unit, image }
    }
}

/// Build the placeholder image URL for an item name.
///
/// The image service only needs a URL-like string; fetching and caching are
/// the renderer's problem.
pub fn placeholder_image(name: &str) -> String {
    format!(
        "https://placehold.co/100x100/green/white?text={}",
        utf8_percent_encode(name, NON_ALPHANUMERIC)
    )
}

// src/domain/property.rs

use serde::{Deserialize, Serialize};

/// A single real-estate listing. Loaded once from the seed data and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    pub bedrooms: u32,
    /// Can be fractional, e.g. 3.5.
    pub bathrooms: f64,
    /// Square feet.
    pub area: f64,
    pub image_url: String,
}

impl Property {
    /// Case-insensitive substring match against title, description and location.
    /// `needle` must already be lowercased.
    pub fn mentions(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        [&self.title, &self.description, &self.location]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

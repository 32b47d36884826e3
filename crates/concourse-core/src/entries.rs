//! Catalog entry types: restaurants and shops.
//!
//! The two variants are structurally near-identical; both carry the common
//! listing fields (name, description, rating, facet tokens, hours) plus a
//! few variant-only extras. Store-assigned `id`s are immutable after
//! creation; `active` drives soft delete.

use serde::{Deserialize, Serialize};

/// Lowest rating accepted at the validation boundary.
pub const RATING_MIN: f32 = 0.0;
/// Highest rating accepted at the validation boundary.
pub const RATING_MAX: f32 = 5.0;

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub rating: f32,
    /// Display string, not a measured quantity ("3 min walk").
    pub distance: String,
    pub cuisine: String,
    pub price: String,
    /// Zone label used as an exact-match facet ("Concourse A").
    pub location: String,
    pub hours: String,
    pub phone: String,
    pub website: String,
    pub image: Option<String>,
    #[serde(default)]
    pub recommended: bool,
    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub rating: f32,
    pub distance: String,
    pub category: String,
    pub price: String,
    pub location: String,
    pub hours: String,
    /// Free-text promo lines shown on the shop card.
    #[serde(default)]
    pub offers: Vec<String>,
    /// Emoji used as the card image.
    pub image: String,
    #[serde(default)]
    pub recommended: bool,
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Input for creating a restaurant; the store assigns the id.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRestaurant {
    pub name: String,
    pub description: String,
    pub rating: f32,
    #[serde(default)]
    pub distance: String,
    pub cuisine: String,
    pub price: String,
    pub location: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    pub image: Option<String>,
    #[serde(default)]
    pub recommended: bool,
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Input for creating a shop; the store assigns the id.
#[derive(Debug, Clone, Deserialize)]
pub struct NewShop {
    pub name: String,
    pub description: String,
    pub rating: f32,
    #[serde(default)]
    pub distance: String,
    pub category: String,
    pub price: String,
    pub location: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub offers: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub recommended: bool,
    #[serde(default = "default_active")]
    pub active: bool,
}

// Distinguishes an absent field (`None`) from an explicit JSON `null`
// (`Some(None)`), as required by the `image` PATCH semantics below.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

// Option<Option<String>> is intentional for `image`: outer None = "not in
// request" (keep current), Some(None) = "explicitly cleared", Some(Some(v)) =
// "set to value" (PATCH semantics).
#[allow(clippy::option_option)]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f32>,
    pub distance: Option<String>,
    pub cuisine: Option<String>,
    pub price: Option<String>,
    pub location: Option<String>,
    pub hours: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub image: Option<Option<String>>,
    pub recommended: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShopPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f32>,
    pub distance: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub location: Option<String>,
    pub hours: Option<String>,
    pub offers: Option<Vec<String>>,
    pub image: Option<String>,
    pub recommended: Option<bool>,
}

/// True when `rating` lies in the accepted `[RATING_MIN, RATING_MAX]` band.
#[must_use]
pub fn rating_in_range(rating: f32) -> bool {
    (RATING_MIN..=RATING_MAX).contains(&rating)
}

//! User reviews of restaurants, persisted under [`RESTAURANT_REVIEWS_KEY`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::{JsonStore, StorageError, RESTAURANT_REVIEWS_KEY};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,
    pub restaurant_id: u64,
    pub author: String,
    pub rating: f32,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Append-only review log. Reviews are never edited or deleted; ids follow
/// the same monotone, never-reused convention as the catalog stores.
#[derive(Debug)]
pub struct ReviewLog {
    store: JsonStore,
    reviews: Vec<Review>,
    next_id: u64,
}

impl ReviewLog {
    /// Load the persisted log (empty when no blob exists yet).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if an existing blob cannot be read.
    pub fn open(store: JsonStore) -> Result<Self, StorageError> {
        let reviews: Vec<Review> = store.load(RESTAURANT_REVIEWS_KEY)?.unwrap_or_default();
        let next_id = reviews.iter().map(|r| r.id).max().map_or(1, |max| max + 1);
        Ok(Self {
            store,
            reviews,
            next_id,
        })
    }

    /// Append a review and persist the log.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the blob cannot be written.
    pub fn add(
        &mut self,
        restaurant_id: u64,
        author: &str,
        rating: f32,
        text: &str,
    ) -> Result<Review, StorageError> {
        let review = Review {
            id: self.next_id,
            restaurant_id,
            author: author.to_string(),
            rating,
            text: text.to_string(),
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.reviews.insert(0, review.clone());
        self.store.save(RESTAURANT_REVIEWS_KEY, &self.reviews)?;
        Ok(review)
    }

    /// Reviews for one restaurant, newest first.
    #[must_use]
    pub fn for_restaurant(&self, restaurant_id: u64) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|r| r.restaurant_id == restaurant_id)
            .cloned()
            .collect()
    }

    /// Mean rating for one restaurant; `None` when it has no reviews.
    #[must_use]
    pub fn average_rating(&self, restaurant_id: u64) -> Option<f32> {
        let ratings: Vec<f32> = self
            .reviews
            .iter()
            .filter(|r| r.restaurant_id == restaurant_id)
            .map(|r| r.rating)
            .collect();
        if ratings.is_empty() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        Some(ratings.iter().sum::<f32>() / ratings.len() as f32)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

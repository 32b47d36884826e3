//! Screen filters: the displayed subset of the active list.

use crate::store::{CatalogItem, Facet};

/// Conjunction of a text query, exact-match facets, and a rating floor.
///
/// Unset fields don't constrain. The text query matches name, description,
/// and category only (narrower than [`crate::CatalogStore::search`], which
/// for restaurants also scans location). A `min_rating` of zero is treated
/// as unset.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub query: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub location: Option<String>,
    pub min_rating: Option<f32>,
}

impl CatalogFilter {
    #[must_use]
    pub fn matches<T: CatalogItem>(&self, entry: &T) -> bool {
        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            let hit = entry.name().to_lowercase().contains(&needle)
                || entry.description().to_lowercase().contains(&needle)
                || entry.facet(Facet::Category).to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        if let Some(category) = non_empty(&self.category) {
            if entry.facet(Facet::Category) != category {
                return false;
            }
        }
        if let Some(price) = non_empty(&self.price) {
            if entry.facet(Facet::Price) != price {
                return false;
            }
        }
        if let Some(location) = non_empty(&self.location) {
            if entry.facet(Facet::Location) != location {
                return false;
            }
        }

        if let Some(min) = self.min_rating {
            if min > 0.0 && entry.rating() < min {
                return false;
            }
        }

        true
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use concourse_core::entries::Restaurant;

    use super::*;
    use crate::store::CatalogStore;

    fn restaurant(id: u64, name: &str, cuisine: &str, price: &str, rating: f32) -> Restaurant {
        Restaurant {
            id,
            name: name.to_string(),
            description: format!("{name} by the gates"),
            rating,
            distance: "2 min walk".to_string(),
            cuisine: cuisine.to_string(),
            price: price.to_string(),
            location: "Concourse A".to_string(),
            hours: "6am - 10pm".to_string(),
            phone: String::new(),
            website: String::new(),
            image: None,
            recommended: false,
            active: true,
        }
    }

    #[test]
    fn facets_and_rating_compose_as_conjunction() {
        let store = CatalogStore::from_seed(vec![
            restaurant(1, "Gate Grill", "American", "$$", 4.0),
            restaurant(2, "Burger Stand", "American", "$", 4.6),
            restaurant(3, "Runway Ramen", "Japanese", "$$", 4.8),
            restaurant(4, "Diner 22", "American", "$$", 4.7),
        ]);

        let filter = CatalogFilter {
            category: Some("American".to_string()),
            price: Some("$$".to_string()),
            min_rating: Some(4.5),
            ..CatalogFilter::default()
        };

        let hits = store.filtered(&filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 4);

        // Exactly the intersection of the individual predicates over the
        // active list, no union semantics.
        let expected: Vec<u64> = store
            .get_active()
            .into_iter()
            .filter(|r| r.cuisine == "American" && r.price == "$$" && r.rating >= 4.5)
            .map(|r| r.id)
            .collect();
        assert_eq!(hits.iter().map(|r| r.id).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn filtered_skips_inactive_entries() {
        let mut store = CatalogStore::from_seed(vec![
            restaurant(1, "Gate Grill", "American", "$$", 4.0),
            restaurant(2, "Diner 22", "American", "$$", 4.7),
        ]);
        assert!(store.deactivate(2).is_some());

        let filter = CatalogFilter {
            category: Some("American".to_string()),
            ..CatalogFilter::default()
        };
        let hits = store.filtered(&filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn empty_facet_strings_do_not_constrain() {
        let store = CatalogStore::from_seed(vec![restaurant(1, "Gate Grill", "American", "$$", 4.0)]);
        let filter = CatalogFilter {
            category: Some(String::new()),
            price: Some(String::new()),
            location: Some(String::new()),
            ..CatalogFilter::default()
        };
        assert_eq!(store.filtered(&filter).len(), 1);
    }

    #[test]
    fn zero_min_rating_is_unset() {
        let store = CatalogStore::from_seed(vec![restaurant(1, "Gate Grill", "American", "$$", 0.0)]);
        let filter = CatalogFilter {
            min_rating: Some(0.0),
            ..CatalogFilter::default()
        };
        assert_eq!(store.filtered(&filter).len(), 1);
    }

    #[test]
    fn query_matches_category_but_not_location() {
        let store = CatalogStore::from_seed(vec![restaurant(1, "Gate Grill", "American", "$$", 4.0)]);

        let by_category = CatalogFilter {
            query: Some("ameri".to_string()),
            ..CatalogFilter::default()
        };
        assert_eq!(store.filtered(&by_category).len(), 1);

        let by_location = CatalogFilter {
            query: Some("concourse".to_string()),
            ..CatalogFilter::default()
        };
        assert!(store.filtered(&by_location).is_empty());
    }

    #[test]
    fn results_keep_insertion_order_newest_first() {
        let mut store = CatalogStore::from_seed(vec![
            restaurant(1, "Gate Grill", "American", "$$", 4.0),
            restaurant(2, "Diner 22", "American", "$$", 4.7),
        ]);
        store.add(concourse_core::entries::NewRestaurant {
            name: "Counter 3".to_string(),
            description: "Late addition".to_string(),
            rating: 4.3,
            distance: String::new(),
            cuisine: "American".to_string(),
            price: "$$".to_string(),
            location: "Concourse A".to_string(),
            hours: String::new(),
            phone: String::new(),
            website: String::new(),
            image: None,
            recommended: false,
            active: true,
        });

        let filter = CatalogFilter {
            category: Some("American".to_string()),
            ..CatalogFilter::default()
        };
        let ids: Vec<u64> = store.filtered(&filter).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}

//! The authoritative in-memory list for one catalog type.
//!
//! Ids are assigned sequentially and never reused, even after a soft
//! delete. New entries are prepended, so default listing order is newest
//! first. All "not found" conditions surface as `None` or an empty list;
//! store operations never panic on bad ids.

use crate::filter::CatalogFilter;

/// Exact-match filter dimensions shared by both catalog variants.
///
/// `Category` maps to `cuisine` for restaurants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Category,
    Price,
    Location,
}

/// A catalog entry type the store can manage.
///
/// `Draft` is the entry minus its id (the store assigns one); `Patch` is the
/// sparse-update companion applied by [`CatalogStore::update`].
pub trait CatalogItem: Clone {
    type Draft;
    type Patch;

    fn id(&self) -> u64;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn rating(&self) -> f32;
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
    fn is_recommended(&self) -> bool;
    fn facet(&self, facet: Facet) -> &str;
    fn from_draft(id: u64, draft: Self::Draft) -> Self;
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Fields scanned by [`CatalogStore::search`]: name, description and
    /// category by default; restaurants also match on location.
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name(), self.description(), self.facet(Facet::Category)]
    }
}

#[derive(Debug, Clone)]
pub struct CatalogStore<T> {
    entries: Vec<T>,
    next_id: u64,
}

impl<T: CatalogItem> Default for CatalogStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CatalogItem> CatalogStore<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    #[must_use]
    pub fn from_seed(seed: Vec<T>) -> Self {
        let mut store = Self::new();
        store.initialize(seed);
        store
    }

    /// Replace the store contents with `seed` and re-derive the id counter.
    ///
    /// All prior mutations are discarded. An empty seed resets the counter
    /// to 1, so the first `add` after an empty initialize yields id 1.
    pub fn initialize(&mut self, seed: Vec<T>) {
        self.next_id = seed
            .iter()
            .map(CatalogItem::id)
            .max()
            .map_or(1, |max| max + 1);
        self.entries = seed;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the full list, inactive entries included.
    #[must_use]
    pub fn get_all(&self) -> Vec<T> {
        self.entries.clone()
    }

    /// Entries currently visible in default listings.
    #[must_use]
    pub fn get_active(&self) -> Vec<T> {
        self.entries
            .iter()
            .filter(|e| e.is_active())
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn get_by_id(&self, id: u64) -> Option<&T> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Assign the next id, prepend the entry, and return its id.
    pub fn add(&mut self, draft: T::Draft) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(0, T::from_draft(id, draft));
        id
    }

    /// Shallow-merge `patch` into the matching entry.
    ///
    /// Returns the updated entry, or `None` when the id is absent so the
    /// caller can tell a no-op from a change.
    pub fn update(&mut self, id: u64, patch: T::Patch) -> Option<T> {
        let entry = self.entries.iter_mut().find(|e| e.id() == id)?;
        entry.apply_patch(patch);
        Some(entry.clone())
    }

    /// Soft delete: flip `active` off, keeping the entry and its id.
    pub fn deactivate(&mut self, id: u64) -> Option<T> {
        self.set_active(id, false)
    }

    /// Undo a soft delete.
    pub fn activate(&mut self, id: u64) -> Option<T> {
        self.set_active(id, true)
    }

    fn set_active(&mut self, id: u64, active: bool) -> Option<T> {
        let entry = self.entries.iter_mut().find(|e| e.id() == id)?;
        entry.set_active(active);
        Some(entry.clone())
    }

    /// Case-insensitive substring match over each entry's search fields,
    /// in insertion order. An empty term matches everything.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<T> {
        let needle = term.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    /// Distinct values of one facet in first-seen order, inactive entries
    /// included.
    #[must_use]
    pub fn facet_values(&self, facet: Facet) -> Vec<String> {
        let mut seen = Vec::new();
        for entry in &self.entries {
            let value = entry.facet(facet);
            if !seen.iter().any(|v| v == value) {
                seen.push(value.to_string());
            }
        }
        seen
    }

    #[must_use]
    pub fn recommended(&self) -> Vec<T> {
        self.entries
            .iter()
            .filter(|e| e.is_recommended())
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn with_min_rating(&self, min: f32) -> Vec<T> {
        self.entries
            .iter()
            .filter(|e| e.rating() >= min)
            .cloned()
            .collect()
    }

    /// Apply a screen filter over the active list, preserving insertion
    /// order (newest first, since `add` prepends).
    #[must_use]
    pub fn filtered(&self, filter: &CatalogFilter) -> Vec<T> {
        self.entries
            .iter()
            .filter(|e| e.is_active() && filter.matches(*e))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use concourse_core::entries::{NewRestaurant, Restaurant, RestaurantPatch};

    use super::*;

    fn seed_restaurant(id: u64, name: &str, cuisine: &str, rating: f32) -> Restaurant {
        Restaurant {
            id,
            name: name.to_string(),
            description: format!("{name} serves travelers daily"),
            rating,
            distance: "3 min walk".to_string(),
            cuisine: cuisine.to_string(),
            price: "$$".to_string(),
            location: "Concourse A".to_string(),
            hours: "6am - 10pm".to_string(),
            phone: "(555) 010-0100".to_string(),
            website: "https://example.com".to_string(),
            image: None,
            recommended: false,
            active: true,
        }
    }

    fn draft(name: &str, cuisine: &str, rating: f32) -> NewRestaurant {
        NewRestaurant {
            name: name.to_string(),
            description: format!("{name} near the gates"),
            rating,
            distance: String::new(),
            cuisine: cuisine.to_string(),
            price: "$".to_string(),
            location: "Concourse B".to_string(),
            hours: String::new(),
            phone: String::new(),
            website: String::new(),
            image: None,
            recommended: false,
            active: true,
        }
    }

    #[test]
    fn add_assigns_distinct_monotonic_ids() {
        let mut store =
            CatalogStore::from_seed(vec![seed_restaurant(1, "Chick-fil-A", "Fast Food", 4.4)]);
        let a = store.add(draft("Test Cafe", "Coffee", 5.0));
        let b = store.add(draft("Noodle Bar", "Asian", 4.2));
        let c = store.add(draft("Taqueria", "Mexican", 4.7));
        assert_eq!(a, 2);
        assert_eq!(b, 3);
        assert_eq!(c, 4);
    }

    #[test]
    fn ids_are_not_reused_after_soft_delete() {
        let mut store = CatalogStore::from_seed(vec![seed_restaurant(1, "Gate Grill", "Grill", 4.0)]);
        let id = store.add(draft("Test Cafe", "Coffee", 5.0));
        assert!(store.deactivate(id).is_some());
        let next = store.add(draft("Another Cafe", "Coffee", 4.8));
        assert_eq!(next, id + 1);
    }

    #[test]
    fn add_prepends_so_newest_is_first() {
        let mut store = CatalogStore::from_seed(vec![seed_restaurant(1, "Gate Grill", "Grill", 4.0)]);
        store.add(draft("Test Cafe", "Coffee", 5.0));
        let all = store.get_all();
        assert_eq!(all[0].name, "Test Cafe");
        assert_eq!(all[1].name, "Gate Grill");
    }

    #[test]
    fn soft_delete_is_reversible_and_touches_only_active() {
        let mut store =
            CatalogStore::from_seed(vec![seed_restaurant(1, "Chick-fil-A", "Fast Food", 4.4)]);
        let before = store.get_by_id(1).expect("seeded entry").clone();

        let deleted = store.deactivate(1).expect("entry exists");
        assert!(!deleted.active);

        let restored = store.activate(1).expect("entry exists");
        assert!(restored.active);
        assert_eq!(restored, before);
    }

    #[test]
    fn deactivate_unknown_id_is_detectable_noop() {
        let mut store: CatalogStore<Restaurant> = CatalogStore::new();
        assert!(store.deactivate(99).is_none());
        assert!(store.activate(99).is_none());
        assert!(store.update(99, RestaurantPatch::default()).is_none());
    }

    #[test]
    fn soft_deleted_entries_stay_in_get_all_but_leave_get_active() {
        let mut store =
            CatalogStore::from_seed(vec![seed_restaurant(1, "Chick-fil-A", "Fast Food", 4.4)]);
        let id = store.add(draft("Test Cafe", "Coffee", 5.0));
        assert_eq!(id, 2);
        assert_eq!(store.get_all().len(), 2);

        assert!(store.deactivate(1).is_some());
        let active = store.get_active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Test Cafe");
        assert_eq!(store.get_all().len(), 2);
    }

    #[test]
    fn update_merges_only_supplied_fields() {
        let mut store = CatalogStore::from_seed(vec![seed_restaurant(1, "Gate Grill", "Grill", 4.0)]);
        let updated = store
            .update(
                1,
                RestaurantPatch {
                    rating: Some(4.6),
                    price: Some("$$$".to_string()),
                    ..RestaurantPatch::default()
                },
            )
            .expect("entry exists");
        assert_eq!(updated.name, "Gate Grill");
        assert!((updated.rating - 4.6).abs() < f32::EPSILON);
        assert_eq!(updated.price, "$$$");
        assert_eq!(updated.cuisine, "Grill");
    }

    #[test]
    fn search_matches_name_description_and_cuisine_case_insensitively() {
        let store = CatalogStore::from_seed(vec![
            seed_restaurant(1, "Runway Ramen", "Japanese", 4.5),
            seed_restaurant(2, "Gate Grill", "American", 4.0),
        ]);

        let by_name = store.search("runway");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, 1);

        let by_cuisine = store.search("JAPANESE");
        assert_eq!(by_cuisine.len(), 1);
        assert_eq!(by_cuisine[0].id, 1);

        let by_description = store.search("travelers");
        assert_eq!(by_description.len(), 2);
    }

    #[test]
    fn search_hits_category_only_entries() {
        let mut entry = seed_restaurant(1, "Morning Stop", "Coffee", 4.0);
        entry.description = "Pastries and juice".to_string();
        let store = CatalogStore::from_seed(vec![entry]);
        let hits = store.search("coffee");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Morning Stop");
    }

    #[test]
    fn restaurant_search_also_matches_location() {
        let store = CatalogStore::from_seed(vec![seed_restaurant(1, "Gate Grill", "Grill", 4.0)]);
        let hits = store.search("concourse a");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn initialize_discards_prior_mutations() {
        let mut store = CatalogStore::from_seed(vec![seed_restaurant(1, "Gate Grill", "Grill", 4.0)]);
        store.add(draft("Test Cafe", "Coffee", 5.0));
        assert!(store.deactivate(1).is_some());

        let replacement = vec![
            seed_restaurant(10, "Runway Ramen", "Japanese", 4.5),
            seed_restaurant(11, "Taqueria", "Mexican", 4.7),
        ];
        store.initialize(replacement.clone());

        assert_eq!(store.get_all(), replacement);
        // Counter re-derives from the new seed, not the old high-water mark.
        assert_eq!(store.add(draft("Fresh Bar", "Juice", 4.1)), 12);
    }

    #[test]
    fn empty_seed_starts_ids_at_one() {
        let mut store: CatalogStore<Restaurant> = CatalogStore::from_seed(vec![]);
        assert_eq!(store.add(draft("Test Cafe", "Coffee", 5.0)), 1);
    }

    #[test]
    fn facet_values_are_distinct_in_first_seen_order() {
        let mut store = CatalogStore::from_seed(vec![
            seed_restaurant(1, "Gate Grill", "American", 4.0),
            seed_restaurant(2, "Runway Ramen", "Japanese", 4.5),
            seed_restaurant(3, "Burger Stand", "American", 3.9),
        ]);
        assert!(store.deactivate(3).is_some());
        assert_eq!(store.facet_values(Facet::Category), vec!["American", "Japanese"]);
    }

    #[test]
    fn recommended_filters_on_flag_only() {
        let mut featured = seed_restaurant(1, "Runway Ramen", "Japanese", 4.5);
        featured.recommended = true;
        let store = CatalogStore::from_seed(vec![
            featured,
            seed_restaurant(2, "Gate Grill", "American", 4.0),
        ]);
        let picks = store.recommended();
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].id, 1);
    }

    #[test]
    fn with_min_rating_is_inclusive() {
        let store = CatalogStore::from_seed(vec![
            seed_restaurant(1, "Gate Grill", "American", 4.0),
            seed_restaurant(2, "Runway Ramen", "Japanese", 4.5),
        ]);
        let hits = store.with_min_rating(4.5);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }
}

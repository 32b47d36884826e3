//! Reactive façade over a catalog store.
//!
//! Bridges the synchronous store into observable state: every mutation
//! delegates to the store and then republishes the full `get_all()`
//! snapshot on a watch channel (read-after-write refresh, not incremental
//! patching). Handles are explicitly constructed and passed down — there is
//! no global store instance — so parallel tests get full isolation.

use std::sync::Arc;

use tokio::sync::{watch, RwLock};

use crate::filter::CatalogFilter;
use crate::store::{CatalogItem, CatalogStore, Facet};

#[derive(Debug)]
pub struct CatalogHandle<T: CatalogItem> {
    store: Arc<RwLock<CatalogStore<T>>>,
    snapshot: watch::Sender<Vec<T>>,
}

impl<T: CatalogItem> Clone for CatalogHandle<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            snapshot: self.snapshot.clone(),
        }
    }
}

impl<T: CatalogItem> CatalogHandle<T> {
    #[must_use]
    pub fn from_seed(seed: Vec<T>) -> Self {
        let store = CatalogStore::from_seed(seed);
        let (snapshot, _) = watch::channel(store.get_all());
        Self {
            store: Arc::new(RwLock::new(store)),
            snapshot,
        }
    }

    /// Observer stream of full-list snapshots; yields on every mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<T>> {
        self.snapshot.subscribe()
    }

    pub async fn add(&self, draft: T::Draft) -> u64 {
        let mut store = self.store.write().await;
        let id = store.add(draft);
        self.publish(&store);
        id
    }

    pub async fn update(&self, id: u64, patch: T::Patch) -> Option<T> {
        let mut store = self.store.write().await;
        let updated = store.update(id, patch);
        if updated.is_some() {
            self.publish(&store);
        }
        updated
    }

    pub async fn deactivate(&self, id: u64) -> Option<T> {
        let mut store = self.store.write().await;
        let removed = store.deactivate(id);
        if removed.is_some() {
            self.publish(&store);
        }
        removed
    }

    pub async fn activate(&self, id: u64) -> Option<T> {
        let mut store = self.store.write().await;
        let restored = store.activate(id);
        if restored.is_some() {
            self.publish(&store);
        }
        restored
    }

    /// Republish the current snapshot without mutating.
    pub async fn refresh(&self) {
        let store = self.store.read().await;
        self.publish(&store);
    }

    pub async fn get_all(&self) -> Vec<T> {
        self.store.read().await.get_all()
    }

    pub async fn get_active(&self) -> Vec<T> {
        self.store.read().await.get_active()
    }

    pub async fn get_by_id(&self, id: u64) -> Option<T> {
        self.store.read().await.get_by_id(id).cloned()
    }

    pub async fn search(&self, term: &str) -> Vec<T> {
        self.store.read().await.search(term)
    }

    pub async fn filtered(&self, filter: &CatalogFilter) -> Vec<T> {
        self.store.read().await.filtered(filter)
    }

    pub async fn facet_values(&self, facet: Facet) -> Vec<String> {
        self.store.read().await.facet_values(facet)
    }

    pub async fn recommended(&self) -> Vec<T> {
        self.store.read().await.recommended()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    fn publish(&self, store: &CatalogStore<T>) {
        // send_replace never fails, even with no active subscribers.
        let _ = self.snapshot.send_replace(store.get_all());
    }
}

#[cfg(test)]
mod tests {
    use concourse_core::entries::{NewShop, Shop, ShopPatch};

    use super::*;

    fn shop(id: u64, name: &str) -> Shop {
        Shop {
            id,
            name: name.to_string(),
            description: "Travel goods".to_string(),
            rating: 4.0,
            distance: "1 min walk".to_string(),
            category: "News & Gifts".to_string(),
            price: "$".to_string(),
            location: "Terminal 2".to_string(),
            hours: "24 hours".to_string(),
            offers: vec![],
            image: "🛍️".to_string(),
            recommended: false,
            active: true,
        }
    }

    fn shop_draft(name: &str) -> NewShop {
        NewShop {
            name: name.to_string(),
            description: "Snacks to go".to_string(),
            rating: 4.2,
            distance: String::new(),
            category: "Convenience".to_string(),
            price: "$".to_string(),
            location: "Terminal 1".to_string(),
            hours: String::new(),
            offers: vec![],
            image: "🥨".to_string(),
            recommended: false,
            active: true,
        }
    }

    #[tokio::test]
    async fn subscribers_see_snapshot_after_add() {
        let handle = CatalogHandle::from_seed(vec![shop(1, "Skyline News")]);
        let mut rx = handle.subscribe();
        assert_eq!(rx.borrow().len(), 1);

        let id = handle.add(shop_draft("Pretzel Cart")).await;
        assert_eq!(id, 2);
        assert!(rx.has_changed().expect("channel alive"));
        let snapshot = rx.borrow_and_update();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].name, "Pretzel Cart");
    }

    #[tokio::test]
    async fn mutations_republish_and_noops_do_not() {
        let handle = CatalogHandle::from_seed(vec![shop(1, "Skyline News")]);
        let mut rx = handle.subscribe();

        assert!(handle.deactivate(1).await.is_some());
        assert!(rx.has_changed().expect("channel alive"));
        rx.mark_unchanged();

        // Unknown id: no state change, no notification.
        assert!(handle.deactivate(99).await.is_none());
        assert!(!rx.has_changed().expect("channel alive"));
    }

    #[tokio::test]
    async fn update_patch_is_visible_through_reads() {
        let handle = CatalogHandle::from_seed(vec![shop(1, "Skyline News")]);
        let updated = handle
            .update(
                1,
                ShopPatch {
                    offers: Some(vec!["2-for-1 magazines".to_string()]),
                    ..ShopPatch::default()
                },
            )
            .await
            .expect("shop exists");
        assert_eq!(updated.offers.len(), 1);

        let fetched = handle.get_by_id(1).await.expect("shop exists");
        assert_eq!(fetched.offers, vec!["2-for-1 magazines".to_string()]);
    }

    #[tokio::test]
    async fn refresh_republishes_without_mutation() {
        let handle = CatalogHandle::from_seed(vec![shop(1, "Skyline News")]);
        let mut rx = handle.subscribe();
        rx.mark_unchanged();

        handle.refresh().await;
        assert!(rx.has_changed().expect("channel alive"));
        assert_eq!(rx.borrow_and_update().len(), 1);
    }

    #[tokio::test]
    async fn handles_share_one_store() {
        let handle = CatalogHandle::<Shop>::from_seed(vec![]);
        let clone = handle.clone();
        clone.add(shop_draft("Pretzel Cart")).await;
        assert_eq!(handle.len().await, 1);
    }
}

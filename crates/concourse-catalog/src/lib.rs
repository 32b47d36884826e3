//! In-memory catalog stores and the user-local data layer.
//!
//! The catalog stores deliberately have no persistence: their lifetime is
//! the process session, and `initialize` with a fresh seed discards all
//! prior state. User-local data (saved flights, reviews) persists as JSON
//! blobs under fixed keys via [`JsonStore`].

pub mod filter;
pub mod flights;
pub mod handle;
mod items;
pub mod reviews;
pub mod storage;
pub mod store;

pub use filter::CatalogFilter;
pub use flights::{FlightBoard, SavedFlights};
pub use handle::CatalogHandle;
pub use reviews::{Review, ReviewLog};
pub use storage::{JsonStore, StorageError, RESTAURANT_REVIEWS_KEY, USER_FLIGHTS_KEY};
pub use store::{CatalogItem, CatalogStore, Facet};

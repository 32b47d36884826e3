//! Offline queries over the seed document, shared by the CLI subcommands.

use clap::ValueEnum;

use concourse_catalog::{CatalogStore, Facet, FlightBoard};
use concourse_core::SeedFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    Restaurants,
    Shops,
    Flights,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FacetKind {
    Restaurants,
    Shops,
}

pub fn seed_summary(seed: &SeedFile) -> String {
    format!(
        "seed ok: {} restaurants, {} shops, {} flights",
        seed.restaurants.len(),
        seed.shops.len(),
        seed.flights.len()
    )
}

/// Search one catalog (or, with `kind` unset, all of them).
pub fn search_lines(seed: &SeedFile, term: &str, kind: Option<CatalogKind>) -> Vec<String> {
    let mut lines = Vec::new();

    if matches!(kind, None | Some(CatalogKind::Restaurants)) {
        let store = CatalogStore::from_seed(seed.restaurants.clone());
        for r in store.search(term) {
            lines.push(format!(
                "restaurant #{:<3} {}  ({}, {}, {})",
                r.id, r.name, r.cuisine, r.price, r.location
            ));
        }
    }
    if matches!(kind, None | Some(CatalogKind::Shops)) {
        let store = CatalogStore::from_seed(seed.shops.clone());
        for s in store.search(term) {
            lines.push(format!(
                "shop       #{:<3} {}  ({}, {}, {})",
                s.id, s.name, s.category, s.price, s.location
            ));
        }
    }
    if matches!(kind, None | Some(CatalogKind::Flights)) {
        let board = FlightBoard::from_seed(seed.flights.clone());
        for f in board.search(term) {
            lines.push(format!(
                "flight     {}  {} -> {}  gate {}  {}",
                f.number, f.origin, f.destination, f.gate, f.status
            ));
        }
    }

    lines
}

pub fn facet_lines(seed: &SeedFile, kind: FacetKind) -> Vec<String> {
    match kind {
        FacetKind::Restaurants => {
            let store = CatalogStore::from_seed(seed.restaurants.clone());
            facet_report("cuisines", &store, Facet::Category)
        }
        FacetKind::Shops => {
            let store = CatalogStore::from_seed(seed.shops.clone());
            facet_report("categories", &store, Facet::Category)
        }
    }
}

fn facet_report<T: concourse_catalog::CatalogItem>(
    label: &str,
    store: &CatalogStore<T>,
    category: Facet,
) -> Vec<String> {
    let mut lines = vec![format!("{label}: {}", store.facet_values(category).join(", "))];
    lines.push(format!(
        "prices: {}",
        store.facet_values(Facet::Price).join(", ")
    ));
    lines.push(format!(
        "locations: {}",
        store.facet_values(Facet::Location).join(", ")
    ));
    lines
}

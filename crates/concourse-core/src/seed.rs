//! Seed file loading and validation.
//!
//! The seed document is a YAML file holding the restaurant, shop, and flight
//! lists compiled into the app at startup. Stores re-derive their id counter
//! from the seed, so duplicate ids are rejected here rather than downstream.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::entries::{rating_in_range, Restaurant, Shop};
use crate::flights::Flight;
use crate::ConfigError;

#[derive(Debug, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
    #[serde(default)]
    pub shops: Vec<Shop>,
    #[serde(default)]
    pub flights: Vec<Flight>,
}

/// Load and validate the seed document from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_seed(path: &Path) -> Result<SeedFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SeedFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let seed: SeedFile = serde_yaml::from_str(&content).map_err(ConfigError::SeedFileParse)?;

    validate_seed(&seed)?;

    Ok(seed)
}

fn validate_seed(seed: &SeedFile) -> Result<(), ConfigError> {
    validate_entries(
        "restaurant",
        seed.restaurants
            .iter()
            .map(|r| (r.id, r.name.as_str(), r.description.as_str(), r.rating)),
    )?;
    validate_entries(
        "shop",
        seed.shops
            .iter()
            .map(|s| (s.id, s.name.as_str(), s.description.as_str(), s.rating)),
    )?;

    let mut seen_numbers = HashSet::new();
    for flight in &seed.flights {
        if flight.number.trim().is_empty() {
            return Err(ConfigError::Validation(
                "flight number must be non-empty".to_string(),
            ));
        }
        if !seen_numbers.insert(flight.number.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate flight number: '{}'",
                flight.number
            )));
        }
    }

    Ok(())
}

fn validate_entries<'a>(
    kind: &str,
    entries: impl Iterator<Item = (u64, &'a str, &'a str, f32)>,
) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for (id, name, description, rating) in entries {
        if name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "{kind} name must be non-empty (id {id})"
            )));
        }
        if description.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "{kind} '{name}' must have a non-empty description"
            )));
        }
        if !rating_in_range(rating) {
            return Err(ConfigError::Validation(format!(
                "{kind} '{name}' has rating {rating} outside [0.0, 5.0]"
            )));
        }
        if !seen_ids.insert(id) {
            return Err(ConfigError::Validation(format!(
                "duplicate {kind} id: {id} ('{name}')"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flights::FlightStatus;

    fn restaurant(id: u64, name: &str) -> Restaurant {
        Restaurant {
            id,
            name: name.to_string(),
            description: "A place to eat".to_string(),
            rating: 4.2,
            distance: "2 min walk".to_string(),
            cuisine: "American".to_string(),
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

    fn flight(number: &str) -> Flight {
        Flight {
            number: number.to_string(),
            airline: "Skyward".to_string(),
            origin: "AUS".to_string(),
            destination: "DEN".to_string(),
            gate: "B4".to_string(),
            scheduled: "14:35".to_string(),
            status: FlightStatus::Scheduled,
        }
    }

    #[test]
    fn validate_accepts_well_formed_seed() {
        let seed = SeedFile {
            restaurants: vec![restaurant(1, "Gate Grill"), restaurant(2, "Runway Ramen")],
            shops: vec![],
            flights: vec![flight("UA 1482")],
        };
        assert!(validate_seed(&seed).is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_restaurant_id() {
        let seed = SeedFile {
            restaurants: vec![restaurant(1, "Gate Grill"), restaurant(1, "Runway Ramen")],
            shops: vec![],
            flights: vec![],
        };
        let err = validate_seed(&seed).unwrap_err();
        assert!(err.to_string().contains("duplicate restaurant id: 1"));
    }

    #[test]
    fn validate_rejects_empty_name() {
        let seed = SeedFile {
            restaurants: vec![restaurant(1, "  ")],
            shops: vec![],
            flights: vec![],
        };
        let err = validate_seed(&seed).unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn validate_rejects_out_of_range_rating() {
        let mut bad = restaurant(1, "Gate Grill");
        bad.rating = 5.5;
        let seed = SeedFile {
            restaurants: vec![bad],
            shops: vec![],
            flights: vec![],
        };
        let err = validate_seed(&seed).unwrap_err();
        assert!(err.to_string().contains("outside [0.0, 5.0]"));
    }

    #[test]
    fn validate_rejects_duplicate_flight_number_case_insensitive() {
        let seed = SeedFile {
            restaurants: vec![],
            shops: vec![],
            flights: vec![flight("ua 1482"), flight("UA 1482")],
        };
        let err = validate_seed(&seed).unwrap_err();
        assert!(err.to_string().contains("duplicate flight number"));
    }

    #[test]
    fn load_seed_parses_yaml_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog.yaml");
        std::fs::write(
            &path,
            r"
restaurants:
  - id: 1
    name: Gate Grill
    description: Burgers by gate B4
    rating: 4.1
    distance: 2 min walk
    cuisine: American
    price: $$
    location: Concourse B
    hours: 6am - 10pm
    phone: (555) 010-0100
    website: https://gategrill.example.com
    image: null
shops: []
flights:
  - number: UA 1482
    airline: United
    origin: AUS
    destination: DEN
    gate: B4
    scheduled: '14:35'
    status: boarding
",
        )
        .expect("write seed");

        let seed = load_seed(&path).expect("load seed");
        assert_eq!(seed.restaurants.len(), 1);
        assert!(seed.shops.is_empty());
        assert_eq!(seed.flights[0].status, FlightStatus::Boarding);
    }

    #[test]
    fn load_seed_missing_file_is_io_error() {
        let result = load_seed(Path::new("/nonexistent/catalog.yaml"));
        assert!(matches!(result, Err(ConfigError::SeedFileIo { .. })));
    }
}

//! Flight board and the user's saved flights.

use concourse_core::flights::{Flight, FlightStatus};

use crate::storage::{JsonStore, StorageError, USER_FLIGHTS_KEY};

/// Read-only departures board seeded at startup.
#[derive(Debug, Clone, Default)]
pub struct FlightBoard {
    flights: Vec<Flight>,
}

impl FlightBoard {
    #[must_use]
    pub fn from_seed(flights: Vec<Flight>) -> Self {
        Self { flights }
    }

    #[must_use]
    pub fn all(&self) -> &[Flight] {
        &self.flights
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Flight-number lookup, case-insensitive.
    #[must_use]
    pub fn by_number(&self, number: &str) -> Option<&Flight> {
        self.flights
            .iter()
            .find(|f| f.number.eq_ignore_ascii_case(number))
    }

    /// Case-insensitive substring match over number, airline, destination.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<Flight> {
        let needle = term.to_lowercase();
        self.flights
            .iter()
            .filter(|f| {
                f.number.to_lowercase().contains(&needle)
                    || f.airline.to_lowercase().contains(&needle)
                    || f.destination.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn with_status(&self, status: FlightStatus) -> Vec<Flight> {
        self.flights
            .iter()
            .filter(|f| f.status == status)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn for_airline(&self, airline: &str) -> Vec<Flight> {
        self.flights
            .iter()
            .filter(|f| f.airline.eq_ignore_ascii_case(airline))
            .cloned()
            .collect()
    }
}

/// The user's tracked flight numbers, persisted under [`USER_FLIGHTS_KEY`].
#[derive(Debug)]
pub struct SavedFlights {
    store: JsonStore,
    numbers: Vec<String>,
}

impl SavedFlights {
    /// Load previously saved numbers from disk (empty when none exist).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if an existing blob cannot be read.
    pub fn open(store: JsonStore) -> Result<Self, StorageError> {
        let numbers = store.load(USER_FLIGHTS_KEY)?.unwrap_or_default();
        Ok(Self { store, numbers })
    }

    #[must_use]
    pub fn list(&self) -> &[String] {
        &self.numbers
    }

    #[must_use]
    pub fn contains(&self, number: &str) -> bool {
        self.numbers.iter().any(|n| n.eq_ignore_ascii_case(number))
    }

    /// Track a flight number; returns false when it was already saved.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the blob cannot be written.
    pub fn save(&mut self, number: &str) -> Result<bool, StorageError> {
        if self.contains(number) {
            return Ok(false);
        }
        self.numbers.push(number.to_string());
        self.store.save(USER_FLIGHTS_KEY, &self.numbers)?;
        Ok(true)
    }

    /// Stop tracking a flight number; returns false when it wasn't saved.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the blob cannot be written.
    pub fn remove(&mut self, number: &str) -> Result<bool, StorageError> {
        let before = self.numbers.len();
        self.numbers.retain(|n| !n.eq_ignore_ascii_case(number));
        if self.numbers.len() == before {
            return Ok(false);
        }
        self.store.save(USER_FLIGHTS_KEY, &self.numbers)?;
        Ok(true)
    }
}

//! Flight board types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightStatus {
    Scheduled,
    Boarding,
    Departed,
    Arrived,
    Delayed,
    Cancelled,
}

impl std::fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlightStatus::Scheduled => write!(f, "scheduled"),
            FlightStatus::Boarding => write!(f, "boarding"),
            FlightStatus::Departed => write!(f, "departed"),
            FlightStatus::Arrived => write!(f, "arrived"),
            FlightStatus::Delayed => write!(f, "delayed"),
            FlightStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Error for unrecognized status tokens ("lost", "").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFlightStatusError(pub String);

impl std::fmt::Display for ParseFlightStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown flight status '{}'", self.0)
    }
}

impl std::error::Error for ParseFlightStatusError {}

impl std::str::FromStr for FlightStatus {
    type Err = ParseFlightStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scheduled" => Ok(FlightStatus::Scheduled),
            "boarding" => Ok(FlightStatus::Boarding),
            "departed" => Ok(FlightStatus::Departed),
            "arrived" => Ok(FlightStatus::Arrived),
            "delayed" => Ok(FlightStatus::Delayed),
            "cancelled" => Ok(FlightStatus::Cancelled),
            other => Err(ParseFlightStatusError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Airline-assigned flight number ("UA 1482"); unique on the board.
    pub number: String,
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub gate: String,
    /// Display time string ("14:35"), not machine-parsed.
    pub scheduled: String,
    pub status: FlightStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&FlightStatus::Boarding).expect("serialize");
        assert_eq!(json, "\"boarding\"");
    }

    #[test]
    fn status_display_matches_wire_form() {
        assert_eq!(FlightStatus::Delayed.to_string(), "delayed");
        assert_eq!(FlightStatus::Cancelled.to_string(), "cancelled");
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Boarding".parse::<FlightStatus>(), Ok(FlightStatus::Boarding));
        assert_eq!("DELAYED".parse::<FlightStatus>(), Ok(FlightStatus::Delayed));
        assert!("lost".parse::<FlightStatus>().is_err());
    }
}

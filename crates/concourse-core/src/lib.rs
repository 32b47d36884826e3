pub mod app_config;
mod config;
pub mod entries;
pub mod flights;
pub mod seed;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use entries::{
    NewRestaurant, NewShop, Restaurant, RestaurantPatch, Shop, ShopPatch, RATING_MAX, RATING_MIN,
};
pub use flights::{Flight, FlightStatus};
pub use seed::{load_seed, SeedFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
    #[error("failed to read seed file at {path}: {source}")]
    SeedFileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse seed file: {0}")]
    SeedFileParse(#[from] serde_yaml::Error),
    #[error("seed validation failed: {0}")]
    Validation(String),
}

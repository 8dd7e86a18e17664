use crate::error::ConfigError;
use crate::products::{sample_products, Product};
use crate::ratings::{sample_books, Book, MIN_RATING};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Settings for the snippet tour. Every field is optional in the TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourConfig {
    pub square_delay_ms: u64,
    pub square_inputs: Vec<f64>,
    pub min_rating: f64,
    pub color: bool,
    pub log_level: String,
    pub books: Vec<Book>,
    pub products: Vec<Product>,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            square_delay_ms: 1000,
            square_inputs: vec![4.0, -3.0],
            min_rating: MIN_RATING,
            color: true,
            log_level: "info".to_string(),
            books: sample_books(),
            products: sample_products(),
        }
    }
}

impl TourConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn square_delay(&self) -> Duration {
        Duration::from_millis(self.square_delay_ms)
    }
}

//! Sample values for the builder demo, optionally read from a TOML file.
//!
//! ```toml
//! [product]
//! name = "Water"
//! price = 1000
//!
//! [book]
//! author = "Seth Weidman"
//! ```
//!
//! Missing sections and keys keep their defaults.

use crate::error::ReportError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductSpec {
    pub name: String,
    pub price: i64,
}

impl Default for ProductSpec {
    fn default() -> Self {
        ProductSpec {
            name: "Water".to_string(),
            price: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BookSpec {
    pub name: String,
    pub price: i64,
    pub author: String,
}

impl Default for BookSpec {
    fn default() -> Self {
        BookSpec {
            name: "Deep learning from scratch".to_string(),
            price: 3740,
            author: "Seth Weidman".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub product: ProductSpec,
    pub book: BookSpec,
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ReportError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let content =
            fs::read_to_string(path).map_err(|err| ReportError::read_config(path, err))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded demo config");
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the built-in samples.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ReportError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

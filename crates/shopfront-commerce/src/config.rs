//! Storefront configuration.
//!
//! The storefront has no runtime environment to read from, so the seed
//! data and page size come from a small TOML document:
//!
//! ```toml
//! page_size = 8
//!
//! [catalog]
//! count = 12
//! title_prefix = "Naruto T-Shirt"
//! price_cents = 30000
//! image = "/api/placeholder/200/200"
//! ```

use std::num::NonZeroUsize;

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Default number of products per page.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Top-level storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Products shown per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Catalog seed.
    #[serde(default)]
    pub catalog: CatalogSeed,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            catalog: CatalogSeed::default(),
        }
    }
}

impl StorefrontConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values serde cannot.
    pub fn validate(&self) -> Result<(), CommerceError> {
        self.page_size_nonzero()?;
        if self.catalog.price_cents < 0 {
            return Err(CommerceError::InvalidConfig(format!(
                "catalog.price_cents must not be negative, got {}",
                self.catalog.price_cents
            )));
        }
        Ok(())
    }

    /// Page size as a non-zero value.
    pub fn page_size_nonzero(&self) -> Result<NonZeroUsize, CommerceError> {
        NonZeroUsize::new(self.page_size).ok_or_else(|| {
            CommerceError::InvalidConfig("page_size must be at least 1".to_string())
        })
    }
}

/// Description of the generated product catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSeed {
    /// Number of products to generate.
    pub count: u32,
    /// Title prefix; products are titled `"{prefix} {n}"`.
    pub title_prefix: String,
    /// Unit price of every generated product, in cents.
    pub price_cents: i64,
    /// Image path shared by generated products.
    pub image: String,
}

impl Default for CatalogSeed {
    fn default() -> Self {
        Self {
            count: 12,
            title_prefix: "Naruto T-Shirt".to_string(),
            price_cents: 30000,
            image: "/api/placeholder/200/200".to_string(),
        }
    }
}

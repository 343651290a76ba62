//! Catalog, search, pagination and cart state for the Shopfront storefront.
//!
//! This crate holds everything the storefront page renders from:
//!
//! - **Catalog**: the static, generated product list
//! - **Search**: case-insensitive title filter and pagination
//! - **Cart**: ordered line items with add/remove/update/total
//! - **Store**: one [`Storefront`] state object that applies user [`Action`]s
//!
//! # Example
//!
//! ```
//! use shopfront_commerce::prelude::*;
//!
//! let mut store = Storefront::from_config(&StorefrontConfig::default())?;
//!
//! store.dispatch(Action::Search { term: "t-shirt 1".into() })?;
//! assert_eq!(store.page_items().len(), 4);
//!
//! store.dispatch(Action::AddToCart { product_id: ProductId::new(1) })?;
//! store.dispatch(Action::AddToCart { product_id: ProductId::new(1) })?;
//! assert_eq!(store.cart_total().display(), "$600.00");
//! # Ok::<(), CommerceError>(())
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod store;

pub use config::StorefrontConfig;
pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;
pub use store::{Action, Storefront};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{CatalogSeed, StorefrontConfig};
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartPricing, LinePricing};

    // Search
    pub use crate::search::{
        filter_catalog, paginate, total_pages, PageState, Pagination, SearchQuery, SearchResults,
    };

    // Store
    pub use crate::store::{Action, Storefront};
}

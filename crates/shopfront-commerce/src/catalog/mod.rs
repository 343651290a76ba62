//! Product catalog module.
//!
//! Contains the product type and the static catalog source the storefront
//! is seeded from.

mod product;
mod source;

pub use product::Product;
pub use source::Catalog;

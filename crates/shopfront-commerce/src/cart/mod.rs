//! Shopping cart module.
//!
//! Contains the cart, its line items and the pricing breakdown.

mod cart;
mod pricing;

pub use cart::{Cart, CartLine};
pub use pricing::{CartPricing, LinePricing};

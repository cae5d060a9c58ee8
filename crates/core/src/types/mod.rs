//! Core record types for Storedash.
//!
//! This module provides the typed shapes of content-store documents and the
//! small value types they are built from.

pub mod id;
pub mod order;
pub mod price;
pub mod product;
pub mod review;
pub mod status;
pub mod timestamp;

pub use id::*;
pub use order::{LineItem, Order};
pub use price::{format_usd, is_valid_amount};
pub use product::{CategoryRef, Product};
pub use review::{RATING_RANGE, Review};
pub use status::OrderStatus;

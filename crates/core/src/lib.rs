//! Storedash Core - Shared record types.
//!
//! This crate provides the types used across all Storedash components:
//! - `admin` - View aggregation, screen services and the JSON API
//! - `cli` - Command-line views over a content-store export
//!
//! # Architecture
//!
//! The core crate contains only types, decoding and validation - no I/O, no
//! HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Records (orders, products, reviews), IDs, statuses, amounts
//! - [`document`] - Decoding raw content-store JSON into validated records
//! - [`error`] - Malformed-record errors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod document;
pub mod error;
pub mod types;

pub use document::{Document, decode};
pub use error::RecordError;
pub use types::*;

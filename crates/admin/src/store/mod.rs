//! Content store access.
//!
//! The dashboard reads orders, products and reviews from a headless content
//! store and writes back product creations and deletions. The
//! [`ContentStore`] trait is the seam; [`SnapshotStore`] serves an exported
//! dataset from memory.

mod snapshot;

use async_trait::async_trait;
use storedash_core::{Order, Product, RecordError, Review};
use thiserror::Error;

pub use snapshot::SnapshotStore;

impl StoreError {
    pub(crate) fn not_found(kind: &'static str, id: &str) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

/// Errors from content store access.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No document of this kind has the given id.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// The store could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A stored document is malformed.
    #[error("line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: RecordError,
    },
}

/// Fields of a product about to be created. The store assigns the id and
/// creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub slug: String,
    pub price: f64,
    pub discount_percentage: Option<f64>,
    pub stock_level: u32,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_featured: bool,
}

/// Read and write access to the content store.
///
/// Each fetch returns the store's current documents in store order.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All order documents.
    async fn fetch_orders(&self) -> Result<Vec<Order>, StoreError>;

    /// All product documents.
    async fn fetch_products(&self) -> Result<Vec<Product>, StoreError>;

    /// All review documents.
    async fn fetch_reviews(&self) -> Result<Vec<Review>, StoreError>;

    /// Delete the order with `id`.
    ///
    /// A document of another type with the same id is left alone and the
    /// call fails with [`StoreError::NotFound`].
    async fn delete_order(&self, id: &str) -> Result<(), StoreError>;

    /// Delete the product with `id`. Other document types are never touched.
    async fn delete_product(&self, id: &str) -> Result<(), StoreError>;

    /// Create a product and return it as stored.
    async fn create_product(&self, product: NewProduct) -> Result<Product, StoreError>;
}

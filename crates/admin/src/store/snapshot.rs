//! In-memory content store loaded from an NDJSON export.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use storedash_core::document::UNKNOWN_ID;
use storedash_core::{
    CategoryRef, Document, Order, Product, ProductId, RecordError, Review, decode,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ContentStore, NewProduct, StoreError};

#[derive(Debug, Default)]
struct Documents {
    orders: Vec<Order>,
    products: Vec<Product>,
    reviews: Vec<Review>,
}

/// A content store held entirely in memory.
///
/// Writes only change the in-memory copy; the export file is never touched.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    documents: RwLock<Documents>,
}

impl SnapshotStore {
    /// Build a store from already-decoded records.
    #[must_use]
    pub fn from_records(orders: Vec<Order>, products: Vec<Product>, reviews: Vec<Review>) -> Self {
        Self {
            documents: RwLock::new(Documents {
                orders,
                products,
                reviews,
            }),
        }
    }

    /// Load an NDJSON export from disk.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read and
    /// [`StoreError::Decode`] for the first malformed document.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::Io {
                path: path.display().to_string(),
                source,
            })?;

        let store = Self::parse(&text)?;
        let documents = store.documents.read().await;
        tracing::info!(
            path = %path.display(),
            orders = documents.orders.len(),
            products = documents.products.len(),
            reviews = documents.reviews.len(),
            "Loaded content export"
        );
        drop(documents);

        Ok(store)
    }

    /// Parse NDJSON export text: one document per line, dispatched on `_type`.
    ///
    /// Blank lines are ignored and documents of other types are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Decode`] for the first line that is not valid
    /// JSON or does not decode as its declared type. Line numbers are 1-based.
    pub fn parse(text: &str) -> Result<Self, StoreError> {
        let mut documents = Documents::default();

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            let decode_err = |source| StoreError::Decode {
                line: line_no,
                source,
            };

            let value: Value = serde_json::from_str(line).map_err(|e| {
                decode_err(RecordError::Malformed {
                    kind: "document",
                    id: UNKNOWN_ID.to_string(),
                    message: e.to_string(),
                })
            })?;

            let doc_type = value.get("_type").and_then(Value::as_str).map(str::to_owned);
            match doc_type.as_deref() {
                Some(Order::TYPE_NAME) => documents.orders.push(decode(value).map_err(decode_err)?),
                Some(Product::TYPE_NAME) => {
                    documents.products.push(decode(value).map_err(decode_err)?);
                }
                Some(Review::TYPE_NAME) => documents.reviews.push(decode(value).map_err(decode_err)?),
                other => {
                    tracing::debug!(line = line_no, doc_type = ?other, "Skipping document");
                }
            }
        }

        Ok(Self {
            documents: RwLock::new(documents),
        })
    }
}

/// Remove the first record matching `is_target`, keeping the rest in order.
fn remove_first<T>(records: &mut Vec<T>, is_target: impl FnMut(&T) -> bool) -> Option<T> {
    let index = records.iter().position(is_target)?;
    Some(records.remove(index))
}

#[async_trait]
impl ContentStore for SnapshotStore {
    async fn fetch_orders(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.documents.read().await.orders.clone())
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.documents.read().await.products.clone())
    }

    async fn fetch_reviews(&self) -> Result<Vec<Review>, StoreError> {
        Ok(self.documents.read().await.reviews.clone())
    }

    async fn delete_order(&self, id: &str) -> Result<(), StoreError> {
        let mut documents = self.documents.write().await;
        remove_first(&mut documents.orders, |o| o.id.as_str() == id)
            .ok_or_else(|| StoreError::not_found(Order::KIND, id))?;

        tracing::info!(id, "Deleted order");
        Ok(())
    }

    async fn delete_product(&self, id: &str) -> Result<(), StoreError> {
        let mut documents = self.documents.write().await;
        remove_first(&mut documents.products, |p| p.id.as_str() == id)
            .ok_or_else(|| StoreError::not_found(Product::KIND, id))?;

        tracing::info!(id, "Deleted product");
        Ok(())
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, StoreError> {
        let product = Product {
            id: ProductId::new(Uuid::new_v4().to_string()),
            name: product.name,
            slug: Some(product.slug),
            price: product.price,
            discount_percentage: product.discount_percentage,
            stock_level: product.stock_level,
            category: product.category.map(CategoryRef::Title),
            description: product.description,
            image_url: product.image_url,
            is_featured: product.is_featured,
            created_at: Utc::now(),
        };

        self.documents.write().await.products.push(product.clone());
        tracing::info!(id = %product.id, name = %product.name, "Created product");
        Ok(product)
    }
}

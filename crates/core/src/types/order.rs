//! Order documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::id::{OrderId, ProductId};
use super::price::is_valid_amount;
use super::status::OrderStatus;
use crate::document::{Document, check_fields, null_as_default};
use crate::error::RecordError;

/// A customer order as stored in the content store (`_type == "order"`).
///
/// Item count and total quantity are deliberately not stored here; they are
/// always derived from `items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Document ID.
    #[serde(rename = "_id")]
    pub id: OrderId,
    /// Human-readable order number (e.g. "ORD-1001").
    pub order_number: String,
    /// When the order was placed.
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
    /// Order total.
    pub total: f64,
    /// Ordered line items.
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<LineItem>,
    /// Status; `None` when the document has no status.
    #[serde(default, rename = "orderStatus")]
    pub status: Option<OrderStatus>,
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Referenced product, when the line was created from a catalog product.
    #[serde(default)]
    pub product_id: Option<ProductId>,
    /// Product name at the time of ordering.
    pub name: String,
    /// Units ordered, at least one.
    pub quantity: u32,
    /// Unit price.
    pub price: f64,
}

const LINE_ITEM_REQUIRED: &[&str] = &["name", "quantity", "price"];
const LINE_ITEM_NUMERIC: &[&str] = &["quantity", "price"];

impl Document for Order {
    const KIND: &'static str = "order";
    const TYPE_NAME: &'static str = "order";
    const REQUIRED_FIELDS: &'static [&'static str] = &["_id", "orderNumber", "createdAt", "total"];
    const NUMERIC_FIELDS: &'static [&'static str] = &["total"];

    fn check_shape(value: &Value, id: &str) -> Result<(), RecordError> {
        check_fields(
            value,
            Self::KIND,
            id,
            "",
            Self::REQUIRED_FIELDS,
            Self::NUMERIC_FIELDS,
        )?;

        if let Some(items) = value.get("items").and_then(Value::as_array) {
            for (index, item) in items.iter().enumerate() {
                check_fields(
                    item,
                    Self::KIND,
                    id,
                    &format!("items[{index}]."),
                    LINE_ITEM_REQUIRED,
                    LINE_ITEM_NUMERIC,
                )?;
            }
        }

        Ok(())
    }

    fn validate(&self) -> Result<(), RecordError> {
        if !is_valid_amount(self.total) {
            return Err(RecordError::invalid(
                Self::KIND,
                self.id.as_str(),
                "total",
                format!("must be a finite, non-negative amount, got {}", self.total),
            ));
        }

        for (index, item) in self.items.iter().enumerate() {
            if item.quantity == 0 {
                return Err(RecordError::invalid(
                    Self::KIND,
                    self.id.as_str(),
                    format!("items[{index}].quantity"),
                    "must be at least 1",
                ));
            }
            if !is_valid_amount(item.price) {
                return Err(RecordError::invalid(
                    Self::KIND,
                    self.id.as_str(),
                    format!("items[{index}].price"),
                    format!("must be a finite, non-negative amount, got {}", item.price),
                ));
            }
        }

        Ok(())
    }
}

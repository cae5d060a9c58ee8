//! Product documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::id::ProductId;
use super::price::is_valid_amount;
use crate::document::{Document, check_fields, null_as_default};
use crate::error::RecordError;

/// A catalog product (`_type == "shopProduct"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Document ID.
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Product name. Older documents call this `title`.
    #[serde(alias = "title")]
    pub name: String,
    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Discount percentage (0-100), if the product is discounted.
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    /// Units in stock.
    pub stock_level: u32,
    /// Category reference.
    #[serde(default)]
    pub category: Option<CategoryRef>,
    /// Long description.
    #[serde(default)]
    pub description: Option<String>,
    /// Resolved image URL.
    #[serde(default, rename = "image")]
    pub image_url: Option<String>,
    /// Whether the product is featured on the storefront.
    #[serde(default, rename = "isFeaturedProduct", deserialize_with = "null_as_default")]
    pub is_featured: bool,
    /// Document creation time.
    #[serde(rename = "_createdAt", with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}

/// A product category, either inlined as a plain string or dereferenced to
/// an object carrying a `title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Title(String),
    Reference { title: Option<String> },
}

impl CategoryRef {
    /// The category title, if known.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Title(title) => Some(title),
            Self::Reference { title } => title.as_deref(),
        }
    }
}

impl Product {
    /// Category title, if the product has one.
    #[must_use]
    pub fn category_title(&self) -> Option<&str> {
        self.category.as_ref().and_then(CategoryRef::title)
    }

    /// Value of the stock on hand at list price.
    #[must_use]
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.stock_level)
    }
}

impl Document for Product {
    const KIND: &'static str = "product";
    const TYPE_NAME: &'static str = "shopProduct";
    const REQUIRED_FIELDS: &'static [&'static str] = &["_id", "price", "stockLevel", "_createdAt"];
    const NUMERIC_FIELDS: &'static [&'static str] = &["price", "stockLevel", "discountPercentage"];

    fn check_shape(value: &Value, id: &str) -> Result<(), RecordError> {
        check_fields(
            value,
            Self::KIND,
            id,
            "",
            Self::REQUIRED_FIELDS,
            Self::NUMERIC_FIELDS,
        )?;

        let has_name = ["name", "title"]
            .iter()
            .any(|field| value.get(field).is_some_and(|v| !v.is_null()));
        if !has_name {
            return Err(RecordError::MissingField {
                kind: Self::KIND,
                id: id.to_string(),
                field: "name",
            });
        }

        Ok(())
    }

    fn validate(&self) -> Result<(), RecordError> {
        if !is_valid_amount(self.price) {
            return Err(RecordError::invalid(
                Self::KIND,
                self.id.as_str(),
                "price",
                format!("must be a finite, non-negative amount, got {}", self.price),
            ));
        }

        if let Some(discount) = self
            .discount_percentage
            .filter(|d| !(d.is_finite() && (0.0..=100.0).contains(d)))
        {
            return Err(RecordError::invalid(
                Self::KIND,
                self.id.as_str(),
                "discountPercentage",
                format!("must be between 0 and 100, got {discount}"),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::document::decode;

    fn product_json() -> Value {
        json!({
            "_id": "p-1",
            "_type": "shopProduct",
            "_createdAt": "2024-02-01T12:00:00Z",
            "title": "Mango Jam",
            "slug": "mango-jam",
            "price": 7.5,
            "stockLevel": 12,
            "category": {"title": "Preserves"},
            "isFeaturedProduct": null
        })
    }

    #[test]
    fn test_decode_product_with_title_alias() {
        let product: Product = decode(product_json()).unwrap();
        assert_eq!(product.name, "Mango Jam");
        assert_eq!(product.category_title(), Some("Preserves"));
        assert!(!product.is_featured);
    }

    #[test]
    fn test_category_as_plain_string() {
        let mut value = product_json();
        value["category"] = json!("Drinks");
        let product: Product = decode(value).unwrap();
        assert_eq!(product.category_title(), Some("Drinks"));
    }

    #[test]
    fn test_missing_name_and_title() {
        let mut value = product_json();
        value.as_object_mut().unwrap().remove("title");
        let err = decode::<Product>(value).unwrap_err();
        assert_eq!(err.field(), Some("name"));
    }

    #[test]
    fn test_non_numeric_stock_level() {
        let mut value = product_json();
        value["stockLevel"] = json!("twelve");
        let err = decode::<Product>(value).unwrap_err();
        assert_eq!(err.field(), Some("stockLevel"));
    }

    #[test]
    fn test_discount_out_of_range() {
        let mut value = product_json();
        value["discountPercentage"] = json!(140);
        let err = decode::<Product>(value).unwrap_err();
        assert_eq!(err.field(), Some("discountPercentage"));
    }

    #[test]
    fn test_stock_value() {
        let product: Product = decode(product_json()).unwrap();
        assert!((product.stock_value() - 90.0).abs() < f64::EPSILON);
    }
}

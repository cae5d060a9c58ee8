//! Products screen and the add-product form.

use serde::{Deserialize, Serialize};
use storedash_core::{Product, format_usd, is_valid_amount};
use thiserror::Error;
use tracing::instrument;

use super::fetch_failed;
use crate::error::AppError;
use crate::store::{ContentStore, NewProduct};
use crate::views::{self, ViewParams};

/// One entry of the product list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub slug: Option<String>,
    pub price: f64,
    /// Price with currency symbol, two decimals.
    pub price_display: String,
    pub discount_percentage: Option<f64>,
    pub stock_level: u32,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_featured: bool,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            slug: product.slug.clone(),
            price: product.price,
            price_display: format_usd(product.price),
            discount_percentage: product.discount_percentage,
            stock_level: product.stock_level,
            category: product.category_title().map(str::to_string),
            image_url: product.image_url.clone(),
            is_featured: product.is_featured,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductsView {
    pub rows: Vec<ProductRow>,
}

/// The add-product form as submitted: every field is free text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductForm {
    pub title: String,
    pub price: String,
    pub discount_percentage: String,
    pub image: String,
    pub category: String,
    pub description: String,
    pub stock_level: String,
    pub is_featured_product: String,
}

/// A form field that cannot become part of a product.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("`{0}` is required")]
    Required(&'static str),

    #[error("`{field}` must be a number, got `{value}`")]
    NotANumber { field: &'static str, value: String },

    #[error("`{field}` is out of range: {reason}")]
    OutOfRange {
        field: &'static str,
        reason: &'static str,
    },
}

impl ProductForm {
    /// Parse the form into product fields.
    ///
    /// Blank numeric fields default to zero.
    ///
    /// # Errors
    ///
    /// Returns `FormError` for a blank title, a non-numeric value, a negative
    /// or non-finite price, a discount outside 0..=100, or a stock level that
    /// is not a non-negative integer.
    pub fn parse(&self) -> Result<NewProduct, FormError> {
        let name = self.title.trim();
        if name.is_empty() {
            return Err(FormError::Required("title"));
        }

        let price = parse_number("price", &self.price)?;
        if !is_valid_amount(price) {
            return Err(FormError::OutOfRange {
                field: "price",
                reason: "must be a finite, non-negative amount",
            });
        }

        let discount = parse_number("discountPercentage", &self.discount_percentage)?;
        if !(0.0..=100.0).contains(&discount) {
            return Err(FormError::OutOfRange {
                field: "discountPercentage",
                reason: "must be between 0 and 100",
            });
        }

        let stock_level = match self.stock_level.trim() {
            "" => 0,
            raw => raw.parse::<u32>().map_err(|_| FormError::NotANumber {
                field: "stockLevel",
                value: raw.to_string(),
            })?,
        };

        Ok(NewProduct {
            name: name.to_string(),
            slug: slugify(name),
            price,
            discount_percentage: Some(discount),
            stock_level,
            category: non_blank(&self.category),
            description: non_blank(&self.description),
            image_url: non_blank(&self.image),
            is_featured: matches!(
                self.is_featured_product.trim().to_lowercase().as_str(),
                "true" | "yes" | "on" | "1"
            ),
        })
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, FormError> {
    match raw.trim() {
        "" => Ok(0.0),
        raw => raw.parse::<f64>().map_err(|_| FormError::NotANumber {
            field,
            value: raw.to_string(),
        }),
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// URL slug: lowercase ASCII letters and digits joined by single hyphens.
fn slugify(name: &str) -> String {
    let slug = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() { "product".to_string() } else { slug }
}

/// Load the products screen.
///
/// # Errors
///
/// Returns `AppError` if the fetch fails or a price is malformed.
#[instrument(skip(store))]
pub async fn load(store: &dyn ContentStore, params: &ViewParams) -> Result<ProductsView, AppError> {
    let products = store
        .fetch_products()
        .await
        .map_err(fetch_failed("products"))?;

    let visible = views::sort(&views::filter(&products, params), &params.sort)?;

    Ok(ProductsView {
        rows: visible.iter().map(ProductRow::from).collect(),
    })
}

/// Create a product from the add-product form.
///
/// # Errors
///
/// Returns `AppError::Form` for an invalid form, or a store error.
#[instrument(skip(store, form), fields(title = %form.title))]
pub async fn create(store: &dyn ContentStore, form: &ProductForm) -> Result<ProductRow, AppError> {
    let product = form.parse()?;
    let created = store.create_product(product).await?;
    Ok(ProductRow::from(&created))
}

/// Delete a product.
///
/// # Errors
///
/// Returns `AppError` if no product has this id or the store fails.
#[instrument(skip(store))]
pub async fn delete(store: &dyn ContentStore, id: &str) -> Result<(), AppError> {
    store.delete_product(id).await?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::SnapshotStore;

    fn form(title: &str, price: &str, stock: &str) -> ProductForm {
        ProductForm {
            title: title.to_string(),
            price: price.to_string(),
            stock_level: stock.to_string(),
            category: "Pantry".to_string(),
            ..ProductForm::default()
        }
    }

    #[test]
    fn test_parse_form() {
        let product = form("Mango Jam", "7.50", "12").parse().unwrap();
        assert_eq!(product.name, "Mango Jam");
        assert_eq!(product.slug, "mango-jam");
        assert!((product.price - 7.5).abs() < f64::EPSILON);
        assert_eq!(product.stock_level, 12);
        assert_eq!(product.category.as_deref(), Some("Pantry"));
        assert_eq!(product.description, None);
        assert!(!product.is_featured);
    }

    #[test]
    fn test_blank_numbers_default_to_zero() {
        let product = form("Soda", "", " ").parse().unwrap();
        assert!(product.price.abs() < f64::EPSILON);
        assert_eq!(product.stock_level, 0);
        assert_eq!(product.discount_percentage, Some(0.0));
    }

    #[test]
    fn test_non_numeric_price_is_field_error() {
        let err = form("Soda", "cheap", "1").parse().unwrap_err();
        assert_eq!(
            err,
            FormError::NotANumber {
                field: "price",
                value: "cheap".to_string(),
            }
        );
    }

    #[test]
    fn test_fractional_stock_is_field_error() {
        let err = form("Soda", "1", "2.5").parse().unwrap_err();
        assert!(matches!(err, FormError::NotANumber { field: "stockLevel", .. }));
    }

    #[test]
    fn test_discount_range() {
        let mut f = form("Soda", "1", "1");
        f.discount_percentage = "150".to_string();
        assert!(matches!(
            f.parse().unwrap_err(),
            FormError::OutOfRange {
                field: "discountPercentage",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(form("Soda", "-1", "1").parse().is_err());
    }

    #[test]
    fn test_title_required() {
        assert_eq!(form("  ", "1", "1").parse().unwrap_err(), FormError::Required("title"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Lime & Mint  Soda!"), "lime-mint-soda");
        assert_eq!(slugify("Café"), "caf");
        assert_eq!(slugify("!!!"), "product");
    }

    #[tokio::test]
    async fn test_create_then_load() {
        let store = SnapshotStore::default();
        let mut f = form("Lime Soda", "2", "40");
        f.is_featured_product = "true".to_string();
        let created = create(&store, &f).await.unwrap();
        assert!(created.is_featured);
        assert_eq!(created.price_display, "$2.00");

        let view = load(&store, &ViewParams::search("drinks")).await.unwrap();
        assert!(view.rows.is_empty());
        let view = load(&store, &ViewParams::search("pantry")).await.unwrap();
        assert_eq!(view.rows, vec![created]);
    }

    #[tokio::test]
    async fn test_create_invalid_form_is_bad_request() {
        let err = create(&SnapshotStore::default(), &form("Soda", "x", "1"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_goes_through_store() {
        let store = SnapshotStore::default();
        let created = create(&store, &form("Soda", "1", "1")).await.unwrap();
        delete(&store, &created.id).await.unwrap();
        assert!(load(&store, &ViewParams::default()).await.unwrap().rows.is_empty());
    }
}

//! Export validation.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use storedash_admin::store::{ContentStore, SnapshotStore};
use tracing::info;

use super::{CommandError, open, write_json};

/// Document counts of a valid export.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ExportCounts {
    pub orders: usize,
    pub products: usize,
    pub reviews: usize,
}

async fn count(store: &SnapshotStore) -> Result<ExportCounts, CommandError> {
    Ok(ExportCounts {
        orders: store.fetch_orders().await?.len(),
        products: store.fetch_products().await?.len(),
        reviews: store.fetch_reviews().await?.len(),
    })
}

/// Decode every document in the export and write the counts.
///
/// Stops at the first malformed document.
///
/// # Errors
///
/// Returns the load error, naming the line, record kind and field.
pub async fn run<W: Write>(export: &Path, out: &mut W) -> Result<(), CommandError> {
    let store = open(export).await?;
    let counts = count(&store).await?;
    info!(path = %export.display(), "Export is valid");
    write_json(out, &counts)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::tests::{EXPORT, export_file, output_json};

    #[tokio::test]
    async fn test_counts() {
        let store = SnapshotStore::parse(EXPORT).unwrap();
        assert_eq!(
            count(&store).await.unwrap(),
            ExportCounts {
                orders: 2,
                products: 1,
                reviews: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_run_writes_counts() {
        let file = export_file(EXPORT);
        let mut out = Vec::new();
        run(file.path(), &mut out).await.unwrap();
        assert_eq!(
            output_json(&out),
            serde_json::json!({ "orders": 2, "products": 1, "reviews": 1 })
        );
    }

    #[tokio::test]
    async fn test_run_reports_bad_rating() {
        let file = export_file(
            "{\"_type\":\"review\",\"productId\":\"p-1\",\"createdAt\":\"2024-01-01\",\"rating\":9}\n",
        );
        let err = run(file.path(), &mut Vec::new()).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("line 1"));
        assert!(message.contains("rating"));
    }
}

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use contracts::domain::a002_product::ProductUpdate;
use contracts::domain::common::ImportResult;
use sea_orm::{DatabaseConnection, TransactionTrait};

use super::repository;
use crate::shared::error::AppError;
use crate::shared::tabular::Table;

const COL_ID: &str = "product_id";
const COL_NAME: &str = "product_name";
const COL_CATEGORY: &str = "product_category";
const COL_SUBCAT: &str = "product_subcat";
const COL_SP: &str = "product_sp";
const COL_DESCRIPTION: &str = "product_description";

/// Parse an uploaded product sheet and apply it in one transaction.
pub async fn import(db: &DatabaseConnection, bytes: &[u8]) -> Result<ImportResult, AppError> {
    let table = Table::parse_csv(bytes)?;
    let updates = map_rows(&table, Utc::now())?;
    apply(db, updates).await
}

/// Map parsed rows into product parameter sets.
///
/// All six named columns are required; `now` is injected as the new
/// `product_creationdate`, whatever the file says.
pub fn map_rows(table: &Table, now: DateTime<Utc>) -> Result<Vec<ProductUpdate>, AppError> {
    let id_col = table.require_column(COL_ID)?;
    let name_col = table.require_column(COL_NAME)?;
    let category_col = table.require_column(COL_CATEGORY)?;
    let subcat_col = table.require_column(COL_SUBCAT)?;
    let sp_col = table.require_column(COL_SP)?;
    let description_col = table.require_column(COL_DESCRIPTION)?;

    let mut updates = Vec::with_capacity(table.records().len());
    for (idx, record) in table.records().iter().enumerate() {
        let line = idx + 2;

        let id = record[id_col].trim();
        if id.is_empty() {
            return Err(AppError::Mapping(format!("line {line}: empty {COL_ID}")));
        }

        let sp_raw = record[sp_col].trim().replace(',', ".");
        let product_sp: f64 = sp_raw.parse().map_err(|_| {
            AppError::Mapping(format!("line {line}: invalid {COL_SP} '{}'", record[sp_col]))
        })?;

        updates.push(ProductUpdate {
            product_id: id.to_string(),
            product_name: record[name_col].trim().to_string(),
            product_category: record[category_col].trim().to_string(),
            product_subcat: record[subcat_col].trim().to_string(),
            product_sp,
            product_description: record[description_col].trim().to_string(),
            product_creationdate: now,
        });
    }
    Ok(updates)
}

/// Execute one UPDATE per parameter set, in file order, inside a single
/// transaction; all-or-nothing exactly as the raw-material import.
pub async fn apply(
    db: &DatabaseConnection,
    updates: Vec<ProductUpdate>,
) -> Result<ImportResult, AppError> {
    let submitted_count = updates.len();
    let txn = db.begin().await.map_err(AppError::Update)?;

    let mut not_found_ids: Vec<String> = Vec::new();
    let mut not_found_seen: HashSet<String> = HashSet::new();

    for update in &updates {
        let affected = repository::apply_update(&txn, update)
            .await
            .map_err(AppError::Update)?;
        if affected == 0 {
            tracing::warn!("no product matches id '{}'", update.product_id);
            if not_found_seen.insert(update.product_id.clone()) {
                not_found_ids.push(update.product_id.clone());
            }
        }
    }

    txn.commit().await.map_err(AppError::Update)?;

    Ok(ImportResult {
        submitted_count,
        not_found_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db;
    use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};

    const HEADER: &str =
        "product_id,product_name,product_category,product_subcat,product_sp,product_description";

    async fn seed<C: ConnectionTrait>(conn: &C, id: &str, name: &str, sp: f64) {
        repository::ActiveModel {
            product_id: Set(id.to_string()),
            product_name: Set(name.to_string()),
            product_category: Set("Masterbatch".to_string()),
            product_subcat: Set("White".to_string()),
            product_sp: Set(sp),
            product_description: Set(String::new()),
            product_creationdate: Set(None),
        }
        .insert(conn)
        .await
        .unwrap();
    }

    #[test]
    fn test_map_rows_is_independent_of_column_order() {
        let csv = "product_sp,product_id,product_description,product_name,product_subcat,product_category\n\
            225.0,P100,Revised,White MB 75,White,Masterbatch\n";
        let table = Table::parse_csv(csv.as_bytes()).unwrap();
        let now = Utc::now();
        let updates = map_rows(&table, now).unwrap();
        assert_eq!(updates[0].product_id, "P100");
        assert_eq!(updates[0].product_name, "White MB 75");
        assert_eq!(updates[0].product_sp, 225.0);
        assert_eq!(updates[0].product_creationdate, now);
    }

    #[test]
    fn test_map_rows_names_the_missing_column() {
        let table = Table::parse_csv(b"product_id,product_name\nP100,White MB\n").unwrap();
        let err = map_rows(&table, Utc::now()).unwrap_err();
        assert!(err.to_string().contains("product_category"));
    }

    #[tokio::test]
    async fn test_import_rewrites_matching_products() {
        let conn = db::connect_in_memory().await;
        seed(&conn, "P100", "White MB 70", 210.0).await;

        let csv = format!("{HEADER}\nP100,White MB 75,Masterbatch,White,225.0,Revised grade\n");
        let result = import(&conn, csv.as_bytes()).await.unwrap();
        assert_eq!(result.submitted_count, 1);
        assert!(result.not_found_ids.is_empty());

        let stored = repository::Entity::find_by_id("P100")
            .one(&conn)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.product_name, "White MB 75");
        assert_eq!(stored.product_sp, 225.0);
        assert!(stored.product_creationdate.is_some());
    }

    #[tokio::test]
    async fn test_import_reports_unknown_product_ids() {
        let conn = db::connect_in_memory().await;
        seed(&conn, "P100", "White MB 70", 210.0).await;

        let csv = format!(
            "{HEADER}\n\
            P100,White MB 75,Masterbatch,White,225.0,Revised\n\
            P999,Ghost,Masterbatch,Black,1.0,Missing\n"
        );
        let result = import(&conn, csv.as_bytes()).await.unwrap();
        assert_eq!(result.submitted_count, 2);
        assert_eq!(result.not_found_ids, vec!["P999".to_string()]);
    }

    #[tokio::test]
    async fn test_import_with_bad_row_changes_nothing() {
        let conn = db::connect_in_memory().await;
        seed(&conn, "P100", "White MB 70", 210.0).await;

        let csv = format!(
            "{HEADER}\n\
            P100,White MB 75,Masterbatch,White,225.0,Revised\n\
            P100,White MB 75,Masterbatch,White,expensive,Broken\n"
        );
        let err = import(&conn, csv.as_bytes()).await.unwrap_err();
        assert!(matches!(err, AppError::Mapping(_)));

        let stored = repository::Entity::find_by_id("P100")
            .one(&conn)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.product_name, "White MB 70");
        assert_eq!(stored.product_sp, 210.0);
    }
}

use std::collections::HashSet;

use contracts::domain::a001_raw_material::RawMaterialPriceUpdate;
use contracts::domain::common::ImportResult;
use sea_orm::{DatabaseConnection, TransactionTrait};

use super::repository;
use crate::shared::error::AppError;
use crate::shared::tabular::Table;

const COL_ID: &str = "rawmaterialid";
const COL_PRICE: &str = "rawmaterialprice";

/// Parse an uploaded price list and apply it in one transaction.
pub async fn import(db: &DatabaseConnection, bytes: &[u8]) -> Result<ImportResult, AppError> {
    let table = Table::parse_csv(bytes)?;
    let updates = map_rows(&table)?;
    apply(db, updates).await
}

/// Map parsed rows into price-update parameter sets.
///
/// The upload must carry `rawmaterialid` and `rawmaterialprice` columns; any
/// other columns (the name column in particular) are ignored.
pub fn map_rows(table: &Table) -> Result<Vec<RawMaterialPriceUpdate>, AppError> {
    let id_col = table.require_column(COL_ID)?;
    let price_col = table.require_column(COL_PRICE)?;

    let mut updates = Vec::with_capacity(table.records().len());
    for (idx, record) in table.records().iter().enumerate() {
        // Header is line 1.
        let line = idx + 2;

        let id = record[id_col].trim();
        if id.is_empty() {
            return Err(AppError::Mapping(format!("line {line}: empty {COL_ID}")));
        }

        let price_raw = record[price_col].trim().replace(',', ".");
        let price: f64 = price_raw.parse().map_err(|_| {
            AppError::Mapping(format!(
                "line {line}: invalid {COL_PRICE} '{}'",
                record[price_col]
            ))
        })?;

        updates.push(RawMaterialPriceUpdate {
            id: id.to_string(),
            price,
        });
    }
    Ok(updates)
}

/// Execute one UPDATE per parameter set, in file order, inside a single
/// transaction. Any statement failure aborts the rest and rolls the whole
/// batch back (the transaction rolls back on drop); nothing is ever
/// partially committed.
pub async fn apply(
    db: &DatabaseConnection,
    updates: Vec<RawMaterialPriceUpdate>,
) -> Result<ImportResult, AppError> {
    let submitted_count = updates.len();
    let txn = db.begin().await.map_err(AppError::Update)?;

    let mut not_found_ids: Vec<String> = Vec::new();
    let mut not_found_seen: HashSet<String> = HashSet::new();

    for update in &updates {
        let affected = repository::update_price(&txn, &update.id, update.price)
            .await
            .map_err(AppError::Update)?;
        if affected == 0 {
            tracing::warn!("no raw material matches id '{}'", update.id);
            if not_found_seen.insert(update.id.clone()) {
                not_found_ids.push(update.id.clone());
            }
        }
    }

    txn.commit().await.map_err(AppError::Update)?;

    Ok(ImportResult {
        submitted_count,
        not_found_ids,
    })
}

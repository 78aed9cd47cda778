use contracts::domain::a003_client::ClientDto;
use sea_orm::{DatabaseConnection, TransactionTrait};

use super::repository;
use crate::shared::error::AppError;

/// Validate and persist one client registration.
pub async fn register(db: &DatabaseConnection, dto: ClientDto) -> Result<(), AppError> {
    let client = dto.into_client().map_err(AppError::Validation)?;

    let txn = db.begin().await.map_err(AppError::Persistence)?;
    repository::insert(&txn, &client)
        .await
        .map_err(AppError::Persistence)?;
    txn.commit().await.map_err(AppError::Persistence)?;

    Ok(())
}

use contracts::domain::a001_raw_material::RawMaterial;
use sea_orm::DatabaseConnection;

use super::repository;

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<RawMaterial>> {
    repository::list_all(db).await
}

use sea_orm::DatabaseConnection;

use super::repository::{self, ProductRecord};

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<ProductRecord>> {
    repository::list_all(db).await
}

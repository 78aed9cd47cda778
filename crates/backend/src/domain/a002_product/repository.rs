use contracts::domain::a002_product::ProductUpdate;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ConnectionTrait, DbErr, FromQueryResult, QuerySelect};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: String,
    pub product_name: String,
    pub product_category: String,
    pub product_subcat: String,
    pub product_sp: f64,
    pub product_description: String,
    pub product_creationdate: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fixed projection served by the product list endpoint; the creation date
/// column is deliberately not part of it.
#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_id: String,
    pub product_name: String,
    pub product_category: String,
    pub product_subcat: String,
    pub product_sp: f64,
    pub product_description: String,
}

pub async fn list_all<C: ConnectionTrait>(conn: &C) -> anyhow::Result<Vec<ProductRecord>> {
    let items = Entity::find()
        .select_only()
        .column(Column::ProductId)
        .column(Column::ProductName)
        .column(Column::ProductCategory)
        .column(Column::ProductSubcat)
        .column(Column::ProductSp)
        .column(Column::ProductDescription)
        .into_model::<ProductRecord>()
        .all(conn)
        .await?;
    Ok(items)
}

/// One parameterized UPDATE for a single product id.
///
/// Every mutable column is rewritten from the parameter set; the creation
/// date is stored as RFC 3339 text.
pub async fn apply_update<C: ConnectionTrait>(
    conn: &C,
    update: &ProductUpdate,
) -> Result<u64, DbErr> {
    let result = Entity::update_many()
        .col_expr(Column::ProductName, Expr::value(update.product_name.clone()))
        .col_expr(
            Column::ProductCategory,
            Expr::value(update.product_category.clone()),
        )
        .col_expr(
            Column::ProductSubcat,
            Expr::value(update.product_subcat.clone()),
        )
        .col_expr(Column::ProductSp, Expr::value(update.product_sp))
        .col_expr(
            Column::ProductDescription,
            Expr::value(update.product_description.clone()),
        )
        .col_expr(
            Column::ProductCreationdate,
            Expr::value(update.product_creationdate.to_rfc3339()),
        )
        .filter(Column::ProductId.eq(update.product_id.as_str()))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

use contracts::domain::a001_raw_material::RawMaterial;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ConnectionTrait, DbErr};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "raw_material")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub rawmaterialid: String,
    pub rawmaterialname: String,
    pub rawmaterialprice: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for RawMaterial {
    fn from(m: Model) -> Self {
        RawMaterial {
            rawmaterialid: m.rawmaterialid,
            rawmaterialname: m.rawmaterialname,
            rawmaterialprice: m.rawmaterialprice,
        }
    }
}

pub async fn list_all<C: ConnectionTrait>(conn: &C) -> anyhow::Result<Vec<RawMaterial>> {
    let items = Entity::find()
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// One parameterized price UPDATE for a single raw material id.
///
/// Returns the affected-row count; an id that matches nothing is the
/// caller's business, not an error.
pub async fn update_price<C: ConnectionTrait>(
    conn: &C,
    id: &str,
    price: f64,
) -> Result<u64, DbErr> {
    let result = Entity::update_many()
        .col_expr(Column::Rawmaterialprice, Expr::value(price))
        .filter(Column::Rawmaterialid.eq(id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db;
    use sea_orm::Set;

    async fn seed<C: ConnectionTrait>(conn: &C, id: &str, name: &str, price: f64) {
        ActiveModel {
            rawmaterialid: Set(id.to_string()),
            rawmaterialname: Set(name.to_string()),
            rawmaterialprice: Set(price),
        }
        .insert(conn)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_update_price_touches_only_the_matching_row() {
        let conn = db::connect_in_memory().await;
        seed(&conn, "RM1", "White pigment", 10.0).await;
        seed(&conn, "RM2", "Carrier resin", 4.0).await;

        let affected = update_price(&conn, "RM1", 12.5).await.unwrap();
        assert_eq!(affected, 1);

        let mut items = list_all(&conn).await.unwrap();
        items.sort_by(|a, b| a.rawmaterialid.cmp(&b.rawmaterialid));
        assert_eq!(items[0].rawmaterialprice, 12.5);
        assert_eq!(items[1].rawmaterialprice, 4.0);
    }

    #[tokio::test]
    async fn test_update_price_reports_zero_for_unknown_id() {
        let conn = db::connect_in_memory().await;
        seed(&conn, "RM1", "White pigment", 10.0).await;

        let affected = update_price(&conn, "NOPE", 99.0).await.unwrap();
        assert_eq!(affected, 0);
    }
}

use contracts::domain::a003_client::Client;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client_detail")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub client_id: String,
    pub client_name: String,
    pub client_detail: String,
    pub interested_product: String,
    pub creation_date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert one registration row. Each field binds to its own column; a
/// duplicate id surfaces as the database's unique-constraint error.
pub async fn insert<C: ConnectionTrait>(conn: &C, client: &Client) -> Result<(), DbErr> {
    let active = ActiveModel {
        client_id: Set(client.id.clone()),
        client_name: Set(client.name.clone()),
        client_detail: Set(client.details.clone()),
        interested_product: Set(client.interested_product.clone()),
        creation_date: Set(client.date_created.clone()),
    };
    active.insert(conn).await?;
    Ok(())
}

pub async fn get_by_id<C: ConnectionTrait>(conn: &C, id: &str) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(conn).await
}

use sea_orm::{ConnectionTrait, DbErr, FromQueryResult, Statement};
use serde::{Deserialize, Serialize};

/// One bill-of-materials line: a raw material used by the product's formula.
#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize, Deserialize)]
pub struct CompositionLine {
    pub product_name: String,
    pub rawmaterialid: String,
    pub rawmaterialname: String,
    pub rawmaterialprice: f64,
    pub qtybyformula: f64,
}

const COMPOSITION_SQL: &str = r#"
    SELECT pt.product_name, rmmt.rawmaterialid, rm.rawmaterialname, rm.rawmaterialprice, rmmt.qtybyformula
    FROM productrawmaterialmapping rmmt
    JOIN raw_material rm ON rmmt.rawmaterialid = rm.rawmaterialid
    JOIN product pt ON rmmt.product_id = pt.product_id
    WHERE pt.product_id = ?
"#;

/// Bill-of-materials lookup for one product.
///
/// Product ids are stored upper-case, so the incoming id is normalized
/// before the join. A product without mappings and an unknown product both
/// come back as an empty list.
pub async fn composition<C: ConnectionTrait>(
    conn: &C,
    product_id: &str,
) -> Result<Vec<CompositionLine>, DbErr> {
    let stmt = Statement::from_sql_and_values(
        conn.get_database_backend(),
        COMPOSITION_SQL,
        [product_id.to_uppercase().into()],
    );
    CompositionLine::find_by_statement(stmt).all(conn).await
}

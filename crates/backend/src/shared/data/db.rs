use std::path::Path;

use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

use crate::shared::error::AppError;

/// Open (creating if necessary) the SQLite database at `db_file`.
pub async fn connect(db_file: &Path) -> Result<DatabaseConnection, AppError> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| AppError::Connection(sea_orm::DbErr::Custom(e.to_string())))?;
    }

    // Normalize path separators and ensure proper URL form on Windows
    let normalized = db_file.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    Database::connect(&db_url).await.map_err(AppError::Connection)
}

/// Create the tables this service touches when they do not exist yet.
///
/// The schema is owned by the wider installation; this bootstrap only covers
/// a fresh development database and changes nothing on an existing one.
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    create_table_if_missing(
        conn,
        "raw_material",
        r#"
        CREATE TABLE raw_material (
            rawmaterialid TEXT PRIMARY KEY NOT NULL,
            rawmaterialname TEXT NOT NULL DEFAULT '',
            rawmaterialprice REAL NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    create_table_if_missing(
        conn,
        "product",
        r#"
        CREATE TABLE product (
            product_id TEXT PRIMARY KEY NOT NULL,
            product_name TEXT NOT NULL DEFAULT '',
            product_category TEXT NOT NULL DEFAULT '',
            product_subcat TEXT NOT NULL DEFAULT '',
            product_sp REAL NOT NULL DEFAULT 0,
            product_description TEXT NOT NULL DEFAULT '',
            product_creationdate TEXT
        );
    "#,
    )
    .await?;

    create_table_if_missing(
        conn,
        "productrawmaterialmapping",
        r#"
        CREATE TABLE productrawmaterialmapping (
            product_id TEXT NOT NULL,
            rawmaterialid TEXT NOT NULL,
            qtybyformula REAL NOT NULL DEFAULT 0,
            PRIMARY KEY (product_id, rawmaterialid)
        );
    "#,
    )
    .await?;

    create_table_if_missing(
        conn,
        "client_detail",
        r#"
        CREATE TABLE client_detail (
            client_id TEXT PRIMARY KEY NOT NULL,
            client_name TEXT NOT NULL DEFAULT '',
            client_detail TEXT NOT NULL DEFAULT '',
            interested_product TEXT NOT NULL DEFAULT '',
            creation_date TEXT NOT NULL DEFAULT ''
        );
    "#,
    )
    .await?;

    Ok(())
}

async fn create_table_if_missing(
    conn: &DatabaseConnection,
    name: &str,
    create_sql: &str,
) -> anyhow::Result<()> {
    let check = Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "SELECT name FROM sqlite_master WHERE type='table' AND name = ?",
        [name.into()],
    );
    if conn.query_all(check).await?.is_empty() {
        tracing::info!("Creating {} table", name);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_sql.to_string(),
        ))
        .await?;
    }
    Ok(())
}

/// In-memory database with the production schema, for tests.
///
/// A single pooled connection keeps every query on the same memory database.
#[cfg(test)]
pub async fn connect_in_memory() -> DatabaseConnection {
    let mut options = sea_orm::ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1).sqlx_logging(false);
    let conn = Database::connect(options)
        .await
        .expect("in-memory sqlite should connect");
    bootstrap_schema(&conn)
        .await
        .expect("schema bootstrap should succeed");
    conn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let conn = connect_in_memory().await;
        // Second run must see every table and create nothing.
        bootstrap_schema(&conn).await.unwrap();

        let tables = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name".to_string(),
            ))
            .await
            .unwrap();
        let names: Vec<String> = tables
            .iter()
            .map(|row| row.try_get::<String>("", "name").unwrap())
            .collect();
        for expected in [
            "client_detail",
            "product",
            "productrawmaterialmapping",
            "raw_material",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
    }
}

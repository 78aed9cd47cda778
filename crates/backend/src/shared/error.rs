use thiserror::Error;

/// Error taxonomy shared by every endpoint.
///
/// Handlers decide the wire shape: the list/bulk-update endpoints serialize
/// the `Display` text into an `error` body, the client and composition
/// endpoints log it and answer with a fixed message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("database connection failed: {0}")]
    Connection(#[source] sea_orm::DbErr),

    #[error("failed to parse upload: {0}")]
    Parse(String),

    #[error("row does not fit the target schema: {0}")]
    Mapping(String),

    #[error("bulk update failed: {0}")]
    Update(#[source] sea_orm::DbErr),

    #[error("{0}")]
    Validation(String),

    #[error("failed to persist record: {0}")]
    Persistence(#[source] sea_orm::DbErr),
}

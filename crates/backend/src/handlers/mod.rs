use axum::extract::Multipart;

use crate::shared::error::AppError;

pub mod a001_raw_material;
pub mod a002_product;
pub mod a003_client;
pub mod p900_product_composition;

/// Pull the uploaded bytes out of the request's `file` multipart field.
pub(crate) async fn read_file_field(multipart: &mut Multipart) -> Result<Vec<u8>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Parse(format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Parse(format!("failed to read uploaded file: {e}")))?;
            return Ok(bytes.to_vec());
        }
    }
    Err(AppError::Parse("multipart field 'file' is missing".into()))
}

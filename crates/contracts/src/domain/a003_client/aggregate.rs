use serde::{Deserialize, Serialize};

/// Registration payload exactly as the frontend sends it.
///
/// Every field is required; they are `Option` so that an absent key is
/// reported as a named validation failure instead of a deserialization
/// rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientDto {
    pub id: Option<String>,
    pub name: Option<String>,
    pub details: Option<String>,
    #[serde(rename = "interestedProduct")]
    pub interested_product: Option<String>,
    #[serde(rename = "dateCreated")]
    pub date_created: Option<String>,
}

/// A validated registration, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub details: String,
    pub interested_product: String,
    pub date_created: String,
}

impl ClientDto {
    /// Checks that every required field is present and non-blank.
    pub fn into_client(self) -> Result<Client, String> {
        fn required(value: Option<String>, field: &str) -> Result<String, String> {
            match value {
                Some(v) if !v.trim().is_empty() => Ok(v),
                _ => Err(format!("missing required field '{field}'")),
            }
        }

        Ok(Client {
            id: required(self.id, "id")?,
            name: required(self.name, "name")?,
            details: required(self.details, "details")?,
            interested_product: required(self.interested_product, "interestedProduct")?,
            date_created: required(self.date_created, "dateCreated")?,
        })
    }
}

//! Founder entity model and DTOs.

use clientele_core::types::{DbId, TaxId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A founder row from the `founders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Founder {
    pub id: DbId,
    pub tax_id: TaxId,
    pub full_name: String,
    /// `None` while the founder is free.
    pub client_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an unlinked founder.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFounder {
    #[validate(range(min = 1_i64, max = 999_999_999_999_i64))]
    pub tax_id: TaxId,
    #[validate(length(min = 1, max = 256))]
    pub full_name: String,
}

/// DTO for updating a founder.
///
/// `tax_id` and `full_name` are always applied. A present `client_id` moves
/// the founder to that client; an absent one leaves the link as is.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFounder {
    #[validate(range(min = 1_i64, max = 999_999_999_999_i64))]
    pub tax_id: TaxId,
    #[validate(length(min = 1, max = 256))]
    pub full_name: String,
    #[serde(default)]
    pub client_id: Option<DbId>,
}

/// DTO for creating a founder already linked to a client.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFounderWithClient {
    #[validate(range(min = 1_i64, max = 999_999_999_999_i64))]
    pub tax_id: TaxId,
    #[validate(length(min = 1, max = 256))]
    pub full_name: String,
    pub client_id: DbId,
}

impl CreateFounderWithClient {
    /// The founder half of the request.
    pub fn founder(&self) -> CreateFounder {
        CreateFounder {
            tax_id: self.tax_id,
            full_name: self.full_name.clone(),
        }
    }
}

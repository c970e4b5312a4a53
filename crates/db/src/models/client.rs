//! Client entity model and DTOs.

use clientele_core::client_type::ClientType;
use clientele_core::types::{DbId, TaxId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::founder::Founder;

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: DbId,
    pub tax_id: TaxId,
    pub name: String,
    /// Stored as SMALLINT; see [`ClientType`].
    #[sqlx(try_from = "i16")]
    #[serde(rename = "type")]
    pub client_type: ClientType,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A client together with the founders currently linked to it.
#[derive(Debug, Clone, Serialize)]
pub struct ClientWithFounders {
    #[serde(flatten)]
    pub client: Client,
    /// Ordered by founder id ascending.
    pub founders: Vec<Founder>,
}

/// DTO for creating a new client.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClient {
    #[validate(range(min = 1_i64, max = 999_999_999_999_i64))]
    pub tax_id: TaxId,
    #[validate(length(min = 1, max = 256))]
    pub name: String,
    #[serde(rename = "type")]
    pub client_type: ClientType,
}

/// DTO for updating a client. Every field is applied.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClient {
    #[validate(range(min = 1_i64, max = 999_999_999_999_i64))]
    pub tax_id: TaxId,
    #[validate(length(min = 1, max = 256))]
    pub name: String,
    #[serde(rename = "type")]
    pub client_type: ClientType,
}

/// DTO for creating a client around an existing, unlinked founder.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientWithFounder {
    #[validate(range(min = 1_i64, max = 999_999_999_999_i64))]
    pub tax_id: TaxId,
    #[validate(length(min = 1, max = 256))]
    pub name: String,
    #[serde(rename = "type")]
    pub client_type: ClientType,
    pub founder_id: DbId,
}

impl CreateClientWithFounder {
    /// The client half of the request.
    pub fn client(&self) -> CreateClient {
        CreateClient {
            tax_id: self.tax_id,
            name: self.name.clone(),
            client_type: self.client_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, tax_id: TaxId) -> CreateClient {
        CreateClient {
            tax_id,
            name: name.to_string(),
            client_type: ClientType::LegalEntity,
        }
    }

    #[test]
    fn accepts_well_formed_client() {
        assert!(create("Acme LLC", 112_233_445_566).validate().is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        let errors = create("", 1).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn rejects_name_over_256_chars() {
        let long = "x".repeat(257);
        assert!(create(&long, 1).validate().is_err());
        assert!(create(&"x".repeat(256), 1).validate().is_ok());
    }

    #[test]
    fn rejects_tax_id_out_of_range() {
        assert!(create("Acme", 0).validate().is_err());
        assert!(create("Acme", 1_000_000_000_000).validate().is_err());
        assert!(create("Acme", 999_999_999_999).validate().is_ok());
    }

    #[test]
    fn deserializes_camel_case_body() {
        let dto: CreateClientWithFounder = serde_json::from_value(serde_json::json!({
            "taxId": 555,
            "name": "New",
            "type": "SoleProprietor",
            "founderId": 3,
        }))
        .unwrap();
        assert_eq!(dto.founder_id, 3);
        assert_eq!(dto.client().client_type, ClientType::IndividualEntrepreneur);
    }

    #[test]
    fn serializes_type_field_and_flattens_founders() {
        let now = chrono::Utc::now();
        let client = ClientWithFounders {
            client: Client {
                id: 1,
                tax_id: 42,
                name: "Acme".into(),
                client_type: ClientType::LegalEntity,
                created_at: now,
                updated_at: now,
            },
            founders: Vec::new(),
        };
        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json["type"], "LegalEntity");
        assert_eq!(json["taxId"], 42);
        assert!(json["founders"].as_array().unwrap().is_empty());
        assert!(json.get("createdAt").is_some());
    }
}

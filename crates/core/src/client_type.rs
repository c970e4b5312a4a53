//! Client classification.
//!
//! Stored as SMALLINT in `clients.client_type`; the discriminants match the
//! CHECK constraint in the migration.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Database representation of [`ClientType`].
pub type ClientTypeId = i16;

/// Legal classification of a client.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientType {
    /// Sole proprietor. Capped at one linked founder.
    #[serde(alias = "SoleProprietor")]
    IndividualEntrepreneur = 1,
    LegalEntity = 2,
}

impl ClientType {
    /// Return the database id.
    pub fn id(self) -> ClientTypeId {
        self as ClientTypeId
    }

    pub fn is_sole_proprietor(self) -> bool {
        matches!(self, ClientType::IndividualEntrepreneur)
    }
}

impl From<ClientType> for ClientTypeId {
    fn from(value: ClientType) -> Self {
        value as ClientTypeId
    }
}

impl TryFrom<ClientTypeId> for ClientType {
    type Error = CoreError;

    fn try_from(value: ClientTypeId) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ClientType::IndividualEntrepreneur),
            2 => Ok(ClientType::LegalEntity),
            other => Err(CoreError::Internal(format!(
                "Unknown client type id {other}"
            ))),
        }
    }
}

//! Demo data for local development.

use clientele_core::client_type::ClientType;

use crate::models::client::CreateClient;
use crate::models::founder::CreateFounder;
use crate::repositories::{ClientRepo, FounderRepo};
use crate::DbPool;

/// Seed one sole-proprietor client without founders and one legal entity
/// with two founders.
///
/// Does nothing when any client already exists. Returns `true` if rows were
/// inserted.
pub async fn seed_demo_data(pool: &DbPool) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    if ClientRepo::count(&mut *tx).await? > 0 {
        tracing::debug!("Clients present, skipping demo seed");
        return Ok(false);
    }

    ClientRepo::create(
        &mut *tx,
        &CreateClient {
            tax_id: 123_456_789_012,
            name: "IE Ivanov Ivan".to_string(),
            client_type: ClientType::IndividualEntrepreneur,
        },
    )
    .await?;

    let legal_entity = ClientRepo::create(
        &mut *tx,
        &CreateClient {
            tax_id: 112_233_445_566,
            name: "Romashka LLC".to_string(),
            client_type: ClientType::LegalEntity,
        },
    )
    .await?;

    for (tax_id, full_name) in [
        (998_877_665_544, "Petrov Petr Petrovich"),
        (776_655_443_322, "Sidorov Sidor Sidorovich"),
    ] {
        let input = CreateFounder {
            tax_id,
            full_name: full_name.to_string(),
        };
        FounderRepo::create(&mut *tx, &input, Some(legal_entity.id)).await?;
    }

    tx.commit().await?;
    tracing::info!(client_id = legal_entity.id, "Demo data seeded");
    Ok(true)
}

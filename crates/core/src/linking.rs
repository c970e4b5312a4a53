//! Rules governing the link between founders and clients.
//!
//! A founder points at no more than one client through `founders.client_id`.
//! A sole-proprietor client holds at most one founder. Handlers evaluate
//! these rules inside the transaction that performs the write, after the
//! affected rows have been locked.

use crate::client_type::ClientType;
use crate::error::CoreError;
use crate::types::DbId;

pub const NO_FREE_FOUNDER: &str = "no free founder available";
pub const FOUNDER_ALREADY_LINKED: &str = "founder already linked to a client";
pub const SOLE_PROPRIETOR_SINGLE_FOUNDER: &str = "sole proprietor may have only one founder";
pub const TARGET_CLIENT_NOT_FOUND: &str = "target client not found";

/// Creating a client requires a free founder to hand over to it.
pub fn require_free_founder<T>(candidate: Option<T>) -> Result<T, CoreError> {
    candidate.ok_or_else(|| CoreError::Rule(NO_FREE_FOUNDER.to_string()))
}

/// A founder may only be attached to a new client while unlinked.
pub fn ensure_founder_free(current_client_id: Option<DbId>) -> Result<(), CoreError> {
    match current_client_id {
        Some(_) => Err(CoreError::Rule(FOUNDER_ALREADY_LINKED.to_string())),
        None => Ok(()),
    }
}

/// Reject a new founder for a sole proprietor that already has one.
///
/// Used when creating a founder directly under a client, where there is no
/// displacement.
pub fn ensure_can_accept_founder(
    client_type: ClientType,
    linked_founders: i64,
) -> Result<(), CoreError> {
    if should_displace(client_type, linked_founders) {
        return Err(CoreError::Rule(SOLE_PROPRIETOR_SINGLE_FOUNDER.to_string()));
    }
    Ok(())
}

/// Whether relinking a founder onto this client must first unlink the
/// client's existing founder.
pub fn should_displace(client_type: ClientType, linked_founders: i64) -> bool {
    client_type.is_sole_proprietor() && linked_founders > 0
}

/// Resolve the client a founder update should move the founder to.
///
/// Returns `None` when no relink is needed: either no target was requested
/// or the founder already points at it. An absent target never unlinks.
pub fn relink_target(current: Option<DbId>, requested: Option<DbId>) -> Option<DbId> {
    match requested {
        Some(target) if current != Some(target) => Some(target),
        _ => None,
    }
}

/// Founders to unlink when a client's type changes.
///
/// The founder with the lowest id stays; every other one is released. When
/// the type is unchanged nothing is released.
pub fn founders_released_on_type_change(
    previous: ClientType,
    next: ClientType,
    linked_founder_ids: &[DbId],
) -> Vec<DbId> {
    if previous == next {
        return Vec::new();
    }
    let Some(keep) = linked_founder_ids.iter().min().copied() else {
        return Vec::new();
    };
    linked_founder_ids
        .iter()
        .copied()
        .filter(|id| *id != keep)
        .collect()
}

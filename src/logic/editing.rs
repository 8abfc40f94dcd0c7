//! Photo and details edits of the current card.
//!
//! Edits never fail: with nothing editable on the board they leave the session as it was.
//! An effective edit also yields the record to hand to the edit store.

use crate::models::{AuctionSession, DetailsForm, EditRecord, Entity, EntityId, PhotoSource};

/// Id of the current card if it may be edited (players only, hidden ones once revealed).
fn editable_id(session: &AuctionSession) -> Option<EntityId> {
    match &session.current {
        Some(entity @ Entity::Regular(_)) => Some(entity.id()),
        Some(entity @ Entity::Hidden(_)) if !session.is_masked(entity) => Some(entity.id()),
        _ => None,
    }
}

/// Replace the current player's portrait.
pub fn edit_photo(
    session: &AuctionSession,
    source: PhotoSource,
) -> (AuctionSession, Option<EditRecord>) {
    let Some(id) = editable_id(session) else {
        log::debug!("Auction {}: no editable card for photo edit", session.id);
        return (session.clone(), None);
    };
    let Some(portrait) = source.into_portrait() else {
        return (session.clone(), None);
    };
    let mut next = session.clone();
    next.portraits.insert(id, portrait.clone());
    (next, Some(EditRecord::portrait(id, portrait)))
}

/// Overlay typed details on the current player.
pub fn edit_details(
    session: &AuctionSession,
    form: &DetailsForm,
) -> (AuctionSession, Option<EditRecord>) {
    let Some(id) = editable_id(session) else {
        log::debug!("Auction {}: no editable card for details edit", session.id);
        return (session.clone(), None);
    };
    let overlay = form.to_overlay();
    if overlay.is_empty() {
        return (session.clone(), None);
    }
    let mut next = session.clone();
    let mut merged = next.details.get(&id).cloned().unwrap_or_default();
    merged.merge(&overlay);
    next.details.insert(id, merged);
    if let Some(player) = next.current.as_mut().and_then(Entity::player_mut) {
        overlay.apply(player);
    }
    (next, Some(EditRecord::details(id, overlay)))
}

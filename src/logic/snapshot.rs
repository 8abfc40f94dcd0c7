//! Read-only view of a session for the presentation layer.

use crate::logic::visibility::{current_view, CardView};
use crate::models::{AuctionId, AuctionSession, EntityId, Phase, RosterMode, Round};
use serde::Serialize;

/// What the board renders. The raw current card is never included, only its projection.
#[derive(Clone, Debug, Serialize)]
pub struct AuctionView {
    pub id: AuctionId,
    pub phase: Phase,
    pub mode: RosterMode,
    pub round: Option<Round>,
    /// Ascending.
    pub used_numbers: Vec<u32>,
    pub last_number: Option<u32>,
    /// Number being revealed, while `phase` is `revealing`.
    pub pending_number: Option<u32>,
    pub current: Option<CardView>,
    pub can_reveal_identity: bool,
    pub can_edit: bool,
    pub revealed_hidden: Vec<EntityId>,
    pub roster_length: usize,
    pub number_range: u32,
    pub remaining: u32,
    pub complete: bool,
}

pub fn snapshot(session: &AuctionSession) -> AuctionView {
    let current = current_view(session);
    AuctionView {
        id: session.id,
        phase: session.phase,
        mode: session.mode,
        round: session.round,
        used_numbers: session.used_numbers.iter().copied().collect(),
        last_number: session.last_number(),
        pending_number: session.pending_number,
        can_reveal_identity: current.as_ref().is_some_and(CardView::can_reveal),
        can_edit: current.as_ref().is_some_and(CardView::can_edit),
        current,
        revealed_hidden: session.revealed_hidden.iter().copied().collect(),
        roster_length: session.roster_length(),
        number_range: session.number_range(),
        remaining: session.remaining(),
        complete: session.is_complete(),
    }
}

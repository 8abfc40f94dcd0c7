//! AuctionSession (one user's draw state) and AuctionError.

use crate::models::edits::{DetailsOverlay, EditRecord};
use crate::models::entity::{Entity, EntityId};
use crate::models::roster::{Roster, RosterMode, Round};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors returned synchronously by session actions. None of them change state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuctionError {
    /// Number is not an integer in `1..=max`.
    OutOfRange { max: u32 },
    /// Number was drawn earlier in this session.
    AlreadyUsed(u32),
    /// A draw is still being revealed.
    RevealInProgress,
    /// Every number has been drawn.
    Complete,
    /// Session is not in a phase that allows this action.
    InvalidState,
}

impl std::fmt::Display for AuctionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuctionError::OutOfRange { max } => {
                write!(f, "Please enter a valid number between 1 and {}", max)
            }
            AuctionError::AlreadyUsed(n) => write!(f, "Number {} has already been selected!", n),
            AuctionError::RevealInProgress => write!(f, "A player is still being revealed"),
            AuctionError::Complete => write!(f, "Auction complete: every number has been drawn"),
            AuctionError::InvalidState => write!(f, "Invalid state for this action"),
        }
    }
}

impl std::error::Error for AuctionError {}

/// Unique identifier for an auction session.
pub type AuctionId = Uuid;

/// Where the user is in the auction.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Landing screen.
    #[default]
    Intro,
    /// Round mode only: waiting for a round to be picked.
    RoundSelection,
    /// No draw pending and nothing shown.
    Idle,
    /// Number input is open.
    AwaitingNumber,
    /// A valid number was accepted; the card is about to be shown.
    Revealing,
    /// A card is shown.
    Revealed,
}

/// Draw state of one auction. Actions in `logic` return a new snapshot; collections are
/// persistent so cloning is cheap.
#[derive(Clone, Debug)]
pub struct AuctionSession {
    pub id: AuctionId,
    pub mode: RosterMode,
    pub phase: Phase,
    /// Chosen round (round mode).
    pub round: Option<Round>,
    /// `None` in round mode until a round is chosen.
    pub roster: Option<Roster>,
    /// Number accepted by the last submit, while `Revealing`.
    pub pending_number: Option<u32>,
    pub used_numbers: im::OrdSet<u32>,
    /// Numbers in the order they were drawn.
    pub draws: im::Vector<u32>,
    /// Most recently revealed card, edit overlays applied.
    pub current: Option<Entity>,
    pub revealed_hidden: im::OrdSet<EntityId>,
    /// Portrait overrides, consulted before the roster portrait.
    pub portraits: im::OrdMap<EntityId, String>,
    pub details: im::OrdMap<EntityId, DetailsOverlay>,
}

impl AuctionSession {
    /// Create a session at the intro screen. Flat mode loads its roster immediately.
    pub fn new(mode: RosterMode) -> Self {
        let roster = match mode {
            RosterMode::Flat => Some(crate::logic::flat_roster()),
            RosterMode::Rounds => None,
        };
        Self {
            id: Uuid::new_v4(),
            mode,
            phase: Phase::Intro,
            round: None,
            roster,
            pending_number: None,
            used_numbers: im::OrdSet::new(),
            draws: im::Vector::new(),
            current: None,
            revealed_hidden: im::OrdSet::new(),
            portraits: im::OrdMap::new(),
            details: im::OrdMap::new(),
        }
    }

    /// Seed edit overlays (e.g. from a store loaded at session start).
    pub fn with_edits(mut self, records: impl IntoIterator<Item = EditRecord>) -> Self {
        for record in records {
            if let Some(portrait) = record.portrait {
                self.portraits.insert(record.entity_id, portrait);
            }
            if !record.details.is_empty() {
                let mut overlay = self
                    .details
                    .get(&record.entity_id)
                    .cloned()
                    .unwrap_or_default();
                overlay.merge(&record.details);
                self.details.insert(record.entity_id, overlay);
            }
        }
        self
    }

    pub fn roster_length(&self) -> usize {
        self.roster.as_ref().map_or(0, Roster::len)
    }

    /// Highest number that may be drawn (0 before a roster is loaded).
    pub fn number_range(&self) -> u32 {
        self.roster.as_ref().map_or(0, Roster::number_range)
    }

    pub fn remaining(&self) -> u32 {
        self.number_range().saturating_sub(self.used_numbers.len() as u32)
    }

    /// Every number has been drawn.
    pub fn is_complete(&self) -> bool {
        self.roster.is_some() && self.used_numbers.len() as u32 == self.number_range()
    }

    pub fn last_number(&self) -> Option<u32> {
        self.draws.last().copied()
    }

    /// Hidden card whose identity has not been revealed yet.
    pub fn is_masked(&self, entity: &Entity) -> bool {
        entity.is_hidden() && !self.revealed_hidden.contains(&entity.id())
    }

    /// Roster card with this session's details overlay applied.
    pub fn with_overlay(&self, entity: &Entity) -> Entity {
        let mut entity = entity.clone();
        let id = entity.id();
        if let (Some(overlay), Some(player)) = (self.details.get(&id), entity.player_mut()) {
            overlay.apply(player);
        }
        entity
    }

    /// Portrait to display: override first, then the roster's.
    pub fn portrait_for(&self, entity: &Entity) -> Option<String> {
        self.portraits
            .get(&entity.id())
            .cloned()
            .or_else(|| entity.player().and_then(|p| p.portrait.clone()))
    }
}

//! Data structures for the mock auction: cards, rosters, edits, session state.

mod edits;
mod entity;
mod roster;
mod session;

pub use edits::{DetailsForm, DetailsOverlay, EditRecord, PhotoSource};
pub use entity::{format_price, Entity, EntityId, Player, Role, StealCard};
pub use roster::{Mapping, Roster, RosterMode, Round, FLAT_NUMBER_RANGE};
pub use session::{AuctionError, AuctionId, AuctionSession, Phase};

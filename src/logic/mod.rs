//! Auction logic: roster provider, reveal controller, visibility, edits, extras.

mod editing;
mod export;
mod lucky;
mod reveal;
mod roster;
mod snapshot;
mod visibility;

pub use editing::{edit_details, edit_photo};
pub use export::draw_log_csv;
pub use lucky::suggest_number;
pub use reveal::{
    begin_selection, cancel_selection, draw_number, enter_auction, finish_reveal, parse_number,
    reset_auction, reveal_identity, select_round, submit_number, submit_text,
};
pub use roster::{flat_roster, round_roster, roster_summary, RosterSummary, CATALOG_SIZE};
pub use snapshot::{snapshot, AuctionView};
pub use visibility::{current_view, project, CardView, MASK, PLACEHOLDER_PORTRAIT};

//! Cricket mock auction web app: library with models, reveal logic and edit persistence.

pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use config::Config;
pub use logic::{
    begin_selection, cancel_selection, current_view, draw_log_csv, draw_number, edit_details,
    edit_photo, enter_auction, finish_reveal, flat_roster, parse_number, project, reset_auction,
    reveal_identity, round_roster, roster_summary, select_round, snapshot, submit_number,
    submit_text, suggest_number, AuctionView, CardView, RosterSummary, MASK,
};
pub use models::{
    format_price, AuctionError, AuctionId, AuctionSession, DetailsForm, DetailsOverlay, EditRecord,
    Entity, EntityId, Mapping, Phase, PhotoSource, Player, Role, Roster, RosterMode, Round,
    StealCard, FLAT_NUMBER_RANGE,
};
pub use store::{
    load_or_empty, persist_in_background, EditStore, JsonFileStore, PersistenceError, Unprovisioned,
};

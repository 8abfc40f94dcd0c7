//! What the board may show for the current card.

use crate::models::{format_price, AuctionSession, Entity, Role, StealCard};
use serde::Serialize;

/// Placeholder for every withheld identity field.
pub const MASK: &str = "???";

/// Portrait used when neither an override nor a roster portrait exists.
pub const PLACEHOLDER_PORTRAIT: &str = "/placeholder.svg";

/// Skill slots shown for a masked card.
const MASKED_SKILL_SLOTS: usize = 3;

/// Projection of the current card. Computed on demand, never stored.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardView {
    Steal {
        abilities: Vec<String>,
        power: &'static str,
    },
    /// Hidden player before `reveal_identity`; only the role is real.
    Mystery {
        role: Role,
        name: &'static str,
        country: &'static str,
        age: &'static str,
        price: &'static str,
        batting_style: &'static str,
        bowling_style: &'static str,
        special_skills: Vec<&'static str>,
    },
    Player {
        id: u32,
        name: String,
        country: String,
        /// `None` when the age is unknown (0).
        age: Option<u32>,
        role: Role,
        price: String,
        batting_style: String,
        bowling_style: String,
        special_skills: Vec<String>,
        portrait: String,
        /// Hidden player whose identity has been revealed.
        revealed: bool,
    },
}

impl CardView {
    /// Whether the board should offer "Reveal Player Identity".
    pub fn can_reveal(&self) -> bool {
        matches!(self, CardView::Mystery { .. })
    }

    /// Whether the photo and details editors are available.
    pub fn can_edit(&self) -> bool {
        matches!(self, CardView::Player { .. })
    }
}

/// Project one card under the session's revealed set and portrait overrides.
pub fn project(session: &AuctionSession, entity: &Entity) -> CardView {
    match entity {
        Entity::Steal(card) => CardView::Steal {
            abilities: card.abilities.clone(),
            power: StealCard::POWER,
        },
        Entity::Hidden(player) if session.is_masked(entity) => CardView::Mystery {
            role: player.role,
            name: MASK,
            country: MASK,
            age: MASK,
            price: MASK,
            batting_style: MASK,
            bowling_style: MASK,
            special_skills: vec![MASK; MASKED_SKILL_SLOTS],
        },
        Entity::Regular(player) | Entity::Hidden(player) => CardView::Player {
            id: player.id,
            name: player.name.clone(),
            country: player.country.clone(),
            age: (player.age > 0).then_some(player.age),
            role: player.role,
            price: format_price(player.base_price),
            batting_style: player.batting_style.clone(),
            bowling_style: player.bowling_style.clone(),
            special_skills: player.special_skills.clone(),
            portrait: session
                .portrait_for(entity)
                .unwrap_or_else(|| PLACEHOLDER_PORTRAIT.to_string()),
            revealed: entity.is_hidden(),
        },
    }
}

/// Projection of the session's current card, if any.
pub fn current_view(session: &AuctionSession) -> Option<CardView> {
    session.current.as_ref().map(|e| project(session, e))
}

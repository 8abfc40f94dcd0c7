//! Drawable cards: regular players, hidden players and steal cards.

use serde::{Deserialize, Serialize};

/// Catalog number of a card (1-based, stable across roster modes).
pub type EntityId = u32;

/// Playing role of a cricketer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Batsman,
    Bowler,
    #[serde(rename = "All-rounder")]
    AllRounder,
    #[serde(rename = "Wicket-keeper")]
    WicketKeeper,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Batsman => "Batsman",
            Role::Bowler => "Bowler",
            Role::AllRounder => "All-rounder",
            Role::WicketKeeper => "Wicket-keeper",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A cricketer up for auction.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: EntityId,
    pub name: String,
    pub country: String,
    /// 0 when unknown; not shown.
    pub age: u32,
    pub role: Role,
    /// Rupees. 0 means "priceless".
    pub base_price: u64,
    pub batting_style: String,
    pub bowling_style: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_skills: Vec<String>,
    /// URL or `data:` URL.
    pub portrait: Option<String>,
}

/// Special card that lets its holder take any player from an opponent.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StealCard {
    pub id: EntityId,
    pub abilities: Vec<String>,
}

impl StealCard {
    pub const POWER: &'static str = "STEAL ANY PLAYER";

    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            abilities: vec![
                "Steal Any Player".to_string(),
                "Instant Transfer".to_string(),
                "No Price Limit".to_string(),
            ],
        }
    }
}

/// One card in a roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entity {
    Regular(Player),
    /// Identity withheld until the user reveals it.
    Hidden(Player),
    Steal(StealCard),
}

impl Entity {
    pub fn id(&self) -> EntityId {
        match self {
            Entity::Regular(p) | Entity::Hidden(p) => p.id,
            Entity::Steal(s) => s.id,
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Entity::Hidden(_))
    }

    pub fn is_steal_card(&self) -> bool {
        matches!(self, Entity::Steal(_))
    }

    /// The player behind this card, if any (hidden players included).
    pub fn player(&self) -> Option<&Player> {
        match self {
            Entity::Regular(p) | Entity::Hidden(p) => Some(p),
            Entity::Steal(_) => None,
        }
    }

    pub fn player_mut(&mut self) -> Option<&mut Player> {
        match self {
            Entity::Regular(p) | Entity::Hidden(p) => Some(p),
            Entity::Steal(_) => None,
        }
    }
}

/// Render a base price the way the auction board shows it.
///
/// `0` is "PRICELESS"; from one crore upwards prices are shown in crores, from one lakh in
/// lakhs (one decimal), anything smaller as plain rupees with thousands separators.
pub fn format_price(price: u64) -> String {
    const CRORE: u64 = 10_000_000;
    const LAKH: u64 = 100_000;
    if price == 0 {
        return "PRICELESS".to_string();
    }
    if price >= CRORE {
        return format!("₹{:.1} Cr", price as f64 / CRORE as f64);
    }
    if price >= LAKH {
        return format!("₹{:.1} L", price as f64 / LAKH as f64);
    }
    format!("₹{}", group_thousands(price))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_formats() {
        assert_eq!(format_price(0), "PRICELESS");
        assert_eq!(format_price(20_000_000), "₹2.0 Cr");
        assert_eq!(format_price(15_000_000), "₹1.5 Cr");
        assert_eq!(format_price(7_500_000), "₹75.0 L");
        assert_eq!(format_price(100_000), "₹1.0 L");
        assert_eq!(format_price(99_999), "₹99,999");
        assert_eq!(format_price(950), "₹950");
    }
}

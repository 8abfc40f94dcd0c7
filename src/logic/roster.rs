//! Roster provider: the 91-card catalog and the flat / round rosters built from it.

use crate::models::{Entity, EntityId, Mapping, Player, Role, Roster, Round, StealCard};
use serde::Serialize;

/// Cards in the catalog (players plus steal cards).
pub const CATALOG_SIZE: usize = 91;

/// Catalog positions (0-based) of the steal cards, one per round.
const STEAL_POSITIONS: [usize; 3] = [15, 46, 76];

/// Ids of players whose identity starts hidden.
const HIDDEN_IDS: [EntityId; 4] = [23, 41, 56, 85];

/// Flat-mode stride; coprime with 91, so position remapping is a permutation.
const FLAT_STRIDE: usize = 17;

struct Seed {
    name: &'static str,
    country: &'static str,
    age: u32,
    role: Role,
    base_price: u64,
    batting: &'static str,
    bowling: &'static str,
    skills: &'static [&'static str],
}

const fn seed(
    name: &'static str,
    country: &'static str,
    age: u32,
    role: Role,
    base_price: u64,
    batting: &'static str,
    bowling: &'static str,
    skills: &'static [&'static str],
) -> Seed {
    Seed {
        name,
        country,
        age,
        role,
        base_price,
        batting,
        bowling,
        skills,
    }
}

use crate::models::Role::{AllRounder as AR, Batsman as BAT, Bowler as BOWL, WicketKeeper as WK};

const RH: &str = "Right-handed";
const LH: &str = "Left-handed";
const NONE: &str = "None";

/// Players in catalog order, steal-card positions skipped.
#[rustfmt::skip]
const SEEDS: [Seed; CATALOG_SIZE - STEAL_POSITIONS.len()] = [
    // Round 1
    seed("Virat Kohli", "India", 35, BAT, 20_000_000, RH, "Right-arm medium", &["Chase Master", "Cover Drive"]),
    seed("Rohit Sharma", "India", 37, BAT, 20_000_000, RH, "Right-arm off-break", &["Pull Shot", "Captaincy"]),
    seed("Jasprit Bumrah", "India", 30, BOWL, 20_000_000, RH, "Right-arm fast", &["Yorkers", "Death Overs"]),
    seed("MS Dhoni", "India", 42, WK, 0, RH, "Right-arm medium", &["Finisher", "Lightning Stumping"]),
    seed("Ravindra Jadeja", "India", 35, AR, 20_000_000, LH, "Slow left-arm orthodox", &["Fielding", "Economy"]),
    seed("Hardik Pandya", "India", 30, AR, 15_000_000, RH, "Right-arm fast-medium", &["Power Hitting"]),
    seed("KL Rahul", "India", 32, WK, 15_000_000, RH, NONE, &[]),
    seed("Shubman Gill", "India", 24, BAT, 15_000_000, RH, "Right-arm off-break", &[]),
    seed("Rishabh Pant", "India", 26, WK, 15_000_000, LH, NONE, &["Reverse Sweep"]),
    seed("Suryakumar Yadav", "India", 33, BAT, 15_000_000, RH, "Right-arm off-break", &["360 Degree", "Scoop"]),
    seed("Mohammed Shami", "India", 33, BOWL, 10_000_000, RH, "Right-arm fast", &["Seam Movement"]),
    seed("Mohammed Siraj", "India", 30, BOWL, 10_000_000, RH, "Right-arm fast", &[]),
    seed("Kuldeep Yadav", "India", 29, BOWL, 10_000_000, LH, "Left-arm wrist-spin", &[]),
    seed("Yuzvendra Chahal", "India", 33, BOWL, 10_000_000, RH, "Right-arm leg-break", &[]),
    seed("Axar Patel", "India", 30, AR, 10_000_000, LH, "Slow left-arm orthodox", &[]),
    seed("Shreyas Iyer", "India", 29, BAT, 10_000_000, RH, "Right-arm leg-break", &[]),
    seed("Yashasvi Jaiswal", "India", 22, BAT, 10_000_000, LH, "Right-arm leg-break", &[]),
    seed("Ruturaj Gaikwad", "India", 27, BAT, 7_500_000, RH, "Right-arm off-break", &[]),
    seed("Sanju Samson", "India", 29, WK, 7_500_000, RH, NONE, &[]),
    seed("Ishan Kishan", "India", 25, WK, 5_000_000, LH, NONE, &[]),
    seed("Arshdeep Singh", "India", 25, BOWL, 7_500_000, LH, "Left-arm fast-medium", &[]),
    seed("Rinku Singh", "India", 26, BAT, 5_000_000, LH, "Right-arm off-break", &["Finisher"]),
    seed("Tilak Varma", "India", 21, BAT, 5_000_000, LH, "Right-arm off-break", &[]),
    seed("Washington Sundar", "India", 24, AR, 5_000_000, LH, "Right-arm off-break", &[]),
    seed("Shivam Dube", "India", 30, AR, 5_000_000, LH, "Right-arm medium", &[]),
    seed("Bhuvneshwar Kumar", "India", 34, BOWL, 5_000_000, RH, "Right-arm medium", &["Swing"]),
    seed("Ravichandran Ashwin", "India", 37, AR, 5_000_000, RH, "Right-arm off-break", &["Carrom Ball"]),
    seed("Deepak Chahar", "India", 31, BOWL, 5_000_000, RH, "Right-arm medium", &[]),
    seed("Prasidh Krishna", "India", 28, BOWL, 2_000_000, RH, "Right-arm fast", &[]),
    seed("Mukesh Kumar", "India", 30, BOWL, 2_000_000, RH, "Right-arm medium", &[]),
    // Round 2
    seed("Pat Cummins", "Australia", 31, BOWL, 20_000_000, RH, "Right-arm fast", &["Captaincy", "Bouncers"]),
    seed("Mitchell Starc", "Australia", 34, BOWL, 20_000_000, LH, "Left-arm fast", &["Swing", "Yorkers"]),
    seed("Travis Head", "Australia", 30, BAT, 15_000_000, LH, "Right-arm off-break", &[]),
    seed("Glenn Maxwell", "Australia", 35, AR, 15_000_000, RH, "Right-arm off-break", &["Switch Hit"]),
    seed("David Warner", "Australia", 37, BAT, 10_000_000, LH, "Right-arm leg-break", &[]),
    seed("Josh Hazlewood", "Australia", 33, BOWL, 10_000_000, LH, "Right-arm fast-medium", &[]),
    seed("Marcus Stoinis", "Australia", 34, AR, 7_500_000, RH, "Right-arm medium", &[]),
    seed("Cameron Green", "Australia", 25, AR, 15_000_000, RH, "Right-arm fast-medium", &[]),
    seed("Adam Zampa", "Australia", 32, BOWL, 5_000_000, RH, "Right-arm leg-break", &[]),
    seed("Jake Fraser-McGurk", "Australia", 22, BAT, 2_000_000, RH, "Right-arm leg-break", &["Fastest Fifty"]),
    seed("Jos Buttler", "England", 33, WK, 15_000_000, RH, NONE, &["Ramp Shot"]),
    seed("Ben Stokes", "England", 32, AR, 15_000_000, LH, "Right-arm fast-medium", &["Clutch Player"]),
    seed("Jofra Archer", "England", 29, BOWL, 10_000_000, RH, "Right-arm fast", &[]),
    seed("Liam Livingstone", "England", 30, AR, 7_500_000, RH, "Right-arm leg-break", &[]),
    seed("Phil Salt", "England", 27, WK, 5_000_000, RH, NONE, &[]),
    seed("Sam Curran", "England", 26, AR, 15_000_000, LH, "Left-arm medium-fast", &[]),
    seed("Harry Brook", "England", 25, BAT, 10_000_000, RH, "Right-arm medium", &[]),
    seed("Jonny Bairstow", "England", 34, WK, 5_000_000, RH, NONE, &[]),
    seed("Mark Wood", "England", 34, BOWL, 5_000_000, RH, "Right-arm fast", &[]),
    seed("Adil Rashid", "England", 36, BOWL, 2_000_000, RH, "Right-arm leg-break", &[]),
    seed("Moeen Ali", "England", 36, AR, 2_000_000, LH, "Right-arm off-break", &[]),
    seed("Kane Williamson", "New Zealand", 33, BAT, 10_000_000, RH, "Right-arm off-break", &[]),
    seed("Trent Boult", "New Zealand", 34, BOWL, 10_000_000, RH, "Left-arm fast-medium", &["New Ball Swing"]),
    seed("Rachin Ravindra", "New Zealand", 24, AR, 2_000_000, LH, "Slow left-arm orthodox", &[]),
    seed("Devon Conway", "New Zealand", 32, WK, 5_000_000, LH, NONE, &[]),
    seed("Daryl Mitchell", "New Zealand", 32, AR, 7_500_000, RH, "Right-arm medium", &[]),
    seed("Glenn Phillips", "New Zealand", 27, WK, 5_000_000, RH, "Right-arm off-break", &[]),
    seed("Mitchell Santner", "New Zealand", 32, AR, 5_000_000, LH, "Slow left-arm orthodox", &[]),
    seed("Lockie Ferguson", "New Zealand", 32, BOWL, 5_000_000, RH, "Right-arm fast", &[]),
    seed("Tim Southee", "New Zealand", 35, BOWL, 2_000_000, RH, "Right-arm medium-fast", &[]),
    // Round 3
    seed("Rashid Khan", "Afghanistan", 25, BOWL, 20_000_000, RH, "Right-arm leg-break", &["Googly", "Economy"]),
    seed("Mohammad Nabi", "Afghanistan", 39, AR, 2_000_000, RH, "Right-arm off-break", &[]),
    seed("Rahmanullah Gurbaz", "Afghanistan", 22, WK, 5_000_000, RH, NONE, &[]),
    seed("Noor Ahmad", "Afghanistan", 19, BOWL, 2_000_000, RH, "Left-arm wrist-spin", &[]),
    seed("Quinton de Kock", "South Africa", 31, WK, 10_000_000, LH, NONE, &[]),
    seed("Heinrich Klaasen", "South Africa", 32, WK, 15_000_000, RH, "Right-arm off-break", &["Spin Hitting"]),
    seed("Kagiso Rabada", "South Africa", 29, BOWL, 15_000_000, LH, "Right-arm fast", &[]),
    seed("David Miller", "South Africa", 34, BAT, 10_000_000, LH, "Right-arm off-break", &["Killer Miller"]),
    seed("Aiden Markram", "South Africa", 29, BAT, 7_500_000, RH, "Right-arm off-break", &[]),
    seed("Anrich Nortje", "South Africa", 30, BOWL, 7_500_000, RH, "Right-arm fast", &[]),
    seed("Marco Jansen", "South Africa", 24, AR, 7_500_000, RH, "Left-arm fast", &[]),
    seed("Gerald Coetzee", "South Africa", 23, BOWL, 5_000_000, RH, "Right-arm fast", &[]),
    seed("Tristan Stubbs", "South Africa", 23, BAT, 5_000_000, RH, "Right-arm off-break", &[]),
    seed("Nicholas Pooran", "West Indies", 28, WK, 15_000_000, LH, "Right-arm off-break", &["Six Hitting"]),
    seed("Andre Russell", "West Indies", 36, AR, 15_000_000, RH, "Right-arm fast", &["Muscle Power"]),
    seed("Sunil Narine", "West Indies", 35, AR, 10_000_000, LH, "Right-arm off-break", &["Mystery Spin"]),
    seed("Shimron Hetmyer", "West Indies", 27, BAT, 5_000_000, LH, NONE, &[]),
    seed("Alzarri Joseph", "West Indies", 27, BOWL, 5_000_000, RH, "Right-arm fast", &[]),
    seed("Shai Hope", "West Indies", 30, WK, 2_000_000, RH, NONE, &[]),
    seed("Jason Holder", "West Indies", 32, AR, 2_000_000, RH, "Right-arm medium-fast", &[]),
    seed("Babar Azam", "Pakistan", 29, BAT, 15_000_000, RH, "Right-arm off-break", &[]),
    seed("Shaheen Afridi", "Pakistan", 24, BOWL, 15_000_000, LH, "Left-arm fast", &["Inswing"]),
    seed("Mohammad Rizwan", "Pakistan", 32, WK, 10_000_000, RH, NONE, &[]),
    seed("Wanindu Hasaranga", "Sri Lanka", 26, AR, 10_000_000, RH, "Right-arm leg-break", &[]),
    seed("Matheesha Pathirana", "Sri Lanka", 21, BOWL, 5_000_000, RH, "Right-arm fast", &["Slingy Action"]),
    seed("Kusal Mendis", "Sri Lanka", 29, WK, 2_000_000, RH, NONE, &[]),
    seed("Shakib Al Hasan", "Bangladesh", 37, AR, 5_000_000, LH, "Slow left-arm orthodox", &[]),
    seed("Mustafizur Rahman", "Bangladesh", 28, BOWL, 2_000_000, LH, "Left-arm fast-medium", &["Cutters"]),
];

/// All 91 cards in catalog order; ids are catalog positions + 1.
fn catalog() -> Vec<Entity> {
    let mut seeds = SEEDS.iter();
    (0..CATALOG_SIZE)
        .filter_map(|pos| {
            let id = pos as EntityId + 1;
            if STEAL_POSITIONS.contains(&pos) {
                return Some(Entity::Steal(StealCard::new(id)));
            }
            let s = seeds.next()?;
            let player = Player {
                id,
                name: s.name.to_string(),
                country: s.country.to_string(),
                age: s.age,
                role: s.role,
                base_price: s.base_price,
                batting_style: s.batting.to_string(),
                bowling_style: s.bowling.to_string(),
                special_skills: s.skills.iter().map(|k| k.to_string()).collect(),
                portrait: None,
            };
            Some(if HIDDEN_IDS.contains(&id) {
                Entity::Hidden(player)
            } else {
                Entity::Regular(player)
            })
        })
        .collect()
}

/// Flat roster: position `p` holds catalog card `(p * 17) mod 91`; numbers map modularly.
pub fn flat_roster() -> Roster {
    let catalog = catalog();
    let entities = (0..catalog.len()).map(|p| catalog[(p * FLAT_STRIDE) % catalog.len()].clone());
    Roster::new(entities, Mapping::Modular)
}

/// Catalog positions covered by a round.
fn round_span(round: Round) -> std::ops::Range<usize> {
    match round {
        Round::One => 0..31,
        Round::Two => 31..62,
        Round::Three => 62..CATALOG_SIZE,
    }
}

/// One round's roster (31, 31 and 29 cards); numbers map directly.
pub fn round_roster(round: Round) -> Roster {
    let catalog = catalog();
    Roster::new(catalog[round_span(round)].iter().cloned(), Mapping::Direct)
}

/// Card counts for the intro screen.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct RosterSummary {
    pub total: usize,
    pub batsmen: usize,
    pub bowlers: usize,
    pub all_rounders: usize,
    pub wicket_keepers: usize,
    pub hidden: usize,
    pub steal_cards: usize,
}

pub fn roster_summary(roster: &Roster) -> RosterSummary {
    let mut summary = RosterSummary {
        total: roster.len(),
        ..Default::default()
    };
    for entity in roster.iter() {
        if entity.is_hidden() {
            summary.hidden += 1;
        }
        match entity.player().map(|p| p.role) {
            Some(Role::Batsman) => summary.batsmen += 1,
            Some(Role::Bowler) => summary.bowlers += 1,
            Some(Role::AllRounder) => summary.all_rounders += 1,
            Some(Role::WicketKeeper) => summary.wicket_keepers += 1,
            None => summary.steal_cards += 1,
        }
    }
    summary
}

//! Lucky dip: suggest a random number that has not been drawn yet.

use crate::models::AuctionSession;
use rand::seq::IteratorRandom;
use rand::Rng;

/// Uniformly random unused number in range, or `None` when nothing is left.
/// Advisory only; the session is not touched.
pub fn suggest_number<R: Rng + ?Sized>(session: &AuctionSession, rng: &mut R) -> Option<u32> {
    (1..=session.number_range())
        .filter(|n| !session.used_numbers.contains(n))
        .choose(rng)
}

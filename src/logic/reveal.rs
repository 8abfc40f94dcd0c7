//! Reveal controller: phase transitions of an auction session.
//!
//! Every action takes the current snapshot and returns a new one; a rejected action returns
//! an error and the caller keeps the old snapshot.

use crate::logic::roster::round_roster;
use crate::models::{AuctionError, AuctionSession, Phase, Round, RosterMode};

/// Leave the intro screen: flat mode goes straight to `Idle`, round mode to round selection.
pub fn enter_auction(session: &AuctionSession) -> Result<AuctionSession, AuctionError> {
    if session.phase != Phase::Intro {
        return Err(AuctionError::InvalidState);
    }
    let mut next = session.clone();
    next.phase = match session.mode {
        RosterMode::Flat => Phase::Idle,
        RosterMode::Rounds => Phase::RoundSelection,
    };
    Ok(next)
}

/// Pick a round (round mode, `RoundSelection` only) and load its roster.
pub fn select_round(
    session: &AuctionSession,
    round: Round,
) -> Result<AuctionSession, AuctionError> {
    if session.mode != RosterMode::Rounds || session.phase != Phase::RoundSelection {
        return Err(AuctionError::InvalidState);
    }
    let mut next = session.clone();
    next.round = Some(round);
    next.roster = Some(round_roster(round));
    next.phase = Phase::Idle;
    Ok(next)
}

/// Open number input (`Idle` or `Revealed` → `AwaitingNumber`).
pub fn begin_selection(session: &AuctionSession) -> Result<AuctionSession, AuctionError> {
    match session.phase {
        Phase::Idle | Phase::Revealed => {}
        Phase::Revealing => return Err(AuctionError::RevealInProgress),
        _ => return Err(AuctionError::InvalidState),
    }
    if session.is_complete() {
        return Err(AuctionError::Complete);
    }
    let mut next = session.clone();
    next.phase = Phase::AwaitingNumber;
    Ok(next)
}

/// Close number input without drawing.
pub fn cancel_selection(session: &AuctionSession) -> Result<AuctionSession, AuctionError> {
    if session.phase != Phase::AwaitingNumber {
        return Err(AuctionError::InvalidState);
    }
    let mut next = session.clone();
    next.phase = if session.current.is_some() {
        Phase::Revealed
    } else {
        Phase::Idle
    };
    Ok(next)
}

/// Parse raw number input. Anything that is not an integer is out of range.
pub fn parse_number(input: &str, max: u32) -> Result<u32, AuctionError> {
    let n: i64 = input
        .trim()
        .parse()
        .map_err(|_| AuctionError::OutOfRange { max })?;
    check_range(n, max)
}

fn check_range(n: i64, max: u32) -> Result<u32, AuctionError> {
    if n < 1 || n > max as i64 {
        return Err(AuctionError::OutOfRange { max });
    }
    Ok(n as u32)
}

/// Accept a number (`AwaitingNumber` → `Revealing`).
///
/// Range is checked before uniqueness, and both before any mapping, so `92` is out of range
/// in flat mode even though it would wrap to the first card.
pub fn submit_number(
    session: &AuctionSession,
    number: i64,
) -> Result<AuctionSession, AuctionError> {
    check_awaiting(session)?;
    let number = check_range(number, session.number_range())?;
    if session.used_numbers.contains(&number) {
        return Err(AuctionError::AlreadyUsed(number));
    }
    let mut next = session.clone();
    next.pending_number = Some(number);
    next.phase = Phase::Revealing;
    Ok(next)
}

/// Accept raw text from the number box. Phase errors win over parse errors.
pub fn submit_text(
    session: &AuctionSession,
    input: &str,
) -> Result<AuctionSession, AuctionError> {
    check_awaiting(session)?;
    let number = parse_number(input, session.number_range())?;
    submit_number(session, i64::from(number))
}

fn check_awaiting(session: &AuctionSession) -> Result<(), AuctionError> {
    match session.phase {
        Phase::AwaitingNumber => Ok(()),
        Phase::Revealing => Err(AuctionError::RevealInProgress),
        _ => Err(AuctionError::InvalidState),
    }
}

/// Resolve the pending number (`Revealing` → `Revealed`): record it and show its card.
pub fn finish_reveal(session: &AuctionSession) -> Result<AuctionSession, AuctionError> {
    if session.phase != Phase::Revealing {
        return Err(AuctionError::InvalidState);
    }
    let (Some(number), Some(roster)) = (session.pending_number, session.roster.as_ref()) else {
        return Err(AuctionError::InvalidState);
    };
    let entity = roster.resolve(number).ok_or(AuctionError::InvalidState)?;
    let mut next = session.clone();
    next.current = Some(session.with_overlay(entity));
    next.used_numbers.insert(number);
    next.draws.push_back(number);
    next.pending_number = None;
    next.phase = Phase::Revealed;
    log::info!(
        "Auction {}: drew number {} ({} of {})",
        session.id,
        number,
        next.used_numbers.len(),
        next.number_range()
    );
    Ok(next)
}

/// Submit and resolve in one step (no presentation delay).
pub fn draw_number(session: &AuctionSession, number: i64) -> Result<AuctionSession, AuctionError> {
    finish_reveal(&submit_number(session, number)?)
}

/// Dismiss the hidden flag of the current card. Repeating it is a no-op.
pub fn reveal_identity(session: &AuctionSession) -> Result<AuctionSession, AuctionError> {
    let id = match &session.current {
        Some(entity) if entity.is_hidden() => entity.id(),
        _ => return Err(AuctionError::InvalidState),
    };
    let mut next = session.clone();
    next.revealed_hidden.insert(id);
    Ok(next)
}

/// Clear draw state from any phase. Round mode also forgets the chosen round.
/// Edit overlays are kept.
pub fn reset_auction(session: &AuctionSession) -> AuctionSession {
    let mut next = session.clone();
    next.used_numbers = im::OrdSet::new();
    next.draws = im::Vector::new();
    next.current = None;
    next.revealed_hidden = im::OrdSet::new();
    next.pending_number = None;
    match session.mode {
        RosterMode::Flat => next.phase = Phase::Idle,
        RosterMode::Rounds => {
            next.round = None;
            next.roster = None;
            next.phase = Phase::RoundSelection;
        }
    }
    next
}

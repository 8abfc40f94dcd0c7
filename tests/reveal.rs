//! Integration tests for the reveal controller: validation, mapping, completion, reset.

use mock_auction_web::{
    begin_selection, cancel_selection, draw_number, enter_auction, finish_reveal, flat_roster,
    parse_number, reset_auction, reveal_identity, round_roster, select_round, submit_number,
    submit_text, AuctionError, AuctionSession, Phase, RosterMode, Round,
};
use proptest::prelude::*;

fn flat_session() -> AuctionSession {
    let s = AuctionSession::new(RosterMode::Flat);
    begin_selection(&enter_auction(&s).unwrap()).unwrap()
}

fn round_session(round: Round) -> AuctionSession {
    let s = enter_auction(&AuctionSession::new(RosterMode::Rounds)).unwrap();
    begin_selection(&select_round(&s, round).unwrap()).unwrap()
}

/// Draw `n` and reopen number input.
fn draw(s: &AuctionSession, n: i64) -> AuctionSession {
    let drawn = draw_number(s, n).unwrap();
    assert_eq!(drawn.phase, Phase::Revealed);
    drawn
}

#[test]
fn intro_leads_to_idle_in_flat_mode_and_round_selection_in_round_mode() {
    let flat = enter_auction(&AuctionSession::new(RosterMode::Flat)).unwrap();
    assert_eq!(flat.phase, Phase::Idle);
    let rounds = enter_auction(&AuctionSession::new(RosterMode::Rounds)).unwrap();
    assert_eq!(rounds.phase, Phase::RoundSelection);
    assert!(rounds.roster.is_none());
    assert_eq!(
        begin_selection(&rounds).unwrap_err(),
        AuctionError::InvalidState
    );
}

#[test]
fn flat_mode_number_one_resolves_to_first_card() {
    let s = draw(&flat_session(), 1);
    assert_eq!(s.current.as_ref(), flat_roster().get(0));
    assert_eq!(s.used_numbers.len(), 1);
    assert_eq!(s.last_number(), Some(1));
}

#[test]
fn flat_mode_rejects_92_before_mapping() {
    let s = flat_session();
    assert_eq!(
        submit_number(&s, 92).unwrap_err(),
        AuctionError::OutOfRange { max: 91 }
    );
    assert_eq!(
        submit_number(&s, 0).unwrap_err(),
        AuctionError::OutOfRange { max: 91 }
    );
}

#[test]
fn round_one_number_31_is_last_card_and_all_draws_complete() {
    let mut s = round_session(Round::One);
    assert_eq!(s.number_range(), 31);
    s = draw(&s, 31);
    assert_eq!(s.current.as_ref(), round_roster(Round::One).get(30));
    assert!(!s.is_complete());
    for n in 1..31 {
        s = draw(&begin_selection(&s).unwrap(), n);
    }
    assert_eq!(s.used_numbers.len(), 31);
    assert!(s.is_complete());
    assert_eq!(s.remaining(), 0);
    assert_eq!(begin_selection(&s).unwrap_err(), AuctionError::Complete);
}

#[test]
fn round_mode_rejects_numbers_past_round_length() {
    let s = round_session(Round::Three);
    assert_eq!(s.number_range(), 29);
    assert_eq!(
        submit_number(&s, 30).unwrap_err(),
        AuctionError::OutOfRange { max: 29 }
    );
}

#[test]
fn duplicate_draw_is_rejected_and_counted_once() {
    let s = draw(&round_session(Round::Two), 7);
    let reopened = begin_selection(&s).unwrap();
    assert_eq!(
        submit_number(&reopened, 7).unwrap_err(),
        AuctionError::AlreadyUsed(7)
    );
    assert_eq!(reopened.used_numbers.len(), 1);
}

#[test]
fn submit_while_revealing_is_rejected() {
    let revealing = submit_number(&flat_session(), 5).unwrap();
    assert_eq!(revealing.phase, Phase::Revealing);
    assert_eq!(revealing.pending_number, Some(5));
    assert!(revealing.used_numbers.is_empty());
    assert_eq!(
        submit_number(&revealing, 6).unwrap_err(),
        AuctionError::RevealInProgress
    );
    let revealed = finish_reveal(&revealing).unwrap();
    assert!(revealed.used_numbers.contains(&5));
    assert_eq!(revealed.pending_number, None);
}

#[test]
fn actions_leave_the_original_snapshot_untouched() {
    let before = flat_session();
    let after = draw(&before, 3);
    assert!(before.used_numbers.is_empty());
    assert!(before.current.is_none());
    assert_eq!(after.used_numbers.len(), 1);
}

#[test]
fn text_input_is_parsed_and_garbage_is_out_of_range() {
    assert_eq!(parse_number(" 12 ", 91), Ok(12));
    assert_eq!(parse_number("abc", 91), Err(AuctionError::OutOfRange { max: 91 }));
    assert_eq!(parse_number("4.5", 31), Err(AuctionError::OutOfRange { max: 31 }));
    assert_eq!(parse_number("-1", 31), Err(AuctionError::OutOfRange { max: 31 }));
}

#[test]
fn text_submit_checks_the_phase_before_parsing() {
    let revealing = submit_text(&flat_session(), " 5 ").unwrap();
    assert_eq!(revealing.pending_number, Some(5));
    assert_eq!(
        submit_text(&revealing, "abc").unwrap_err(),
        AuctionError::RevealInProgress
    );

    let choosing = enter_auction(&AuctionSession::new(RosterMode::Rounds)).unwrap();
    assert_eq!(submit_text(&choosing, "7").unwrap_err(), AuctionError::InvalidState);
    assert_eq!(
        submit_text(&flat_session(), "92").unwrap_err(),
        AuctionError::OutOfRange { max: 91 }
    );
}

#[test]
fn cancel_returns_to_the_shown_card_or_idle() {
    let s = flat_session();
    assert_eq!(cancel_selection(&s).unwrap().phase, Phase::Idle);
    let shown = begin_selection(&draw(&s, 2)).unwrap();
    assert_eq!(cancel_selection(&shown).unwrap().phase, Phase::Revealed);
}

#[test]
fn reveal_identity_is_idempotent() {
    // Round 1 number 23 is a hidden player.
    let s = draw(&round_session(Round::One), 23);
    assert!(s.current.as_ref().unwrap().is_hidden());
    let once = reveal_identity(&s).unwrap();
    let twice = reveal_identity(&once).unwrap();
    assert_eq!(once.revealed_hidden, twice.revealed_hidden);
    assert_eq!(once.revealed_hidden.len(), 1);
}

#[test]
fn reveal_identity_needs_a_hidden_card() {
    let s = draw(&round_session(Round::One), 1);
    assert_eq!(reveal_identity(&s).unwrap_err(), AuctionError::InvalidState);
}

#[test]
fn reset_clears_draw_state_and_round() {
    let s = reveal_identity(&draw(&round_session(Round::One), 23)).unwrap();
    let reset = reset_auction(&s);
    assert!(reset.used_numbers.is_empty());
    assert!(reset.draws.is_empty());
    assert!(reset.current.is_none());
    assert!(reset.revealed_hidden.is_empty());
    assert_eq!(reset.round, None);
    assert_eq!(reset.phase, Phase::RoundSelection);

    let flat = reset_auction(&submit_number(&flat_session(), 9).unwrap());
    assert_eq!(flat.phase, Phase::Idle);
    assert_eq!(flat.pending_number, None);
    assert_eq!(flat.roster_length(), 91);
}

proptest! {
    #[test]
    fn out_of_range_never_changes_state(n in prop_oneof![i64::MIN..1i64, 92i64..i64::MAX]) {
        let s = flat_session();
        prop_assert_eq!(submit_number(&s, n).unwrap_err(), AuctionError::OutOfRange { max: 91 });
    }

    #[test]
    fn each_number_is_used_at_most_once(numbers in proptest::collection::vec(1i64..=31, 1..60)) {
        let mut s = round_session(Round::One);
        let mut distinct = std::collections::BTreeSet::new();
        for n in numbers {
            if s.is_complete() {
                break;
            }
            match draw_number(&s, n) {
                Ok(next) => {
                    prop_assert!(distinct.insert(n));
                    s = begin_selection(&next).unwrap_or(next);
                }
                Err(e) => prop_assert_eq!(e, AuctionError::AlreadyUsed(n as u32)),
            }
        }
        prop_assert_eq!(s.used_numbers.len(), distinct.len());
    }
}

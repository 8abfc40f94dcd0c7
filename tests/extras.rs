//! Integration tests for the lucky dip and the draw-log export.

use mock_auction_web::{
    begin_selection, draw_log_csv, draw_number, enter_auction, reveal_identity, select_round,
    suggest_number, AuctionSession, RosterMode, Round,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn round_one() -> AuctionSession {
    let s = enter_auction(&AuctionSession::new(RosterMode::Rounds)).unwrap();
    begin_selection(&select_round(&s, Round::One).unwrap()).unwrap()
}

#[test]
fn lucky_number_is_never_a_used_one() {
    let mut s = round_one();
    for n in 1..=30 {
        s = begin_selection(&draw_number(&s, n).unwrap()).unwrap();
    }
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(suggest_number(&s, &mut rng), Some(31));
    let done = draw_number(&s, 31).unwrap();
    assert_eq!(suggest_number(&done, &mut rng), None);
}

#[test]
fn lucky_number_needs_a_roster() {
    let s = AuctionSession::new(RosterMode::Rounds);
    assert_eq!(suggest_number(&s, &mut StdRng::seed_from_u64(1)), None);
}

#[test]
fn draw_log_lists_draws_in_order_and_masks_hidden_players() {
    let s = round_one();
    let s = begin_selection(&draw_number(&s, 4).unwrap()).unwrap();
    let s = begin_selection(&draw_number(&s, 16).unwrap()).unwrap();
    let s = draw_number(&s, 23).unwrap();

    let csv = draw_log_csv(&s).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "number,card,role,price");
    assert_eq!(lines[1], "4,MS Dhoni,Wicket-keeper,PRICELESS");
    assert_eq!(lines[2], "16,STEAL CARD,,STEAL ANY PLAYER");
    assert_eq!(lines[3], "23,???,Batsman,???");

    let revealed = draw_log_csv(&reveal_identity(&s).unwrap()).unwrap();
    assert!(revealed.lines().any(|l| l == "23,Rinku Singh,Batsman,₹50.0 L"));
}

//! Integration tests for the card projection and edits of the current card.

use mock_auction_web::{
    begin_selection, current_view, draw_number, edit_details, edit_photo, enter_auction,
    reveal_identity, select_round, snapshot, AuctionSession, CardView, DetailsForm, PhotoSource,
    RosterMode, Round, MASK,
};

fn drawn(round: Round, n: i64) -> AuctionSession {
    let s = enter_auction(&AuctionSession::new(RosterMode::Rounds)).unwrap();
    let s = begin_selection(&select_round(&s, round).unwrap()).unwrap();
    draw_number(&s, n).unwrap()
}

#[test]
fn hidden_player_is_masked_until_revealed() {
    let s = drawn(Round::One, 23);
    match current_view(&s).unwrap() {
        CardView::Mystery {
            name,
            country,
            age,
            price,
            batting_style,
            bowling_style,
            special_skills,
            ..
        } => {
            for field in [name, country, age, price, batting_style, bowling_style] {
                assert_eq!(field, MASK);
            }
            assert_eq!(special_skills, vec![MASK; 3]);
        }
        other => panic!("expected mystery card, got {other:?}"),
    }
    let view = snapshot(&s);
    assert!(view.can_reveal_identity);
    assert!(!view.can_edit);

    let revealed = reveal_identity(&s).unwrap();
    match current_view(&revealed).unwrap() {
        CardView::Player { name, revealed, .. } => {
            assert_eq!(name, "Rinku Singh");
            assert!(revealed);
        }
        other => panic!("expected player card, got {other:?}"),
    }
    assert!(!snapshot(&revealed).can_reveal_identity);
}

#[test]
fn steal_card_never_shows_player_fields() {
    // Round 1 number 16 is the round's steal card.
    let s = drawn(Round::One, 16);
    let view = current_view(&s).unwrap();
    match &view {
        CardView::Steal { abilities, power } => {
            assert!(!abilities.is_empty());
            assert_eq!(*power, "STEAL ANY PLAYER");
        }
        other => panic!("expected steal card, got {other:?}"),
    }
    assert!(!view.can_reveal());
    assert!(reveal_identity(&s).is_err());
    let json = serde_json::to_value(&view).unwrap();
    assert!(json.get("name").is_none());
    assert!(json.get("country").is_none());
}

#[test]
fn zero_base_price_renders_priceless() {
    let s = drawn(Round::One, 1);
    let form = DetailsForm {
        base_price: Some("0".into()),
        ..Default::default()
    };
    let (edited, record) = edit_details(&s, &form);
    assert_eq!(record.unwrap().details.base_price, Some(0));
    match current_view(&edited).unwrap() {
        CardView::Player { price, .. } => assert_eq!(price, "PRICELESS"),
        other => panic!("expected player card, got {other:?}"),
    }
}

#[test]
fn details_edit_overlays_only_non_empty_fields() {
    let s = drawn(Round::Two, 1);
    let form = DetailsForm {
        name: Some("Skipper".into()),
        age: Some("".into()),
        batting_style: Some("   ".into()),
        ..Default::default()
    };
    let (edited, _) = edit_details(&s, &form);
    let player = edited.current.as_ref().and_then(|e| e.player()).unwrap();
    let original = s.current.as_ref().and_then(|e| e.player()).unwrap();
    assert_eq!(player.name, "Skipper");
    assert_eq!(player.age, original.age);
    assert_eq!(player.batting_style, original.batting_style);
}

#[test]
fn edits_are_no_ops_without_an_editable_card() {
    let masked = drawn(Round::One, 23);
    let (same, record) = edit_photo(&masked, PhotoSource::Url("https://img/x.png".into()));
    assert!(record.is_none());
    assert!(same.portraits.is_empty());

    let steal = drawn(Round::One, 16);
    let form = DetailsForm {
        name: Some("Thief".into()),
        ..Default::default()
    };
    assert!(edit_details(&steal, &form).1.is_none());

    let fresh = AuctionSession::new(RosterMode::Flat);
    assert!(edit_details(&fresh, &form).1.is_none());
}

#[test]
fn uploaded_portrait_overrides_roster_portrait() {
    let s = drawn(Round::One, 2);
    let (edited, record) = edit_photo(
        &s,
        PhotoSource::Upload {
            content_type: "image/png".into(),
            bytes: vec![1, 2, 3],
        },
    );
    assert!(record.is_some());
    match current_view(&edited).unwrap() {
        CardView::Player { portrait, .. } => assert_eq!(portrait, "data:image/png;base64,AQID"),
        other => panic!("expected player card, got {other:?}"),
    }
}

#[test]
fn card_without_portrait_uses_placeholder() {
    let s = drawn(Round::Three, 1);
    match current_view(&s).unwrap() {
        CardView::Player { portrait, .. } => assert_eq!(portrait, "/placeholder.svg"),
        other => panic!("expected player card, got {other:?}"),
    }
}

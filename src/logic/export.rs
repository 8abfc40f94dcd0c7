//! Draw log as CSV, in draw order, with the board's visibility rules applied.

use crate::logic::visibility::{project, CardView, MASK};
use crate::models::AuctionSession;

/// `number,card,role,price` per draw. Hidden players that were never revealed stay masked.
pub fn draw_log_csv(session: &AuctionSession) -> Result<String, csv::Error> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["number", "card", "role", "price"])?;
    if let Some(roster) = &session.roster {
        for &number in session.draws.iter() {
            let Some(entity) = roster.resolve(number) else {
                continue;
            };
            let entity = session.with_overlay(entity);
            let (card, role, price) = match project(session, &entity) {
                CardView::Steal { power, .. } => {
                    ("STEAL CARD".to_string(), String::new(), power.to_string())
                }
                CardView::Mystery { role, .. } => {
                    (MASK.to_string(), role.to_string(), MASK.to_string())
                }
                CardView::Player { name, role, price, .. } => (name, role.to_string(), price),
            };
            wtr.write_record([number.to_string(), card, role, price])?;
        }
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

//! Plain-text rendering of a table.
//!
//! ```text
//! Seat 1 - UTG   -   - []
//! Seat 2 - UTG+1 - H - [As, Kd]
//! ...
//!
//! Board: [7c, 7d, 2s] [Qh] [ ]
//! ```

use crate::cards::Card;
use crate::state::TableState;
use crate::table::{Role, Table};
use std::fmt;

/// Owned snapshot of what a front end needs to draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    pub state: TableState,
    pub seats: Vec<SeatView>,
    pub flop: Vec<Card>,
    pub turn: Option<Card>,
    pub river: Option<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatView {
    pub number: u8,
    pub name: &'static str,
    pub role: Option<Role>,
    pub hand: Vec<Card>,
}

impl TableView {
    pub fn of(table: &Table) -> Self {
        Self {
            state: table.state(),
            seats: table
                .seats()
                .iter()
                .map(|s| SeatView {
                    number: s.number(),
                    name: s.name(),
                    role: s.role(),
                    hand: s.hand().iter().map(|c| c.card()).collect(),
                })
                .collect(),
            flop: table.flop().iter().map(|c| c.card()).collect(),
            turn: table.turn().map(|c| c.card()),
            river: table.river().map(|c| c.card()),
        }
    }

    /// All board cards in deal order.
    pub fn board(&self) -> Vec<Card> {
        self.flop.iter().copied().chain(self.turn).chain(self.river).collect()
    }
}

fn card_list(cards: &[Card]) -> String {
    let joined = cards.iter().map(Card::to_string).collect::<Vec<_>>().join(", ");
    format!("[{joined}]")
}

fn slot(card: Option<Card>) -> String {
    card.map_or_else(|| "[ ]".to_string(), |c| format!("[{c}]"))
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seat in &self.seats {
            let role = seat.role.map_or(' ', Role::symbol);
            writeln!(
                f,
                "Seat {} - {:5} - {} - {}",
                seat.number,
                seat.name,
                role,
                card_list(&seat.hand)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Board: {} {} {}", card_list(&self.flop), slot(self.turn), slot(self.river))
    }
}

/// Render `table` the way the line prompt prints it.
pub fn render(table: &Table) -> String {
    TableView::of(table).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank, Suit};

    fn seat(number: u8, name: &'static str, role: Option<Role>, hand: &str) -> SeatView {
        SeatView { number, name, role, hand: parse_cards(hand).unwrap() }
    }

    #[test]
    fn renders_seats_and_board() {
        let view = TableView {
            state: TableState::Turn,
            seats: vec![
                seat(1, "UTG", None, ""),
                seat(2, "UTG+1", Some(Role::Hero), "As Kd"),
                seat(3, "UTG+2", Some(Role::Villain), ""),
            ],
            flop: parse_cards("7c 7d 2s").unwrap(),
            turn: Some(Card::new(Rank::Queen, Suit::Hearts)),
            river: None,
        };
        let expected = "Seat 1 - UTG   -   - []\n\
                        Seat 2 - UTG+1 - H - [As, Kd]\n\
                        Seat 3 - UTG+2 - V - []\n\
                        \n\
                        Board: [7c, 7d, 2s] [Qh] [ ]\n";
        assert_eq!(view.to_string(), expected);
        assert_eq!(view.board().len(), 4);
    }

    #[test]
    fn fresh_table_renders_nine_empty_seats() {
        let text = render(&Table::default());
        assert_eq!(text.lines().filter(|l| l.starts_with("Seat ")).count(), 9);
        assert!(text.contains("Seat 9 - BB    -   - []"));
        assert!(text.ends_with("Board: [] [ ] [ ]\n"));
    }
}

//! poker-drill: hold'em street walker for hand-reading practice
//!
//! A nine-seat table deals a hand to a hero seat, marks a villain seat, then
//! walks the board forward (flop, turn, river) one operator command at a time.
//! Any step can be re-dealt and the whole table can start over.
//!
//! Goals:
//! - Every card is either in the deck or in exactly one hand or board slot
//! - At most one hero and one villain at the table
//! - No panics on bad input; use `Result` for recoverable errors
//!
//! ## Quick start: walk a hand to the river
//! ```
//! use poker_drill::config::TableConfig;
//! use poker_drill::state::{Command, TableState};
//! use poker_drill::table::Table;
//!
//! let mut table = Table::new(TableConfig::default().with_seed(3));
//! assert_eq!(table.state(), TableState::Init);
//! table.auto_advance().unwrap();
//! assert_eq!(table.state(), TableState::PreFlop);
//!
//! for command in [Command::Flop, Command::Turn, Command::River] {
//!     table.apply(command).unwrap();
//! }
//! assert_eq!(table.state(), TableState::River);
//! assert_eq!(table.deck().number_of_cards_not_dealt(), 45);
//! table.verify_custody().unwrap();
//! ```
//!
//! ## Playing
//! ```sh
//! cargo run --bin poker-drill            # TUI on a terminal
//! cargo run --bin poker-drill -- --plain # line prompt
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod display;
pub mod operator;
pub mod state;
pub mod table;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

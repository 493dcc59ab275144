//! The table's street-by-street protocol.
//!
//! `Init` deals the hero in without asking anything, then each interactive
//! state accepts a fixed set of single-letter commands:
//!
//! | state   | commands                |
//! |---------|-------------------------|
//! | PreFlop | `H` `S` `V` `F` `N` `Q` |
//! | Flop    | `F` `T` `N` `Q`         |
//! | Turn    | `T` `R` `N` `Q`         |
//! | River   | `R` `N` `Q`             |

use crate::table::{Role, Table, TableError};
use std::fmt;

/// Operator commands. The letter codes are the whole external protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Command {
    /// `H`: hero keeps the seat, gets a new hand.
    NewHand,
    /// `S`: hero keeps the hand, moves to a new seat.
    MoveHero,
    /// `V`: villain moves to a new seat.
    MoveVillain,
    /// `F`: deal or re-deal the flop.
    Flop,
    /// `T`: deal or re-deal the turn.
    Turn,
    /// `R`: deal or re-deal the river.
    River,
    /// `N`: start over with a fresh table.
    Reset,
    /// `Q`: quit.
    Quit,
}

impl Command {
    pub const fn code(self) -> char {
        match self {
            Command::NewHand => 'H',
            Command::MoveHero => 'S',
            Command::MoveVillain => 'V',
            Command::Flop => 'F',
            Command::Turn => 'T',
            Command::River => 'R',
            Command::Reset => 'N',
            Command::Quit => 'Q',
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<char> for Command {
    type Error = CommandError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'H' => Ok(Command::NewHand),
            'S' => Ok(Command::MoveHero),
            'V' => Ok(Command::MoveVillain),
            'F' => Ok(Command::Flop),
            'T' => Ok(Command::Turn),
            'R' => Ok(Command::River),
            'N' => Ok(Command::Reset),
            'Q' => Ok(Command::Quit),
            _ => Err(CommandError::Invalid(c.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CommandError {
    #[error("invalid input '{0}'")]
    Invalid(String),
    #[error("command {command} is not available in {state}")]
    NotAllowed { command: Command, state: TableState },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TableState {
    #[default]
    Init,
    PreFlop,
    Flop,
    Turn,
    River,
}

impl fmt::Display for TableState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TableState::Init => "Init",
            TableState::PreFlop => "PreFlop",
            TableState::Flop => "Flop",
            TableState::Turn => "Turn",
            TableState::River => "River",
        };
        f.write_str(name)
    }
}

impl TableState {
    /// Whether the state waits for operator input.
    pub fn is_interactive(self) -> bool {
        self != TableState::Init
    }

    pub fn commands(self) -> &'static [Command] {
        use Command::*;
        match self {
            TableState::Init => &[],
            TableState::PreFlop => &[NewHand, MoveHero, MoveVillain, Flop, Reset, Quit],
            TableState::Flop => &[Flop, Turn, Reset, Quit],
            TableState::Turn => &[Turn, River, Reset, Quit],
            TableState::River => &[River, Reset, Quit],
        }
    }

    pub fn allows(self, command: Command) -> bool {
        self.commands().contains(&command)
    }

    pub fn prompt(self) -> &'static str {
        match self {
            TableState::Init => "",
            TableState::PreFlop => {
                "H: Hero: Keep seat, change hand\n\
                 S: Hero: Keep hand, change seat\n\
                 V: Villain: Change seat\n\
                 F: Deal the flop\n\
                 \n\
                 N: Start over\n\
                 Q: Quit\n"
            }
            TableState::Flop => {
                "F: Re-deal the flop\n\
                 T: Deal the turn\n\
                 \n\
                 N: Start over\n\
                 Q: Quit\n"
            }
            TableState::Turn => {
                "T: Re-deal the turn\n\
                 R: Deal the river\n\
                 \n\
                 N: Start over\n\
                 Q: Quit\n"
            }
            TableState::River => {
                "R: Re-deal the river\n\
                 \n\
                 N: Start over\n\
                 Q: Quit\n"
            }
        }
    }

    /// Read one operator token: trimmed, case-insensitive, one letter, and
    /// legal in this state.
    pub fn parse_command(self, input: &str) -> Result<Command, CommandError> {
        let token = input.trim();
        let mut chars = token.chars();
        let command = match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Command::try_from(c).map_err(|_| CommandError::Invalid(token.to_string()))?
            }
            _ => return Err(CommandError::Invalid(token.to_string())),
        };
        if !self.allows(command) {
            return Err(CommandError::NotAllowed { command, state: self });
        }
        Ok(command)
    }

    /// Run this state's step against `table` and return the next state.
    ///
    /// `Init` takes no command. Interactive states given `None` stay put.
    /// `Quit` is accepted but changes nothing; ending the session is the
    /// driver's job.
    pub fn advance(
        self,
        table: &mut Table,
        command: Option<Command>,
    ) -> Result<TableState, TableError> {
        use TableState::*;

        let Some(command) = command else {
            return match self {
                Init => {
                    deal_in(table)?;
                    log::info!("{self} -> {}", PreFlop);
                    Ok(PreFlop)
                }
                other => Ok(other),
            };
        };
        if !self.allows(command) {
            return Err(TableError::IllegalCommand { command, state: self });
        }

        let next = match (self, command) {
            (_, Command::Quit) => self,
            (_, Command::Reset) => {
                table.reset();
                return Init.advance(table, None);
            }
            (PreFlop, Command::NewHand) => {
                let hero = table.require_role_holder(Role::Hero)?;
                table.redeal_hand(2, hero)?;
                PreFlop
            }
            (PreFlop, Command::MoveHero) => {
                let to = table.get_random_empty_seat()?;
                table.relocate_role(Role::Hero, to)?;
                PreFlop
            }
            (PreFlop, Command::MoveVillain) => {
                let to = table.get_random_empty_seat()?;
                table.relocate_role(Role::Villain, to)?;
                PreFlop
            }
            (PreFlop, Command::Flop) => {
                table.deal_flop()?;
                Flop
            }
            (Flop, Command::Flop) => {
                table.redeal_flop()?;
                Flop
            }
            (Flop, Command::Turn) => {
                table.deal_turn()?;
                Turn
            }
            (Turn, Command::Turn) => {
                table.redeal_turn()?;
                Turn
            }
            (Turn, Command::River) => {
                table.deal_river()?;
                River
            }
            (River, Command::River) => {
                table.redeal_river()?;
                River
            }
            _ => return Err(TableError::IllegalCommand { command, state: self }),
        };
        if next != self {
            log::info!("{self} -> {next}");
        }
        Ok(next)
    }
}

/// Seat hero and villain on random empty seats and deal the hero's hand.
fn deal_in(table: &mut Table) -> Result<(), TableError> {
    let hero = table.assign_role_to_random_empty_seat(Role::Hero)?;
    let villain = table.assign_role_to_random_empty_seat(Role::Villain)?;
    table.deal_to_seat(2, hero)?;
    if table.config().deal_villain_hand {
        table.deal_to_seat(2, villain)?;
    }
    Ok(())
}

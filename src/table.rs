use crate::config::TableConfig;
use crate::deck::{DealtCard, Deck, DeckError};
use crate::operator::{Flow, Operator, RunError};
use crate::state::{Command, TableState};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Position labels for seats 1..=9.
pub const SEAT_NAMES: [&str; 9] = ["UTG", "UTG+1", "UTG+2", "LJ", "HJ", "CO", "BTN", "SB", "BB"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Role {
    Hero,
    Villain,
}

impl Role {
    pub const fn symbol(self) -> char {
        match self {
            Role::Hero => 'H',
            Role::Villain => 'V',
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Hero => write!(f, "hero"),
            Role::Villain => write!(f, "villain"),
        }
    }
}

impl FromStr for Role {
    type Err = TableError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "H" | "HERO" => Ok(Role::Hero),
            "V" | "VILLAIN" => Ok(Role::Villain),
            _ => Err(TableError::InvalidRole(s.to_string())),
        }
    }
}

/// Community card slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Street {
    Flop,
    Turn,
    River,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Flop => write!(f, "flop"),
            Street::Turn => write!(f, "turn"),
            Street::River => write!(f, "river"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("invalid role '{0}'")]
    InvalidRole(String),
    #[error("seat number {0} not found")]
    SeatNotFound(u8),
    #[error("no empty seat left")]
    NoEmptySeat,
    #[error("{count} seats hold the {role} role")]
    DuplicateRole { role: Role, count: usize },
    #[error("no seat holds the {0} role")]
    NoRoleHolder(Role),
    #[error("seat {0} is taken by another role")]
    SeatTaken(u8),
    #[error("seat {0} already holds a hand")]
    HandOccupied(u8),
    #[error("the {0} is already dealt")]
    SlotOccupied(Street),
    #[error("command {command} is not legal in state {state}")]
    IllegalCommand { command: Command, state: TableState },
    #[error("card custody violated: {0}")]
    CustodyViolation(String),
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// One of the nine fixed positions at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    number: u8,
    name: &'static str,
    role: Option<Role>,
    hand: Vec<DealtCard>,
}

impl Seat {
    fn new(number: u8, name: &'static str) -> Self {
        Self { number, name, role: None, hand: Vec::new() }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn hand(&self) -> &[DealtCard] {
        &self.hand
    }
}

/// A single practice table: nine seats, one deck, the board, and the
/// current [`TableState`].
///
/// The table is the only owner of cards in play. Every card held by a seat or
/// a board slot is marked dealt in the deck, and no card sits in two places;
/// [`Table::verify_custody`] checks both.
pub struct Table {
    config: TableConfig,
    rng: Box<dyn RngCore>,
    deck: Deck,
    seats: Vec<Seat>,
    flop: Option<[DealtCard; 3]>,
    turn: Option<DealtCard>,
    river: Option<DealtCard>,
    state: TableState,
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("config", &self.config)
            .field("deck", &self.deck)
            .field("seats", &self.seats)
            .field("flop", &self.flop)
            .field("turn", &self.turn)
            .field("river", &self.river)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

impl Table {
    /// Build a table whose randomness comes from ChaCha8, seeded from
    /// `config.seed` when given and from the thread RNG otherwise.
    pub fn new(config: TableConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self::with_rng(config, rng)
    }

    /// Build a table drawing cards and seats from the given source.
    pub fn with_rng<R: RngCore + 'static>(config: TableConfig, rng: R) -> Self {
        Self {
            config,
            rng: Box::new(rng),
            deck: Deck::new(),
            seats: Self::fresh_seats(),
            flop: None,
            turn: None,
            river: None,
            state: TableState::Init,
        }
    }

    fn fresh_seats() -> Vec<Seat> {
        SEAT_NAMES.iter().zip(1u8..).map(|(&name, number)| Seat::new(number, name)).collect()
    }

    /// Discard every seat, card and board slot and go back to `Init`.
    ///
    /// Nothing is returned to the old deck; a new one replaces it. The RNG
    /// is kept so seeded sessions stay reproducible across resets.
    pub fn reset(&mut self) {
        self.deck = Deck::new();
        self.seats = Self::fresh_seats();
        self.flop = None;
        self.turn = None;
        self.river = None;
        self.state = TableState::Init;
        log::info!("table reset");
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn state(&self) -> TableState {
        self.state
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn flop(&self) -> &[DealtCard] {
        match &self.flop {
            Some(cards) => cards,
            None => &[],
        }
    }

    pub fn turn(&self) -> Option<DealtCard> {
        self.turn
    }

    pub fn river(&self) -> Option<DealtCard> {
        self.river
    }

    // Seats

    pub fn get_seat_by_number(&self, number: u8) -> Result<&Seat, TableError> {
        self.seats.iter().find(|s| s.number == number).ok_or(TableError::SeatNotFound(number))
    }

    fn seat_mut(&mut self, number: u8) -> Result<&mut Seat, TableError> {
        self.seats.iter_mut().find(|s| s.number == number).ok_or(TableError::SeatNotFound(number))
    }

    /// Seats in table order whose role equals `role` (`None` = empty seats).
    pub fn get_seats_by_role(&self, role: Option<Role>) -> Vec<&Seat> {
        self.seats.iter().filter(|s| s.role == role).collect()
    }

    /// The unique holder of `role`, if any.
    pub fn role_holder(&self, role: Role) -> Result<Option<&Seat>, TableError> {
        match self.get_seats_by_role(Some(role)).as_slice() {
            [] => Ok(None),
            [seat] => Ok(Some(*seat)),
            many => Err(TableError::DuplicateRole { role, count: many.len() }),
        }
    }

    pub fn get_hero_seat(&self) -> Result<Option<&Seat>, TableError> {
        self.role_holder(Role::Hero)
    }

    pub fn get_villain_seat(&self) -> Result<Option<&Seat>, TableError> {
        self.role_holder(Role::Villain)
    }

    /// Seat number of the holder of `role`, failing when nobody holds it.
    pub fn require_role_holder(&self, role: Role) -> Result<u8, TableError> {
        self.role_holder(role)?.map(Seat::number).ok_or(TableError::NoRoleHolder(role))
    }

    /// Pick uniformly among seats without a role.
    pub fn get_random_empty_seat(&mut self) -> Result<u8, TableError> {
        let empty: Vec<u8> =
            self.seats.iter().filter(|s| s.role.is_none()).map(|s| s.number).collect();
        if empty.is_empty() {
            return Err(TableError::NoEmptySeat);
        }
        Ok(empty[self.rng.random_range(0..empty.len())])
    }

    /// Give `seat_number` the role, taking it away from any other holder
    /// first. `None` only clears the seat's role.
    pub fn set_role(&mut self, seat_number: u8, role: Option<Role>) -> Result<(), TableError> {
        self.get_seat_by_number(seat_number)?;
        if let Some(role) = role {
            for seat in self.seats.iter_mut().filter(|s| s.role == Some(role)) {
                seat.role = None;
            }
        }
        self.seat_mut(seat_number)?.role = role;
        match role {
            Some(role) => log::debug!("seat {seat_number} is now {role}"),
            None => log::debug!("seat {seat_number} cleared"),
        }
        Ok(())
    }

    /// Put `role` on a random empty seat and return that seat's number.
    pub fn assign_role_to_random_empty_seat(&mut self, role: Role) -> Result<u8, TableError> {
        let seat = self.get_random_empty_seat()?;
        self.set_role(seat, Some(role))?;
        Ok(seat)
    }

    /// Move `role` together with its holder's hand to seat `to`.
    pub fn relocate_role(&mut self, role: Role, to: u8) -> Result<(), TableError> {
        let from = self.require_role_holder(role)?;
        if from == to {
            return Ok(());
        }
        let target = self.get_seat_by_number(to)?;
        if target.role.is_some() {
            return Err(TableError::SeatTaken(to));
        }
        if !target.hand.is_empty() {
            return Err(TableError::HandOccupied(to));
        }
        let hand = std::mem::take(&mut self.seat_mut(from)?.hand);
        self.set_role(to, Some(role))?;
        self.seat_mut(to)?.hand = hand;
        log::debug!("{role} moved from seat {from} to seat {to}");
        Ok(())
    }

    // Hands

    /// Deal `n` cards into an empty hand.
    pub fn deal_to_seat(&mut self, n: usize, seat_number: u8) -> Result<(), TableError> {
        if !self.get_seat_by_number(seat_number)?.hand.is_empty() {
            return Err(TableError::HandOccupied(seat_number));
        }
        let cards = self.deck.deal_cards(n, &mut *self.rng)?;
        self.seat_mut(seat_number)?.hand = cards;
        Ok(())
    }

    /// Return a seat's hand to the deck and leave the hand empty.
    pub fn return_hand_to_deck(&mut self, seat_number: u8) -> Result<(), TableError> {
        let hand = self.get_seat_by_number(seat_number)?.hand.clone();
        self.return_cards_to_deck(&hand)?;
        self.seat_mut(seat_number)?.hand.clear();
        Ok(())
    }

    /// Replace a seat's hand with `n` new cards. The replacements are drawn
    /// before the old hand goes back, so they never repeat it. Nothing moves
    /// unless the whole old hand can be returned.
    pub fn redeal_hand(&mut self, n: usize, seat_number: u8) -> Result<(), TableError> {
        let old = self.get_seat_by_number(seat_number)?.hand.clone();
        self.check_returnable(&old)?;
        let fresh = self.deck.deal_cards(n, &mut *self.rng)?;
        self.return_cards_to_deck(&old)?;
        self.seat_mut(seat_number)?.hand = fresh;
        Ok(())
    }

    /// Return every card or none: all of them are checked before the first
    /// one goes back.
    pub fn return_cards_to_deck(&mut self, cards: &[DealtCard]) -> Result<(), TableError> {
        self.check_returnable(cards)?;
        for card in cards {
            self.deck.return_card_to_deck(card)?;
        }
        Ok(())
    }

    fn check_returnable<'a>(
        &self,
        cards: impl IntoIterator<Item = &'a DealtCard>,
    ) -> Result<(), TableError> {
        let mut seen = HashSet::new();
        for card in cards {
            if !self.deck.is_dealt(card)? || !seen.insert(*card) {
                return Err(DeckError::NotDealt(card.card()).into());
            }
        }
        Ok(())
    }

    // Board

    pub fn deal_flop(&mut self) -> Result<(), TableError> {
        if self.flop.is_some() {
            return Err(TableError::SlotOccupied(Street::Flop));
        }
        let cards = self.deck.deal_cards(3, &mut *self.rng)?;
        let &[a, b, c] = cards.as_slice() else {
            return Err(TableError::CustodyViolation(format!("flop dealt {} cards", cards.len())));
        };
        self.flop = Some([a, b, c]);
        Ok(())
    }

    pub fn deal_turn(&mut self) -> Result<(), TableError> {
        if self.turn.is_some() {
            return Err(TableError::SlotOccupied(Street::Turn));
        }
        self.turn = Some(self.deck.deal_card(&mut *self.rng)?);
        Ok(())
    }

    pub fn deal_river(&mut self) -> Result<(), TableError> {
        if self.river.is_some() {
            return Err(TableError::SlotOccupied(Street::River));
        }
        self.river = Some(self.deck.deal_card(&mut *self.rng)?);
        Ok(())
    }

    pub fn return_flop_to_deck(&mut self) -> Result<(), TableError> {
        if let Some(cards) = self.flop {
            self.return_cards_to_deck(&cards)?;
            self.flop = None;
        }
        Ok(())
    }

    pub fn return_turn_to_deck(&mut self) -> Result<(), TableError> {
        if let Some(card) = self.turn {
            self.deck.return_card_to_deck(&card)?;
            self.turn = None;
        }
        Ok(())
    }

    pub fn return_river_to_deck(&mut self) -> Result<(), TableError> {
        if let Some(card) = self.river {
            self.deck.return_card_to_deck(&card)?;
            self.river = None;
        }
        Ok(())
    }

    /// Swap the flop for three new cards that share none with the old one.
    pub fn redeal_flop(&mut self) -> Result<(), TableError> {
        self.check_returnable(self.flop())?;
        let old = self.flop.take();
        if let Err(err) = self.deal_flop() {
            self.flop = old;
            return Err(err);
        }
        if let Some(cards) = old {
            self.return_cards_to_deck(&cards)?;
        }
        Ok(())
    }

    /// Swap the turn for a different card.
    pub fn redeal_turn(&mut self) -> Result<(), TableError> {
        self.check_returnable(&self.turn)?;
        let old = self.turn.take();
        if let Err(err) = self.deal_turn() {
            self.turn = old;
            return Err(err);
        }
        if let Some(card) = old {
            self.deck.return_card_to_deck(&card)?;
        }
        Ok(())
    }

    /// Swap the river for a different card.
    pub fn redeal_river(&mut self) -> Result<(), TableError> {
        self.check_returnable(&self.river)?;
        let old = self.river.take();
        if let Err(err) = self.deal_river() {
            self.river = old;
            return Err(err);
        }
        if let Some(card) = old {
            self.deck.return_card_to_deck(&card)?;
        }
        Ok(())
    }

    /// Every card held by a seat or the board, in table order.
    pub fn cards_in_play(&self) -> Vec<DealtCard> {
        self.seats
            .iter()
            .flat_map(|s| s.hand.iter().copied())
            .chain(self.flop().iter().copied())
            .chain(self.turn)
            .chain(self.river)
            .collect()
    }

    /// Check that cards in play are exactly the deck's dealt cards and that
    /// no role is held twice.
    pub fn verify_custody(&self) -> Result<(), TableError> {
        let in_play = self.cards_in_play();
        let mut seen = HashSet::with_capacity(in_play.len());
        for card in &in_play {
            if !self.deck.is_dealt(card)? {
                return Err(TableError::CustodyViolation(format!("{card} is in play but in the deck")));
            }
            if !seen.insert(*card) {
                return Err(TableError::CustodyViolation(format!("{card} is in play twice")));
            }
        }
        let dealt = self.deck.number_of_cards_dealt();
        if dealt != in_play.len() {
            return Err(TableError::CustodyViolation(format!(
                "deck has {dealt} cards dealt but {} are in play",
                in_play.len()
            )));
        }
        self.get_hero_seat()?;
        self.get_villain_seat()?;
        Ok(())
    }

    // States

    /// Run the step that needs no operator input (`Init`); other states are
    /// left as they are.
    pub fn auto_advance(&mut self) -> Result<(), TableError> {
        let state = self.state;
        self.state = state.advance(self, None)?;
        Ok(())
    }

    /// Apply one operator command to the current state.
    pub fn apply(&mut self, command: Command) -> Result<(), TableError> {
        let state = self.state;
        self.state = state.advance(self, Some(command))?;
        Ok(())
    }

    /// Execute the next step of the current state.
    ///
    /// `Init` runs without input. Interactive states show the table, then
    /// read lines until one is a legal command for the state.
    pub fn run<O: Operator + ?Sized>(&mut self, operator: &mut O) -> Result<Flow, RunError> {
        let state = self.state;
        if !state.is_interactive() {
            self.auto_advance()?;
            return Ok(Flow::Continue);
        }

        operator.show(self, state.prompt())?;
        let command = loop {
            let Some(line) = operator.read_line()? else {
                log::info!("operator input closed");
                return Ok(Flow::Quit);
            };
            match state.parse_command(&line) {
                Ok(command) => break command,
                Err(err) => {
                    log::debug!("rejected operator input: {err}");
                    operator.invalid_input(&line)?;
                }
            }
        };

        if command == Command::Quit {
            log::info!("quit from {state}");
            return Ok(Flow::Quit);
        }
        self.apply(command)?;
        Ok(Flow::Continue)
    }
}

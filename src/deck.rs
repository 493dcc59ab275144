use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_DECK_ID: AtomicU64 = AtomicU64::new(1);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck exhausted: requested {requested}, available {available}")]
    Exhausted { requested: usize, available: usize },
    #[error("card {0} was not dealt by this deck")]
    Origin(Card),
    #[error("card {0} is already in the deck")]
    NotDealt(Card),
}

/// A card handed out by a [`Deck`].
///
/// The token remembers which deck, which shuffle, and which of the 52 slots it
/// came from. Returning it to any other deck, or to the same deck after a
/// reshuffle, fails with [`DeckError::Origin`] even when rank and suit match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealtCard {
    deck: u64,
    generation: u64,
    slot: u8,
    card: Card,
}

impl DealtCard {
    pub fn card(&self) -> Card {
        self.card
    }
}

impl fmt::Display for DealtCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.card)
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    card: Card,
    dealt: bool,
}

/// A standard 52-card deck that keeps custody of every card it deals.
///
/// Cards are never added or removed; dealing and returning only flip the
/// dealt flag of a fixed slot, so `dealt + not_dealt == 52` always holds.
///
/// ```
/// use poker_drill::deck::Deck;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let mut deck = Deck::new();
/// let hand = deck.deal_cards(2, &mut rng).unwrap();
/// assert_eq!(deck.number_of_cards_not_dealt(), 50);
/// for card in &hand {
///     deck.return_card_to_deck(card).unwrap();
/// }
/// assert_eq!(deck.number_of_cards_not_dealt(), 52);
/// ```
#[derive(Debug)]
pub struct Deck {
    id: u64,
    generation: u64,
    slots: [Slot; Deck::LEN],
}

impl Deck {
    pub const LEN: usize = 52;

    /// A fresh deck in suit-major order, nothing dealt.
    pub fn new() -> Self {
        let mut slots = [Slot { card: Card::new(Rank::Two, Suit::Clubs), dealt: false }; Deck::LEN];
        let cards = Suit::ALL.iter().flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)));
        for (slot, card) in slots.iter_mut().zip(cards) {
            slot.card = card;
        }
        Self { id: NEXT_DECK_ID.fetch_add(1, Ordering::Relaxed), generation: 0, slots }
    }

    /// Put every card back and reorder the slots.
    ///
    /// Every `DealtCard` handed out before the shuffle becomes foreign to this
    /// deck; callers must not shuffle while cards are still in play.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for slot in self.slots.iter_mut() {
            slot.dealt = false;
        }
        self.slots.shuffle(rng);
        self.generation += 1;
        log::debug!("deck {} reshuffled (generation {})", self.id, self.generation);
    }

    pub fn number_of_cards_dealt(&self) -> usize {
        self.slots.iter().filter(|s| s.dealt).count()
    }

    pub fn number_of_cards_not_dealt(&self) -> usize {
        Deck::LEN - self.number_of_cards_dealt()
    }

    /// Deal one card chosen uniformly among those still in the deck.
    pub fn deal_card<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<DealtCard, DeckError> {
        let available: Vec<usize> =
            self.slots.iter().enumerate().filter(|(_, s)| !s.dealt).map(|(i, _)| i).collect();
        if available.is_empty() {
            return Err(DeckError::Exhausted { requested: 1, available: 0 });
        }
        let slot = available[rng.random_range(0..available.len())];
        self.slots[slot].dealt = true;
        let dealt = DealtCard {
            deck: self.id,
            generation: self.generation,
            slot: slot as u8,
            card: self.slots[slot].card,
        };
        log::debug!("dealt {dealt}");
        Ok(dealt)
    }

    /// Deal `n` cards in draw order. Either all `n` are dealt or none are.
    pub fn deal_cards<R: Rng + ?Sized>(
        &mut self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<DealtCard>, DeckError> {
        let available = self.number_of_cards_not_dealt();
        if n > available {
            return Err(DeckError::Exhausted { requested: n, available });
        }
        (0..n).map(|_| self.deal_card(rng)).collect()
    }

    /// Take a dealt card back into the deck.
    pub fn return_card_to_deck(&mut self, card: &DealtCard) -> Result<(), DeckError> {
        let slot = self.slot_of(card)?;
        if !self.slots[slot].dealt {
            return Err(DeckError::NotDealt(card.card));
        }
        self.slots[slot].dealt = false;
        log::debug!("returned {card}");
        Ok(())
    }

    /// Whether `card` is currently out of this deck.
    pub fn is_dealt(&self, card: &DealtCard) -> Result<bool, DeckError> {
        self.slot_of(card).map(|slot| self.slots[slot].dealt)
    }

    fn slot_of(&self, card: &DealtCard) -> Result<usize, DeckError> {
        let slot = card.slot as usize;
        let owned = card.deck == self.id
            && card.generation == self.generation
            && self.slots.get(slot).is_some_and(|s| s.card == card.card);
        if owned {
            Ok(slot)
        } else {
            Err(DeckError::Origin(card.card))
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

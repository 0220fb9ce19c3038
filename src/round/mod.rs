//! Round engine and state management.

use alloc::vec;
use alloc::vec::Vec;

use crate::card::DECK_SIZE;
use crate::error::RoundError;
use crate::hand::{DealerHand, Hand};
use crate::options::RoundOptions;
use crate::shoe::Shoe;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub(crate) use deal::cards_for_deal;
pub use dealer::DEALER_STANDS_ON;
pub use state::{Participant, RoundState};

/// One round of blackjack at a single table.
///
/// The round owns the shoe, one hand per player and the dealer's hand. It
/// is created fresh for every round; nothing carries over between rounds.
///
/// # Example
///
/// ```
/// use shoe21::{Round, RoundOptions, RoundState};
///
/// let mut round = Round::new(RoundOptions::default().with_players(2), 42).unwrap();
/// round.deal_initial_hands().unwrap();
///
/// while let RoundState::PlayerTurn(_) = round.state() {
///     round.stand().unwrap();
/// }
/// round.play_dealer_turn().unwrap();
///
/// let result = round.resolve().unwrap();
/// assert_eq!(result.players.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    shoe: Shoe,
    player_hands: Vec<Hand>,
    dealer_hand: DealerHand,
    state: RoundState,
}

impl Round {
    /// Creates a round with a freshly shuffled shoe built from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NoDecks`] or [`RoundError::NoPlayers`] if the
    /// options ask for zero decks or zero players, or
    /// [`RoundError::Exhausted`] if the shoe could never cover the deal.
    pub fn new(options: RoundOptions, seed: u64) -> Result<Self, RoundError> {
        options.validate()?;
        let shoe = Shoe::new(options.decks, seed)?;
        Self::from_shoe(options.players, shoe)
    }

    /// Creates a round for `players` players that deals from `shoe`.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NoPlayers`] if `players` is zero, or
    /// [`RoundError::Exhausted`] if the initial deal needs more cards than
    /// the shoe's decks hold. A stacked shoe that is merely short passes
    /// here and fails in [`Round::deal_initial_hands`].
    pub fn from_shoe(players: usize, shoe: Shoe) -> Result<Self, RoundError> {
        if players == 0 {
            return Err(RoundError::NoPlayers);
        }

        let capacity = usize::from(shoe.decks()) * DECK_SIZE;
        match cards_for_deal(players) {
            Some(needed) if needed <= capacity => {}
            needed => {
                return Err(RoundError::Exhausted {
                    requested: needed.unwrap_or(usize::MAX),
                    remaining: shoe.remaining(),
                });
            }
        }

        Ok(Self {
            shoe,
            player_hands: vec![Hand::new(); players],
            dealer_hand: DealerHand::new(),
            state: RoundState::AwaitingDeal,
        })
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the seat index of the player who is due to act.
    ///
    /// Returns `None` before the deal and once all players are done.
    #[must_use]
    pub const fn current_player(&self) -> Option<usize> {
        match self.state {
            RoundState::PlayerTurn(index) => Some(index),
            _ => None,
        }
    }

    /// Returns the turn cursor, in `0..=player_count()`.
    ///
    /// `player_count()` means every player has finished.
    #[must_use]
    pub fn current_player_index(&self) -> usize {
        match self.state {
            RoundState::AwaitingDeal => 0,
            RoundState::PlayerTurn(index) => index,
            RoundState::DealerTurn | RoundState::Resolved => self.player_hands.len(),
        }
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_hands.len()
    }

    /// Returns the hand of the player at `index`.
    #[must_use]
    pub fn player_hand(&self, index: usize) -> Option<&Hand> {
        self.player_hands.get(index)
    }

    /// Returns all player hands in seat order.
    #[must_use]
    pub fn player_hands(&self) -> &[Hand] {
        &self.player_hands
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns whether the dealer's hole card has been revealed.
    #[must_use]
    pub const fn dealer_revealed(&self) -> bool {
        self.dealer_hand.is_hole_revealed()
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    fn hand(&self, participant: Participant) -> Result<&Hand, RoundError> {
        match participant {
            Participant::Player(index) => self
                .player_hands
                .get(index)
                .ok_or(RoundError::PlayerNotFound(index)),
            Participant::Dealer => Ok(self.dealer_hand.hand()),
        }
    }

    /// Returns the full blackjack value of a participant's hand.
    ///
    /// The dealer's hole card is included even while it is face down.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::PlayerNotFound`] for an unknown seat.
    pub fn hand_value(&self, participant: Participant) -> Result<u8, RoundError> {
        self.hand(participant).map(Hand::value)
    }

    /// Returns whether a participant's hand is over 21.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::PlayerNotFound`] for an unknown seat.
    pub fn is_bust(&self, participant: Participant) -> Result<bool, RoundError> {
        self.hand(participant).map(Hand::is_bust)
    }
}

//! Round configuration options.

use crate::card::DECK_SIZE;
use crate::error::RoundError;
use crate::round::cards_for_deal;

/// Configuration for a blackjack round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use shoe21::RoundOptions;
///
/// let options = RoundOptions::default().with_decks(6).with_players(3);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Number of seated players, not counting the dealer.
    pub players: usize,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            decks: 2,
            players: 1,
        }
    }
}

impl RoundOptions {
    /// Creates options for `decks` decks and `players` players.
    #[must_use]
    pub const fn new(decks: u8, players: usize) -> Self {
        Self { decks, players }
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use shoe21::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use shoe21::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_players(4);
    /// assert_eq!(options.players, 4);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Checks that the options describe a playable round.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NoDecks`] or [`RoundError::NoPlayers`] when the
    /// respective count is zero, and [`RoundError::Exhausted`] when a full
    /// shoe of `decks` decks cannot cover the initial deal.
    pub const fn validate(&self) -> Result<(), RoundError> {
        if self.decks == 0 {
            return Err(RoundError::NoDecks);
        }
        if self.players == 0 {
            return Err(RoundError::NoPlayers);
        }

        let capacity = self.decks as usize * DECK_SIZE;
        match cards_for_deal(self.players) {
            Some(needed) if needed <= capacity => Ok(()),
            Some(needed) => Err(RoundError::Exhausted {
                requested: needed,
                remaining: capacity,
            }),
            None => Err(RoundError::Exhausted {
                requested: usize::MAX,
                remaining: capacity,
            }),
        }
    }
}

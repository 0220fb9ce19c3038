//! The shoe: one or more shuffled decks dealt from the top.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, standard_deck};
use crate::error::ShoeError;

/// An ordered collection of cards drawn from one or more standard decks.
///
/// Dealt cards are removed for good; a new shoe is the only way to get
/// them back.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Remaining cards; the top of the shoe is the last element.
    cards: Vec<Card>,
    decks: u8,
}

impl Shoe {
    /// Builds a shuffled shoe of `decks` standard decks from a seed.
    ///
    /// The same seed always yields the same order.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::NoDecks`] if `decks` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use shoe21::Shoe;
    ///
    /// let shoe = Shoe::new(2, 7).unwrap();
    /// assert_eq!(shoe.remaining(), 104);
    /// ```
    pub fn new(decks: u8, seed: u64) -> Result<Self, ShoeError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::shuffled(decks, &mut rng)
    }

    /// Builds a shuffled shoe of `decks` standard decks using `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::NoDecks`] if `decks` is zero.
    pub fn shuffled<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Result<Self, ShoeError> {
        if decks == 0 {
            return Err(ShoeError::NoDecks);
        }

        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);
        for _ in 0..decks {
            cards.extend(standard_deck());
        }
        cards.shuffle(rng);

        log::debug!("built shoe of {decks} deck(s), {} cards", cards.len());
        Ok(Self { cards, decks })
    }

    /// Builds a stacked shoe that deals `cards` in the given order.
    ///
    /// The first element is the first card dealt. Useful for replaying a
    /// known sequence.
    ///
    /// ```
    /// use shoe21::{Card, Rank, Shoe, Suit};
    ///
    /// let mut shoe = Shoe::from_cards(vec![
    ///     Card::new(Suit::Spades, Rank::Ace),
    ///     Card::new(Suit::Hearts, Rank::Nine),
    /// ]);
    /// assert_eq!(shoe.deal_one().unwrap().rank, Rank::Ace);
    /// ```
    #[must_use]
    pub fn from_cards(mut cards: Vec<Card>) -> Self {
        cards.reverse();
        let decks = cards.len().div_ceil(DECK_SIZE).clamp(1, u8::MAX as usize) as u8;
        Self { cards, decks }
    }

    /// Removes and returns the top `n` cards in dealing order.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if fewer than `n` cards remain; the
    /// shoe is left untouched in that case.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, ShoeError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(ShoeError::Exhausted {
                requested: n,
                remaining,
            });
        }

        let mut dealt = self.cards.split_off(remaining - n);
        dealt.reverse();
        Ok(dealt)
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if the shoe is empty.
    pub fn deal_one(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop().ok_or(ShoeError::Exhausted {
            requested: 1,
            remaining: 0,
        })
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of decks the shoe was built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the next card without dealing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }
}

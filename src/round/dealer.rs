use alloc::vec::Vec;

use crate::card::Card;
use crate::error::RoundError;
use crate::result::{Outcome, PlayerResult, RoundResult};

use super::{Participant, Round, RoundState};

/// The dealer draws below this value and stands on it or above, soft or
/// hard.
pub const DEALER_STANDS_ON: u8 = 17;

impl Round {
    /// Returns whether the dealer must draw another card.
    #[must_use]
    pub fn dealer_should_hit(&self) -> bool {
        self.dealer_hand.value() < DEALER_STANDS_ON
    }

    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals their hole card and draws until reaching 17 or
    /// higher, standing on soft 17.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] outside the dealer's turn, or
    /// [`RoundError::Exhausted`] if the shoe runs out while the dealer must
    /// draw.
    pub fn play_dealer_turn(&mut self) -> Result<Vec<Card>, RoundError> {
        if self.state != RoundState::DealerTurn {
            return Err(RoundError::InvalidState);
        }

        self.dealer_hand.reveal_hole();

        let mut drawn = Vec::new();
        while self.dealer_should_hit() {
            drawn.push(self.hit(Participant::Dealer)?);
        }

        self.state = RoundState::Resolved;
        log::info!(
            "round resolved: dealer {}{} after drawing {} card(s)",
            self.dealer_hand.value(),
            if self.dealer_hand.is_bust() { " (bust)" } else { "" },
            drawn.len()
        );

        Ok(drawn)
    }

    /// Compares every player's hand against the dealer's.
    ///
    /// A bust player loses regardless of the dealer. Otherwise the player
    /// wins if the dealer busts or holds less, pushes on equal values and
    /// loses on less.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] if the dealer has not played
    /// yet.
    pub fn resolve(&self) -> Result<RoundResult, RoundError> {
        if self.state != RoundState::Resolved {
            return Err(RoundError::InvalidState);
        }

        let dealer_value = self.dealer_hand.value();
        let dealer_bust = self.dealer_hand.is_bust();

        let players = self
            .player_hands
            .iter()
            .enumerate()
            .map(|(player_index, hand)| {
                let player_value = hand.value();
                let outcome = if hand.is_bust() {
                    Outcome::Busted
                } else if dealer_bust || player_value > dealer_value {
                    Outcome::Won
                } else if player_value == dealer_value {
                    Outcome::Push
                } else {
                    Outcome::Lost
                };

                PlayerResult {
                    player_index,
                    outcome,
                    player_value,
                }
            })
            .collect();

        Ok(RoundResult {
            players,
            dealer_value,
            dealer_bust,
        })
    }
}

use crate::error::RoundError;

use super::{Round, RoundState};

/// Returns how many cards the initial deal takes for `players` players, or
/// `None` if the count overflows.
pub(crate) const fn cards_for_deal(players: usize) -> Option<usize> {
    match players.checked_add(1) {
        Some(seats) => seats.checked_mul(2),
        None => None,
    }
}

impl Round {
    /// Deals two cards to every player in seat order, then two to the
    /// dealer.
    ///
    /// Afterwards the first player is due to act. Players dealt a natural 21
    /// stand automatically; if every player has one, the round moves
    /// straight to the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::AlreadyDealt`] if the hands were already
    /// dealt, or [`RoundError::Exhausted`] if the shoe cannot cover the
    /// whole deal. No cards are dealt on error.
    pub fn deal_initial_hands(&mut self) -> Result<(), RoundError> {
        if self.state != RoundState::AwaitingDeal {
            return Err(RoundError::AlreadyDealt);
        }

        let remaining = self.shoe.remaining();
        let cards_needed = cards_for_deal(self.player_hands.len()).unwrap_or(usize::MAX);
        if remaining < cards_needed {
            return Err(RoundError::Exhausted {
                requested: cards_needed,
                remaining,
            });
        }

        for hand in &mut self.player_hands {
            hand.extend(self.shoe.deal(2)?);
        }
        for card in self.shoe.deal(2)? {
            self.dealer_hand.add_card(card);
        }

        log::debug!(
            "dealt {} player hand(s), dealer shows {:?}",
            self.player_hands.len(),
            self.dealer_hand.up_card()
        );

        self.seat_from(0);

        Ok(())
    }
}

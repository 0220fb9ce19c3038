use crate::card::Card;
use crate::error::RoundError;
use crate::hand::BLACKJACK;

use super::{Participant, Round, RoundState};

impl Round {
    fn ensure_turn(&self, participant: Participant) -> Result<(), RoundError> {
        match participant {
            Participant::Player(index) => {
                if index >= self.player_hands.len() {
                    return Err(RoundError::PlayerNotFound(index));
                }
                match self.state {
                    RoundState::PlayerTurn(current) if current == index => Ok(()),
                    RoundState::PlayerTurn(_) | RoundState::DealerTurn => {
                        Err(RoundError::NotYourTurn)
                    }
                    RoundState::AwaitingDeal | RoundState::Resolved => {
                        Err(RoundError::InvalidState)
                    }
                }
            }
            Participant::Dealer => match self.state {
                RoundState::DealerTurn => Ok(()),
                RoundState::PlayerTurn(_) => Err(RoundError::NotYourTurn),
                RoundState::AwaitingDeal | RoundState::Resolved => Err(RoundError::InvalidState),
            },
        }
    }

    /// Deals one card to a participant's hand.
    ///
    /// A player may only hit on their own turn; a hit that busts or reaches
    /// exactly 21 ends that turn. The dealer may only be hit during the
    /// dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::PlayerNotFound`] for an unknown seat,
    /// [`RoundError::NotYourTurn`] or [`RoundError::InvalidState`] when the
    /// participant may not act now, and [`RoundError::Exhausted`] if the
    /// shoe is empty.
    pub fn hit(&mut self, participant: Participant) -> Result<Card, RoundError> {
        self.ensure_turn(participant)?;

        let card = self.shoe.deal_one()?;

        match participant {
            Participant::Player(index) => {
                let hand = &mut self.player_hands[index];
                hand.add_card(card);
                let value = hand.value();
                log::debug!("player {index} hits {card}, now {value}");

                if value >= BLACKJACK {
                    self.advance_turn();
                }
            }
            Participant::Dealer => {
                self.dealer_hand.add_card(card);
                log::debug!("dealer draws {card}, now {}", self.dealer_hand.value());
            }
        }

        Ok(card)
    }

    /// Ends the current player's turn without taking a card.
    ///
    /// Returns the seat index of the player who stood.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] if no player is due to act.
    pub fn stand(&mut self) -> Result<usize, RoundError> {
        let RoundState::PlayerTurn(index) = self.state else {
            return Err(RoundError::InvalidState);
        };

        log::debug!("player {index} stands on {}", self.player_hands[index].value());
        self.advance_turn();

        Ok(index)
    }

    /// Moves the turn cursor to the next seat, or to the dealer after the
    /// last seat.
    pub(super) fn advance_turn(&mut self) {
        if let RoundState::PlayerTurn(index) = self.state {
            self.seat_from(index + 1);
        }
    }

    /// Hands the turn to the first seat at or after `index` that still has
    /// to act. A player dealt a natural 21 stands automatically.
    pub(super) fn seat_from(&mut self, index: usize) {
        let next = self
            .player_hands
            .iter()
            .enumerate()
            .skip(index)
            .find(|(seat, hand)| {
                let natural = hand.is_blackjack();
                if natural {
                    log::debug!("player {seat} has blackjack");
                }
                !natural
            })
            .map(|(seat, _)| seat);

        self.state = next.map_or(RoundState::DealerTurn, RoundState::PlayerTurn);
        log::debug!("turn passes to {:?}", self.state);
    }
}

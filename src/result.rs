//! Round result types.

use alloc::vec::Vec;
use core::fmt;

/// Result of a player's hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has higher value).
    Won,
    /// Dealer has the higher value.
    Lost,
    /// Push (tie).
    Push,
    /// Player went over 21.
    Busted,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Won => "Won!",
            Self::Lost => "Lost!",
            Self::Push => "Push!",
            Self::Busted => "Busted!",
        })
    }
}

/// Result for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerResult {
    /// Zero-based seat index.
    pub player_index: usize,
    /// The outcome of the hand.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u8,
}

impl fmt::Display for PlayerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}: {}", self.player_index + 1, self.outcome)
    }
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl RoundResult {
    /// Returns the outcomes in seat order.
    #[must_use]
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.players.iter().map(|p| p.outcome).collect()
    }
}

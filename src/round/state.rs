//! Round state types.

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// Hands have not been dealt yet.
    AwaitingDeal,
    /// Waiting for the player at this seat index to act.
    PlayerTurn(usize),
    /// All players are done; the dealer plays out their hand.
    DealerTurn,
    /// The dealer has finished and outcomes can be read.
    Resolved,
}

/// A seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Participant {
    /// The player at this zero-based seat index.
    Player(usize),
    /// The dealer.
    Dealer,
}

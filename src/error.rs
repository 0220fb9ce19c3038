//! Error types for shoe and round operations.

use thiserror::Error;

/// Broad category of an engine error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A constructor or lookup was given a bad argument.
    InvalidArgument,
    /// The shoe cannot supply the requested cards.
    Exhausted,
    /// The operation is not allowed in the round's current state.
    InvalidStateTransition,
}

/// Errors that can occur while building or dealing from a shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// The shoe must contain at least one deck.
    #[error("a shoe needs at least one deck")]
    NoDecks,
    /// More cards were requested than remain in the shoe.
    #[error("requested {requested} cards but only {remaining} remain in the shoe")]
    Exhausted {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the shoe.
        remaining: usize,
    },
}

impl ShoeError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NoDecks => ErrorKind::InvalidArgument,
            Self::Exhausted { .. } => ErrorKind::Exhausted,
        }
    }
}

/// Errors that can occur during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The round must use at least one deck.
    #[error("a round needs at least one deck")]
    NoDecks,
    /// The round must seat at least one player.
    #[error("a round needs at least one player")]
    NoPlayers,
    /// Player index is out of range.
    #[error("player {0} not found")]
    PlayerNotFound(usize),
    /// Not enough cards in the shoe.
    #[error("requested {requested} cards but only {remaining} remain in the shoe")]
    Exhausted {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the shoe.
        remaining: usize,
    },
    /// Initial hands have already been dealt.
    #[error("initial hands have already been dealt")]
    AlreadyDealt,
    /// Not this participant's turn.
    #[error("not this participant's turn")]
    NotYourTurn,
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
}

impl RoundError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NoDecks | Self::NoPlayers | Self::PlayerNotFound(_) => ErrorKind::InvalidArgument,
            Self::Exhausted { .. } => ErrorKind::Exhausted,
            Self::AlreadyDealt | Self::NotYourTurn | Self::InvalidState => {
                ErrorKind::InvalidStateTransition
            }
        }
    }
}

impl From<ShoeError> for RoundError {
    fn from(err: ShoeError) -> Self {
        match err {
            ShoeError::NoDecks => Self::NoDecks,
            ShoeError::Exhausted {
                requested,
                remaining,
            } => Self::Exhausted {
                requested,
                remaining,
            },
        }
    }
}

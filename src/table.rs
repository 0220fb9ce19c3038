//! A table session that plays round after round.
//!
//! [`Table`] owns the current [`Round`] behind a single mutex, so it can be
//! shared with a front end through `&self`. It drives the parts of the
//! round that need no player input: the dealer plays as soon as the last
//! player is done, and [`Table::reset`] replaces the round with a fresh one
//! dealt from a newly shuffled shoe.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::RoundError;
use crate::options::RoundOptions;
use crate::result::RoundResult;
use crate::round::{Participant, Round, RoundState};
use crate::shoe::Shoe;
use crate::sync::Mutex;

/// What a table action left the round waiting for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// The player at this seat index is due to act.
    PlayerTurn(usize),
    /// The dealer has played and the round is over.
    RoundOver(RoundResult),
}

struct Session {
    round: Round,
    rng: ChaCha8Rng,
    rounds_started: u64,
}

fn deal_round(options: RoundOptions, rng: &mut ChaCha8Rng) -> Result<Round, RoundError> {
    let shoe = Shoe::shuffled(options.decks, rng)?;
    let mut round = Round::from_shoe(options.players, shoe)?;
    round.deal_initial_hands()?;
    Ok(round)
}

impl Session {
    fn reset(&mut self, options: RoundOptions) -> Result<TableEvent, RoundError> {
        self.round = deal_round(options, &mut self.rng)?;
        self.rounds_started += 1;
        log::info!(
            "round {} dealt to {} player(s) from {} deck(s)",
            self.rounds_started,
            options.players,
            options.decks
        );

        self.settle()
    }

    /// Plays the dealer if every player is done.
    fn settle(&mut self) -> Result<TableEvent, RoundError> {
        if self.round.state() == RoundState::DealerTurn {
            self.round.play_dealer_turn()?;
        }

        match self.round.state() {
            RoundState::PlayerTurn(index) => Ok(TableEvent::PlayerTurn(index)),
            RoundState::Resolved => self.round.resolve().map(TableEvent::RoundOver),
            RoundState::AwaitingDeal | RoundState::DealerTurn => Err(RoundError::InvalidState),
        }
    }
}

/// A blackjack table that deals a new round on every reset.
///
/// # Example
///
/// ```
/// use shoe21::{RoundOptions, Table, TableEvent};
///
/// let table = Table::new(RoundOptions::default().with_players(3), 7).unwrap();
///
/// let result = loop {
///     if let Some(result) = table.result() {
///         break result;
///     }
///     if let TableEvent::RoundOver(result) = table.stand().unwrap() {
///         break result;
///     }
/// };
/// assert_eq!(result.players.len(), 3);
///
/// table.reset().unwrap();
/// assert_eq!(table.rounds_started(), 2);
/// ```
pub struct Table {
    options: RoundOptions,
    session: Mutex<Session>,
}

impl Table {
    /// Opens a table and deals the first round.
    ///
    /// Every shoe the table uses is derived from `seed`, so a table replays
    /// identically for the same seed and actions.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NoDecks`] or [`RoundError::NoPlayers`] for
    /// invalid options, or [`RoundError::Exhausted`] if a single shoe cannot
    /// cover the initial deal.
    pub fn new(options: RoundOptions, seed: u64) -> Result<Self, RoundError> {
        options.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let round = deal_round(options, &mut rng)?;
        let mut session = Session {
            round,
            rng,
            rounds_started: 1,
        };
        session.settle()?;
        log::info!("table opened with seed {seed}");

        Ok(Self {
            options,
            session: Mutex::new(session),
        })
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> RoundOptions {
        self.options
    }

    /// Returns how many rounds have been dealt at this table.
    #[must_use]
    pub fn rounds_started(&self) -> u64 {
        self.session.lock().rounds_started
    }

    /// Runs `f` against the current round.
    #[must_use]
    pub fn with_round<T>(&self, f: impl FnOnce(&Round) -> T) -> T {
        f(&self.session.lock().round)
    }

    /// Returns a copy of the current round.
    #[must_use]
    pub fn snapshot(&self) -> Round {
        self.session.lock().round.clone()
    }

    /// Returns the seat index of the player who is due to act.
    #[must_use]
    pub fn current_player(&self) -> Option<usize> {
        self.session.lock().round.current_player()
    }

    /// Returns the outcome of the current round once the dealer has played.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        self.session.lock().round.resolve().ok()
    }

    /// Hits the player who is due to act.
    ///
    /// Returns the card dealt and what the round waits for next. If the hit
    /// ends the last player's turn, the dealer plays before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] if no player is due to act, or
    /// [`RoundError::Exhausted`] if the shoe runs out.
    pub fn hit(&self) -> Result<(Card, TableEvent), RoundError> {
        let mut session = self.session.lock();
        let index = session
            .round
            .current_player()
            .ok_or(RoundError::InvalidState)?;

        let card = session.round.hit(Participant::Player(index))?;
        let event = session.settle()?;

        Ok((card, event))
    }

    /// Stands the player who is due to act.
    ///
    /// If this was the last player, the dealer plays before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] if no player is due to act, or
    /// [`RoundError::Exhausted`] if the shoe runs out during the dealer's
    /// turn.
    pub fn stand(&self) -> Result<TableEvent, RoundError> {
        let mut session = self.session.lock();
        session.round.stand()?;
        session.settle()
    }

    /// Discards the current round and deals a new one from a fresh shoe.
    ///
    /// Allowed at any point of the round.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Exhausted`] if a single shoe cannot cover the
    /// initial deal.
    pub fn reset(&self) -> Result<TableEvent, RoundError> {
        self.session.lock().reset(self.options)
    }

    /// Closes the table and returns the current round.
    #[must_use]
    pub fn into_round(self) -> Round {
        self.session.into_inner().round
    }
}

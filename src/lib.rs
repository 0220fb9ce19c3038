//! A single-table blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that owns a shuffled [`Shoe`], one
//! hand per player and the dealer's hand, and walks the round through
//! dealing, player turns, the dealer's turn and resolution. [`Table`] wraps
//! a round behind a mutex and deals a fresh one on every reset.
//!
//! # Example
//!
//! ```
//! use shoe21::{Participant, Round, RoundOptions, RoundState};
//!
//! let mut round = Round::new(RoundOptions::default(), 42).unwrap();
//! round.deal_initial_hands().unwrap();
//!
//! while let RoundState::PlayerTurn(index) = round.state() {
//!     if round.hand_value(Participant::Player(index)).unwrap() < 17 {
//!         round.hit(Participant::Player(index)).unwrap();
//!     } else {
//!         round.stand().unwrap();
//!     }
//! }
//! round.play_dealer_turn().unwrap();
//!
//! let outcomes = round.resolve().unwrap().outcomes();
//! assert_eq!(outcomes.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod shoe;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ErrorKind, RoundError, ShoeError};
pub use hand::{BLACKJACK, DealerHand, Hand};
pub use options::RoundOptions;
pub use result::{Outcome, PlayerResult, RoundResult};
pub use round::{DEALER_STANDS_ON, Participant, Round, RoundState};
pub use shoe::Shoe;
pub use table::{Table, TableEvent};

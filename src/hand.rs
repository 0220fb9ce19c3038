//! Player and dealer hand representations.

use alloc::vec::Vec;

use crate::card::Card;

/// Highest value a hand can have without busting.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u32 = 0;
    let mut soft_aces: usize = 0;

    for card in cards {
        if card.rank.is_ace() {
            soft_aces += 1;
        }
        value = value.saturating_add(u32::from(card.value()));
    }

    // Demote one soft ace at a time from 11 to 1.
    while value > u32::from(BLACKJACK) && soft_aces > 0 {
        value -= 10;
        soft_aces -= 1;
    }

    (u8::try_from(value).unwrap_or(u8::MAX), soft_aces > 0)
}

/// An ordered set of cards held by one participant.
///
/// Hands only grow; cards are appended as they are dealt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the blackjack value of the hand.
    ///
    /// Aces count 11 and are demoted to 1 one at a time while the total
    /// is over 21. Totals above `u8::MAX` saturate; such a hand is bust
    /// either way.
    ///
    /// ```
    /// use shoe21::{Card, Hand, Rank, Suit};
    ///
    /// let hand: Hand = [Rank::Ace, Rank::Ace, Rank::Nine]
    ///     .into_iter()
    ///     .map(|rank| Card::new(Suit::Clubs, rank))
    ///     .collect();
    /// assert_eq!(hand.value(), 21);
    /// ```
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is a blackjack (two cards totalling 21).
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Hand {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

/// The dealer's hand.
///
/// The second card is the hole card. It always counts toward
/// [`value`](Self::value) but stays masked in the `visible_*` views until
/// [`reveal_hole`](Self::reveal_hole) is called.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    hand: Hand,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns all cards in the hand, including the hole card.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Returns the underlying hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns the hole card (second card).
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.hand.cards().get(1)
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Cards as a table observer sees them: `None` marks the face-down
    /// hole card.
    pub fn visible_cards(&self) -> impl Iterator<Item = Option<Card>> + '_ {
        let revealed = self.hole_revealed;
        self.hand
            .cards()
            .iter()
            .enumerate()
            .map(move |(i, card)| (revealed || i != 1).then_some(*card))
    }

    /// Value of the cards a table observer can see.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.visible_cards()
                .flatten()
                .collect::<Hand>()
                .value()
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.hand.is_blackjack()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.hand.is_soft()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }
}

//! Table session tests.

use shoe21::{
    Hand, Outcome, Participant, Round, RoundError, RoundOptions, RoundState, Table, TableEvent,
};

fn cards_in_play(round: &Round) -> usize {
    round.player_hands().iter().map(Hand::len).sum::<usize>() + round.dealer_hand().len()
}

/// Hits below 17 and stands otherwise until the round is over.
fn play_out(table: &Table) -> shoe21::RoundResult {
    if let Some(result) = table.result() {
        return result;
    }

    loop {
        let below_17 = table.with_round(|round| {
            let index = round.current_player().unwrap();
            round.hand_value(Participant::Player(index)).unwrap() < 17
        });

        let event = if below_17 {
            table.hit().unwrap().1
        } else {
            table.stand().unwrap()
        };

        if let TableEvent::RoundOver(result) = event {
            return result;
        }
    }
}

#[test]
fn table_rejects_invalid_options() {
    assert_eq!(
        Table::new(RoundOptions::default().with_players(0), 1).err(),
        Some(RoundError::NoPlayers)
    );
    assert_eq!(
        Table::new(RoundOptions::default().with_decks(0), 1).err(),
        Some(RoundError::NoDecks)
    );
}

#[test]
fn table_deals_the_first_round() {
    let table = Table::new(RoundOptions::new(2, 3), 17).unwrap();

    assert_eq!(table.rounds_started(), 1);
    assert_eq!(table.options(), RoundOptions::new(2, 3));

    let round = table.snapshot();
    assert_ne!(round.state(), RoundState::AwaitingDeal);
    assert_eq!(round.player_count(), 3);
    assert!(round.player_hands().iter().all(|hand| hand.len() == 2));
    assert_eq!(round.cards_remaining() + cards_in_play(&round), 104);
}

#[test]
fn dealer_plays_when_last_player_finishes() {
    for seed in 0..50 {
        let table = Table::new(RoundOptions::new(2, 2), seed).unwrap();
        let result = play_out(&table);

        let round = table.snapshot();
        assert_eq!(round.state(), RoundState::Resolved);
        assert!(round.dealer_revealed());
        assert!(round.dealer_hand().value() >= 17);
        assert_eq!(result.players.len(), 2);
        assert_eq!(table.result(), Some(result));
        assert_eq!(table.current_player(), None);
    }
}

#[test]
fn actions_after_round_over_are_rejected() {
    let table = Table::new(RoundOptions::default(), 4).unwrap();
    play_out(&table);

    assert_eq!(table.hit().unwrap_err(), RoundError::InvalidState);
    assert_eq!(table.stand().unwrap_err(), RoundError::InvalidState);
}

#[test]
fn reset_starts_a_fresh_round() {
    let table = Table::new(RoundOptions::new(2, 3), 23).unwrap();
    let first = play_out(&table);
    assert_eq!(first.players.len(), 3);
    assert_eq!(table.snapshot().state(), RoundState::Resolved);

    table.reset().unwrap();
    assert_eq!(table.rounds_started(), 2);

    let round = table.snapshot();
    assert!(round.player_hands().iter().all(|hand| hand.len() == 2));
    assert_eq!(round.cards_remaining() + cards_in_play(&round), 104);
}

#[test]
fn reset_mid_round_discards_progress() {
    let table = Table::new(RoundOptions::new(1, 1), 99).unwrap();
    if table.current_player().is_some() {
        table.hit().unwrap();
    }

    table.reset().unwrap();
    let round = table.into_round();
    assert_eq!(round.player_hand(0).unwrap().len(), 2);
    assert_eq!(round.cards_remaining() + cards_in_play(&round), 52);
}

#[test]
fn same_seed_replays_the_same_table() {
    let a = Table::new(RoundOptions::new(2, 4), 1234).unwrap();
    let b = Table::new(RoundOptions::new(2, 4), 1234).unwrap();

    assert_eq!(a.snapshot().player_hands(), b.snapshot().player_hands());
    assert_eq!(play_out(&a), play_out(&b));

    a.reset().unwrap();
    b.reset().unwrap();
    assert_eq!(
        a.snapshot().dealer_hand().cards(),
        b.snapshot().dealer_hand().cards()
    );
}

#[test]
fn table_of_naturals_resolves_while_opening() {
    let mut naturals = 0;

    for seed in 0..1000 {
        let table = Table::new(RoundOptions::new(2, 1), seed).unwrap();
        let round = table.snapshot();
        if !round.player_hand(0).unwrap().is_blackjack() {
            continue;
        }
        naturals += 1;

        assert_eq!(round.state(), RoundState::Resolved);
        assert!(round.dealer_revealed());
        assert_eq!(table.current_player(), None);

        let result = table.result().unwrap();
        let expected = if round.dealer_hand().value() == 21 {
            Outcome::Push
        } else {
            Outcome::Won
        };
        assert_eq!(result.outcomes(), vec![expected]);
        assert_eq!(table.stand().unwrap_err(), RoundError::InvalidState);
    }

    assert!(naturals > 0);
}

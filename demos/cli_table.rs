//! CLI blackjack table.
//!
//! Usage: `cargo run --example cli_table -- [players] [decks]`.
//! Set `RUST_LOG=debug` to see the engine's event log.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use shoe21::{Card, DealerHand, Hand, RoundOptions, RoundResult, Suit, Table};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let players = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);
    let decks = args.next().and_then(|s| s.parse().ok()).unwrap_or(2);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let table = match Table::new(RoundOptions::new(decks, players), seed) {
        Ok(table) => table,
        Err(err) => {
            println!("Cannot open table: {err}");
            return;
        }
    };

    println!("Blackjack table with {players} player(s) and {decks} deck(s)");
    println!("Commands: [h]it [s]tand [r]eset [q]uit");
    announce_naturals(&table);

    loop {
        if let Some(result) = table.result() {
            finish_round(&table, &result);
            if !deal_again(&table) {
                return;
            }
            continue;
        }

        print_table(&table);

        let Some(player) = table.current_player() else {
            println!("Round stalled, dealing a new one.");
            if !deal_again(&table) {
                return;
            }
            continue;
        };

        let event = match prompt_line(&format!("Player {} action: ", player + 1)).as_str() {
            "h" | "hit" => table.hit().map(|(card, event)| {
                println!("Player {} draws {}", player + 1, format_card(&card));
                report_finished_hand(&table, player);
                event
            }),
            "s" | "stand" => table.stand(),
            "r" | "reset" => {
                if !deal_again(&table) {
                    return;
                }
                continue;
            }
            "q" | "quit" => return,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        if let Err(err) = event {
            println!("Action error: {err}");
        }
    }
}

fn deal_again(table: &Table) -> bool {
    match table.reset() {
        Ok(_) => {
            announce_naturals(table);
            true
        }
        Err(err) => {
            println!("Reset error: {err}");
            false
        }
    }
}

fn announce_naturals(table: &Table) {
    table.with_round(|round| {
        for (index, hand) in round.player_hands().iter().enumerate() {
            if hand.is_blackjack() {
                println!("Player {} got a Blackjack!", index + 1);
            }
        }
    });
}

fn report_finished_hand(table: &Table, player: usize) {
    table.with_round(|round| {
        if let Some(hand) = round.player_hand(player) {
            if hand.is_bust() {
                println!("Player {} busted!", player + 1);
            } else if hand.value() == 21 {
                println!("Player {} got 21!", player + 1);
            }
        }
    });
}

fn finish_round(table: &Table, result: &RoundResult) {
    table.with_round(|round| {
        println!("\nDealer: {} (value {})", format_dealer(round.dealer_hand()), result.dealer_value);
        for (index, hand) in round.player_hands().iter().enumerate() {
            println!("Player {}: {} | value {}", index + 1, format_hand(hand), hand.value());
        }
    });

    println!("\nResults");
    for player in &result.players {
        println!("  {player}");
    }
    println!();
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(table: &Table) {
    table.with_round(|round| {
        println!("\nShoe: {} cards remaining", round.cards_remaining());

        let dealer = round.dealer_hand();
        println!(
            "Dealer: {} (value {})",
            format_dealer(dealer),
            dealer.visible_value()
        );

        for (index, hand) in round.player_hands().iter().enumerate() {
            let marker = if round.current_player() == Some(index) { "*" } else { " " };
            println!(
                "{marker} Player {}: {} | value {}",
                index + 1,
                format_hand(hand),
                hand.value()
            );
        }
        println!();
    });
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    dealer
        .visible_cards()
        .map(|card| card.map_or_else(|| "??".to_string(), |card| format_card(&card)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

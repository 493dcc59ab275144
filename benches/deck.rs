use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use poker_drill::config::TableConfig;
use poker_drill::deck::Deck;
use poker_drill::state::Command;
use poker_drill::table::Table;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_deal_and_return(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut deck = Deck::new();
    c.bench_function("deal_and_return_7", |b| {
        b.iter(|| {
            let cards = deck.deal_cards(black_box(7), &mut rng).unwrap();
            for card in &cards {
                deck.return_card_to_deck(card).unwrap();
            }
        })
    });
}

fn bench_street_walk(c: &mut Criterion) {
    let mut table = Table::new(TableConfig::default().with_seed(2));
    table.auto_advance().unwrap();
    c.bench_function("flop_turn_river_reset", |b| {
        b.iter(|| {
            for command in [Command::Flop, Command::Turn, Command::River, Command::Reset] {
                table.apply(black_box(command)).unwrap();
            }
        })
    });
}

criterion_group!(benches, bench_deal_and_return, bench_street_walk);
criterion_main!(benches);

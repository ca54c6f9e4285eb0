use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use parlor_games::cards::parse_cards;
use parlor_games::deck::Deck;
use parlor_games::twenty_one::{Hand, Round};

fn bench_hand_total(c: &mut Criterion) {
    let hands = [
        ("two_cards", "Kh 7d"),
        ("soft", "5c As Kd"),
        ("many_aces", "As Ah Ad Ac 2c 3d 4h"),
    ];

    let mut g = c.benchmark_group("hand_total");
    for (name, cards) in hands {
        let hand = match parse_cards(cards) {
            Ok(cards) => Hand::from_cards(cards),
            Err(err) => panic!("bad bench input {cards}: {err}"),
        };
        g.bench_with_input(BenchmarkId::new(name, cards), &hand, |b, input| {
            b.iter(|| black_box(input).total())
        });
    }
    g.finish();
}

fn bench_dealer_round(c: &mut Criterion) {
    c.bench_function("dealer_round", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut deck = Deck::standard();
            deck.shuffle_seeded(seed);
            let mut round = Round::new(deck);
            let _ = round.deal().and_then(|_| round.stay()).and_then(|_| round.play_dealer());
            black_box(round.outcome())
        })
    });
}

criterion_group!(benches, bench_hand_total, bench_dealer_round);
criterion_main!(benches);

//! Performance benchmarks for standings and pairing generation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use swiss_room::ranking::{merge_ranking, pair_adjacent};
use swiss_room::store::InMemoryPlayerStore;
use swiss_room::types::PlayerId;
use swiss_room::Tournament;

/// Tournament with `players` entrants after `rounds` Swiss rounds, where the
/// first player of every pairing wins
fn create_bench_tournament(players: usize, rounds: usize) -> Tournament {
    let tournament = Tournament::new(Arc::new(InMemoryPlayerStore::new()));
    for i in 0..players {
        tournament
            .register_player(&format!("player_{}", i))
            .unwrap();
    }
    for _ in 0..rounds {
        for pairing in tournament.swiss_pairings().unwrap() {
            tournament.report_match(pairing.id1, pairing.id2).unwrap();
        }
    }
    tournament
}

fn bench_standings(c: &mut Criterion) {
    let mut group = c.benchmark_group("standings");
    for players in [16, 64, 256] {
        let tournament = create_bench_tournament(players, 4);
        group.bench_with_input(BenchmarkId::from_parameter(players), &tournament, |b, t| {
            b.iter(|| black_box(t.player_standings().unwrap()))
        });
    }
    group.finish();
}

fn bench_pairings(c: &mut Criterion) {
    let mut group = c.benchmark_group("swiss_pairings");
    for players in [16, 64, 256] {
        let tournament = create_bench_tournament(players, 4);
        group.bench_with_input(BenchmarkId::from_parameter(players), &tournament, |b, t| {
            b.iter(|| black_box(t.swiss_pairings().unwrap()))
        });
    }
    group.finish();
}

fn bench_pure_pairing(c: &mut Criterion) {
    let tournament = create_bench_tournament(1024, 5);
    let standings = tournament.player_standings().unwrap();
    let all_ids: Vec<PlayerId> = (1..=1024).collect();
    let ranking: Vec<PlayerId> = standings.iter().map(|row| row.id).collect();
    let aggregate: Vec<PlayerId> = ranking.iter().copied().take(900).collect();

    c.bench_function("pair_adjacent_1024", |b| {
        b.iter(|| black_box(pair_adjacent(black_box(&ranking)).unwrap()))
    });

    c.bench_function("merge_ranking_1024", |b| {
        b.iter(|| black_box(merge_ranking(black_box(&aggregate), black_box(&all_ids)).unwrap()))
    });
}

criterion_group!(benches, bench_standings, bench_pairings, bench_pure_pairing);
criterion_main!(benches);

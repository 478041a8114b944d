//! # Cube Escrow Benchmarks
//!
//! | Area | Measured |
//! |------|----------|
//! | cube-01 State Model | single move, 100-move sequence |
//! | cube-02 Move Notation | parsing a 100-token solution |
//! | cube-04 Escrow | full init + solve round trip on the in-memory ledger |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cube_01_state_model::{CubeState, Move};
use cube_02_move_notation::parse_moves;
use cube_tests::support::{random_scramble, random_sequence, Harness};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared_types::LAMPORTS_PER_SOL;

// ============================================================================
// CUBE-01: State Model
// ============================================================================

fn bench_apply_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("cube-01-state-model");
    let mut rng = StdRng::seed_from_u64(1);
    let (state, _) = random_scramble(&mut rng, 30);

    group.bench_function("apply_single_move", |b| {
        b.iter(|| black_box(state).apply(black_box(Move::ALL[7])))
    });

    for len in [10usize, 100, 1_000] {
        let seq = random_sequence(&mut rng, len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("apply_sequence", len), &seq, |b, seq| {
            b.iter(|| CubeState::identity().apply_all(black_box(seq)).is_solved())
        });
    }
    group.finish();
}

// ============================================================================
// CUBE-02: Move Notation
// ============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("cube-02-move-notation");
    let mut rng = StdRng::seed_from_u64(2);
    let text = random_sequence(&mut rng, 100).to_string();

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("parse_100_moves", |b| {
        b.iter(|| parse_moves(black_box(&text)))
    });
    group.finish();
}

// ============================================================================
// CUBE-04: Escrow
// ============================================================================

fn bench_escrow_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("cube-04-escrow");
    let h = Harness::new();
    let sponsor = h.wallet(1, 1_000_000);
    let solver = h.wallet(2, 10);
    let mut rng = StdRng::seed_from_u64(3);

    group.bench_function("init_and_solve", |b| {
        b.iter(|| {
            let (cube, solution) = random_scramble(&mut rng, 20);
            let receipt = h
                .open_challenge(sponsor, "bench", cube, LAMPORTS_PER_SOL / 100)
                .unwrap();
            h.submit(solver, "bench", receipt.challenge, &solution.to_string())
                .unwrap()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_apply_moves, bench_parse, bench_escrow_round_trip);
criterion_main!(benches);

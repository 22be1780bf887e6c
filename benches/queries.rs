//! Benchmarks for knowledge base queries.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::seq::SliceRandom;
use rand::SeedableRng;

use wumpus_kb::config::KbConfig;
use wumpus_kb::kb::WumpusKnowledgeBase;
use wumpus_kb::logic::SolverKind;
use wumpus_kb::world::{Action, Percept};

/// A 4x4 knowledge base after a few seeded random turns and moves.
fn walked_kb(solver: SolverKind, steps: u32) -> WumpusKnowledgeBase {
    let mut kb = WumpusKnowledgeBase::new(KbConfig::square(4).with_solver(solver)).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    let moves = [Action::TurnLeft, Action::TurnRight];
    for t in 0..steps {
        kb.record_percept(&Percept::none(), t);
        kb.tell_temporal_physics(t);
        let action = if t % 2 == 0 {
            Action::Forward
        } else {
            *moves.choose(&mut rng).unwrap()
        };
        kb.record_action(action, t);
    }
    kb.record_percept(&Percept::none(), steps);
    kb.tell_temporal_physics(steps);
    kb
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_4x4_three_steps", |bench| {
        bench.iter(|| black_box(walked_kb(SolverKind::OptimizedDpll, 3)))
    });
}

fn bench_safe_rooms(c: &mut Criterion) {
    let optimized = walked_kb(SolverKind::OptimizedDpll, 3);
    c.bench_function("safe_rooms_optimized_dpll", |bench| {
        bench.iter(|| black_box(optimized.safe_rooms(3).unwrap()))
    });

    let baseline = walked_kb(SolverKind::Dpll, 3);
    c.bench_function("safe_rooms_dpll", |bench| {
        bench.iter(|| black_box(baseline.safe_rooms(3).unwrap()))
    });
}

fn bench_current_position(c: &mut Criterion) {
    let kb = walked_kb(SolverKind::OptimizedDpll, 3);
    c.bench_function("current_position_optimized_dpll", |bench| {
        bench.iter(|| black_box(kb.current_position(3)))
    });
}

criterion_group!(benches, bench_build, bench_safe_rooms, bench_current_position);
criterion_main!(benches);

//! Property tests - invariants over random seeds and random action sequences

use fracture_grid::core::{generate, GameState, GeneratorConfig, Snapshot};
use fracture_grid::types::Pos;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Step(i32, i32),
    Activate,
    Stabilize,
    Pick(i32, i32),
    Cancel,
    Undo,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => prop_oneof![Just((1, 0)), Just((-1, 0)), Just((0, 1)), Just((0, -1))]
            .prop_map(|(dx, dy)| Op::Step(dx, dy)),
        2 => Just(Op::Activate),
        1 => Just(Op::Stabilize),
        1 => (-1i32..6, -1i32..6).prop_map(|(x, y)| Op::Pick(x, y)),
        1 => Just(Op::Cancel),
        2 => Just(Op::Undo),
    ]
}

/// Apply `op`; returns whether it reported a change.
fn apply(game: &mut GameState, op: Op) -> bool {
    match op {
        Op::Step(dx, dy) => {
            let target = game.cursor().offset(dx, dy);
            game.move_cursor(target)
        }
        Op::Activate => game.activate(),
        Op::Stabilize => {
            game.enter_stabilize_mode();
            false
        }
        Op::Pick(x, y) => game.stabilize_pick(Pos::new(x, y)),
        Op::Cancel => game.cancel_stabilize_mode(),
        Op::Undo => game.undo(),
    }
}

fn records_history(op: Op) -> bool {
    matches!(op, Op::Step(..) | Op::Activate | Op::Pick(..))
}

fn check_shape(game: &GameState) -> Result<(), TestCaseError> {
    let cells = game.size() * game.size();
    prop_assert_eq!(game.grid().len(), cells);
    prop_assert_eq!(game.goals().len(), cells);
    prop_assert_eq!(game.activated().len(), cells);
    for (i, (&goal, &done)) in game.goals().iter().zip(game.activated()).enumerate() {
        prop_assert!(goal || !done, "cell {} activated without a goal", i);
    }
    prop_assert_eq!(game.history_len(), game.moves() as usize);
    Ok(())
}

proptest! {
    #[test]
    fn generated_levels_are_deterministic_and_playable(seed in any::<u32>()) {
        let config = GeneratorConfig::default();
        let a = generate(seed, &config);
        let b = generate(seed, &config);
        prop_assert_eq!(&a, &b);

        let report = a.generation();
        prop_assert_eq!(report.requested_seed, seed);
        prop_assert_eq!(report.seed, seed.wrapping_add(report.retries_used));
        prop_assert!(report.retries_used <= config.max_retries);
        prop_assert_eq!(report.fallback_accepted, !config.accepts(report.breakdown.total));
        prop_assert!(a.has_any_start_action());
        prop_assert!((3..=5).contains(&a.snapshot().goal_count()));
        for pos in a.snapshot().goal_positions() {
            prop_assert!(!a.grid().is_locked(pos));
        }
        check_shape(&a)?;
    }

    #[test]
    fn random_play_keeps_invariants(seed in 1u32..10_000, ops in prop::collection::vec(op(), 0..80)) {
        let mut game = generate(seed, &GeneratorConfig::default());
        // Pre-mutation snapshots the state should hand back on undo, most recent last.
        let mut expected: Vec<Snapshot> = Vec::new();

        for op in ops {
            let before = game.clone();
            let changed = apply(&mut game, op);

            match op {
                Op::Undo => {
                    prop_assert_eq!(changed, !expected.is_empty());
                    if let Some(prev) = expected.pop() {
                        prop_assert_eq!(game.snapshot(), &prev);
                    } else {
                        prop_assert_eq!(&game, &before);
                    }
                }
                _ if records_history(op) => {
                    if changed {
                        prop_assert_eq!(game.moves(), before.moves() + 1);
                        expected.push(before.snapshot().clone());
                    } else {
                        prop_assert_eq!(&game, &before);
                    }
                }
                _ => {
                    prop_assert_eq!(game.moves(), before.moves());
                    prop_assert_eq!(game.grid(), before.grid());
                }
            }

            if matches!(op, Op::Activate) && changed {
                // Pressure never repairs anything and activation is permanent.
                for (old, new) in before.grid().tiles().iter().zip(game.grid().tiles()) {
                    prop_assert!(new >= old);
                }
                prop_assert_eq!(
                    game.snapshot().activated_count(),
                    before.snapshot().activated_count() + 1
                );
            }
            check_shape(&game)?;
        }
    }

    #[test]
    fn undo_all_returns_to_fresh_level(seed in 1u32..10_000, ops in prop::collection::vec(op(), 0..60)) {
        let fresh = generate(seed, &GeneratorConfig::default());
        let mut game = fresh.clone();
        for op in ops {
            apply(&mut game, op);
        }
        while game.undo() {}

        prop_assert_eq!(game.grid(), fresh.grid());
        prop_assert_eq!(game.activated(), fresh.activated());
        prop_assert_eq!(game.cursor(), fresh.cursor());
        prop_assert_eq!(game.moves(), 0);
    }
}

use hypermaze_grid::ORIGIN;
use hypermaze_session::{BatchKind, Command, DirtyBatches, MazeParams, Session};
use hypermaze_slice::{AxisMapping, Role, SliceMode};
use proptest::prelude::*;

/// A wall-free session: probability 0 leaves every cell passable.
fn open_session(size: [usize; 4]) -> Session {
    Session::new(
        MazeParams {
            size,
            wall_probability: 0.0,
        },
        Some(7),
    )
}

#[test]
fn victory_flips_on_the_final_move_only() {
    let mut s = open_session([2, 2, 2, 2]);
    assert_eq!(s.maze.goal, [1, 1, 1, 1]);
    assert!(!s.victory);
    for axis in 0..4 {
        assert!(!s.victory);
        let dirty = s.handle(Command::Move { axis, delta: 1 });
        assert!(dirty.player && dirty.map);
    }
    assert!(s.victory);
    assert_eq!(s.maze.position, s.maze.goal);
    // Movement stays enabled after victory.
    let dirty = s.handle(Command::Move { axis: 0, delta: -1 });
    assert!(!dirty.is_empty());
    assert!(!s.victory);
}

#[test]
fn rejected_moves_change_nothing() {
    let mut s = open_session([2, 2, 2, 2]);
    let before = s.maze.position;
    let dirty = s.handle(Command::Move { axis: 0, delta: -1 });
    assert_eq!(dirty, DirtyBatches::NONE);
    assert_eq!(s.maze.position, before);
}

#[test]
fn visible_moves_keep_the_maze_batch_clean() {
    let mut s = open_session([3, 3, 3, 3]);
    let hidden = s.axes.axis_of(Role::Hidden);
    let visible = s.axes.axis_of(Role::VisibleX);

    let dirty = s.handle(Command::Move {
        axis: visible,
        delta: 1,
    });
    assert!(!dirty.maze && !dirty.goal);
    assert!(dirty.player && dirty.map && !dirty.hint);

    let dirty = s.handle(Command::Move {
        axis: hidden,
        delta: 1,
    });
    assert!(dirty.maze && dirty.goal && dirty.player && dirty.map);
    assert!(!dirty.hint);
}

#[test]
fn swap_axis_dirties_everything_but_the_map() {
    let mut s = open_session([3, 3, 3, 3]);
    let dirty = s.handle(Command::SwapAxis { axis: 1 });
    assert!(dirty.maze && dirty.goal && dirty.player && dirty.hint);
    assert!(!dirty.map);
    assert_eq!(s.axes.hidden(), 1);

    // Swapping the already-hidden axis is a no-op.
    let dirty = s.handle(Command::SwapAxis { axis: 1 });
    assert_eq!(dirty, DirtyBatches::NONE);
}

#[test]
fn slice_mode_cycle_matches_both_directions() {
    let mut s = open_session([2, 2, 2, 2]);
    assert_eq!(s.mode, SliceMode::ThreeD);
    let dirty = s.handle(Command::CycleSliceMode { backward: false });
    assert_eq!(s.mode, SliceMode::TwoD);
    assert_eq!(
        dirty,
        DirtyBatches {
            maze: true,
            ..DirtyBatches::NONE
        }
    );
    s.handle(Command::CycleSliceMode { backward: false });
    assert_eq!(s.mode, SliceMode::OneD);
    s.handle(Command::CycleSliceMode { backward: false });
    assert_eq!(s.mode, SliceMode::ThreeD);
    // Backward first lands on 1D, not 2D.
    s.handle(Command::CycleSliceMode { backward: true });
    assert_eq!(s.mode, SliceMode::OneD);
}

#[test]
fn toggle_hint_dirties_only_the_hint() {
    let mut s = open_session([2, 2, 2, 2]);
    assert!(!s.hint);
    let dirty = s.handle(Command::ToggleHint);
    assert!(s.hint);
    assert_eq!(
        dirty,
        DirtyBatches {
            hint: true,
            ..DirtyBatches::NONE
        }
    );
}

#[test]
fn new_maze_resets_view_and_dirties_all() {
    let mut s = open_session([3, 3, 3, 3]);
    s.handle(Command::Move { axis: 0, delta: 1 });
    s.handle(Command::SwapAxis { axis: 0 });
    s.handle(Command::CycleSliceMode { backward: false });
    s.handle(Command::ToggleHint);

    let dirty = s.handle(Command::NewMaze);
    assert_eq!(dirty, DirtyBatches::ALL);
    assert_eq!(s.maze.position, ORIGIN);
    assert_eq!(s.axes, AxisMapping::default());
    assert_eq!(s.mode, SliceMode::ThreeD);
    assert!(!s.hint);
    assert!(!s.victory);
}

#[test]
fn generated_maze_upholds_passability_invariants() {
    for seed in 0..16 {
        let s = Session::new(
            MazeParams {
                size: [4, 3, 2, 5],
                wall_probability: 0.9,
            },
            Some(seed),
        );
        assert_eq!(s.maze.is_wall(ORIGIN), Ok(false));
        assert_eq!(s.maze.is_wall(s.maze.goal), Ok(false));
    }
}

fn arb_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (0usize..4, prop_oneof![Just(-1i32), Just(1i32)])
            .prop_map(|(axis, delta)| Command::Move { axis, delta }),
        (0usize..4).prop_map(|axis| Command::SwapAxis { axis }),
        any::<bool>().prop_map(|backward| Command::CycleSliceMode { backward }),
        Just(Command::ToggleHint),
        Just(Command::NewMaze),
    ]
}

proptest! {
    // Any command stream keeps the session invariants: the player stands on
    // a passable in-bounds cell, the mapping stays a bijection, and victory
    // mirrors position == goal.
    #[test]
    fn command_streams_preserve_invariants(
        seed in any::<u64>(),
        cmds in proptest::collection::vec(arb_command(), 1..40),
    ) {
        let mut s = Session::new(
            MazeParams { size: [3, 3, 3, 3], wall_probability: 0.4 },
            Some(seed),
        );
        for cmd in cmds {
            let dirty = s.handle(cmd);
            prop_assert!(s.maze.contains(s.maze.position));
            prop_assert_eq!(s.maze.is_wall(s.maze.position), Ok(false));
            prop_assert_eq!(s.victory, s.maze.position == s.maze.goal);
            let mut seen = [false; 4];
            for role in [Role::VisibleX, Role::VisibleY, Role::VisibleZ, Role::Hidden] {
                seen[s.axes.axis_of(role)] = true;
            }
            prop_assert!(seen.iter().all(|&b| b));
            // Whatever dirties the player cube dirties the map with it.
            prop_assert!(!dirty.player || dirty.map);
        }
    }
}

#[test]
fn dirty_kinds_iterate_in_rebuild_order() {
    let dirty = DirtyBatches {
        maze: true,
        player: true,
        ..DirtyBatches::NONE
    };
    let kinds: Vec<_> = dirty.kinds().collect();
    assert_eq!(kinds, vec![BatchKind::Maze, BatchKind::Player]);
    assert!(dirty.contains(BatchKind::Maze));
    assert!(!dirty.contains(BatchKind::Map));
    assert!(DirtyBatches::NONE.is_empty());
    assert!(!DirtyBatches::ALL.is_empty());
}

use hypermaze_grid::{AXES, Maze, MoveBlocked, ORIGIN, Size4};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn dim() -> impl Strategy<Value = usize> {
    1usize..=5
}

fn size4() -> impl Strategy<Value = Size4> {
    [dim(), dim(), dim(), dim()]
}

proptest! {
    // Start and goal are passable for any seed and wall probability.
    #[test]
    fn generate_clears_start_and_goal(size in size4(), seed in any::<u64>(), p in 0.0f32..=1.0) {
        let mut rng = StdRng::seed_from_u64(seed);
        let maze = Maze::generate(size, p, &mut rng);
        prop_assert_eq!(maze.is_wall(ORIGIN), Ok(false));
        prop_assert_eq!(maze.is_wall(maze.goal), Ok(false));
        prop_assert_eq!(maze.position, ORIGIN);
        for a in 0..AXES {
            prop_assert_eq!(maze.goal[a], size[a] as i32 - 1);
        }
    }

    // is_wall errors exactly when a component leaves the extents.
    #[test]
    fn is_wall_bounds_agree_with_contains(
        size in size4(),
        seed in any::<u64>(),
        c in [-2i32..8, -2i32..8, -2i32..8, -2i32..8],
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let maze = Maze::generate(size, 0.5, &mut rng);
        prop_assert_eq!(maze.is_wall(c).is_ok(), maze.contains(c));
    }

    // try_move either yields a passable coordinate differing only on the
    // moved axis by exactly delta, or rejects without a trace.
    #[test]
    fn try_move_steps_or_rejects(
        size in size4(),
        seed in any::<u64>(),
        axis in 0usize..AXES,
        delta in prop_oneof![Just(-1i32), Just(1i32)],
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let maze = Maze::generate(size, 0.5, &mut rng);
        let from = maze.position;
        match maze.try_move(from, axis, delta) {
            Ok(to) => {
                for a in 0..AXES {
                    let expect = if a == axis { from[a] + delta } else { from[a] };
                    prop_assert_eq!(to[a], expect);
                }
                prop_assert_eq!(maze.is_wall(to), Ok(false));
            }
            Err(MoveBlocked::Boundary) => {
                let target = from[axis] + delta;
                prop_assert!(target < 0 || target as usize >= size[axis]);
            }
            Err(MoveBlocked::Wall) => {
                let mut to = from;
                to[axis] += delta;
                prop_assert_eq!(maze.is_wall(to), Ok(true));
            }
        }
    }

    // Saturated walls leave only start and goal open.
    #[test]
    fn full_probability_walls_everything_else(size in size4(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let maze = Maze::generate(size, 1.0, &mut rng);
        let mut open = 0usize;
        for x in 0..size[0] as i32 {
            for y in 0..size[1] as i32 {
                for z in 0..size[2] as i32 {
                    for w in 0..size[3] as i32 {
                        if maze.is_wall([x, y, z, w]) == Ok(false) {
                            open += 1;
                        }
                    }
                }
            }
        }
        let expect = if maze.goal == ORIGIN { 1 } else { 2 };
        prop_assert_eq!(open, expect);
    }

    // from_walls round-trips arbitrary occupancy away from start/goal.
    #[test]
    fn from_walls_preserves_cells(size in size4(), seed in any::<u64>()) {
        use rand::Rng;
        let mut rng = StdRng::seed_from_u64(seed);
        let count: usize = size.iter().product();
        let cells: Vec<bool> = (0..count).map(|_| rng.gen_bool(0.5)).collect();
        let maze = Maze::from_walls(size, cells.clone());
        let mut flat = 0usize;
        for x in 0..size[0] as i32 {
            for y in 0..size[1] as i32 {
                for z in 0..size[2] as i32 {
                    for w in 0..size[3] as i32 {
                        let c = [x, y, z, w];
                        let expect = if c == ORIGIN || c == maze.goal {
                            false
                        } else {
                            cells[flat]
                        };
                        prop_assert_eq!(maze.is_wall(c), Ok(expect));
                        flat += 1;
                    }
                }
            }
        }
        prop_assert_eq!(flat, count);
    }
}

// Degenerate 1x1x1x1 grid: start == goal, nothing to walk.
#[test]
fn unit_grid_is_goal_at_origin() {
    let maze = Maze::from_walls([1, 1, 1, 1], vec![true]);
    assert_eq!(maze.goal, ORIGIN);
    assert!(maze.at_goal());
    assert_eq!(maze.try_move(ORIGIN, 0, 1), Err(MoveBlocked::Boundary));
}

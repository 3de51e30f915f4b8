//! The navigation layer: one session owns the maze, the view state and the
//! RNG, and turns discrete commands into state changes plus a set of mesh
//! batches that must be rebuilt. This is the only place core state mutates.
#![forbid(unsafe_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use hypermaze_grid::{AXES, Maze, Size4};
use hypermaze_slice::{AxisMapping, Role, SliceMode};

/// A discrete player intent, delivered by the input adapters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Step one cell along an abstract axis. `delta` is ±1.
    Move { axis: usize, delta: i32 },
    /// Swap an abstract axis into the hidden slot.
    SwapAxis { axis: usize },
    /// Advance the slice mode along its (asymmetric) cycle.
    CycleSliceMode { backward: bool },
    /// Flip the axis-hint frame.
    ToggleHint,
    /// Regenerate the maze and reset the view.
    NewMaze,
}

/// The five regenerable mesh batches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BatchKind {
    Maze,
    Goal,
    Player,
    Map,
    Hint,
}

impl BatchKind {
    pub const ALL: [BatchKind; 5] = [
        BatchKind::Maze,
        BatchKind::Goal,
        BatchKind::Player,
        BatchKind::Map,
        BatchKind::Hint,
    ];
}

/// Which batches a command invalidated. The presentation layer rebuilds
/// exactly these before the next draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirtyBatches {
    pub maze: bool,
    pub goal: bool,
    pub player: bool,
    pub map: bool,
    pub hint: bool,
}

impl DirtyBatches {
    pub const NONE: DirtyBatches = DirtyBatches {
        maze: false,
        goal: false,
        player: false,
        map: false,
        hint: false,
    };
    pub const ALL: DirtyBatches = DirtyBatches {
        maze: true,
        goal: true,
        player: true,
        map: true,
        hint: true,
    };

    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    #[inline]
    pub fn contains(&self, kind: BatchKind) -> bool {
        match kind {
            BatchKind::Maze => self.maze,
            BatchKind::Goal => self.goal,
            BatchKind::Player => self.player,
            BatchKind::Map => self.map,
            BatchKind::Hint => self.hint,
        }
    }

    /// The dirty kinds, in rebuild order.
    pub fn kinds(&self) -> impl Iterator<Item = BatchKind> + '_ {
        BatchKind::ALL.into_iter().filter(|&k| self.contains(k))
    }

    /// Accumulates another command's dirt into this set.
    pub fn merge(&mut self, other: DirtyBatches) {
        self.maze |= other.maze;
        self.goal |= other.goal;
        self.player |= other.player;
        self.map |= other.map;
        self.hint |= other.hint;
    }
}

/// Maze generation parameters, kept for `NewMaze` resets.
#[derive(Clone, Copy, Debug)]
pub struct MazeParams {
    pub size: Size4,
    pub wall_probability: f32,
}

impl Default for MazeParams {
    fn default() -> Self {
        Self {
            size: [5; AXES],
            wall_probability: 0.5,
        }
    }
}

/// One playthrough's worth of state, plus the view settings that survive
/// between mazes only within the session.
pub struct Session {
    pub maze: Maze,
    pub axes: AxisMapping,
    pub mode: SliceMode,
    pub hint: bool,
    pub victory: bool,
    params: MazeParams,
    rng: StdRng,
}

impl Session {
    /// Starts a session with a fresh maze. `seed` pins the RNG for
    /// reproducible runs; otherwise it is drawn from the OS.
    pub fn new(params: MazeParams, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let maze = Maze::generate(params.size, params.wall_probability, &mut rng);
        let mut session = Self {
            victory: false,
            maze,
            axes: AxisMapping::default(),
            mode: SliceMode::default(),
            hint: false,
            params,
            rng,
        };
        session.check_victory();
        session
    }

    /// Replaces the generation parameters used by the next `NewMaze`.
    /// The running maze is untouched.
    pub fn set_params(&mut self, params: MazeParams) {
        self.params = params;
    }

    pub fn params(&self) -> MazeParams {
        self.params
    }

    /// Applies one command and reports the batches it invalidated.
    /// Rejected moves change nothing and dirty nothing.
    pub fn handle(&mut self, cmd: Command) -> DirtyBatches {
        match cmd {
            Command::Move { axis, delta } => self.do_move(axis, delta),
            Command::SwapAxis { axis } => {
                if !self.axes.swap_into_hidden(axis) {
                    return DirtyBatches::NONE;
                }
                log::info!(target: "commands", "swap axis {} into hidden", axis);
                DirtyBatches {
                    maze: true,
                    goal: true,
                    player: true,
                    hint: true,
                    map: false,
                }
            }
            Command::CycleSliceMode { backward } => {
                self.mode = if backward {
                    self.mode.cycled_backward()
                } else {
                    self.mode.cycled_forward()
                };
                log::info!(target: "commands", "slice mode -> {:?}", self.mode);
                DirtyBatches {
                    maze: true,
                    ..DirtyBatches::NONE
                }
            }
            Command::ToggleHint => {
                self.hint = !self.hint;
                log::info!(target: "commands", "hint {}", if self.hint { "on" } else { "off" });
                DirtyBatches {
                    hint: true,
                    ..DirtyBatches::NONE
                }
            }
            Command::NewMaze => {
                self.new_maze();
                DirtyBatches::ALL
            }
        }
    }

    fn do_move(&mut self, axis: usize, delta: i32) -> DirtyBatches {
        assert!(axis < AXES, "move on unknown axis {axis}");
        match self.maze.try_move(self.maze.position, axis, delta) {
            Ok(to) => {
                self.maze.position = to;
                self.check_victory();
                let through_hidden = axis == self.axes.axis_of(Role::Hidden);
                log::info!(
                    target: "commands",
                    "move axis {} by {:+} -> {:?}{}",
                    axis,
                    delta,
                    to,
                    if self.victory { " (goal!)" } else { "" }
                );
                // Moving along the hidden axis changes which hyperplane is
                // on screen; visible moves leave the slice itself alone.
                DirtyBatches {
                    maze: through_hidden,
                    goal: through_hidden,
                    player: true,
                    map: true,
                    hint: false,
                }
            }
            Err(blocked) => {
                log::debug!(target: "commands", "move axis {} by {:+} rejected: {}", axis, delta, blocked);
                DirtyBatches::NONE
            }
        }
    }

    fn new_maze(&mut self) {
        self.maze = Maze::generate(self.params.size, self.params.wall_probability, &mut self.rng);
        self.axes = AxisMapping::default();
        self.mode = SliceMode::default();
        self.hint = false;
        self.check_victory();
        log::info!(target: "commands", "new maze, goal at {:?}", self.maze.goal);
    }

    fn check_victory(&mut self) {
        self.victory = self.maze.at_goal();
    }
}

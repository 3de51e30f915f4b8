//! 4D occupancy grid: maze cells, goal, player position, movement queries.
#![forbid(unsafe_code)]

use std::fmt;

use rand::Rng;

/// Number of abstract axes. Fixed for the whole engine.
pub const AXES: usize = 4;

/// One cell coordinate, ordered by abstract axis.
pub type Coord4 = [i32; AXES];

/// Per-axis extents of the grid.
pub type Size4 = [usize; AXES];

/// The origin cell, where every playthrough starts.
pub const ORIGIN: Coord4 = [0; AXES];

/// Coordinate query outside the grid extents. A contract violation:
/// internal callers pre-validate through [`Maze::try_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfBounds {
    pub coord: Coord4,
    pub axis: usize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "coordinate {:?} outside grid on axis {}",
            self.coord, self.axis
        )
    }
}

impl std::error::Error for OutOfBounds {}

/// Why a move was rejected. Expected and frequent; never a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveBlocked {
    /// Target coordinate leaves the grid on the moved axis.
    Boundary,
    /// Target cell is a wall.
    Wall,
}

impl fmt::Display for MoveBlocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveBlocked::Boundary => write!(f, "grid boundary"),
            MoveBlocked::Wall => write!(f, "wall"),
        }
    }
}

/// The 4D maze: dense occupancy plus the goal cell and player position.
///
/// Occupancy is stored flat, strided axis 3 fastest. The cells at
/// `position` and `goal` are always passable; `generate` and
/// `from_walls` force-clear them.
#[derive(Clone, Debug)]
pub struct Maze {
    size: Size4,
    cells: Vec<bool>,
    pub goal: Coord4,
    pub position: Coord4,
}

impl Maze {
    /// Fills a fresh grid with one independent Bernoulli trial per cell
    /// (wall with probability `wall_probability`), places the goal at the
    /// far corner and the player at the origin, and clears both cells.
    pub fn generate(size: Size4, wall_probability: f32, rng: &mut impl Rng) -> Self {
        assert!(
            (0.0..=1.0).contains(&wall_probability),
            "wall probability must be in [0, 1]"
        );
        let count = cell_count(size);
        let mut cells = Vec::with_capacity(count);
        for _ in 0..count {
            cells.push(rng.gen_bool(wall_probability as f64));
        }
        let maze = Self::from_walls(size, cells);
        let walls = maze.cells.iter().filter(|w| **w).count();
        log::info!(
            "generated {}x{}x{}x{} maze: {} walls / {} cells",
            size[0],
            size[1],
            size[2],
            size[3],
            walls,
            count
        );
        maze
    }

    /// Builds a maze from explicit occupancy, goal at the far corner,
    /// player at the origin. Start and goal cells are force-cleared to
    /// uphold the passability invariant.
    pub fn from_walls(size: Size4, cells: Vec<bool>) -> Self {
        assert!(size.iter().all(|&s| s >= 1), "grid extents must be >= 1");
        assert_eq!(cells.len(), cell_count(size), "occupancy length mismatch");
        let goal = [
            size[0] as i32 - 1,
            size[1] as i32 - 1,
            size[2] as i32 - 1,
            size[3] as i32 - 1,
        ];
        let mut maze = Self {
            size,
            cells,
            goal,
            position: ORIGIN,
        };
        let start = maze.idx(ORIGIN);
        maze.cells[start] = false;
        let goal_ix = maze.idx(goal);
        maze.cells[goal_ix] = false;
        maze
    }

    #[inline]
    pub fn size(&self) -> Size4 {
        self.size
    }

    /// Whether every component of `c` lies within the extents.
    #[inline]
    pub fn contains(&self, c: Coord4) -> bool {
        (0..AXES).all(|a| c[a] >= 0 && (c[a] as usize) < self.size[a])
    }

    #[inline]
    fn idx(&self, c: Coord4) -> usize {
        debug_assert!(self.contains(c));
        ((c[0] as usize * self.size[1] + c[1] as usize) * self.size[2] + c[2] as usize)
            * self.size[3]
            + c[3] as usize
    }

    /// Occupancy query with bounds checking at the API boundary.
    pub fn is_wall(&self, c: Coord4) -> Result<bool, OutOfBounds> {
        for axis in 0..AXES {
            if c[axis] < 0 || c[axis] as usize >= self.size[axis] {
                return Err(OutOfBounds { coord: c, axis });
            }
        }
        Ok(self.cells[self.idx(c)])
    }

    /// Computes the coordinate one step along `axis` from `from`, or the
    /// reason it is unreachable. Never mutates; the navigation layer
    /// commits accepted coordinates to `position`.
    pub fn try_move(&self, from: Coord4, axis: usize, delta: i32) -> Result<Coord4, MoveBlocked> {
        assert!(axis < AXES);
        let mut to = from;
        to[axis] += delta;
        if to[axis] < 0 || to[axis] as usize >= self.size[axis] {
            return Err(MoveBlocked::Boundary);
        }
        if self.cells[self.idx(to)] {
            return Err(MoveBlocked::Wall);
        }
        Ok(to)
    }

    /// Componentwise position == goal, over all four axes.
    #[inline]
    pub fn at_goal(&self) -> bool {
        self.position == self.goal
    }
}

#[inline]
fn cell_count(size: Size4) -> usize {
    size.iter().product()
}

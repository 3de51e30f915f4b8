use hypermaze_grid::{Coord4, Maze};

use crate::axis::{AxisMapping, Role};
use crate::mode::SliceMode;

/// One occupied cell of the current slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceCell {
    pub coord: Coord4,
    /// `forced[a]` requests both faces along display axis `a` be drawn even
    /// when an occupied neighbor would normally occlude them. Set for axes
    /// held fixed by the sub-slice(s) that contributed this cell; the
    /// neighbor along a held axis is not part of the same pass.
    pub forced: [bool; 3],
}

/// Which display axes vary in each sub-slice of a mode. Sub-slices run in
/// XY, XZ, YZ order (2D) and X, Y, Z order (1D).
fn passes(mode: SliceMode) -> &'static [[bool; 3]] {
    match mode {
        SliceMode::ThreeD => &[[true, true, true]],
        SliceMode::TwoD => &[
            [true, true, false],
            [true, false, true],
            [false, true, true],
        ],
        SliceMode::OneD => &[
            [true, false, false],
            [false, true, false],
            [false, false, true],
        ],
    }
}

/// Lazily enumerates the occupied cells of the slice through the player's
/// position. The hidden axis is always pinned to the player's coordinate.
/// Each coordinate is yielded at most once; a cell lying in several
/// sub-slices carries the union of their forced flags.
///
/// Call again for a fresh pass over the same state.
pub fn slice_cells<'m>(maze: &'m Maze, axes: &AxisMapping, mode: SliceMode) -> SliceIter<'m> {
    let visible = axes.visible();
    let player = maze.position;
    let player_display = [
        player[visible[0]],
        player[visible[1]],
        player[visible[2]],
    ];
    let size = maze.size();
    SliceIter {
        maze,
        visible,
        hidden_coord: player[axes.axis_of(Role::Hidden)],
        hidden_axis: axes.axis_of(Role::Hidden),
        display_extent: [
            size[visible[0]] as i32,
            size[visible[1]] as i32,
            size[visible[2]] as i32,
        ],
        player_display,
        passes: passes(mode),
        pass: 0,
        cursor: [0; 3],
        primed: false,
    }
}

#[derive(Clone)]
pub struct SliceIter<'m> {
    maze: &'m Maze,
    visible: [usize; 3],
    hidden_axis: usize,
    hidden_coord: i32,
    display_extent: [i32; 3],
    player_display: [i32; 3],
    passes: &'static [[bool; 3]],
    pass: usize,
    cursor: [i32; 3],
    primed: bool,
}

impl SliceIter<'_> {
    /// Odometer step over the varied axes, last axis fastest (matching the
    /// emission order of a nested loop). False when the pass is exhausted.
    fn advance(&mut self, varied: [bool; 3]) -> bool {
        for a in (0..3).rev() {
            if !varied[a] {
                continue;
            }
            self.cursor[a] += 1;
            if self.cursor[a] < self.display_extent[a] {
                return true;
            }
            self.cursor[a] = 0;
        }
        false
    }

    /// Whether the current cursor lies inside sub-slice `q`: every axis `q`
    /// holds fixed must sit at the player's coordinate.
    fn in_pass(&self, q: usize) -> bool {
        let varied = self.passes[q];
        (0..3).all(|a| varied[a] || self.cursor[a] == self.player_display[a])
    }

    fn candidate(&self) -> Coord4 {
        let mut coord = [0i32; 4];
        for (a, &axis) in self.visible.iter().enumerate() {
            coord[axis] = self.cursor[a];
        }
        coord[self.hidden_axis] = self.hidden_coord;
        coord
    }
}

impl Iterator for SliceIter<'_> {
    type Item = SliceCell;

    fn next(&mut self) -> Option<SliceCell> {
        loop {
            if self.pass >= self.passes.len() {
                return None;
            }
            let varied = self.passes[self.pass];
            if !self.primed {
                for a in 0..3 {
                    self.cursor[a] = if varied[a] { 0 } else { self.player_display[a] };
                }
                self.primed = true;
            } else if !self.advance(varied) {
                self.pass += 1;
                self.primed = false;
                continue;
            }

            let coord = self.candidate();
            if !matches!(self.maze.is_wall(coord), Ok(true)) {
                continue;
            }
            // Yield from the first sub-slice containing this coordinate.
            if (0..self.pass).any(|q| self.in_pass(q)) {
                continue;
            }
            let mut forced = [false; 3];
            for q in self.pass..self.passes.len() {
                if self.in_pass(q) {
                    for a in 0..3 {
                        forced[a] |= !self.passes[q][a];
                    }
                }
            }
            return Some(SliceCell { coord, forced });
        }
    }
}

use hypermaze_geom::{Aabb, Vec3};
use hypermaze_grid::Maze;
use hypermaze_slice::{AxisMapping, Role, SliceMode};

use crate::batch::QuadBatch;

const PLAYER_INSET: (f32, f32) = (0.1, 0.9);
const GOAL_INSET: (f32, f32) = (0.2, 1.0);
const PLAYER_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Warm gradients for the goal marker, per vertex: one set for the three
/// down-facing faces, a brighter one for the three up-facing faces.
const GOAL_DOWN: [[f32; 4]; 4] = [
    [1.0, 0.4, 0.0, 1.0],
    [1.0, 0.6, 0.0, 1.0],
    [1.0, 0.8, 0.0, 1.0],
    [1.0, 0.6, 0.0, 1.0],
];
const GOAL_UP: [[f32; 4]; 4] = [
    [1.0, 0.6, 0.0, 1.0],
    [1.0, 0.8, 0.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
    [1.0, 0.8, 0.0, 1.0],
];

fn marker_box(anchor: [i32; 3], inset: (f32, f32)) -> Aabb {
    let lo = Vec3::new(
        anchor[0] as f32 + inset.0,
        anchor[1] as f32 + inset.0,
        anchor[2] as f32 + inset.0,
    );
    let hi = Vec3::new(
        anchor[0] as f32 + inset.1,
        anchor[1] as f32 + inset.1,
        anchor[2] as f32 + inset.1,
    );
    Aabb::new(lo, hi)
}

fn display_coords(maze: &Maze, axes: &AxisMapping, c: [i32; 4]) -> [i32; 3] {
    let v = axes.visible();
    [c[v[0]], c[v[1]], c[v[2]]]
}

/// The player marker: a solid cube inset within the player's cell,
/// always drawn.
pub fn build_player_mesh(maze: &Maze, axes: &AxisMapping) -> QuadBatch {
    let mut batch = QuadBatch::default();
    let b = marker_box(display_coords(maze, axes, maze.position), PLAYER_INSET);
    batch.add_box_faces(b, |_| Some([PLAYER_COLOR; 4]));
    batch
}

/// The goal marker, emitted only when the goal is reachable within the
/// current slice: the hidden-axis coordinates must match, and enough
/// visible-axis coordinates must match for the mode (none for 3D, one for
/// 2D, two for 1D). A visibility gate, not an occlusion test.
pub fn build_goal_mesh(maze: &Maze, axes: &AxisMapping, mode: SliceMode) -> QuadBatch {
    let mut batch = QuadBatch::default();
    let hidden = axes.axis_of(Role::Hidden);
    if maze.position[hidden] != maze.goal[hidden] {
        return batch;
    }
    let visible_matches = axes
        .visible()
        .iter()
        .filter(|&&a| maze.position[a] == maze.goal[a])
        .count();
    if visible_matches < 3 - mode.dims() {
        return batch;
    }
    let b = marker_box(display_coords(maze, axes, maze.goal), GOAL_INSET);
    batch.add_box_faces(b, |face| {
        Some(if face.dir() < 0 { GOAL_DOWN } else { GOAL_UP })
    });
    batch
}

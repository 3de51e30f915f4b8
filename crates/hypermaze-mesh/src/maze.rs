use hypermaze_geom::{Aabb, Vec3};
use hypermaze_grid::Maze;
use hypermaze_slice::{AxisMapping, SliceMode, slice_cells};

use crate::batch::QuadBatch;
use crate::color::cell_color;
use crate::face::Face;

/// Rebuilds the maze-wall batch for the current slice.
///
/// A face is emitted unless it is occluded: not forced by the slice, AND
/// the neighbor one step along the face's display axis is in bounds AND
/// itself a wall. Interior faces between two walls never appear.
pub fn build_maze_mesh(maze: &Maze, axes: &AxisMapping, mode: SliceMode) -> QuadBatch {
    let mut batch = QuadBatch::default();
    let visible = axes.visible();
    let size = maze.size();
    for cell in slice_cells(maze, axes, mode) {
        let rgba = cell_color(size, cell.coord);
        let origin = Vec3::new(
            cell.coord[visible[0]] as f32,
            cell.coord[visible[1]] as f32,
            cell.coord[visible[2]] as f32,
        );
        let b = Aabb::new(origin, origin + Vec3::new(1.0, 1.0, 1.0));
        for face in Face::ALL {
            if !cell.forced[face.axis()] && occluded(maze, &cell.coord, visible, face) {
                continue;
            }
            batch.add_box_face(b, face, rgba);
        }
    }
    log::debug!(
        "maze mesh: {} quads ({:?}, hidden axis {})",
        batch.quad_count(),
        mode,
        axes.hidden()
    );
    batch
}

#[inline]
fn occluded(maze: &Maze, coord: &[i32; 4], visible: [usize; 3], face: Face) -> bool {
    let mut neighbor = *coord;
    neighbor[visible[face.axis()]] += face.dir();
    matches!(maze.is_wall(neighbor), Ok(true))
}

use hypermaze_geom::{Aabb, Vec3};
use hypermaze_grid::Maze;
use hypermaze_slice::AxisMapping;

use crate::batch::QuadBatch;
use crate::color::AXIS_LEGEND;

const FRAME_OFFSET: f32 = 0.1;
const FRAME_THICKNESS: f32 = 0.05;

/// Rebuilds the axis-hint frame: twelve thin bars boxing the visible
/// extents, each bar colored by the abstract axis currently mapped to the
/// display direction it runs along. Empty when the hint is off.
pub fn build_hint_mesh(maze: &Maze, axes: &AxisMapping, enabled: bool) -> QuadBatch {
    let mut batch = QuadBatch::default();
    if !enabled {
        return batch;
    }
    let visible = axes.visible();
    let size = maze.size();
    let extent = [
        size[visible[0]] as f32,
        size[visible[1]] as f32,
        size[visible[2]] as f32,
    ];
    for run in 0..3 {
        let rgba = AXIS_LEGEND[visible[run]];
        let (a, b) = ((run + 1) % 3, (run + 2) % 3);
        // Four bars per direction, one at each corner pairing of the two
        // perpendicular display axes.
        for corner in 0..4 {
            let mut lo = [0.0f32; 3];
            let mut hi = [0.0f32; 3];
            lo[run] = -FRAME_OFFSET - FRAME_THICKNESS;
            hi[run] = extent[run] + FRAME_OFFSET + FRAME_THICKNESS;
            for (axis, near) in [(a, corner & 1 == 0), (b, corner & 2 == 0)] {
                lo[axis] = if near {
                    -FRAME_OFFSET - FRAME_THICKNESS
                } else {
                    extent[axis] + FRAME_OFFSET
                };
                hi[axis] = lo[axis] + FRAME_THICKNESS;
            }
            let bar = Aabb::new(
                Vec3::new(lo[0], lo[1], lo[2]),
                Vec3::new(hi[0], hi[1], hi[2]),
            );
            batch.add_box_faces(bar, |_| Some([rgba; 4]));
        }
    }
    batch
}

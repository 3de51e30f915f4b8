use hypermaze_geom::Vec3;
use hypermaze_grid::{AXES, Maze, Size4};
use hypermaze_slice::AxisMapping;

use crate::batch::QuadBatch;
use crate::color::{AXIS_LEGEND, cell_color_opaque};

// Overlay z layers, +z toward the viewer. The ortho pane draws with depth
// testing, so nearer layers paint over farther ones.
const LAYER_BORDER: f32 = -0.1;
const LAYER_BACKGROUND: f32 = 0.0;
const LAYER_CELLS: f32 = 0.1;
const LAYER_PLAYER: f32 = 0.2;
const LAYER_GOAL: f32 = 0.3;

const OVERLAY_NORMAL: Vec3 = Vec3 {
    x: 0.0,
    y: 0.0,
    z: 1.0,
};

/// Placement of the four axis strips in normalized overlay space
/// (x and y in [-1, 1], y up). The same maths back the strip geometry and
/// the mouse hit zones.
#[derive(Clone, Copy, Debug)]
pub struct MapLayout {
    /// Side length of one strip cell.
    pub cell: f32,
    /// Border thickness around each strip.
    pub border: f32,
    half_w: [f32; 4],
    top: [f32; 4],
}

/// What a click in the overlay asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapHit {
    /// Swap this abstract axis into the hidden slot.
    Swap(usize),
    /// Step the player along this abstract axis.
    Step(usize, i32),
}

impl MapLayout {
    pub fn new(size: Size4) -> Self {
        let longest = size.iter().copied().max().unwrap_or(1) as f32;
        // Fit the longest strip plus arrows horizontally (0.5 spacer and one
        // arrow cell each side), and four strips with gaps vertically.
        let cell = (2.0 / (longest + 3.0)).min(2.0 / 8.0);
        let mut half_w = [0.0; 4];
        for d in 0..AXES {
            half_w[d] = cell * size[d] as f32 / 2.0;
        }
        Self {
            cell,
            border: cell / 10.0,
            half_w,
            top: [3.5 * cell, 1.5 * cell, -0.5 * cell, -2.5 * cell],
        }
    }

    #[inline]
    pub fn strip_half_width(&self, d: usize) -> f32 {
        self.half_w[d]
    }

    /// Top edge of strip `d`; the strip occupies one cell of height below.
    #[inline]
    pub fn strip_top(&self, d: usize) -> f32 {
        self.top[d]
    }

    /// Resolves a click at normalized overlay coordinates.
    pub fn hit(&self, x: f32, y: f32) -> Option<MapHit> {
        let l = self.cell;
        for d in 0..AXES {
            let (top, hw) = (self.top[d], self.half_w[d]);
            if y > top || y < top - l {
                continue;
            }
            if (-hw..=hw).contains(&x) {
                return Some(MapHit::Swap(d));
            }
            if (-hw - 2.0 * l..=-hw - 0.5 * l).contains(&x) {
                return Some(MapHit::Step(d, -1));
            }
            if (hw + 0.5 * l..=hw + 2.0 * l).contains(&x) {
                return Some(MapHit::Step(d, 1));
            }
        }
        None
    }
}

/// Rebuilds the whole 2D overlay: one strip per abstract axis showing that
/// axis's full range, the player and (gated) goal positions, a legend-
/// colored border that dims for the hidden axis, and step arrows.
pub fn build_map_mesh(maze: &Maze, axes: &AxisMapping) -> QuadBatch {
    let layout = MapLayout::new(maze.size());
    let mut batch = QuadBatch::default();
    for d in 0..AXES {
        strip(&mut batch, maze, axes, &layout, d);
    }
    batch
}

fn strip(batch: &mut QuadBatch, maze: &Maze, axes: &AxisMapping, layout: &MapLayout, d: usize) {
    let size = maze.size();
    let l = layout.cell;
    let e = layout.border;
    let hw = layout.strip_half_width(d);
    let top = layout.strip_top(d);
    let alpha = if axes.hidden() == d { 0.3 } else { 1.0 };
    let ink = [0.0, 0.0, 0.0, alpha];
    let mut legend = AXIS_LEGEND[d];
    legend[3] = alpha;

    // Border, fading left-to-right into the axis legend color.
    rect_colors(
        batch,
        -hw - e,
        hw + e,
        top - l - e,
        top + e,
        LAYER_BORDER,
        [ink, ink, legend, legend],
    );
    // Step arrows outside either end; the degenerate fourth vertex
    // collapses each quad to a triangle.
    batch.add_quad_colors(
        [
            Vec3::new(hw + 0.5 * l, top, LAYER_BORDER),
            Vec3::new(hw + 0.5 * l, top - l, LAYER_BORDER),
            Vec3::new(hw + l, top - l / 2.0, LAYER_BORDER),
            Vec3::new(hw + l, top - l / 2.0, LAYER_BORDER),
        ],
        OVERLAY_NORMAL,
        [ink; 4],
    );
    batch.add_quad_colors(
        [
            Vec3::new(-hw - 0.5 * l, top, LAYER_BORDER),
            Vec3::new(-hw - l, top - l / 2.0, LAYER_BORDER),
            Vec3::new(-hw - l, top - l / 2.0, LAYER_BORDER),
            Vec3::new(-hw - 0.5 * l, top - l, LAYER_BORDER),
        ],
        OVERLAY_NORMAL,
        [ink; 4],
    );
    // Interior background over the border.
    rect(
        batch,
        -hw,
        hw,
        top - l,
        top,
        LAYER_BACKGROUND,
        [1.0, 1.0, 1.0, 1.0],
    );

    // Player marker.
    let p = maze.position[d] as f32;
    rect(
        batch,
        -hw + (p + 0.1) * l,
        -hw + (p + 0.9) * l,
        top - 0.9 * l,
        top - 0.1 * l,
        LAYER_PLAYER,
        [0.0, 0.0, 0.0, 1.0],
    );

    // Goal marker, only while the other three axes sit on the goal.
    let aligned = (0..AXES).all(|a| a == d || maze.position[a] == maze.goal[a]);
    if aligned {
        let g = maze.goal[d] as f32;
        rect_colors(
            batch,
            -hw + (g + 0.2) * l,
            -hw + (g + 1.0) * l,
            top - 0.8 * l,
            top,
            LAYER_GOAL,
            [
                [1.0, 0.7, 0.0, 1.0],
                [1.0, 0.4, 0.0, 1.0],
                [1.0, 0.7, 0.0, 1.0],
                [1.0, 1.0, 0.0, 1.0],
            ],
        );
    }

    // Occupied cells along this axis, holding the player's other coordinates.
    let mut c = maze.position;
    for i in 0..size[d] as i32 {
        c[d] = i;
        if maze.is_wall(c) == Ok(true) {
            rect(
                batch,
                -hw + i as f32 * l,
                -hw + (i + 1) as f32 * l,
                top - l,
                top,
                LAYER_CELLS,
                cell_color_opaque(size, c),
            );
        }
    }
}

fn rect(batch: &mut QuadBatch, x0: f32, x1: f32, y0: f32, y1: f32, z: f32, rgba: [f32; 4]) {
    rect_colors(batch, x0, x1, y0, y1, z, [rgba; 4]);
}

/// Quad in the overlay plane, vertices ordered top-left, bottom-left,
/// bottom-right, top-right (color gradients follow this order).
fn rect_colors(
    batch: &mut QuadBatch,
    x0: f32,
    x1: f32,
    y0: f32,
    y1: f32,
    z: f32,
    colors: [[f32; 4]; 4],
) {
    batch.add_quad_colors(
        [
            Vec3::new(x0, y1, z),
            Vec3::new(x0, y0, z),
            Vec3::new(x1, y0, z),
            Vec3::new(x1, y1, z),
        ],
        OVERLAY_NORMAL,
        colors,
    );
}

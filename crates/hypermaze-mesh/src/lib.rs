//! CPU mesh generation for every drawable batch: maze walls (with
//! neighbor-occlusion culling), goal and player markers, the 2D map
//! overlay, and the axis-hint frame. Batches are rebuilt wholesale; the
//! render adapter uploads them as-is.
#![forbid(unsafe_code)]

mod batch;
mod color;
mod face;
mod hint;
mod map;
mod marker;
mod maze;

pub use batch::QuadBatch;
pub use color::{AXIS_LEGEND, cell_color, cell_color_opaque};
pub use face::Face;
pub use hint::build_hint_mesh;
pub use map::{MapHit, MapLayout, build_map_mesh};
pub use marker::{build_goal_mesh, build_player_mesh};
pub use maze::build_maze_mesh;

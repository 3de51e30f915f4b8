use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use hashbrown::HashMap;
use raylib::prelude::*;

use hypermaze_mesh::MapLayout;
use hypermaze_render_raylib::BatchRender;
use hypermaze_session::{BatchKind, Session};

use crate::camera::OrbitCamera;

pub struct App {
    pub session: Session,
    pub cam: OrbitCamera,
    /// Uploaded models per batch kind; absent entries draw nothing.
    pub renders: HashMap<BatchKind, BatchRender>,
    pub(crate) map_layout: MapLayout,
    pub(crate) panes: PaneLayout,
    pub(crate) maze_rt: Option<RenderTexture2D>,
    pub(crate) map_rt: Option<RenderTexture2D>,
    pub(crate) dragging: bool,
    pub(crate) config_path: Option<PathBuf>,
    pub(crate) config_rx: Option<Receiver<()>>,
    pub(crate) config_dirty: bool,
}

/// Pixel rectangle of one screen region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pane {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Pane {
    #[inline]
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaneLayout {
    pub maze: Pane,
    pub map: Pane,
}

/// Wide windows give the map the left third and the maze the rest; tall
/// windows give the map the bottom third. The map pane letterboxes to a
/// square inside its region.
pub fn layout_panes(width: i32, height: i32) -> PaneLayout {
    let (map_region, maze) = if width > height {
        (
            Pane {
                x: 0,
                y: 0,
                w: width / 3,
                h: height,
            },
            Pane {
                x: width / 3,
                y: 0,
                w: width - width / 3,
                h: height,
            },
        )
    } else {
        (
            Pane {
                x: 0,
                y: height - height / 3,
                w: width,
                h: height / 3,
            },
            Pane {
                x: 0,
                y: 0,
                w: width,
                h: height - height / 3,
            },
        )
    };
    let side = map_region.w.min(map_region.h);
    let map = Pane {
        x: map_region.x + (map_region.w - side) / 2,
        y: map_region.y + (map_region.h - side) / 2,
        w: side,
        h: side,
    };
    PaneLayout { maze, map }
}

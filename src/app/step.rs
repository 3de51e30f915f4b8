use raylib::prelude::*;

use hypermaze_mesh::{
    MapLayout, build_goal_mesh, build_hint_mesh, build_map_mesh, build_maze_mesh,
    build_player_mesh,
};
use hypermaze_render_raylib::upload_quad_batch;
use hypermaze_session::{BatchKind, DirtyBatches, MazeParams};

use super::state::{App, layout_panes};
use crate::config::AppConfig;

impl App {
    pub fn step(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, dt: f32) {
        if rl.is_window_resized() {
            self.panes = layout_panes(rl.get_screen_width(), rl.get_screen_height());
            // Pane geometry changed; the overlay mesh itself is
            // resolution-independent and stays as-is.
            self.maze_rt = None;
            self.map_rt = None;
            self.ensure_targets(rl, thread);
        }

        if let Some(rx) = &self.config_rx {
            if rx.try_iter().next().is_some() {
                self.config_dirty = true;
            }
        }
        if self.config_dirty {
            self.config_dirty = false;
            self.reload_params();
        }

        let commands = self.poll_input(rl, dt);
        let mut dirty = DirtyBatches::NONE;
        for cmd in commands {
            dirty.merge(self.session.handle(cmd));
        }

        if self.session.victory {
            self.cam.victory_spin(dt);
        }

        for kind in dirty.kinds() {
            self.rebuild(rl, thread, kind);
        }
    }

    /// Regenerates one batch from current session state and replaces its
    /// uploaded model. The batch is complete before the swap; a draw never
    /// observes a partial rebuild.
    pub(crate) fn rebuild(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, kind: BatchKind) {
        let s = &self.session;
        let batch = match kind {
            BatchKind::Maze => build_maze_mesh(&s.maze, &s.axes, s.mode),
            BatchKind::Goal => build_goal_mesh(&s.maze, &s.axes, s.mode),
            BatchKind::Player => build_player_mesh(&s.maze, &s.axes),
            BatchKind::Map => {
                self.map_layout = MapLayout::new(s.maze.size());
                build_map_mesh(&s.maze, &s.axes)
            }
            BatchKind::Hint => build_hint_mesh(&s.maze, &s.axes, s.hint),
        };
        match upload_quad_batch(rl, thread, &batch) {
            Some(render) => {
                log::trace!(target: "render", "{:?} rebuilt: {} quads", kind, render.quads);
                self.renders.insert(kind, render);
            }
            None => {
                log::trace!(target: "render", "{:?} rebuilt: empty", kind);
                self.renders.remove(&kind);
            }
        }
    }

    pub(crate) fn ensure_targets(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        if self.maze_rt.is_none() {
            self.maze_rt = load_target(rl, thread, self.panes.maze.w, self.panes.maze.h);
        }
        if self.map_rt.is_none() {
            self.map_rt = load_target(rl, thread, self.panes.map.w, self.panes.map.h);
        }
    }

    fn reload_params(&mut self) {
        let Some(path) = self.config_path.clone() else {
            return;
        };
        let cfg = match AppConfig::load(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("config reload failed, keeping parameters: {e}");
                return;
            }
        };
        if let Err(e) = cfg.validate() {
            log::warn!("reloaded config rejected, keeping parameters: {e}");
            return;
        }
        self.session.set_params(MazeParams {
            size: cfg.maze.size,
            wall_probability: cfg.maze.wall_probability,
        });
        log::info!(
            "config reloaded; next maze uses size {:?}, wall probability {}",
            cfg.maze.size,
            cfg.maze.wall_probability
        );
    }
}

fn load_target(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    w: i32,
    h: i32,
) -> Option<RenderTexture2D> {
    match rl.load_render_texture(thread, w.max(1) as u32, h.max(1) as u32) {
        Ok(rt) => Some(rt),
        Err(e) => {
            log::warn!("render target {w}x{h} unavailable: {e}");
            None
        }
    }
}

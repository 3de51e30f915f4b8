use raylib::prelude::*;

use hypermaze_session::BatchKind;

use super::state::{App, Pane};

// Maze-pane draw order; translucent walls first, overlays after.
const SCENE_ORDER: [BatchKind; 4] = [
    BatchKind::Maze,
    BatchKind::Goal,
    BatchKind::Player,
    BatchKind::Hint,
];

impl App {
    pub fn render(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let camera = self.maze_camera();
        if let Some(rt) = self.maze_rt.as_mut() {
            let mut d = rl.begin_texture_mode(thread, rt);
            d.clear_background(Color::WHITE);
            let mut d3 = d.begin_mode3D(camera);
            for kind in SCENE_ORDER {
                if let Some(r) = self.renders.get(&kind) {
                    d3.draw_model(&r.model, Vector3::zero(), 1.0, Color::WHITE);
                }
            }
        }
        if let Some(rt) = self.map_rt.as_mut() {
            let mut d = rl.begin_texture_mode(thread, rt);
            d.clear_background(Color::WHITE);
            // Overlay space is x,y in [-1,1]: an ortho "height" of 2 maps
            // it edge to edge; z layers resolve paint order.
            let overlay_cam = Camera3D::orthographic(
                Vector3::new(0.0, 0.0, 1.0),
                Vector3::zero(),
                Vector3::new(0.0, 1.0, 0.0),
                2.0,
            );
            let mut d3 = d.begin_mode3D(overlay_cam);
            if let Some(r) = self.renders.get(&BatchKind::Map) {
                d3.draw_model(&r.model, Vector3::zero(), 1.0, Color::WHITE);
            }
        }

        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::WHITE);
        if let Some(rt) = &self.maze_rt {
            blit(&mut d, rt, self.panes.maze);
        }
        if let Some(rt) = &self.map_rt {
            blit(&mut d, rt, self.panes.map);
        }
    }

    /// Perspective orbit around the center of the visible extents, far
    /// enough out to take in the whole grid in any orientation.
    fn maze_camera(&self) -> Camera3D {
        let size = self.session.maze.size();
        let visible = self.session.axes.visible();
        let center = Vector3::new(
            size[visible[0]] as f32 / 2.0,
            size[visible[1]] as f32 / 2.0,
            size[visible[2]] as f32 / 2.0,
        );
        let radius = size.iter().map(|&s| (s * s) as f32).sum::<f32>().sqrt();
        self.cam.to_camera3d(center, radius)
    }
}

/// Render textures are stored bottom-up; the negative source height flips
/// them back while blitting into the pane.
fn blit(d: &mut RaylibDrawHandle, rt: &RenderTexture2D, pane: Pane) {
    let tex = rt.texture().clone();
    let src = Rectangle::new(0.0, 0.0, tex.width() as f32, -(tex.height() as f32));
    let dest = Rectangle::new(pane.x as f32, pane.y as f32, pane.w as f32, pane.h as f32);
    d.draw_texture_pro(tex, src, dest, Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
}

use raylib::prelude::*;

use hypermaze_mesh::MapHit;
use hypermaze_session::Command;

use super::state::App;
use crate::camera;

/// Edge-triggered movement keys: W/S, A/D, Q/E, Z/C step the four abstract
/// axes.
const MOVE_KEYS: [(KeyboardKey, usize, i32); 8] = [
    (KeyboardKey::KEY_W, 0, 1),
    (KeyboardKey::KEY_S, 0, -1),
    (KeyboardKey::KEY_A, 1, 1),
    (KeyboardKey::KEY_D, 1, -1),
    (KeyboardKey::KEY_E, 2, 1),
    (KeyboardKey::KEY_Q, 2, -1),
    (KeyboardKey::KEY_Z, 3, 1),
    (KeyboardKey::KEY_C, 3, -1),
];

const SWAP_KEYS: [(KeyboardKey, usize); 4] = [
    (KeyboardKey::KEY_ONE, 0),
    (KeyboardKey::KEY_TWO, 1),
    (KeyboardKey::KEY_THREE, 2),
    (KeyboardKey::KEY_FOUR, 3),
];

impl App {
    /// Polls raylib and translates this frame's raw events into session
    /// commands. Camera-only input (orbit, fullscreen) is applied here and
    /// produces no command.
    pub(crate) fn poll_input(&mut self, rl: &mut RaylibHandle, dt: f32) -> Vec<Command> {
        let mut commands = Vec::new();

        for (key, axis, delta) in MOVE_KEYS {
            if rl.is_key_pressed(key) {
                commands.push(Command::Move { axis, delta });
            }
        }
        for (key, axis) in SWAP_KEYS {
            if rl.is_key_pressed(key) {
                commands.push(Command::SwapAxis { axis });
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_G) {
            commands.push(Command::CycleSliceMode { backward: false });
        }
        if rl.is_key_pressed(KeyboardKey::KEY_H) {
            commands.push(Command::ToggleHint);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            commands.push(Command::NewMaze);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_F11) {
            rl.toggle_fullscreen();
        }

        // Wheel up cycles the slice mode forward, wheel down backward.
        let wheel = rl.get_mouse_wheel_move();
        if wheel > 0.0 {
            commands.push(Command::CycleSliceMode { backward: false });
        } else if wheel < 0.0 {
            commands.push(Command::CycleSliceMode { backward: true });
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_MIDDLE) {
            commands.push(Command::ToggleHint);
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_RIGHT) {
            commands.push(Command::NewMaze);
        }

        let mouse = rl.get_mouse_position();
        let (mx, my) = (mouse.x as i32, mouse.y as i32);
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if self.panes.maze.contains(mx, my) {
                self.dragging = true;
            } else if self.panes.map.contains(mx, my) {
                if let Some(cmd) = self.pick_map(mouse) {
                    commands.push(cmd);
                }
            }
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            self.dragging = false;
        }
        if self.dragging {
            let delta = rl.get_mouse_delta();
            let pane = self.panes.maze;
            self.cam.orbit(
                180.0 * delta.x / pane.w.max(1) as f32,
                // Screen y grows downward; orbit pitch grows upward.
                180.0 * -delta.y / pane.h.max(1) as f32,
            );
        }

        if rl.is_key_down(KeyboardKey::KEY_RIGHT) {
            self.cam.orbit(camera::TURN_RATE * dt, 0.0);
        }
        if rl.is_key_down(KeyboardKey::KEY_LEFT) {
            self.cam.orbit(-camera::TURN_RATE * dt, 0.0);
        }
        if rl.is_key_down(KeyboardKey::KEY_UP) {
            self.cam.orbit(0.0, camera::TURN_RATE * dt);
        }
        if rl.is_key_down(KeyboardKey::KEY_DOWN) {
            self.cam.orbit(0.0, -camera::TURN_RATE * dt);
        }

        commands
    }

    /// Maps a click in the map pane onto a strip or arrow hit.
    fn pick_map(&self, mouse: Vector2) -> Option<Command> {
        let pane = self.panes.map;
        let nx = (mouse.x - pane.x as f32) / pane.w.max(1) as f32 * 2.0 - 1.0;
        let ny = -((mouse.y - pane.y as f32) / pane.h.max(1) as f32 * 2.0 - 1.0);
        match self.map_layout.hit(nx, ny)? {
            MapHit::Swap(axis) => Some(Command::SwapAxis { axis }),
            MapHit::Step(axis, delta) => Some(Command::Move { axis, delta }),
        }
    }
}

use raylib::prelude::*;

/// Degrees per second for keyboard orbiting and the victory spin.
pub const TURN_RATE: f32 = 90.0;

const FOV_DEG: f32 = 60.0;

/// Orbit camera around the visible maze extents. Angles in degrees; the
/// maze world is Z-up.
#[derive(Default)]
pub struct OrbitCamera {
    /// Rotation about the vertical (Z) axis.
    pub yaw: f32,
    /// Elevation toward the Z pole.
    pub pitch: f32,
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions the eye `radius` away from `center` along the current
    /// angles, with the up vector tracking the orbit so the view never
    /// flips at the poles.
    pub fn to_camera3d(&self, center: Vector3, radius: f32) -> Camera3D {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        let offset = Vector3::new(
            radius * yaw.cos() * pitch.cos(),
            radius * -yaw.sin() * pitch.cos(),
            radius * pitch.sin(),
        );
        let up = Vector3::new(
            yaw.cos() * -pitch.sin(),
            -yaw.sin() * -pitch.sin(),
            pitch.cos(),
        );
        Camera3D::perspective(center - offset, center, up, FOV_DEG)
    }

    pub fn orbit(&mut self, dyaw: f32, dpitch: f32) {
        self.yaw = (self.yaw + dyaw).rem_euclid(360.0);
        self.pitch = (self.pitch + dpitch).rem_euclid(360.0);
    }

    /// Post-victory celebration: steady spin, pitch easing back to level.
    pub fn victory_spin(&mut self, dt: f32) {
        self.yaw = (self.yaw + TURN_RATE * dt * (2.0 / 3.0)).rem_euclid(360.0);
        self.pitch -= dt * self.pitch / 15.0;
    }
}

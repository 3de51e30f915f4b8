//! Run configuration: a TOML file with `[maze]` and `[window]` tables,
//! overridable from the command line.

use std::path::Path;

use serde::Deserialize;

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MazeConfig {
    /// Per-axis cell counts.
    pub size: [usize; 4],
    /// Chance each cell starts as a wall.
    pub wall_probability: f32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            size: [5, 5, 5, 5],
            wall_probability: 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fps: 30,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub maze: MazeConfig,
    pub window: WindowConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("reading {}: {e}", path.display()))?;
        let cfg: AppConfig =
            toml::from_str(&text).map_err(|e| format!("parsing {}: {e}", path.display()))?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.maze.size.iter().any(|&s| s == 0) {
            return Err("maze.size extents must all be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.maze.wall_probability) {
            return Err("maze.wall_probability must be within [0, 1]".into());
        }
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err("window dimensions must be positive".into());
        }
        if self.window.fps == 0 {
            return Err("window.fps must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [maze]
            wall_probability = 0.25
            "#,
        )
        .unwrap();
        assert_eq!(cfg.maze.size, [5, 5, 5, 5]);
        assert_eq!(cfg.maze.wall_probability, 0.25);
        assert_eq!(cfg.window.width, 640);
    }

    #[test]
    fn out_of_range_probability_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.maze.wall_probability = 1.5;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<AppConfig>("[maze]\nwidth = 3\n").is_err());
    }
}

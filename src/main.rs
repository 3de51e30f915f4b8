mod app;
mod camera;
mod config;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use crate::app::App;
use crate::config::AppConfig;

/// Interactive 4D maze explorer: walk a hypercube grid through a 3D
/// cross-section, one axis at a time.
#[derive(Parser, Debug)]
#[command(name = "hypermaze", version, about)]
struct Args {
    /// TOML config file with [maze] and [window] tables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed the maze RNG for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Per-axis cell counts, overriding the config file
    #[arg(long, num_args = 4, value_names = ["X", "Y", "Z", "W"])]
    size: Option<Vec<usize>>,

    /// Wall probability in [0, 1], overriding the config file
    #[arg(long)]
    wall_probability: Option<f32>,

    /// Pick up edited maze parameters from the config file at the next
    /// new-maze reset
    #[arg(long)]
    watch_config: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(size) = &args.size {
        cfg.maze.size = [size[0], size[1], size[2], size[3]];
    }
    if let Some(p) = args.wall_probability {
        cfg.maze.wall_probability = p;
    }
    cfg.validate()?;

    let (mut rl, thread) = raylib::init()
        .size(cfg.window.width, cfg.window.height)
        .title("hypermaze")
        .resizable()
        .msaa_4x()
        .build();
    rl.set_target_fps(cfg.window.fps);

    let mut app = App::new(
        &mut rl,
        &thread,
        &cfg,
        args.seed,
        args.config.clone(),
        args.watch_config,
    );
    log::info!(
        "session started: {:?} cells, goal at {:?}",
        cfg.maze.size,
        app.session.maze.goal
    );

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        app.step(&mut rl, &thread, dt);
        app.render(&mut rl, &thread);
    }
    Ok(())
}

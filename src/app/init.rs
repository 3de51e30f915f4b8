use std::path::PathBuf;

use hashbrown::HashMap;
use raylib::prelude::*;

use hypermaze_mesh::MapLayout;
use hypermaze_session::{BatchKind, MazeParams, Session};

use super::state::{App, layout_panes};
use crate::camera::OrbitCamera;
use crate::config::AppConfig;

impl App {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        cfg: &AppConfig,
        seed: Option<u64>,
        config_path: Option<PathBuf>,
        watch_config: bool,
    ) -> Self {
        let session = Session::new(
            MazeParams {
                size: cfg.maze.size,
                wall_probability: cfg.maze.wall_probability,
            },
            seed,
        );

        // Watch the config file so edited maze parameters reach the next
        // NewMaze without a restart.
        let (tx, rx) = std::sync::mpsc::channel::<()>();
        let watching = watch_config && config_path.is_some();
        if let (true, Some(path)) = (watch_config, config_path.clone()) {
            std::thread::spawn(move || {
                use notify::{EventKind, RecursiveMode, Watcher};
                if let Ok(mut watcher) =
                    notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
                        if let Ok(event) = res {
                            match event.kind {
                                EventKind::Modify(_)
                                | EventKind::Create(_)
                                | EventKind::Remove(_)
                                | EventKind::Any => {
                                    let _ = tx.send(());
                                }
                                _ => {}
                            }
                        }
                    })
                {
                    let _ = watcher.watch(&path, RecursiveMode::NonRecursive);
                    loop {
                        std::thread::sleep(std::time::Duration::from_secs(3600));
                    }
                }
            });
        }

        let map_layout = MapLayout::new(session.maze.size());
        let mut app = Self {
            session,
            cam: OrbitCamera::new(),
            renders: HashMap::new(),
            map_layout,
            panes: layout_panes(rl.get_screen_width(), rl.get_screen_height()),
            maze_rt: None,
            map_rt: None,
            dragging: false,
            config_path,
            config_rx: watching.then_some(rx),
            config_dirty: false,
        };
        app.ensure_targets(rl, thread);
        for kind in BatchKind::ALL {
            app.rebuild(rl, thread, kind);
        }
        app
    }
}

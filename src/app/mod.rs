mod init;
mod input;
mod render;
mod state;
mod step;

pub use state::{App, Pane, PaneLayout, layout_panes};

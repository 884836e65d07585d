pub mod node;
pub mod status_bar;

pub use node::{render_to_lines, NodeWidget};
pub use status_bar::StatusBarWidget;

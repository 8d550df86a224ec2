//! Declarative UI chrome around the map surface

pub mod control_panel;
pub mod drawer;
pub mod top_bar;
pub mod widgets;

pub use control_panel::ControlState;
pub use top_bar::StreamStatus;

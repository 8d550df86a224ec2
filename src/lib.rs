//! Sentinel-Q core library
//!
//! Renders a synthetic attack surface as positioned nodes over a hex grid,
//! with pointer interaction and two interchangeable render backends.

pub mod app;
pub mod assets;
pub mod constants;
pub mod map;
pub mod render;
pub mod theme;
pub mod ui;

// Re-export commonly used types
pub use app::SentinelApp;
pub use assets::{AssetKind, AssetMode, AssetNode, RiskBand, ZoomScope};
pub use map::{MapParams, SurfaceMap};
pub use render::RenderBackend;

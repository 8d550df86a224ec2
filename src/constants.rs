//! Application-wide constants and default values
//!
//! Centralized location for all hard-coded values to improve maintainability

/// Logical canvas the asset generator samples positions from
pub mod canvas {
    /// Fixed logical canvas width
    pub const LOGICAL_WIDTH: f32 = 800.0;

    /// Fixed logical canvas height
    pub const LOGICAL_HEIGHT: f32 = 600.0;
}

/// Hex grid tiling constants
pub mod grid {
    /// Hexagon radius for the raster background grid, in canvas units
    pub const HEX_SIZE: f32 = 30.0;

    /// Opacity of the decorative grid lines
    pub const LINE_OPACITY: f32 = 0.1;

    /// Column pitch of the instanced grid, in world units
    pub const WORLD_PITCH_X: f32 = 1.75;

    /// Band pitch of the instanced grid, in world units
    pub const WORLD_PITCH_Z: f32 = 1.5;

    /// Column offset applied on alternating bands
    pub const WORLD_BAND_OFFSET: f32 = 0.875;
}

/// Node scope constants
pub mod scope {
    /// Node count when the zoom scope is Org-Wide
    pub const ORG_WIDE_NODES: usize = 150;

    /// Node count for every other scope
    pub const TEAM_SCOPE_NODES: usize = 50;
}

/// Pointer interaction constants
pub mod interaction {
    /// Maximum pointer distance for a node hit, in render units
    pub const HIT_RADIUS: f32 = 15.0;

    /// Tooltip offset from the pointer so it does not occlude it
    pub const TOOLTIP_OFFSET: [f32; 2] = [10.0, -10.0];
}

/// Hover-scale animation constants for the instanced backend
pub mod hover {
    /// Mesh scale while not hovered
    pub const SCALE_IDLE: f32 = 1.0;

    /// Mesh scale target while hovered
    pub const SCALE_HOVERED: f32 = 1.5;

    /// Exponential approach rate, per second
    pub const SCALE_RATE: f32 = 12.0;

    /// Remaining delta below which the animation counts as settled
    pub const SETTLE_EPSILON: f32 = 0.005;
}

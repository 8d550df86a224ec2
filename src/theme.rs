//! Centralized theme and styling constants for the Sentinel-Q console
//!
//! This module provides a single source of truth for all colors, dimensions,
//! and styling values used throughout the application.

use egui::{Color32, Vec2};

/// Color palette for the Sentinel-Q console
pub struct Colors {
    // Surface colors
    pub main_background: Color32,
    pub panel_background: Color32,
    pub panel_border: Color32,

    // Grid and divider
    pub grid_line: Color32,
    pub divider: Color32,

    // Risk bands
    pub risk_low: Color32,
    pub risk_medium: Color32,
    pub risk_high: Color32,

    // Text
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub glyph: Color32,

    // Accent used by controls and the product mark
    pub accent: Color32,
}

impl Colors {
    /// Get the default color palette
    pub fn default() -> Self {
        Self {
            // Surface colors
            main_background: Color32::from_rgb(17, 20, 24),   // #111418
            panel_background: Color32::from_rgb(26, 31, 37),  // #1a1f25
            panel_border: Color32::from_rgb(108, 118, 128),   // #6c7680

            // Grid and divider
            grid_line: Color32::from_rgb(108, 118, 128),
            divider: Color32::from_rgb(108, 118, 128),

            // Risk bands
            risk_low: Color32::from_rgb(35, 209, 139),        // #23d18b
            risk_medium: Color32::from_rgb(240, 194, 68),     // #f0c244
            risk_high: Color32::from_rgb(255, 79, 79),        // #ff4f4f

            // Text
            text_primary: Color32::from_rgb(222, 227, 231),
            text_muted: Color32::from_rgb(139, 148, 158),
            glyph: Color32::from_rgb(17, 20, 24),

            // Accent matches the low-risk green used by the control arcs
            accent: Color32::from_rgb(35, 209, 139),
        }
    }
}

/// Dimension constants for the Sentinel-Q console
pub struct Dimensions {
    // Node disc sizing
    pub node_radius_base: f32,
    pub node_radius_span: f32,
    pub node_core_ratio: f32,
    pub glyph_font_size: f32,

    // Split divider
    pub divider_width: f32,
    pub divider_dash: f32,
    pub divider_gap: f32,

    // Chrome layout
    pub top_bar_height: f32,
    pub control_panel_width: f32,
    pub drawer_width: f32,

    // Control widgets
    pub knob_size: Vec2,
    pub toggle_size: Vec2,
}

impl Dimensions {
    /// Get the default dimensions
    pub fn default() -> Self {
        Self {
            // Node disc sizing
            node_radius_base: 6.0,
            node_radius_span: 4.0,
            node_core_ratio: 0.6,
            glyph_font_size: 8.0,

            // Split divider
            divider_width: 2.0,
            divider_dash: 5.0,
            divider_gap: 5.0,

            // Chrome layout
            top_bar_height: 48.0,
            control_panel_width: 300.0,
            drawer_width: 360.0,

            // Control widgets
            knob_size: Vec2::new(72.0, 72.0),
            toggle_size: Vec2::new(40.0, 20.0),
        }
    }
}

/// Complete theme containing all styling constants
pub struct Theme {
    pub colors: Colors,
    pub dimensions: Dimensions,
}

impl Theme {
    /// Get the default theme
    pub fn default() -> Self {
        Self {
            colors: Colors::default(),
            dimensions: Dimensions::default(),
        }
    }
}

/// Global theme instance
static GLOBAL_THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(|| Theme::default());

/// Get the global theme
pub fn theme() -> &'static Theme {
    &GLOBAL_THEME
}

/// Convenience functions for commonly used values
pub fn colors() -> &'static Colors {
    &theme().colors
}

pub fn dimensions() -> &'static Dimensions {
    &theme().dimensions
}

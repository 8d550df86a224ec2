//! Logical-to-render coordinate mapping
//!
//! Whatever transform places a node on screen must be the exact inverse of
//! the transform used to test pointer proximity, so both live here.

use egui::{pos2, Pos2, Rect};
use glam::Vec3;

use crate::assets::AssetNode;
use crate::constants::canvas;

/// Maps the fixed 800x600 logical canvas onto a render rect, halving the
/// effective width when split view is enabled.
#[derive(Debug, Clone, Copy)]
pub struct CanvasMapping {
    viewport: Rect,
    split_view: bool,
}

impl CanvasMapping {
    pub fn new(viewport: Rect, split_view: bool) -> Self {
        Self { viewport, split_view }
    }

    fn effective_width(&self) -> f32 {
        if self.split_view {
            self.viewport.width() / 2.0
        } else {
            self.viewport.width()
        }
    }

    /// Logical canvas position to render-surface position
    pub fn to_render(&self, logical: Pos2) -> Pos2 {
        pos2(
            self.viewport.min.x + (logical.x / canvas::LOGICAL_WIDTH) * self.effective_width(),
            self.viewport.min.y + (logical.y / canvas::LOGICAL_HEIGHT) * self.viewport.height(),
        )
    }

    /// Exact inverse of [`Self::to_render`]
    pub fn to_logical(&self, render: Pos2) -> Pos2 {
        pos2(
            (render.x - self.viewport.min.x) / self.effective_width() * canvas::LOGICAL_WIDTH,
            (render.y - self.viewport.min.y) / self.viewport.height() * canvas::LOGICAL_HEIGHT,
        )
    }
}

/// Ground-plane world extent used by the instanced backend, sized
/// proportionally to the node count and centered at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldExtent {
    pub half_width: f32,
    pub half_depth: f32,
}

impl WorldExtent {
    /// Width is `node_count * 2` world units, depth half of that.
    pub fn for_node_count(node_count: usize) -> Self {
        let width = node_count as f32 * 2.0;
        Self {
            half_width: width / 2.0,
            half_depth: width / 4.0,
        }
    }

    /// Linear map from the logical canvas onto this extent. Split view does
    /// not remap world coordinates; it adds a divider primitive at x = 0.
    pub fn world_position(&self, node: &AssetNode) -> Vec3 {
        Vec3::new(
            (node.position.x / canvas::LOGICAL_WIDTH - 0.5) * self.half_width * 2.0,
            0.0,
            (node.position.y / canvas::LOGICAL_HEIGHT - 0.5) * self.half_depth * 2.0,
        )
    }

    /// World-unit length of one logical canvas pixel along x
    pub fn units_per_logical_px(&self) -> f32 {
        self.half_width * 2.0 / canvas::LOGICAL_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetKind;
    use egui::vec2;

    fn viewport() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0))
    }

    fn node_at(x: f32, y: f32) -> AssetNode {
        AssetNode {
            id: "node-0".into(),
            kind: AssetKind::Server,
            risk_score: 0,
            open_ports: vec![],
            patch_age_days: 0,
            active_alerts: vec![],
            position: pos2(x, y),
        }
    }

    #[test]
    fn test_round_trip_without_split() {
        let mapping = CanvasMapping::new(viewport(), false);
        let logical = pos2(123.4, 456.7);
        let back = mapping.to_logical(mapping.to_render(logical));
        assert!((back.x - logical.x).abs() < 1e-3);
        assert!((back.y - logical.y).abs() < 1e-3);
    }

    #[test]
    fn test_round_trip_with_split() {
        let mapping = CanvasMapping::new(viewport(), true);
        let logical = pos2(640.0, 32.0);
        let back = mapping.to_logical(mapping.to_render(logical));
        assert!((back.x - logical.x).abs() < 1e-3);
        assert!((back.y - logical.y).abs() < 1e-3);
    }

    #[test]
    fn test_split_view_halves_the_effective_width() {
        let full = CanvasMapping::new(viewport(), false);
        let split = CanvasMapping::new(viewport(), true);
        let logical = pos2(800.0, 300.0);
        assert_eq!(full.to_render(logical).x, 800.0);
        assert_eq!(split.to_render(logical).x, 400.0);
        // y is untouched by split view
        assert_eq!(full.to_render(logical).y, split.to_render(logical).y);
    }

    #[test]
    fn test_render_rect_offset_is_applied() {
        let rect = Rect::from_min_size(pos2(300.0, 48.0), vec2(800.0, 600.0));
        let mapping = CanvasMapping::new(rect, false);
        assert_eq!(mapping.to_render(pos2(0.0, 0.0)), pos2(300.0, 48.0));
    }

    #[test]
    fn test_world_extent_scales_with_node_count() {
        let extent = WorldExtent::for_node_count(150);
        assert_eq!(extent.half_width, 150.0);
        assert_eq!(extent.half_depth, 75.0);
    }

    #[test]
    fn test_world_position_centers_the_canvas() {
        let extent = WorldExtent::for_node_count(150);
        let center = extent.world_position(&node_at(400.0, 300.0));
        assert!(center.length() < 1e-4);

        let corner = extent.world_position(&node_at(800.0, 600.0));
        assert!((corner.x - 150.0).abs() < 1e-3);
        assert!((corner.z - 75.0).abs() < 1e-3);
        assert_eq!(corner.y, 0.0);
    }
}

//! CPU raster backend drawn with the egui painter

use egui::{Align2, FontId, Pos2, Rect, Shape, Stroke, Ui};

use crate::assets::{node_radius, AssetNode, RiskBand};
use crate::constants::grid;
use crate::map::coords::CanvasMapping;
use crate::map::hex_grid;
use crate::map::hit_test::find_hit;
use crate::theme;

use super::{MapRenderer, MapView};

/// Immediate-mode backend: repaints the whole surface from scratch on each
/// relevant state change.
#[derive(Debug, Default)]
pub struct RasterRenderer;

impl RasterRenderer {
    pub fn new() -> Self {
        Self
    }

    fn draw_hex_grid(painter: &egui::Painter, rect: Rect) {
        let stroke = Stroke::new(
            1.0,
            theme::colors().grid_line.gamma_multiply(grid::LINE_OPACITY),
        );

        for center in hex_grid::tile(rect.width(), rect.height(), grid::HEX_SIZE) {
            let points = hex_grid::hexagon_points(center + rect.min.to_vec2(), grid::HEX_SIZE);
            painter.add(Shape::closed_line(points.to_vec(), stroke));
        }
    }

    fn draw_split_divider(painter: &egui::Painter, rect: Rect) {
        let dims = theme::dimensions();
        let x = rect.center().x;
        let dashes = Shape::dashed_line(
            &[Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            Stroke::new(dims.divider_width, theme::colors().divider),
            dims.divider_dash,
            dims.divider_gap,
        );
        painter.extend(dashes);
    }

    fn draw_node(painter: &egui::Painter, node: &AssetNode, mapping: &CanvasMapping) {
        let dims = theme::dimensions();
        let center = mapping.to_render(node.position);
        let color = RiskBand::classify(node.risk_score).color();
        let radius = node_radius(node.risk_score);

        // Outer glow halo, then the full disc, then the core at 80% opacity
        painter.circle_filled(center, radius + 4.0, color.gamma_multiply(0.15));
        painter.circle_filled(center, radius, color);
        painter.circle_filled(
            center,
            radius * dims.node_core_ratio,
            color.gamma_multiply(0.8),
        );

        painter.text(
            center,
            Align2::CENTER_CENTER,
            node.kind.glyph(),
            FontId::proportional(dims.glyph_font_size),
            theme::colors().glyph,
        );
    }
}

impl MapRenderer for RasterRenderer {
    fn draw(&mut self, ui: &mut Ui, rect: Rect, nodes: &[AssetNode], view: &MapView) {
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, egui::CornerRadius::ZERO, theme::colors().main_background);
        Self::draw_hex_grid(&painter, rect);

        if view.split_view {
            Self::draw_split_divider(&painter, rect);
        }

        let mapping = CanvasMapping::new(rect, view.split_view);
        for node in nodes {
            Self::draw_node(&painter, node, &mapping);
        }
    }

    fn hit_test(
        &self,
        pointer: Pos2,
        rect: Rect,
        nodes: &[AssetNode],
        view: &MapView,
    ) -> Option<usize> {
        find_hit(pointer, nodes, &CanvasMapping::new(rect, view.split_view))
    }
}

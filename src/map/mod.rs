//! Attack-surface map: node set ownership, interaction, render dispatch

pub mod coords;
pub mod hex_grid;
pub mod hit_test;
pub mod interaction;

pub use coords::{CanvasMapping, WorldExtent};
pub use hit_test::find_hit;
pub use interaction::{HoverState, InteractionController};

use egui::{RichText, Sense, Stroke, Ui};
use rand::Rng;

use crate::assets::{self, AssetMode, AssetNode, RiskBand, ZoomScope};
use crate::render::{InstancedRenderer, MapRenderer, MapView, RasterRenderer, RenderBackend};
use crate::theme;

/// Parameters supplied by the control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapParams {
    pub asset_mode: AssetMode,
    pub zoom_scope: ZoomScope,
    pub split_view: bool,
}

/// The interactive map surface. Owns the current node batch, the hover
/// state machine, and both render backends.
pub struct SurfaceMap {
    params: MapParams,
    nodes: Vec<AssetNode>,
    controller: InteractionController,
    backend: RenderBackend,
    raster: RasterRenderer,
    instanced: InstancedRenderer,
}

impl SurfaceMap {
    pub fn new(params: MapParams, rng: &mut impl Rng) -> Self {
        let nodes = assets::generate(params.asset_mode, params.zoom_scope, rng);
        log::info!(
            "generated {} assets ({} / {})",
            nodes.len(),
            params.asset_mode.label(),
            params.zoom_scope.label()
        );

        Self {
            params,
            nodes,
            controller: InteractionController::new(),
            backend: RenderBackend::Raster,
            raster: RasterRenderer::new(),
            instanced: InstancedRenderer::new(),
        }
    }

    /// Apply new control-panel parameters. Mode or scope changes regenerate
    /// the node set from scratch; split view only changes the projection.
    pub fn set_params(&mut self, params: MapParams, rng: &mut impl Rng) {
        let regenerate = params.asset_mode != self.params.asset_mode
            || params.zoom_scope != self.params.zoom_scope;
        self.params = params;

        if regenerate {
            self.nodes = assets::generate(params.asset_mode, params.zoom_scope, rng);
            self.controller.reset();
            log::debug!(
                "regenerated {} assets ({} / {})",
                self.nodes.len(),
                params.asset_mode.label(),
                params.zoom_scope.label()
            );
        }
    }

    pub fn backend(&self) -> RenderBackend {
        self.backend
    }

    pub fn set_backend(&mut self, backend: RenderBackend) {
        self.backend = backend;
    }

    pub fn nodes(&self) -> &[AssetNode] {
        &self.nodes
    }

    pub fn hovered_node(&self) -> Option<&AssetNode> {
        let id = self.controller.hovered_id()?;
        self.nodes.iter().find(|n| n.id == id)
    }

    fn hovered_index(&self) -> Option<usize> {
        let id = self.controller.hovered_id()?;
        self.nodes.iter().position(|n| n.id == id)
    }

    /// Draw the map into the available space, process pointer events, and
    /// return the node selected by a click this frame, if any.
    pub fn ui(&mut self, ui: &mut Ui) -> Option<AssetNode> {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());
        // Nothing to do until the surface has a real size
        if !ui.is_rect_visible(rect) || rect.width() < 1.0 || rect.height() < 1.0 {
            return None;
        }

        let view = MapView {
            split_view: self.params.split_view,
            hovered: self.hovered_index(),
        };

        match self.backend {
            RenderBackend::Raster => self.raster.draw(ui, rect, &self.nodes, &view),
            RenderBackend::Instanced => self.instanced.draw(ui, rect, &self.nodes, &view),
        }

        let renderer: &dyn MapRenderer = match self.backend {
            RenderBackend::Raster => &self.raster,
            RenderBackend::Instanced => &self.instanced,
        };

        if let Some(pointer) = response.hover_pos() {
            let hit = renderer.hit_test(pointer, rect, &self.nodes, &view);
            self.controller
                .pointer_move(pointer, hit.map(|i| &self.nodes[i]));
            ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
        } else {
            self.controller.pointer_leave();
        }

        let clicked = if response.clicked() {
            let selected = self
                .controller
                .click()
                .and_then(|id| self.nodes.iter().find(|n| n.id == id))
                .cloned();
            if let Some(node) = &selected {
                log::debug!("asset selected: {}", node.id);
            }
            selected
        } else {
            None
        };

        self.show_tooltip(ui);
        clicked
    }

    fn show_tooltip(&self, ui: &Ui) {
        let (Some(pos), Some(node)) = (self.controller.tooltip_pos(), self.hovered_node()) else {
            return;
        };
        let colors = theme::colors();

        egui::Area::new(egui::Id::new("asset_tooltip"))
            .fixed_pos(pos)
            .order(egui::Order::Tooltip)
            .interactable(false)
            .show(ui.ctx(), |ui| {
                egui::Frame::default()
                    .fill(colors.panel_background)
                    .stroke(Stroke::new(1.0, colors.panel_border.gamma_multiply(0.3)))
                    .corner_radius(egui::CornerRadius::same(6))
                    .inner_margin(egui::Margin::same(8))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(format!(
                                "{} - {}",
                                node.kind.label().to_uppercase(),
                                node.id
                            ))
                            .color(colors.text_primary)
                            .strong(),
                        );
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("Risk Score:").color(colors.text_muted));
                            ui.label(
                                RichText::new(node.risk_score.to_string())
                                    .color(RiskBand::classify(node.risk_score).color()),
                            );
                        });
                        ui.label(
                            RichText::new(format!("Open Ports: {}", node.open_ports.len()))
                                .color(colors.text_muted),
                        );
                        ui.label(
                            RichText::new(format!("Patch Age: {}d", node.patch_age_days))
                                .color(colors.text_muted),
                        );
                        ui.label(
                            RichText::new(format!("Active Alerts: {}", node.active_alerts.len()))
                                .color(colors.text_muted),
                        );
                    });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetKind;
    use egui::{pos2, vec2, Pos2, Rect};

    fn node(id: &str, x: f32, y: f32, risk: u8) -> AssetNode {
        AssetNode {
            id: id.into(),
            kind: AssetKind::Server,
            risk_score: risk,
            open_ports: vec![],
            patch_age_days: 0,
            active_alerts: vec![],
            position: pos2(x, y),
        }
    }

    #[test]
    fn test_click_selects_the_hovered_node_end_to_end() {
        let nodes = vec![
            node("node-0", 100.0, 100.0, 10),
            node("node-1", 400.0, 300.0, 50),
            node("node-2", 700.0, 500.0, 90),
        ];
        let mapping = CanvasMapping::new(
            Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0)),
            false,
        );
        let mut controller = InteractionController::new();

        // Pointer just below the first node hits it and nothing else.
        let pointer = pos2(100.0, 101.0);
        let hit = find_hit(pointer, &nodes, &mapping);
        assert_eq!(hit, Some(0));

        controller.pointer_move(pointer, hit.map(|i| &nodes[i]));
        assert_eq!(controller.state(), &HoverState::Hovering("node-0".into()));

        // Click while hovering invokes the selection callback with its id.
        let mut selected = None;
        if let Some(id) = controller.click() {
            selected = Some(id.to_string());
        }
        assert_eq!(selected.as_deref(), Some("node-0"));
    }
}

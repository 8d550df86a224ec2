//! Retained-mode instanced 3-D backend
//!
//! The scene is rendered with wgpu instanced meshes through an egui paint
//! callback; kind glyphs are overlaid with CPU-rendered text so they stay
//! crisp at any scale. Picking casts a camera ray against node spheres but
//! keeps the same first-in-sequence policy as the raster backend.

pub mod camera;
pub mod config;
pub mod instance;
pub mod scene_callback;
pub mod scene_rendering;

pub use camera::{ray_hits_sphere, OrbitCamera};
pub use instance::{
    HexInstanceData, HoverAnimation, NodeInstanceData, SceneInstanceManager, SceneUniforms,
};
pub use scene_callback::SceneRenderCallback;
pub use scene_rendering::{GpuSceneRenderer, GLOBAL_SCENE_RENDERER};

use egui::{Align2, FontId, Pos2, Rect, Ui};

use crate::assets::AssetNode;
use crate::constants::interaction::HIT_RADIUS;
use crate::map::coords::WorldExtent;
use crate::theme;

use super::{MapRenderer, MapView};

/// Retained-mode backend state carried across frames
pub struct InstancedRenderer {
    camera: OrbitCamera,
    hover_anim: HoverAnimation,
    instances: SceneInstanceManager,
    last_hovered: Option<usize>,
    framed_extent: Option<WorldExtent>,
}

impl InstancedRenderer {
    pub fn new() -> Self {
        Self {
            camera: OrbitCamera::new(),
            hover_anim: HoverAnimation::new(),
            instances: SceneInstanceManager::new(),
            last_hovered: None,
            framed_extent: None,
        }
    }
}

impl Default for InstancedRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MapRenderer for InstancedRenderer {
    fn draw(&mut self, ui: &mut Ui, rect: Rect, nodes: &[AssetNode], view: &MapView) {
        let extent = WorldExtent::for_node_count(nodes.len());
        self.camera.set_aspect(rect.width() / rect.height());

        if self.framed_extent != Some(extent) {
            self.camera.frame_extent(&extent);
            self.framed_extent = Some(extent);
        }
        self.instances.update_grid(&extent);

        // A hover switch supersedes any in-flight scale animation
        if view.hovered != self.last_hovered {
            self.hover_anim.reset();
            self.last_hovered = view.hovered;
        }
        self.hover_anim.set_hovered(view.hovered.is_some());

        let dt = ui.input(|i| i.stable_dt).min(0.1);
        let hover_scale = self.hover_anim.advance(dt);
        if !self.hover_anim.settled() {
            ui.ctx().request_repaint();
        }

        self.instances
            .update_nodes(nodes, &extent, view.hovered, hover_scale);

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, egui::CornerRadius::ZERO, theme::colors().main_background);

        painter.add(egui_wgpu::Callback::new_paint_callback(
            rect,
            SceneRenderCallback {
                hexes: self.instances.hex_instances().to_vec(),
                nodes: self.instances.node_instances().to_vec(),
                uniforms: SceneUniforms::new(&self.camera, &extent),
                draw_divider: view.split_view,
            },
        ));

        // Kind glyphs, CPU-rendered on top of the GPU scene
        for node in nodes {
            if let Some(screen) = self
                .camera
                .project_to_screen(extent.world_position(node), rect)
            {
                painter.text(
                    screen,
                    Align2::CENTER_CENTER,
                    node.kind.glyph(),
                    FontId::proportional(theme::dimensions().glyph_font_size),
                    theme::colors().glyph,
                );
            }
        }
    }

    fn hit_test(
        &self,
        pointer: Pos2,
        rect: Rect,
        nodes: &[AssetNode],
        _view: &MapView,
    ) -> Option<usize> {
        if nodes.is_empty() || !rect.contains(pointer) {
            return None;
        }

        let extent = WorldExtent::for_node_count(nodes.len());
        let (origin, dir) = self.camera.screen_to_ray(
            (pointer.x - rect.min.x) / rect.width(),
            (pointer.y - rect.min.y) / rect.height(),
        );

        let pick_radius = HIT_RADIUS * extent.units_per_logical_px();
        nodes
            .iter()
            .position(|node| ray_hits_sphere(origin, dir, extent.world_position(node), pick_radius))
    }
}

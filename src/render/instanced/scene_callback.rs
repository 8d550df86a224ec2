//! GPU rendering callback for the instanced scene
//!
//! Bridges the per-frame instance data into egui's paint callback system;
//! `prepare` uploads buffers, `paint` issues the instanced draw calls.

use super::instance::{HexInstanceData, NodeInstanceData, SceneUniforms};
use super::scene_rendering::{GpuSceneRenderer, GLOBAL_SCENE_RENDERER};

/// Paint callback carrying one frame of scene data
pub struct SceneRenderCallback {
    pub hexes: Vec<HexInstanceData>,
    pub nodes: Vec<NodeInstanceData>,
    pub uniforms: SceneUniforms,
    pub draw_divider: bool,
}

impl egui_wgpu::CallbackTrait for SceneRenderCallback {
    fn prepare(
        &self,
        device: &eframe::wgpu::Device,
        queue: &eframe::wgpu::Queue,
        _screen_descriptor: &egui_wgpu::ScreenDescriptor,
        _egui_encoder: &mut eframe::wgpu::CommandEncoder,
        _callback_resources: &mut egui_wgpu::CallbackResources,
    ) -> Vec<eframe::wgpu::CommandBuffer> {
        let mut renderer_lock = match GLOBAL_SCENE_RENDERER.lock() {
            Ok(lock) => lock,
            Err(_) => return Vec::new(), // Skip rendering if mutex is poisoned
        };
        if renderer_lock.is_none() {
            // Match egui's surface format
            let format = eframe::wgpu::TextureFormat::Bgra8Unorm;
            *renderer_lock = Some(GpuSceneRenderer::new(device, format));
        }

        if let Some(renderer) = renderer_lock.as_ref() {
            renderer.update_uniforms(queue, &self.uniforms);
            renderer.update_hex_instances(queue, &self.hexes);
            renderer.update_node_instances(queue, &self.nodes);
        }
        Vec::new()
    }

    fn paint(
        &self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut eframe::wgpu::RenderPass<'static>,
        _callback_resources: &egui_wgpu::CallbackResources,
    ) {
        let renderer_lock = match GLOBAL_SCENE_RENDERER.lock() {
            Ok(lock) => lock,
            Err(_) => return, // Skip rendering if mutex is poisoned
        };
        if let Some(renderer) = renderer_lock.as_ref() {
            // Grid first, divider above it, nodes on top
            renderer.render_hex_grid(render_pass, self.hexes.len() as u32);
            if self.draw_divider {
                renderer.render_divider(render_pass);
            }
            renderer.render_nodes(render_pass, self.nodes.len() as u32);
        }
    }
}

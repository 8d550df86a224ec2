//! GPU instance data structures and management
//!
//! Instance buffers are rebuilt from the node set each frame; the grid
//! instances are cached and only rebuilt when the world extent changes.

use bytemuck::{Pod, Zeroable};

use crate::assets::{node_radius, AssetNode, RiskBand};
use crate::constants::hover;
use crate::map::coords::WorldExtent;
use crate::map::hex_grid;
use crate::theme;

use super::camera::OrbitCamera;

/// Instance data for one background hexagon
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct HexInstanceData {
    pub center: [f32; 2],
    pub _padding: [f32; 2],
}

/// Instance data for one node billboard
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct NodeInstanceData {
    pub position: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
    pub scale: f32,
    pub _padding: [f32; 3],
}

impl NodeInstanceData {
    pub fn from_node(node: &AssetNode, extent: &WorldExtent, scale: f32) -> Self {
        let world = extent.world_position(node);
        let color = RiskBand::classify(node.risk_score).color();

        Self {
            position: world.to_array(),
            radius: node_radius(node.risk_score) * extent.units_per_logical_px(),
            color: color_to_array(color),
            scale,
            _padding: [0.0; 3],
        }
    }
}

/// Uniform data shared by the scene pipelines
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_right: [f32; 4],
    pub camera_up: [f32; 4],
    pub grid_color: [f32; 4],
    pub divider_color: [f32; 4],
    pub world_half: [f32; 2],
    pub _padding: [f32; 2],
}

impl SceneUniforms {
    pub fn new(camera: &OrbitCamera, extent: &WorldExtent) -> Self {
        let (right, up) = camera.billboard_basis();
        let colors = theme::colors();

        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_right: [right.x, right.y, right.z, 0.0],
            camera_up: [up.x, up.y, up.z, 0.0],
            grid_color: color_with_alpha(colors.grid_line, crate::constants::grid::LINE_OPACITY),
            divider_color: color_with_alpha(colors.divider, 0.8),
            world_half: [extent.half_width, extent.half_depth],
            _padding: [0.0; 2],
        }
    }
}

fn color_to_array(color: egui::Color32) -> [f32; 4] {
    [
        color.r() as f32 / 255.0,
        color.g() as f32 / 255.0,
        color.b() as f32 / 255.0,
        color.a() as f32 / 255.0,
    ]
}

fn color_with_alpha(color: egui::Color32, alpha: f32) -> [f32; 4] {
    let mut rgba = color_to_array(color);
    rgba[3] = alpha;
    rgba
}

/// Exponential approach of the hovered mesh scale toward its target.
/// A pending animation is implicitly superseded whenever the target moves;
/// each frame reads the latest hover state.
#[derive(Debug, Clone, Copy)]
pub struct HoverAnimation {
    scale: f32,
    target: f32,
}

impl HoverAnimation {
    pub fn new() -> Self {
        Self {
            scale: hover::SCALE_IDLE,
            target: hover::SCALE_IDLE,
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.target = if hovered {
            hover::SCALE_HOVERED
        } else {
            hover::SCALE_IDLE
        };
    }

    /// Snap back to the idle scale, used when hover switches nodes
    pub fn reset(&mut self) {
        self.scale = hover::SCALE_IDLE;
        self.target = hover::SCALE_IDLE;
    }

    /// Advance by the elapsed frame time and return the current scale
    pub fn advance(&mut self, dt: f32) -> f32 {
        let blend = 1.0 - (-dt * hover::SCALE_RATE).exp();
        self.scale += (self.target - self.scale) * blend;
        self.scale
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn settled(&self) -> bool {
        (self.target - self.scale).abs() < hover::SETTLE_EPSILON
    }
}

impl Default for HoverAnimation {
    fn default() -> Self {
        Self::new()
    }
}

/// Rebuilds instance vectors for the scene callback
pub struct SceneInstanceManager {
    hex_instances: Vec<HexInstanceData>,
    node_instances: Vec<NodeInstanceData>,
    grid_extent: Option<WorldExtent>,
}

impl SceneInstanceManager {
    pub fn new() -> Self {
        Self {
            hex_instances: Vec::new(),
            node_instances: Vec::with_capacity(crate::constants::scope::ORG_WIDE_NODES),
            grid_extent: None,
        }
    }

    /// Grid instances only change with the world extent, never with assets
    pub fn update_grid(&mut self, extent: &WorldExtent) {
        if self.grid_extent == Some(*extent) {
            return;
        }
        self.hex_instances.clear();
        self.hex_instances.extend(
            hex_grid::tile_world(extent.half_width, extent.half_depth).map(|(x, z)| {
                HexInstanceData {
                    center: [x, z],
                    _padding: [0.0; 2],
                }
            }),
        );
        self.grid_extent = Some(*extent);
    }

    /// Node instances are rebuilt every frame from the latest hover state
    pub fn update_nodes(
        &mut self,
        nodes: &[AssetNode],
        extent: &WorldExtent,
        hovered: Option<usize>,
        hover_scale: f32,
    ) {
        self.node_instances.clear();
        self.node_instances
            .extend(nodes.iter().enumerate().map(|(i, node)| {
                let scale = if hovered == Some(i) {
                    hover_scale
                } else {
                    hover::SCALE_IDLE
                };
                NodeInstanceData::from_node(node, extent, scale)
            }));
    }

    pub fn hex_instances(&self) -> &[HexInstanceData] {
        &self.hex_instances
    }

    pub fn node_instances(&self) -> &[NodeInstanceData] {
        &self.node_instances
    }
}

impl Default for SceneInstanceManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetKind;
    use egui::pos2;

    fn node(score: u8) -> AssetNode {
        AssetNode {
            id: "node-0".into(),
            kind: AssetKind::Server,
            risk_score: score,
            open_ports: vec![],
            patch_age_days: 0,
            active_alerts: vec![],
            position: pos2(400.0, 300.0),
        }
    }

    #[test]
    fn test_hover_animation_converges_on_the_target() {
        let mut anim = HoverAnimation::new();
        anim.set_hovered(true);
        for _ in 0..120 {
            anim.advance(1.0 / 60.0);
        }
        assert!((anim.scale() - hover::SCALE_HOVERED).abs() < 0.01);
        assert!(anim.settled());
    }

    #[test]
    fn test_hover_animation_is_monotonic_toward_the_target() {
        let mut anim = HoverAnimation::new();
        anim.set_hovered(true);
        let mut last = anim.scale();
        for _ in 0..30 {
            let next = anim.advance(1.0 / 60.0);
            assert!(next >= last);
            assert!(next <= hover::SCALE_HOVERED);
            last = next;
        }
    }

    #[test]
    fn test_hover_animation_retargets_downward() {
        let mut anim = HoverAnimation::new();
        anim.set_hovered(true);
        anim.advance(1.0);
        anim.set_hovered(false);
        for _ in 0..120 {
            anim.advance(1.0 / 60.0);
        }
        assert!((anim.scale() - hover::SCALE_IDLE).abs() < 0.01);
    }

    #[test]
    fn test_only_the_hovered_instance_scales() {
        let extent = WorldExtent::for_node_count(2);
        let nodes = vec![node(10), node(90)];
        let mut mgr = SceneInstanceManager::new();
        mgr.update_nodes(&nodes, &extent, Some(1), 1.4);

        assert_eq!(mgr.node_instances()[0].scale, 1.0);
        assert_eq!(mgr.node_instances()[1].scale, 1.4);
    }

    #[test]
    fn test_grid_instances_are_cached_per_extent() {
        let mut mgr = SceneInstanceManager::new();
        mgr.update_grid(&WorldExtent::for_node_count(50));
        let count = mgr.hex_instances().len();
        assert!(count > 0);

        // Same extent: untouched. New extent: rebuilt larger.
        mgr.update_grid(&WorldExtent::for_node_count(50));
        assert_eq!(mgr.hex_instances().len(), count);
        mgr.update_grid(&WorldExtent::for_node_count(150));
        assert!(mgr.hex_instances().len() > count);
    }

    #[test]
    fn test_instance_color_tracks_the_risk_band() {
        let extent = WorldExtent::for_node_count(1);
        let instance = NodeInstanceData::from_node(&node(90), &extent, 1.0);
        // #ff4f4f
        assert!((instance.color[0] - 1.0).abs() < 1e-3);
        assert!((instance.color[1] - 79.0 / 255.0).abs() < 1e-3);
    }
}

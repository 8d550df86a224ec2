//! Dual-backend map rendering
//!
//! Both backends draw the same node set with the same colors and answer
//! pointer queries through the same interface, so the interaction logic
//! never depends on which one is active.

pub mod instanced;
pub mod raster;

pub use instanced::InstancedRenderer;
pub use raster::RasterRenderer;

use egui::{Pos2, Rect, Ui};

use crate::assets::AssetNode;

/// Per-frame view parameters shared by both backends
#[derive(Debug, Clone, Copy)]
pub struct MapView {
    pub split_view: bool,
    /// Index of the hovered node in the current node sequence
    pub hovered: Option<usize>,
}

/// Capability interface implemented by the raster and instanced backends.
/// Renderers never mutate node data.
pub trait MapRenderer {
    /// Paint the background grid, the optional split divider, and all nodes
    fn draw(&mut self, ui: &mut Ui, rect: Rect, nodes: &[AssetNode], view: &MapView);

    /// Resolve a pointer position to the node under it, if any. The
    /// transform used here is the exact inverse of the one used to draw.
    fn hit_test(&self, pointer: Pos2, rect: Rect, nodes: &[AssetNode], view: &MapView)
        -> Option<usize>;
}

/// Which backend the surface is currently using
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderBackend {
    /// Immediate-mode 2-D drawing with the egui painter
    Raster,
    /// Retained-mode instanced 3-D scene rendered through wgpu
    Instanced,
}

impl RenderBackend {
    pub fn label(self) -> &'static str {
        match self {
            RenderBackend::Raster => "2D Canvas",
            RenderBackend::Instanced => "3D Instanced",
        }
    }
}

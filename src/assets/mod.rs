//! Synthetic asset model and generation

pub mod generator;
pub mod node;
pub mod risk;

pub use generator::generate;
pub use node::{AssetKind, AssetMode, AssetNode, ZoomScope};
pub use risk::{node_radius, RiskBand};

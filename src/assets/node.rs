//! Asset node data model

use egui::Pos2;

/// Category of a visualized asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Server,
    Iot,
    Saas,
}

impl AssetKind {
    /// One-character glyph drawn on top of the node disc
    pub fn glyph(self) -> char {
        match self {
            AssetKind::Server => 'S',
            AssetKind::Iot => 'I',
            AssetKind::Saas => 'C',
        }
    }

    /// Lowercase label used in tooltips and the drawer
    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Server => "server",
            AssetKind::Iot => "iot",
            AssetKind::Saas => "saas",
        }
    }
}

/// Asset mode selected in the control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetMode {
    Network,
    Endpoint,
    Cloud,
}

impl AssetMode {
    pub const ALL: [AssetMode; 3] = [AssetMode::Network, AssetMode::Endpoint, AssetMode::Cloud];

    /// Asset kinds admissible under this mode
    pub fn admissible_kinds(self) -> &'static [AssetKind] {
        match self {
            AssetMode::Network => &[AssetKind::Server, AssetKind::Iot],
            AssetMode::Endpoint => &[AssetKind::Server],
            AssetMode::Cloud => &[AssetKind::Saas, AssetKind::Server],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AssetMode::Network => "Network",
            AssetMode::Endpoint => "Endpoint",
            AssetMode::Cloud => "Cloud",
        }
    }
}

/// Coarse density selector for the node set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomScope {
    OrgWide,
    TeamScope,
}

impl ZoomScope {
    pub const ALL: [ZoomScope; 2] = [ZoomScope::OrgWide, ZoomScope::TeamScope];

    /// Number of nodes generated under this scope
    pub fn node_count(self) -> usize {
        match self {
            ZoomScope::OrgWide => crate::constants::scope::ORG_WIDE_NODES,
            ZoomScope::TeamScope => crate::constants::scope::TEAM_SCOPE_NODES,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ZoomScope::OrgWide => "Org-Wide",
            ZoomScope::TeamScope => "Team-Scope",
        }
    }
}

/// A single visualized security asset
#[derive(Debug, Clone, PartialEq)]
pub struct AssetNode {
    /// Stable identifier, unique within one generation batch
    pub id: String,
    pub kind: AssetKind,
    /// Risk score in [0, 100]
    pub risk_score: u8,
    /// Open ports, at most four
    pub open_ports: Vec<u16>,
    /// Days since the last patch, in [0, 364]
    pub patch_age_days: u16,
    /// Active alert labels, at most two
    pub active_alerts: Vec<String>,
    /// Logical position on the fixed 800x600 canvas
    pub position: Pos2,
}

//! Risk score classification

use egui::Color32;

use crate::theme;

/// Severity band derived from a risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    /// Classify a score into its band. The intervals are closed-open:
    /// [0, 30) is Low, [30, 70) is Medium, [70, 100] is High.
    pub fn classify(score: u8) -> Self {
        if score < 30 {
            RiskBand::Low
        } else if score < 70 {
            RiskBand::Medium
        } else {
            RiskBand::High
        }
    }

    /// Heat-map color for this band
    pub fn color(self) -> Color32 {
        let colors = theme::colors();
        match self {
            RiskBand::Low => colors.risk_low,
            RiskBand::Medium => colors.risk_medium,
            RiskBand::High => colors.risk_high,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "Low",
            RiskBand::Medium => "Medium",
            RiskBand::High => "High",
        }
    }
}

/// Raster disc radius for a score, scaling linearly over [6, 10]
pub fn node_radius(score: u8) -> f32 {
    let dims = theme::dimensions();
    dims.node_radius_base + (score as f32 / 100.0) * dims.node_radius_span
}

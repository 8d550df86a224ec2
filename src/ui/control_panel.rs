//! Left control panel feeding parameters into the map

use egui::{Context, RichText, Stroke};

use crate::assets::{AssetMode, ZoomScope};
use crate::render::RenderBackend;
use crate::theme;

use super::widgets;

/// Full state of the control panel. Only `asset_mode`, `zoom_scope`, and
/// `split_view` reach the map core; the rest drives the simulated stream
/// status or is display-only scenario tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    pub look_back_window: f32,
    pub scenario_runs: u32,
    pub blast_radius: f32,
    pub threat_severity: f32,
    pub zero_day_noise: bool,
    pub asset_mode: AssetMode,
    pub live_forensics: bool,
    pub split_view: bool,
    pub zoom_scope: ZoomScope,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            look_back_window: 60.0,
            scenario_runs: 5,
            blast_radius: 1.0,
            threat_severity: 5.0,
            zero_day_noise: false,
            asset_mode: AssetMode::Network,
            live_forensics: true,
            split_view: false,
            zoom_scope: ZoomScope::OrgWide,
        }
    }
}

fn section_gap(ui: &mut egui::Ui) {
    ui.add_space(6.0);
    ui.separator();
    ui.add_space(6.0);
}

/// Show the panel. Returns true when any control changed this frame.
pub fn show(ctx: &Context, state: &mut ControlState, backend: &mut RenderBackend) -> bool {
    let colors = theme::colors();
    let dims = theme::dimensions();
    let mut changed = false;

    egui::SidePanel::left("control_panel")
        .exact_width(dims.control_panel_width)
        .resizable(false)
        .frame(
            egui::Frame::default()
                .fill(colors.main_background)
                .stroke(Stroke::new(1.0, colors.panel_border.gamma_multiply(0.2)))
                .inner_margin(egui::Margin::same(12)),
        )
        .show(ctx, |ui| {
            ui.label(
                RichText::new("Control Panel")
                    .color(colors.text_primary)
                    .size(16.0)
                    .strong(),
            );
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                changed |= widgets::rotary_knob(
                    ui,
                    "Look-Back Window",
                    &mut state.look_back_window,
                    5.0,
                    4320.0,
                    5.0,
                    "min",
                );
                section_gap(ui);

                changed |= widgets::stepper(ui, "Scenario Iterations", &mut state.scenario_runs, 1, 20);
                section_gap(ui);

                changed |= widgets::rotary_knob(
                    ui,
                    "Blast Radius Multiplier",
                    &mut state.blast_radius,
                    0.1,
                    3.0,
                    0.1,
                    "",
                );
                section_gap(ui);

                changed |= widgets::rotary_knob(
                    ui,
                    "Threat Injection Severity",
                    &mut state.threat_severity,
                    1.0,
                    10.0,
                    0.5,
                    "CVSS",
                );
                section_gap(ui);

                changed |= widgets::toggle_switch(ui, "Zero-Day Noise", &mut state.zero_day_noise);
                section_gap(ui);

                ui.label(RichText::new("Asset Mode").color(colors.text_muted));
                for mode in AssetMode::ALL {
                    if ui
                        .radio_value(&mut state.asset_mode, mode, mode.label())
                        .changed()
                    {
                        changed = true;
                    }
                }
                section_gap(ui);

                changed |= widgets::toggle_switch(ui, "Live / Forensics", &mut state.live_forensics);
                section_gap(ui);

                changed |= widgets::toggle_switch(ui, "Live vs Hardened", &mut state.split_view);
                section_gap(ui);

                changed |= widgets::two_way_selector(
                    ui,
                    "Zoom Scope",
                    &mut state.zoom_scope,
                    [
                        (ZoomScope::OrgWide, ZoomScope::OrgWide.label()),
                        (ZoomScope::TeamScope, ZoomScope::TeamScope.label()),
                    ],
                );
                section_gap(ui);

                widgets::two_way_selector(
                    ui,
                    "Render Path",
                    backend,
                    [
                        (RenderBackend::Raster, RenderBackend::Raster.label()),
                        (RenderBackend::Instanced, RenderBackend::Instanced.label()),
                    ],
                );
            });
        });

    changed
}

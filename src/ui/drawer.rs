//! Right-hand asset details drawer

use egui::{Context, RichText, Stroke, Ui};

use crate::assets::{AssetNode, RiskBand};
use crate::theme;

fn card<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::default()
        .fill(theme::colors().panel_background)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

fn section(ui: &mut Ui, title: &str) {
    ui.add_space(10.0);
    ui.label(
        RichText::new(title)
            .color(theme::colors().text_primary)
            .strong(),
    );
    ui.add_space(4.0);
}

/// Show the drawer for the selected node. Sets `open` to false when the
/// close button is pressed.
pub fn show(ctx: &Context, open: &mut bool, node: Option<&AssetNode>) {
    let colors = theme::colors();
    let dims = theme::dimensions();
    let visible = *open && node.is_some();

    egui::SidePanel::right("asset_drawer")
        .exact_width(dims.drawer_width)
        .resizable(false)
        .frame(
            egui::Frame::default()
                .fill(colors.main_background)
                .stroke(Stroke::new(1.0, colors.panel_border.gamma_multiply(0.2)))
                .inner_margin(egui::Margin::same(14)),
        )
        .show_animated(ctx, visible, |ui| {
            let Some(node) = node else { return };

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Asset Details")
                        .color(colors.text_primary)
                        .size(16.0)
                        .strong(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✕").clicked() {
                        *open = false;
                    }
                });
            });
            ui.separator();

            ui.add_space(8.0);
            ui.label(RichText::new(&node.id).color(colors.text_primary).strong());
            ui.label(RichText::new(node.kind.label()).color(colors.text_muted));

            let band = RiskBand::classify(node.risk_score);
            section(ui, "Risk Assessment");
            card(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Risk Score").color(colors.text_muted));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!(
                                "{}/100 ({})",
                                node.risk_score,
                                band.label()
                            ))
                            .color(band.color())
                            .strong(),
                        );
                    });
                });
                ui.add_space(4.0);
                ui.add(
                    egui::ProgressBar::new(node.risk_score as f32 / 100.0)
                        .fill(band.color())
                        .desired_height(6.0),
                );
            });

            section(ui, "Network Exposure");
            card(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Open Ports").color(colors.text_muted));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(node.open_ports.len().to_string())
                                .color(colors.text_primary),
                        );
                    });
                });
                if !node.open_ports.is_empty() {
                    ui.add_space(4.0);
                    ui.horizontal_wrapped(|ui| {
                        for port in node.open_ports.iter().take(6) {
                            port_chip(ui, &port.to_string());
                        }
                        if node.open_ports.len() > 6 {
                            port_chip(ui, &format!("+{} more", node.open_ports.len() - 6));
                        }
                    });
                }
            });

            section(ui, "Patch Status");
            card(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Last Patched").color(colors.text_muted));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("{} days ago", node.patch_age_days))
                                .color(patch_age_color(node.patch_age_days)),
                        );
                    });
                });
            });

            section(ui, "Active Alerts");
            card(ui, |ui| {
                if node.active_alerts.is_empty() {
                    ui.label(RichText::new("No active alerts").color(colors.risk_low));
                } else {
                    for alert in &node.active_alerts {
                        ui.label(
                            RichText::new(format!("⚠ {alert}")).color(colors.risk_medium),
                        );
                    }
                }
            });

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                ui.add_space(8.0);
                let button = egui::Button::new(
                    RichText::new("Mitigate Threats")
                        .color(colors.main_background)
                        .strong(),
                )
                .fill(colors.accent)
                .min_size(egui::vec2(ui.available_width(), 36.0));
                if ui.add(button).clicked() {
                    log::info!("mitigation requested for {}", node.id);
                }
            });
        });
}

fn port_chip(ui: &mut Ui, text: &str) {
    egui::Frame::default()
        .fill(theme::colors().panel_border.gamma_multiply(0.2))
        .corner_radius(egui::CornerRadius::same(3))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(
                RichText::new(text)
                    .color(theme::colors().text_muted)
                    .size(11.0),
            );
        });
}

fn patch_age_color(days: u16) -> egui::Color32 {
    let colors = theme::colors();
    if days > 90 {
        colors.risk_high
    } else if days > 30 {
        colors.risk_medium
    } else {
        colors.risk_low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_age_thresholds() {
        let colors = theme::colors();
        assert_eq!(patch_age_color(10), colors.risk_low);
        assert_eq!(patch_age_color(30), colors.risk_low);
        assert_eq!(patch_age_color(31), colors.risk_medium);
        assert_eq!(patch_age_color(90), colors.risk_medium);
        assert_eq!(patch_age_color(91), colors.risk_high);
    }
}

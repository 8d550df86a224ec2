//! Top status bar with the product mark and the data-stream light

use egui::{Align2, Color32, Context, FontId, RichText, Sense, Stroke, Vec2};

use crate::theme;

/// Health of the simulated data stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamStatus {
    Green,
    Amber,
    Red,
}

impl StreamStatus {
    pub fn color(self) -> Color32 {
        let colors = theme::colors();
        match self {
            StreamStatus::Green => colors.risk_low,
            StreamStatus::Amber => colors.risk_medium,
            StreamStatus::Red => colors.risk_high,
        }
    }
}

pub fn show(ctx: &Context, status: StreamStatus) {
    let colors = theme::colors();
    let dims = theme::dimensions();

    egui::TopBottomPanel::top("top_bar")
        .exact_height(dims.top_bar_height)
        .frame(
            egui::Frame::default()
                .fill(colors.main_background)
                .stroke(Stroke::new(1.0, colors.panel_border.gamma_multiply(0.2)))
                .inner_margin(egui::Margin::symmetric(16, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                // Product mark
                let (mark_rect, _) =
                    ui.allocate_exact_size(Vec2::splat(26.0), Sense::hover());
                ui.painter().rect_filled(
                    mark_rect,
                    egui::CornerRadius::same(4),
                    colors.accent,
                );
                ui.painter().text(
                    mark_rect.center(),
                    Align2::CENTER_CENTER,
                    "SQ",
                    FontId::proportional(11.0),
                    colors.main_background,
                );
                ui.add_space(4.0);
                ui.label(
                    RichText::new("Sentinel-Q")
                        .color(colors.text_primary)
                        .size(17.0)
                        .strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (dot_rect, _) =
                        ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
                    ui.painter()
                        .circle_filled(dot_rect.center(), 5.0, status.color());
                    ui.add_space(4.0);
                    ui.label(RichText::new("Data Stream").color(colors.text_muted));
                });
            });
        });
}

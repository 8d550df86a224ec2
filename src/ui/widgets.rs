//! Custom control widgets painted with the egui painter

use egui::{pos2, vec2, Align2, Color32, FontId, RichText, Sense, Shape, Stroke, Ui};

use crate::theme;

/// Sweep of the rotary arc, from -135 to +135 degrees around 12 o'clock
const KNOB_SWEEP_DEG: f32 = 270.0;

fn knob_angle(t: f32) -> f32 {
    // 0 degrees points up; positive sweeps clockwise
    let degrees = -135.0 + t * KNOB_SWEEP_DEG;
    (degrees - 90.0).to_radians()
}

fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t) as u8;
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

/// Rotary slider: drag vertically or scroll to adjust. Returns true when
/// the value changed this frame.
pub fn rotary_knob(
    ui: &mut Ui,
    label: &str,
    value: &mut f32,
    min: f32,
    max: f32,
    step: f32,
    unit: &str,
) -> bool {
    let colors = theme::colors();
    let dims = theme::dimensions();
    let mut changed = false;

    ui.vertical_centered(|ui| {
        ui.label(RichText::new(label).color(colors.text_muted).size(12.0));
        ui.add_space(2.0);

        let (rect, response) = ui.allocate_exact_size(dims.knob_size, Sense::click_and_drag());

        let span = max - min;
        let mut next = *value;
        if response.dragged() {
            next += -response.drag_delta().y / 100.0 * span;
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                next += scroll.signum() * step;
            }
        }
        let stepped = (((next - min) / step).round() * step + min).clamp(min, max);
        if (stepped - *value).abs() > f32::EPSILON {
            *value = stepped;
            changed = true;
        }

        let painter = ui.painter();
        let center = rect.center();
        let radius = rect.width() / 2.0 - 3.0;
        let t = ((*value - min) / span).clamp(0.0, 1.0);

        // Outer ring
        painter.circle_stroke(
            center,
            radius,
            Stroke::new(2.0, colors.panel_border.gamma_multiply(0.3)),
        );

        // Progress arc
        if t > 0.0 {
            let steps = (t * 48.0).ceil().max(1.0) as usize;
            let points: Vec<_> = (0..=steps)
                .map(|i| {
                    let angle = knob_angle(t * i as f32 / steps as f32);
                    pos2(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    )
                })
                .collect();
            painter.add(Shape::line(points, Stroke::new(3.0, colors.accent)));
        }

        // Pointer
        let angle = knob_angle(t);
        let dir = vec2(angle.cos(), angle.sin());
        painter.line_segment(
            [center + dir * (radius - 10.0), center + dir * (radius - 3.0)],
            Stroke::new(2.0, colors.accent),
        );

        let text = if step.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            format!("{:.1}", value)
        };
        painter.text(
            center,
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(14.0),
            colors.text_primary,
        );
        if !unit.is_empty() {
            painter.text(
                center + vec2(0.0, 14.0),
                Align2::CENTER_CENTER,
                unit,
                FontId::proportional(9.0),
                colors.text_muted,
            );
        }
    });

    changed
}

/// Animated on/off switch. Returns true when toggled this frame.
pub fn toggle_switch(ui: &mut Ui, label: &str, on: &mut bool) -> bool {
    let colors = theme::colors();
    let dims = theme::dimensions();
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label(RichText::new(label).color(colors.text_muted));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (rect, mut response) = ui.allocate_exact_size(dims.toggle_size, Sense::click());
            if response.clicked() {
                *on = !*on;
                changed = true;
                response.mark_changed();
            }

            let how_on = ui.ctx().animate_bool(response.id, *on);
            let radius = rect.height() / 2.0;
            let track = mix(
                colors.panel_border.gamma_multiply(0.4),
                colors.accent,
                how_on,
            );
            let painter = ui.painter();
            painter.rect_filled(rect, egui::CornerRadius::same(radius as u8), track);

            let knob_x = egui::lerp(
                (rect.left() + radius)..=(rect.right() - radius),
                how_on,
            );
            painter.circle_filled(
                pos2(knob_x, rect.center().y),
                radius - 2.0,
                colors.text_primary,
            );
        });
    });

    changed
}

/// Integer stepper with decrement/increment buttons. Returns true when the
/// value changed this frame.
pub fn stepper(ui: &mut Ui, label: &str, value: &mut u32, min: u32, max: u32) -> bool {
    let colors = theme::colors();
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label(RichText::new(label).color(colors.text_muted));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("+").clicked() && *value < max {
                *value += 1;
                changed = true;
            }
            ui.label(
                RichText::new(value.to_string())
                    .color(colors.text_primary)
                    .strong(),
            );
            if ui.button("−").clicked() && *value > min {
                *value -= 1;
                changed = true;
            }
        });
    });

    changed
}

/// Two-option segmented selector. Returns true when the selection changed.
pub fn two_way_selector<T: Copy + PartialEq>(
    ui: &mut Ui,
    label: &str,
    value: &mut T,
    options: [(T, &str); 2],
) -> bool {
    let colors = theme::colors();
    let mut changed = false;

    ui.label(RichText::new(label).color(colors.text_muted));
    ui.horizontal(|ui| {
        for (option, text) in options {
            if ui.selectable_label(*value == option, text).clicked() && *value != option {
                *value = option;
                changed = true;
            }
        }
    });

    changed
}

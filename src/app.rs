//! Application state and top-level frame layout

use eframe::egui;

use crate::map::{MapParams, SurfaceMap};
use crate::theme;
use crate::ui::{control_panel, drawer, top_bar, ControlState, StreamStatus};

/// Main application state for the console
pub struct SentinelApp {
    controls: ControlState,
    map: SurfaceMap,
    stream_status: StreamStatus,
    drawer_open: bool,
    selected: Option<crate::assets::AssetNode>,
}

impl SentinelApp {
    pub fn new() -> Self {
        let controls = ControlState::default();
        let map = SurfaceMap::new(map_params(&controls), &mut rand::rng());

        Self {
            controls,
            map,
            stream_status: StreamStatus::Green,
            drawer_open: false,
            selected: None,
        }
    }
}

impl Default for SentinelApp {
    fn default() -> Self {
        Self::new()
    }
}

fn map_params(controls: &ControlState) -> MapParams {
    MapParams {
        asset_mode: controls.asset_mode,
        zoom_scope: controls.zoom_scope,
        split_view: controls.split_view,
    }
}

/// Stream status derived from the scenario controls: severity past 8 trips
/// red, zero-day noise amber, otherwise green.
fn stream_status(controls: &ControlState) -> StreamStatus {
    if controls.threat_severity > 8.0 {
        StreamStatus::Red
    } else if controls.zero_day_noise {
        StreamStatus::Amber
    } else {
        StreamStatus::Green
    }
}

impl eframe::App for SentinelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        top_bar::show(ctx, self.stream_status);

        let mut backend = self.map.backend();
        if control_panel::show(ctx, &mut self.controls, &mut backend) {
            self.stream_status = stream_status(&self.controls);
            self.map.set_params(map_params(&self.controls), &mut rand::rng());
        }
        self.map.set_backend(backend);

        drawer::show(ctx, &mut self.drawer_open, self.selected.as_ref());
        if !self.drawer_open {
            self.selected = None;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(theme::colors().main_background))
            .show(ctx, |ui| {
                if let Some(node) = self.map.ui(ui) {
                    self.selected = Some(node);
                    self.drawer_open = true;
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_status_follows_the_controls() {
        let mut controls = ControlState::default();
        assert_eq!(stream_status(&controls), StreamStatus::Green);

        controls.zero_day_noise = true;
        assert_eq!(stream_status(&controls), StreamStatus::Amber);

        // Severity past 8 wins over the noise toggle
        controls.threat_severity = 8.5;
        assert_eq!(stream_status(&controls), StreamStatus::Red);

        controls.threat_severity = 8.0;
        assert_eq!(stream_status(&controls), StreamStatus::Amber);
    }
}

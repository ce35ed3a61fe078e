//! Render surface and window shell
//!
//! Immediate-mode UI: a central panel draws the three tracks and the
//! runner markers, a bottom panel holds the Start/Stop buttons, and a
//! results window presents the finishing order once per completed race.
//! Geometry is recomputed from the current panel every frame, so resizing
//! the window just re-centers the tracks.

use std::time::Instant;

use eframe::egui::{self, Align2, Button, Color32, Pos2, Sense, Stroke, Vec2};

use crate::race::controller::{Placements, RaceController, TICK_PERIOD};
use crate::race::track;

/// Fill colors per track, outermost first.
const TRACK_COLORS: [Color32; 3] = [Color32::BLUE, Color32::GREEN, Color32::RED];

/// Length of the start-line mark, drawn inward from the track edge.
const START_LINE_LEN: f32 = 10.0;

/// Radius of a runner marker.
const MARKER_RADIUS: f32 = 5.0;

pub struct RaceApp {
    controller: RaceController,
    /// Set when a race finishes; cleared when the dialog is dismissed.
    results: Option<Placements>,
}

impl RaceApp {
    pub fn new(controller: RaceController) -> Self {
        Self {
            controller,
            results: None,
        }
    }

    fn draw_tracks(&self, painter: &egui::Painter, center: Pos2) {
        for (i, color) in TRACK_COLORS.iter().enumerate() {
            let radius = track::radius(i);
            painter.circle_filled(center, radius, *color);

            // Start line at angle 0
            let outer = center + Vec2::new(radius, 0.0);
            let inner = center + Vec2::new(radius - START_LINE_LEN, 0.0);
            painter.line_segment([outer, inner], Stroke::new(1.0, Color32::BLACK));
        }
    }

    fn draw_runners(&self, painter: &egui::Painter, center: Pos2) {
        for runner in self.controller.runners() {
            let (dx, dy) = track::marker_offset(runner.track_index(), runner.angle());
            let pos = center + Vec2::new(dx, dy);
            painter.circle_filled(pos, MARKER_RADIUS, Color32::BLACK);
        }
    }

    fn show_results(&mut self, ctx: &egui::Context) {
        let Some(placements) = &self.results else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Results")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(placements.summary());
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.results = None;
        }
    }
}

impl eframe::App for RaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(placements) = self.controller.poll(Instant::now()) {
            self.results = Some(placements);
        }

        // The race is already stopped while the dialog is up; disabling
        // the buttons keeps it modal.
        let dialog_open = self.results.is_some();

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.add_enabled(!dialog_open, Button::new("Start")).clicked() {
                    self.controller.start(Instant::now());
                }
                if ui.add_enabled(!dialog_open, Button::new("Stop")).clicked() {
                    self.controller.stop();
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
            let center = response.rect.center();
            self.draw_tracks(&painter, center);
            self.draw_runners(&painter, center);
        });

        self.show_results(ctx);

        if self.controller.is_running() {
            ctx.request_repaint_after(TICK_PERIOD);
        }
    }
}

//! Steuer-Panel: Fortschritts-Slider, Play/Pause und Darstellungs-Schalter.

use crate::app::{AppIntent, AppState};
use running_train_engine::MotionMode;

/// Rendert das Steuer-Panel und gibt erzeugte Events zurück.
pub fn render_control_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let play_label = if state.playback.playing {
                "⏸ Pause"
            } else {
                "▶ Play"
            };
            if ui.button(play_label).clicked() {
                events.push(AppIntent::PlayPauseRequested);
            }

            // Slider-Bereich folgt der Punktanzahl
            let mut value = state.progress;
            let max = state.slider_max().max(f32::EPSILON);
            let slider = egui::Slider::new(&mut value, 0.0..=max)
                .step_by(f64::from(state.options.slider_step))
                .text("Fortschritt");
            if ui
                .add_enabled(state.track.is_some(), slider)
                .changed()
            {
                events.push(AppIntent::ProgressChanged { value });
            }
        });

        ui.horizontal(|ui| {
            let mut simple = state.display.simple_track;
            if ui.checkbox(&mut simple, "simple-track").changed() {
                events.push(AppIntent::SimpleTrackToggled { enabled: simple });
            }

            let mut arc_length = state.display.motion_mode == MotionMode::ArcLength;
            if ui.checkbox(&mut arc_length, "arc-length").changed() {
                let mode = if arc_length {
                    MotionMode::ArcLength
                } else {
                    MotionMode::Naive
                };
                events.push(AppIntent::MotionModeChanged { mode });
            }

            let mut smoke = state.display.smoke;
            if ui.checkbox(&mut smoke, "smoke").changed() {
                events.push(AppIntent::SmokeToggled { enabled: smoke });
            }

            let mut scenery = state.display.scenery;
            if ui.checkbox(&mut scenery, "scenery").changed() {
                events.push(AppIntent::SceneryToggled { enabled: scenery });
            }

            ui.separator();

            if ui.button("Strecke zurücksetzen").clicked() {
                events.push(AppIntent::ResetTrackRequested);
            }
        });
    });

    events
}

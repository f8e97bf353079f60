//! Top-Menü (Datei, Strecke).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Optionen speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Strecke", |ui| {
                let play_label = if state.playback.playing {
                    "Animation anhalten"
                } else {
                    "Animation starten"
                };
                if ui.button(play_label).clicked() {
                    events.push(AppIntent::PlayPauseRequested);
                    ui.close();
                }

                if ui.button("Zurücksetzen").clicked() {
                    events.push(AppIntent::ResetTrackRequested);
                    ui.close();
                }
            });
        });
    });

    events
}

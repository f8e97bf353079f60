//! Handler für Optionen-Persistenz und Beenden.

use crate::app::AppState;
use crate::shared::TrainOptions;

/// Übernimmt die aktuellen Schalter in die Optionen und speichert sie als TOML.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options.motion_mode = state.display.motion_mode;
    state.options.simple_track = state.display.simple_track;
    state.options.smoke = state.display.smoke;
    state.options.scenery = state.display.scenery;
    state.options.animation_speed = state.playback.speed;
    state.options.save_to_file(&TrainOptions::config_path())
}

/// Signalisiert dem Host das Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

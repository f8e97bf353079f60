//! Handler für Fortschritt und Animation.

use crate::app::AppState;

/// Setzt den Fortschritt (modulo Punktanzahl).
pub fn set_progress(state: &mut AppState, value: f32) {
    state.progress = state.wrap_progress(value);
}

/// Schiebt den Fortschritt weiter; am Ende beginnt die Runde von vorn.
pub fn advance(state: &mut AppState, delta: f32) {
    state.progress = state.wrap_progress(state.progress + delta);
}

/// Startet oder stoppt die Animation.
pub fn toggle(state: &mut AppState) {
    state.playback.playing = !state.playback.playing;
    log::debug!(
        "Animation {}",
        if state.playback.playing { "läuft" } else { "angehalten" }
    );
}

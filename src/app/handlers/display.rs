//! Handler für die Darstellungs-Schalter.

use crate::app::AppState;
use running_train_engine::MotionMode;

pub fn set_motion_mode(state: &mut AppState, mode: MotionMode) {
    state.display.motion_mode = mode;
}

pub fn set_simple_track(state: &mut AppState, enabled: bool) {
    state.display.simple_track = enabled;
}

pub fn set_smoke(state: &mut AppState, enabled: bool) {
    state.display.smoke = enabled;
}

pub fn set_scenery(state: &mut AppState, enabled: bool) {
    state.display.scenery = enabled;
}

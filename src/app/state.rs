//! Application State: zentrale Datenhaltung.

pub(crate) mod app_state;
mod display;
mod playback;

pub use app_state::AppState;
pub use display::DisplayState;
pub use playback::PlaybackState;

use crate::shared::TrainOptions;
use running_train_engine::MotionMode;

/// Darstellungs-Schalter aus dem Steuer-Panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    /// Naive oder Arc-Length-Bewegung
    pub motion_mode: MotionMode,
    /// Einfache Linie statt Schienen + Schwellen
    pub simple_track: bool,
    /// Rauchwolken hinter den Waggons
    pub smoke: bool,
    /// Haus und Bäume
    pub scenery: bool,
}

impl DisplayState {
    /// Übernimmt die Startwerte aus den Optionen.
    pub fn from_options(options: &TrainOptions) -> Self {
        Self {
            motion_mode: options.motion_mode,
            simple_track: options.simple_track,
            smoke: options.smoke,
            scenery: options.scenery,
        }
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::from_options(&TrainOptions::default())
    }
}

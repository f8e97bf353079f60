use super::{DisplayState, PlaybackState};
use crate::app::CommandLog;
use crate::shared::TrainOptions;
use running_train_engine::{Track, TrackError};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelle Strecke (None = ungültige Konfiguration, nichts wird gezeichnet)
    pub track: Option<Track>,
    /// Fortschritt ∈ [0, n), vom Slider gesteuert
    pub progress: f32,
    /// Darstellungs-Schalter
    pub display: DisplayState,
    /// Animation
    pub playback: PlaybackState,
    /// Index des aktuell gezogenen Kontrollpunkts
    pub dragged_point: Option<usize>,
    /// Laufzeit-Optionen
    pub options: TrainOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen App-State mit Standardoptionen
    pub fn new() -> Self {
        Self::from_options(TrainOptions::default())
    }

    /// Erstellt einen App-State aus geladenen Optionen.
    ///
    /// Ungültige Start-Kontrollpunkte führen zu `track == None`.
    pub fn from_options(options: TrainOptions) -> Self {
        let track = build_initial_track(&options)
            .map_err(|e| log::error!("Start-Strecke ungültig: {}", e))
            .ok();

        Self {
            track,
            progress: 0.0,
            display: DisplayState::from_options(&options),
            playback: PlaybackState::new(options.animation_speed),
            dragged_point: None,
            options,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Anzahl der Kontrollpunkte (0 ohne gültige Strecke)
    pub fn point_count(&self) -> usize {
        self.track.as_ref().map_or(0, |t| t.point_count())
    }

    /// Obere Slider-Grenze (= Anzahl Segmente)
    pub fn slider_max(&self) -> f32 {
        self.point_count() as f32
    }

    /// Faltet einen Fortschrittswert in [0, n).
    pub fn wrap_progress(&self, value: f32) -> f32 {
        let n = self.slider_max();
        if n <= 0.0 || !value.is_finite() {
            return 0.0;
        }
        let wrapped = value.rem_euclid(n);
        if wrapped >= n { 0.0 } else { wrapped }
    }

    /// Anzahl der Waggons für die aktuelle Strecke
    pub fn car_count(&self) -> usize {
        self.options.effective_car_count(self.point_count())
    }

    /// Gesamtlänge der Strecke, falls vorhanden
    pub fn perimeter(&self) -> Option<f32> {
        self.track.as_ref().and_then(|t| t.total_perimeter().ok())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Baut die Strecke aus den Start-Kontrollpunkten der Optionen.
pub(crate) fn build_initial_track(options: &TrainOptions) -> Result<Track, TrackError> {
    Track::with_resolution(options.initial_points_vec(), options.arc_samples_per_segment)
}

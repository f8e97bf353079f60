//! Zentrale Konfiguration für den Running Train.
//!
//! `TrainOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use running_train_engine::{MotionMode, DEFAULT_SAMPLES_PER_SEGMENT};
use serde::{Deserialize, Serialize};

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Größe der Zeichenfläche in Pixeln.
pub const CANVAS_SIZE: [f32; 2] = [600.0, 600.0];
/// Start-Strecke (Kontrollpunkte in Canvas-Koordinaten).
pub const INITIAL_POINTS: [[f32; 2]; 4] = [
    [150.0, 330.0],
    [150.0, 450.0],
    [450.0, 450.0],
    [450.0, 150.0],
];

// ── Kontrollpunkte ──────────────────────────────────────────────────

/// Radius der gezeichneten Kontrollpunkte.
pub const POINT_RADIUS: f32 = 5.0;
/// Pick-Radius für Drag/Entfernen in Pixeln.
pub const PICK_RADIUS_PX: f32 = 10.0;

// ── Zug ─────────────────────────────────────────────────────────────

/// Halbe Waggonlänge `h`.
pub const CAR_HALF_LENGTH: f32 = 20.0;
/// Halbe Waggonbreite `w`.
pub const CAR_HALF_WIDTH: f32 = 15.0;
/// Radius der Rauchwolke.
pub const SMOKE_RADIUS: f32 = 20.0;

// ── Strecke ─────────────────────────────────────────────────────────

/// Bogenabstand zwischen zwei Schwellen.
pub const TIE_SPACING: f32 = 20.0;
/// Halbe Schwellenlänge (quer zur Fahrtrichtung).
pub const TIE_HALF_LENGTH: f32 = 10.0;
/// Halbe Schwellenbreite (in Fahrtrichtung).
pub const TIE_HALF_WIDTH: f32 = 2.5;
/// Abstand der Schienen von der Mittellinie.
pub const RAIL_OFFSET: f32 = 5.0;
/// Abtastung der Schienen-Polylines pro Segment.
pub const RAIL_SAMPLES_PER_SEGMENT: usize = 100;

// ── Slider & Animation ──────────────────────────────────────────────

/// Schrittweite des Fortschritts-Sliders.
pub const SLIDER_STEP: f32 = 0.05;
/// Animationsgeschwindigkeit in Segmenten pro Sekunde.
pub const ANIMATION_SPEED: f32 = 0.5;

// ── Farben (RGBA) ───────────────────────────────────────────────────

pub const CAR_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
pub const CAB_COLOR: [f32; 4] = [0.65, 0.16, 0.16, 1.0];
pub const TIE_COLOR: [f32; 4] = [0.65, 0.16, 0.16, 1.0];
pub const SMOKE_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
pub const POINT_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
pub const TRACK_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `running_train.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrainOptions {
    // ── Zeichenfläche ───────────────────────────────────────────
    /// Größe der Zeichenfläche [Breite, Höhe]
    pub canvas_size: [f32; 2],
    /// Kontrollpunkte beim Start und nach Reset
    pub initial_points: Vec<[f32; 2]>,

    // ── Kontrollpunkte ──────────────────────────────────────────
    pub point_radius: f32,
    /// Pick-Radius für Drag und Strg+Klick
    pub pick_radius_px: f32,

    // ── Zug ─────────────────────────────────────────────────────
    pub car_half_length: f32,
    pub car_half_width: f32,
    /// Feste Waggonanzahl; `None` = ein Waggon pro Kontrollpunkt
    pub car_count: Option<usize>,
    pub smoke_radius: f32,

    // ── Strecke ─────────────────────────────────────────────────
    pub tie_spacing: f32,
    pub tie_half_length: f32,
    pub tie_half_width: f32,
    pub rail_offset: f32,
    pub rail_samples_per_segment: usize,
    /// Auflösung der Arc-Length-Tabelle
    pub arc_samples_per_segment: usize,

    // ── Slider & Animation ──────────────────────────────────────
    pub slider_step: f32,
    /// Segmente pro Sekunde im Play-Modus
    pub animation_speed: f32,

    // ── Startzustand der Schalter ───────────────────────────────
    pub motion_mode: MotionMode,
    pub simple_track: bool,
    pub smoke: bool,
    pub scenery: bool,

    // ── Farben ──────────────────────────────────────────────────
    pub car_color: [f32; 4],
    pub cab_color: [f32; 4],
    pub tie_color: [f32; 4],
    pub smoke_color: [f32; 4],
    pub point_color: [f32; 4],
    pub track_color: [f32; 4],
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            initial_points: INITIAL_POINTS.to_vec(),

            point_radius: POINT_RADIUS,
            pick_radius_px: PICK_RADIUS_PX,

            car_half_length: CAR_HALF_LENGTH,
            car_half_width: CAR_HALF_WIDTH,
            car_count: None,
            smoke_radius: SMOKE_RADIUS,

            tie_spacing: TIE_SPACING,
            tie_half_length: TIE_HALF_LENGTH,
            tie_half_width: TIE_HALF_WIDTH,
            rail_offset: RAIL_OFFSET,
            rail_samples_per_segment: RAIL_SAMPLES_PER_SEGMENT,
            arc_samples_per_segment: DEFAULT_SAMPLES_PER_SEGMENT,

            slider_step: SLIDER_STEP,
            animation_speed: ANIMATION_SPEED,

            motion_mode: MotionMode::ArcLength,
            simple_track: false,
            smoke: false,
            scenery: true,

            car_color: CAR_COLOR,
            cab_color: CAB_COLOR,
            tie_color: TIE_COLOR,
            smoke_color: SMOKE_COLOR,
            point_color: POINT_COLOR,
            track_color: TRACK_COLOR,
        }
    }
}

impl TrainOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("running_train"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("running_train.toml")
    }

    /// Start-Kontrollpunkte als `glam::Vec2`.
    pub fn initial_points_vec(&self) -> Vec<glam::Vec2> {
        self.initial_points
            .iter()
            .map(|&[x, y]| glam::Vec2::new(x, y))
            .collect()
    }

    /// Anzahl Waggons für eine Strecke mit `point_count` Kontrollpunkten.
    pub fn effective_car_count(&self, point_count: usize) -> usize {
        self.car_count.unwrap_or(point_count)
    }
}

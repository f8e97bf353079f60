//! Platzierung der Waggons entlang der Kurve.

use crate::{ArcLengthTable, ClosedSpline};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Umrechnung der Waggon-Halblänge in einen Parameter-Abstand (naiver Modus).
const NAIVE_SPACING_PER_UNIT: f32 = 0.01;
/// Abstand zweier Waggons im Arc-Length-Modus, in Waggon-Halblängen (2h Körper + h Lücke).
const ARC_SPACING_FACTOR: f32 = 3.0;

/// Wie der Fortschrittswert auf die Kurve abgebildet wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MotionMode {
    /// Gleichmäßig im Spline-Parameter: Geschwindigkeit schwankt mit der Punktdichte
    Naive,
    /// Gleichmäßig in Bogenlänge: konstante Bildschirm-Geschwindigkeit
    #[default]
    ArcLength,
}

/// Anzahl und Abstand der Waggons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarLayout {
    /// Anzahl Waggons inklusive Lok
    pub count: usize,
    /// Halbe Waggonlänge `h` in Pixeln
    pub spacing: f32,
}

impl CarLayout {
    pub fn new(count: usize, spacing: f32) -> Self {
        Self { count, spacing }
    }

    /// Parameter-Versatz zwischen zwei Waggons im naiven Modus.
    pub fn naive_offset(&self) -> f32 {
        self.spacing * NAIVE_SPACING_PER_UNIT
    }

    /// Distanz zwischen zwei Waggons im Arc-Length-Modus.
    pub fn arc_offset(&self) -> f32 {
        self.spacing * ARC_SPACING_FACTOR
    }
}

/// Ergebnis für einen Waggon. Index 0 ist die Lok.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarPlacement {
    /// Natürlicher Parameter ∈ [0, n)
    pub param: f32,
    pub position: Vec2,
    /// Fahrtrichtung in Radiant
    pub heading: f32,
}

/// Berechnet die Platzierung aller Waggons für den Fortschritt `progress` ∈ [0, n).
pub fn place_cars(
    spline: &ClosedSpline,
    table: &ArcLengthTable,
    progress: f32,
    mode: MotionMode,
    layout: CarLayout,
) -> Vec<CarPlacement> {
    let n = spline.segment_count() as f32;
    let peri = table.perimeter();

    (0..layout.count)
        .map(|i| {
            let i = i as f32;
            let param = match mode {
                MotionMode::Naive => (progress - i * layout.naive_offset() + n).rem_euclid(n),
                MotionMode::ArcLength => {
                    let x = (peri * progress / n - i * layout.arc_offset() + peri).rem_euclid(peri);
                    table.param_at_distance(x)
                }
            };
            let resolved = spline.resolve(param);
            let velocity = spline.velocity(resolved.segment, resolved.u);
            CarPlacement {
                param,
                position: spline.position(resolved.segment, resolved.u),
                heading: velocity.y.atan2(velocity.x),
            }
        })
        .collect()
}

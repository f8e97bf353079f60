//! Fehlertypen der Engine.

use thiserror::Error;

/// Fehler bei ungültiger Track-Konfiguration oder ungültigen Edits.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackError {
    /// Weniger als zwei Kontrollpunkte: keine geschlossene Kurve möglich.
    #[error("mindestens {min} Kontrollpunkte nötig, vorhanden: {count}")]
    TooFewPoints { count: usize, min: usize },
    /// Koordinate ist NaN oder unendlich.
    #[error("Kontrollpunkt #{index} hat keine endlichen Koordinaten")]
    NonFinitePoint { index: usize },
    /// Edit adressiert einen nicht vorhandenen Punkt.
    #[error("Kontrollpunkt-Index {index} außerhalb von 0..{len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// Abtastauflösung von 0 Samples pro Segment.
    #[error("Arc-Length-Auflösung muss mindestens 1 Sample pro Segment sein")]
    InvalidResolution,
}

//! Kurven- und Bewegungs-Engine für den Running Train.
//!
//! UI-frei: nimmt Kontrollpunkte entgegen und liefert Positionen und
//! Ausrichtungen der Waggons. Zeichnen, Eingabe und Timing gehören dem Host.
//!
//! Aufbau (von innen nach außen):
//! - `control_points`: zyklische Punktfolge, Quelle der Kurvenform
//! - `segment`: kubisches Hermite-Segment (Position, Geschwindigkeit, Bézier-Griffe)
//! - `spline`: geschlossene Catmull-Rom-Spline über alle Punkte
//! - `arc_length`: Abtasttabelle Distanz → natürlicher Parameter
//! - `motion`: Platzierung der Waggons (naiv oder Arc-Length)
//! - `track`: Fassade mit Geometrie-Cache für den Host

pub mod arc_length;
pub mod control_points;
pub mod error;
pub mod motion;
pub mod segment;
pub mod spline;
pub mod track;

pub use arc_length::{ArcLengthTable, ArcSample, DEFAULT_SAMPLES_PER_SEGMENT};
pub use control_points::{ControlPoints, MIN_CONTROL_POINTS};
pub use error::TrackError;
pub use motion::{CarLayout, CarPlacement, MotionMode, place_cars};
pub use segment::{HermiteSegment, SegmentParam};
pub use spline::ClosedSpline;
pub use track::{RailLines, Tie, Track};

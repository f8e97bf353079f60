//! Zyklische Folge von Kontrollpunkten.
//!
//! Einzige Quelle der Kurvenform. Alle Index-Berechnungen laufen modulo `len()`,
//! die Kurve ist immer geschlossen.

use crate::TrackError;
use glam::Vec2;

/// Mindestanzahl an Punkten für eine geschlossene Kurve.
pub const MIN_CONTROL_POINTS: usize = 2;

/// Geordnete, zyklische Punktfolge mit mindestens [`MIN_CONTROL_POINTS`] Einträgen.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoints {
    points: Vec<Vec2>,
}

impl ControlPoints {
    /// Erstellt eine Punktfolge und prüft Mindestgröße und endliche Koordinaten.
    pub fn new(points: Vec<Vec2>) -> Result<Self, TrackError> {
        validate(&points)?;
        Ok(Self { points })
    }

    /// Ersetzt die komplette Punktfolge. Bei Fehler bleibt die alte Folge erhalten.
    pub fn replace(&mut self, points: Vec<Vec2>) -> Result<(), TrackError> {
        validate(&points)?;
        self.points = points;
        Ok(())
    }

    /// Anzahl der Punkte (= Anzahl der Segmente).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Immer `false`, da mindestens zwei Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf alle Punkte.
    pub fn as_slice(&self) -> &[Vec2] {
        &self.points
    }

    /// Punkt mit zyklischem Index (auch negative Indizes).
    pub fn get_wrapped(&self, index: isize) -> Vec2 {
        let n = self.points.len() as isize;
        self.points[index.rem_euclid(n) as usize]
    }

    /// Nachfolger-Index modulo n.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.points.len()
    }

    /// Vorgänger-Index modulo n.
    pub fn prev_index(&self, index: usize) -> usize {
        (index + self.points.len() - 1) % self.points.len()
    }

    /// Hängt einen Punkt am Ende an (zwischen letztem und erstem Punkt).
    pub fn push(&mut self, point: Vec2) -> Result<(), TrackError> {
        check_finite(point, self.points.len())?;
        self.points.push(point);
        Ok(())
    }

    /// Fügt einen Punkt an `index` ein; `index == len()` hängt an.
    pub fn insert(&mut self, index: usize, point: Vec2) -> Result<(), TrackError> {
        if index > self.points.len() {
            return Err(TrackError::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        check_finite(point, index)?;
        self.points.insert(index, point);
        Ok(())
    }

    /// Entfernt den Punkt an `index`. Unter die Mindestanzahl wird nicht gelöscht.
    pub fn remove(&mut self, index: usize) -> Result<Vec2, TrackError> {
        self.check_index(index)?;
        if self.points.len() <= MIN_CONTROL_POINTS {
            return Err(TrackError::TooFewPoints {
                count: self.points.len() - 1,
                min: MIN_CONTROL_POINTS,
            });
        }
        Ok(self.points.remove(index))
    }

    /// Verschiebt den Punkt an `index` auf `position`.
    pub fn set(&mut self, index: usize, position: Vec2) -> Result<(), TrackError> {
        self.check_index(index)?;
        check_finite(position, index)?;
        self.points[index] = position;
        Ok(())
    }

    /// Index des nächstgelegenen Punkts innerhalb von `max_distance`.
    pub fn nearest(&self, position: Vec2, max_distance: f32) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (i, p.distance(position)))
            .filter(|&(_, d)| d <= max_distance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    fn check_index(&self, index: usize) -> Result<(), TrackError> {
        if index >= self.points.len() {
            return Err(TrackError::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        Ok(())
    }
}

fn validate(points: &[Vec2]) -> Result<(), TrackError> {
    if points.len() < MIN_CONTROL_POINTS {
        return Err(TrackError::TooFewPoints {
            count: points.len(),
            min: MIN_CONTROL_POINTS,
        });
    }
    for (index, p) in points.iter().enumerate() {
        check_finite(*p, index)?;
    }
    Ok(())
}

fn check_finite(point: Vec2, index: usize) -> Result<(), TrackError> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(TrackError::NonFinitePoint { index })
    }
}

//! Geschlossene Catmull-Rom-Spline (Kardinal-Spline mit Spannung 0.5).
//!
//! Tangente an Punkt i: `0.5 * (p[i+1] - p[i-1])` mit zyklischen Nachbarn.
//! Benachbarte Segmente teilen sich die Tangente, damit ist die Kurve C¹.

use crate::{ControlPoints, HermiteSegment, SegmentParam};
use glam::Vec2;

/// Spline über eine zyklische Punktfolge mit vorab berechneten Tangenten.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedSpline {
    points: Vec<Vec2>,
    tangents: Vec<Vec2>,
}

impl ClosedSpline {
    /// Baut die Spline aus den Kontrollpunkten (n ≥ 2 ist durch `ControlPoints` garantiert).
    pub fn new(control_points: &ControlPoints) -> Self {
        let n = control_points.len();
        let tangents = (0..n)
            .map(|i| {
                let next = control_points.as_slice()[control_points.next_index(i)];
                let prev = control_points.as_slice()[control_points.prev_index(i)];
                0.5 * (next - prev)
            })
            .collect();

        Self {
            points: control_points.as_slice().to_vec(),
            tangents,
        }
    }

    /// Anzahl der Segmente (= Anzahl der Punkte).
    pub fn segment_count(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn tangents(&self) -> &[Vec2] {
        &self.tangents
    }

    /// Hermite-Segment von Punkt `index` zum zyklischen Nachfolger.
    pub fn segment(&self, index: usize) -> HermiteSegment {
        let n = self.points.len();
        let i = index % n;
        let j = (i + 1) % n;
        HermiteSegment::new(self.points[i], self.tangents[i], self.points[j], self.tangents[j])
    }

    /// Position auf Segment `index` bei lokalem `u`.
    pub fn position(&self, index: usize, u: f32) -> Vec2 {
        self.segment(index).position(u)
    }

    /// Geschwindigkeit (Ableitung nach u) auf Segment `index`.
    pub fn velocity(&self, index: usize, u: f32) -> Vec2 {
        self.segment(index).velocity(u)
    }

    /// Löst einen natürlichen Parameter in (Segment, u) auf.
    pub fn resolve(&self, t: f32) -> SegmentParam {
        SegmentParam::from_natural(t, self.points.len())
    }

    /// Position beim natürlichen Parameter `t` (zyklisch).
    pub fn position_at(&self, t: f32) -> Vec2 {
        let p = self.resolve(t);
        self.position(p.segment, p.u)
    }

    /// Geschwindigkeit beim natürlichen Parameter `t` (zyklisch).
    pub fn velocity_at(&self, t: f32) -> Vec2 {
        let p = self.resolve(t);
        self.velocity(p.segment, p.u)
    }

    /// Fahrtrichtung in Radiant (`atan2(v.y, v.x)`) beim natürlichen Parameter `t`.
    pub fn heading_at(&self, t: f32) -> f32 {
        let v = self.velocity_at(t);
        v.y.atan2(v.x)
    }

    /// Bézier-Griffe für Segment `index`.
    pub fn bezier_handles(&self, index: usize) -> (Vec2, Vec2) {
        self.segment(index).bezier_handles()
    }

    /// Gleichmäßig im natürlichen Parameter abgetastete Punkte (ohne Wiederholung des Startpunkts).
    pub fn sample(&self, samples_per_segment: usize) -> Vec<Vec2> {
        let sps = samples_per_segment.max(1);
        let mut result = Vec::with_capacity(self.points.len() * sps);
        for seg in 0..self.points.len() {
            let segment = self.segment(seg);
            for k in 0..sps {
                result.push(segment.position(k as f32 / sps as f32));
            }
        }
        result
    }
}

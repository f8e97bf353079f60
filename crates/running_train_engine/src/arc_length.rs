//! Arc-Length-Tabelle: Abbildung kumulierte Distanz → natürlicher Parameter.
//!
//! Die Spline wird in festen Schritten des natürlichen Parameters abgetastet,
//! die Distanzen zwischen aufeinanderfolgenden Samples werden aufsummiert.
//! Damit kann eine Bewegung mit konstanter Bildschirm-Geschwindigkeit auf
//! den Spline-Parameter zurückgerechnet werden.

use crate::{ClosedSpline, TrackError};

/// Standard-Auflösung: 1000 Samples pro Segment (Schrittweite 0.001).
pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 1000;

/// Ein Tabelleneintrag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSample {
    /// Natürlicher Parameter ∈ [0, n)
    pub param: f32,
    /// Kumulierte Distanz vom Kurvenanfang bis zu diesem Sample
    pub distance: f32,
}

/// Monotone Abtasttabelle einer geschlossenen Spline.
///
/// `samples` deckt den Parameterbereich [0, n) ab; `perimeter` enthält
/// zusätzlich die Schlusssehne vom letzten Sample zurück zu t = 0.
#[derive(Debug, Clone)]
pub struct ArcLengthTable {
    samples: Vec<ArcSample>,
    perimeter: f32,
    segment_count: usize,
    samples_per_segment: usize,
}

impl ArcLengthTable {
    /// Baut die Tabelle mit `samples_per_segment` Abtastungen pro Segment.
    pub fn build(spline: &ClosedSpline, samples_per_segment: usize) -> Result<Self, TrackError> {
        if samples_per_segment == 0 {
            return Err(TrackError::InvalidResolution);
        }

        let segment_count = spline.segment_count();
        let total = segment_count * samples_per_segment;
        let step = 1.0 / samples_per_segment as f32;

        let mut samples = Vec::with_capacity(total);
        let first = spline.position(0, 0.0);
        let mut prev = first;
        let mut cumulative = 0.0f32;

        for k in 0..total {
            let seg = k / samples_per_segment;
            let u = (k % samples_per_segment) as f32 * step;
            let pos = spline.position(seg, u);
            cumulative += prev.distance(pos);
            samples.push(ArcSample {
                param: seg as f32 + u,
                distance: cumulative,
            });
            prev = pos;
        }

        let perimeter = cumulative + prev.distance(first);
        log::debug!(
            "Arc-Length-Tabelle neu aufgebaut: {} Segmente, {} Samples, Umfang {:.2}",
            segment_count,
            total,
            perimeter
        );

        Ok(Self {
            samples,
            perimeter,
            segment_count,
            samples_per_segment,
        })
    }

    /// Gesamtlänge der geschlossenen Kurve.
    pub fn perimeter(&self) -> f32 {
        self.perimeter
    }

    pub fn samples(&self) -> &[ArcSample] {
        &self.samples
    }

    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    pub fn samples_per_segment(&self) -> usize {
        self.samples_per_segment
    }

    /// Natürlicher Parameter bei Distanz `x` entlang der Kurve.
    ///
    /// `x` wird modulo Umfang gefaltet. Gesucht wird der erste Eintrag mit
    /// Distanz ≥ x, zwischen den einklammernden Einträgen wird linear interpoliert.
    pub fn param_at_distance(&self, x: f32) -> f32 {
        if self.perimeter <= f32::EPSILON {
            return 0.0;
        }
        let mut x = x.rem_euclid(self.perimeter);
        if x >= self.perimeter {
            x = 0.0;
        }

        let idx = self.samples.partition_point(|s| s.distance < x);
        if idx == 0 {
            return self.samples[0].param;
        }

        let before = self.samples[idx - 1];
        let (after_param, after_distance) = match self.samples.get(idx) {
            Some(s) => (s.param, s.distance),
            // Schlusssehne: zurück zum Anfang bei t = n
            None => (self.segment_count as f32, self.perimeter),
        };

        let span = after_distance - before.distance;
        let frac = if span > f32::EPSILON {
            (x - before.distance) / span
        } else {
            0.0
        };
        let param = before.param + frac * (after_param - before.param);
        param.rem_euclid(self.segment_count as f32)
    }

    /// Distanz entlang der Kurve beim natürlichen Parameter `t` (Umkehrung von
    /// [`param_at_distance`](Self::param_at_distance)).
    pub fn distance_at_param(&self, t: f32) -> f32 {
        let n = self.segment_count as f32;
        let scaled = t.rem_euclid(n) * self.samples_per_segment as f32;
        let k = (scaled.floor() as usize).min(self.samples.len() - 1);
        let frac = scaled - k as f32;

        let before = self.samples[k].distance;
        let after = self
            .samples
            .get(k + 1)
            .map_or(self.perimeter, |s| s.distance);
        before + frac * (after - before)
    }
}

//! Kubisches Hermite-Segment und Umrechnung natürlicher Parameter → (Segment, u).

use glam::Vec2;

/// Ein Kurvenstück zwischen zwei Kontrollpunkten mit ihren Tangenten.
///
/// Position und Geschwindigkeit werden pro Achse unabhängig über die
/// Hermite-Basisfunktionen berechnet. Bei u=0 und u=1 liefern die Basisfunktionen
/// exakt 0/1, die Endpunkte werden also ohne Rundungsfehler getroffen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HermiteSegment {
    pub p0: Vec2,
    pub t0: Vec2,
    pub p1: Vec2,
    pub t1: Vec2,
}

impl HermiteSegment {
    pub fn new(p0: Vec2, t0: Vec2, p1: Vec2, t1: Vec2) -> Self {
        Self { p0, t0, p1, t1 }
    }

    /// Position bei lokalem Parameter `u` ∈ [0, 1].
    pub fn position(&self, u: f32) -> Vec2 {
        let u2 = u * u;
        let u3 = u2 * u;
        let h00 = 2.0 * u3 - 3.0 * u2 + 1.0;
        let h10 = u3 - 2.0 * u2 + u;
        let h01 = -2.0 * u3 + 3.0 * u2;
        let h11 = u3 - u2;
        h00 * self.p0 + h10 * self.t0 + h01 * self.p1 + h11 * self.t1
    }

    /// Erste Ableitung nach `u`.
    pub fn velocity(&self, u: f32) -> Vec2 {
        let u2 = u * u;
        let d00 = 6.0 * u2 - 6.0 * u;
        let d10 = 3.0 * u2 - 4.0 * u + 1.0;
        let d01 = -6.0 * u2 + 6.0 * u;
        let d11 = 3.0 * u2 - 2.0 * u;
        d00 * self.p0 + d10 * self.t0 + d01 * self.p1 + d11 * self.t1
    }

    /// Bézier-Kontrollpunkte derselben Kurve: Griffe um ⅓ der Tangente versetzt.
    pub fn bezier_handles(&self) -> (Vec2, Vec2) {
        (self.p0 + self.t0 / 3.0, self.p1 - self.t1 / 3.0)
    }
}

/// Aufgelöster Kurvenparameter: Segment-Index und lokales `u`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentParam {
    pub segment: usize,
    pub u: f32,
}

impl SegmentParam {
    /// Zerlegt einen natürlichen Parameter `t` in (Segment, u).
    ///
    /// `t` wird zyklisch in [0, n) gefaltet; `segment_count` muss > 0 sein.
    pub fn from_natural(t: f32, segment_count: usize) -> Self {
        let n = segment_count as f32;
        let wrapped = t.rem_euclid(n);
        let segment = (wrapped.floor() as usize).min(segment_count - 1);
        let u = (wrapped - segment as f32).clamp(0.0, 1.0);
        Self { segment, u }
    }

    /// Zurück in den natürlichen Parameter.
    pub fn to_natural(self) -> f32 {
        self.segment as f32 + self.u
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_segment() -> HermiteSegment {
        HermiteSegment::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 5.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(10.0, -5.0),
        )
    }

    #[test]
    fn test_endpoints_exact() {
        let seg = sample_segment();
        assert_eq!(seg.position(0.0), seg.p0);
        assert_eq!(seg.position(1.0), seg.p1);
        assert_eq!(seg.velocity(0.0), seg.t0);
        assert_eq!(seg.velocity(1.0), seg.t1);
    }

    #[test]
    fn test_velocity_matches_finite_difference() {
        let seg = sample_segment();
        let h = 1e-3;
        for &u in &[0.1f32, 0.35, 0.5, 0.8] {
            let numeric = (seg.position(u + h) - seg.position(u - h)) / (2.0 * h);
            let analytic = seg.velocity(u);
            assert_relative_eq!(numeric.x, analytic.x, epsilon = 0.05);
            assert_relative_eq!(numeric.y, analytic.y, epsilon = 0.05);
        }
    }

    #[test]
    fn test_bezier_handles_one_third_tangent() {
        let seg = sample_segment();
        let (c1, c2) = seg.bezier_handles();
        assert_relative_eq!(c1.x, 10.0 / 3.0);
        assert_relative_eq!(c2.y, 5.0 / 3.0);
    }

    #[test]
    fn test_from_natural_wraps() {
        let p = SegmentParam::from_natural(4.25, 4);
        assert_eq!(p.segment, 0);
        assert_relative_eq!(p.u, 0.25);

        let p = SegmentParam::from_natural(-0.5, 4);
        assert_eq!(p.segment, 3);
        assert_relative_eq!(p.u, 0.5);
    }

    #[test]
    fn test_from_natural_segment_boundary() {
        let p = SegmentParam::from_natural(2.0, 4);
        assert_eq!(p.segment, 2);
        assert_eq!(p.u, 0.0);
        assert_relative_eq!(p.to_natural(), 2.0);
    }
}

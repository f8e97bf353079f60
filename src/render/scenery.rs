//! Landschaft: Haus und fraktale Bäume als reine Geometrie.

use glam::Vec2;

/// Unterhalb dieser Astlänge wird nicht weiter verzweigt.
const MIN_BRANCH_LENGTH: f32 = 5.0;
/// Längenfaktor pro Verzweigungsstufe.
const BRANCH_SHRINK: f32 = 0.8;
/// Spreizwinkel der Äste in Grad.
const BRANCH_SPREAD_DEG: f32 = 15.0;

/// Baum-Standorte: (Fußpunkt, Stammlänge).
const FOREST: [([f32; 2], f32); 16] = [
    ([50.0, 600.0], 30.0),
    ([100.0, 600.0], 25.0),
    ([140.0, 600.0], 20.0),
    ([550.0, 600.0], 30.0),
    ([500.0, 600.0], 25.0),
    ([440.0, 600.0], 20.0),
    ([340.0, 600.0], 15.0),
    ([300.0, 600.0], 15.0),
    ([250.0, 600.0], 15.0),
    ([90.0, 85.0], 20.0),
    ([170.0, 75.0], 18.0),
    ([235.0, 65.0], 16.0),
    ([290.0, 55.0], 14.0),
    ([335.0, 45.0], 12.0),
    ([370.0, 37.0], 10.0),
    ([400.0, 28.0], 8.0),
];

/// Ursprung des Hauses in Canvas-Koordinaten.
const HOUSE_ORIGIN: Vec2 = Vec2::new(2.0, 5.0);

/// Ast-Segmente eines Baums, der bei `base` senkrecht nach oben wächst.
///
/// Jeder Ast verzweigt an seiner Spitze in zwei um ±15° gedrehte Äste mit 80 %
/// Länge, bis ein Ast kürzer als 5 px ist. Dieser letzte Ast wird noch gezeichnet.
pub fn tree(base: Vec2, trunk_length: f32) -> Vec<[Vec2; 2]> {
    let mut segments = Vec::new();
    // Winkel 0 = nach oben (negative y-Richtung)
    grow(base, trunk_length, 0.0, &mut segments);
    segments
}

fn grow(start: Vec2, length: f32, angle_deg: f32, segments: &mut Vec<[Vec2; 2]>) {
    let angle = angle_deg.to_radians();
    let tip = start + Vec2::new(angle.sin(), -angle.cos()) * length;
    segments.push([start, tip]);
    if length < MIN_BRANCH_LENGTH {
        return;
    }
    let next = length * BRANCH_SHRINK;
    grow(tip, next, angle_deg - BRANCH_SPREAD_DEG, segments);
    grow(tip, next, angle_deg + BRANCH_SPREAD_DEG, segments);
}

/// Alle Bäume der Landschaft.
pub fn forest() -> Vec<[Vec2; 2]> {
    FOREST
        .iter()
        .flat_map(|&([x, y], len)| tree(Vec2::new(x, y), len))
        .collect()
}

/// Teile des Hauses in Canvas-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub struct House {
    /// Dreieckiges Dach
    pub roof: [Vec2; 3],
    /// Hauswand als (min, max)
    pub wall: [Vec2; 2],
    /// Fenster und Tür als (min, max)
    pub openings: Vec<[Vec2; 2]>,
}

/// Das Haus oben links.
pub fn house() -> House {
    let o = HOUSE_ORIGIN;
    let rect = |x: f32, y: f32, w: f32, h: f32| [o + Vec2::new(x, y), o + Vec2::new(x + w, y + h)];
    House {
        roof: [
            o + Vec2::new(30.0, 0.0),
            o + Vec2::new(5.0, 20.0),
            o + Vec2::new(55.0, 20.0),
        ],
        wall: rect(5.0, 20.0, 50.0, 53.0),
        openings: vec![
            rect(15.0, 30.0, 5.0, 8.0),
            rect(15.0, 50.0, 5.0, 8.0),
            rect(35.0, 30.0, 5.0, 8.0),
            rect(38.0, 60.0, 10.0, 13.0),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_short_trunk_does_not_branch() {
        let segments = tree(Vec2::new(10.0, 100.0), 4.0);
        assert_eq!(segments.len(), 1);
        assert_relative_eq!(segments[0][1].y, 96.0, epsilon = 1e-4);
        assert_relative_eq!(segments[0][1].x, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_branching_doubles_per_level() {
        // 6 → 4.8: eine Verzweigung, dann Abbruch
        let segments = tree(Vec2::ZERO, 6.0);
        assert_eq!(segments.len(), 3);
        // Äste sind symmetrisch um den Stamm
        let left = segments[1][1];
        let right = segments[2][1];
        assert_relative_eq!(left.x, -right.x, epsilon = 1e-4);
        assert_relative_eq!(left.y, right.y, epsilon = 1e-4);
    }

    #[test]
    fn test_recursion_terminates_for_large_tree() {
        let segments = tree(Vec2::ZERO, 30.0);
        // Längen 30·0.8^k ≥ 5 für k = 0..=8, Stufe 9 wird noch gezeichnet
        assert_eq!(segments.len(), (1 << 10) - 1);
        assert!(segments.iter().all(|s| s[0].is_finite() && s[1].is_finite()));
    }

    #[test]
    fn test_house_roof_above_wall() {
        let h = house();
        assert!(h.roof.iter().all(|p| p.y <= h.wall[0].y));
        assert_eq!(h.openings.len(), 4);
    }
}

//! Track-Fassade: Kontrollpunkte rein, Waggon-Positionen und Zeichenhilfen raus.
//!
//! Spline und Arc-Length-Tabelle werden bei Bedarf einmal gebaut und bis zum
//! nächsten Edit wiederverwendet. Jeder Edit verwirft den Cache.

use crate::{
    ArcLengthTable, CarLayout, CarPlacement, ClosedSpline, ControlPoints, MotionMode, TrackError,
    DEFAULT_SAMPLES_PER_SEGMENT, place_cars,
};
use glam::Vec2;
use std::cell::OnceCell;

/// Abtastung pro Segment bei der Suche nach dem Einfügeort auf dem Track.
const INSERT_SEARCH_SAMPLES: usize = 64;

/// Schwelle in Position (Schiene) mit Ausrichtung entlang der Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tie {
    pub position: Vec2,
    /// Fahrtrichtung in Radiant; die Schwelle liegt quer dazu
    pub heading: f32,
}

/// Zwei parallele Schienen links und rechts der Mittellinie.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RailLines {
    pub left: Vec<Vec2>,
    pub right: Vec<Vec2>,
}

#[derive(Debug, Clone)]
struct TrackGeometry {
    spline: ClosedSpline,
    table: ArcLengthTable,
}

/// Geschlossener Track aus editierbaren Kontrollpunkten.
#[derive(Debug, Clone)]
pub struct Track {
    points: ControlPoints,
    samples_per_segment: usize,
    geometry: OnceCell<TrackGeometry>,
}

impl Track {
    /// Erstellt einen Track mit Standard-Auflösung der Arc-Length-Tabelle.
    pub fn new(points: Vec<Vec2>) -> Result<Self, TrackError> {
        Self::with_resolution(points, DEFAULT_SAMPLES_PER_SEGMENT)
    }

    /// Erstellt einen Track mit `samples_per_segment` Tabelleneinträgen pro Segment.
    pub fn with_resolution(
        points: Vec<Vec2>,
        samples_per_segment: usize,
    ) -> Result<Self, TrackError> {
        if samples_per_segment == 0 {
            return Err(TrackError::InvalidResolution);
        }
        Ok(Self {
            points: ControlPoints::new(points)?,
            samples_per_segment,
            geometry: OnceCell::new(),
        })
    }

    // ── Kontrollpunkte ──────────────────────────────────────────────

    /// Ersetzt die Punktfolge. Bei Fehler bleibt der alte Track unverändert.
    pub fn set_points(&mut self, points: Vec<Vec2>) -> Result<(), TrackError> {
        self.points.replace(points)?;
        self.invalidate();
        Ok(())
    }

    pub fn points(&self) -> &[Vec2] {
        self.points.as_slice()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn samples_per_segment(&self) -> usize {
        self.samples_per_segment
    }

    /// Hängt einen Punkt zwischen letztem und erstem Punkt an.
    pub fn add_point(&mut self, position: Vec2) -> Result<(), TrackError> {
        self.points.push(position)?;
        self.invalidate();
        Ok(())
    }

    /// Fügt einen Punkt an `index` ein.
    pub fn insert_point(&mut self, index: usize, position: Vec2) -> Result<(), TrackError> {
        self.points.insert(index, position)?;
        self.invalidate();
        Ok(())
    }

    /// Entfernt den Punkt an `index` und gibt seine Position zurück.
    pub fn remove_point(&mut self, index: usize) -> Result<Vec2, TrackError> {
        let removed = self.points.remove(index)?;
        self.invalidate();
        Ok(removed)
    }

    /// Verschiebt den Punkt an `index`.
    pub fn move_point(&mut self, index: usize, position: Vec2) -> Result<(), TrackError> {
        self.points.set(index, position)?;
        self.invalidate();
        Ok(())
    }

    /// Index des nächsten Kontrollpunkts innerhalb von `max_distance`.
    pub fn nearest_point(&self, position: Vec2, max_distance: f32) -> Option<usize> {
        self.points.nearest(position, max_distance)
    }

    /// Fügt `position` in das Segment ein, dessen Kurvenstück ihr am nächsten liegt.
    ///
    /// Gibt den Index des neuen Punkts zurück.
    pub fn insert_point_on_track(&mut self, position: Vec2) -> Result<usize, TrackError> {
        let spline = self.spline()?;
        let mut best_segment = 0;
        let mut best_distance = f32::INFINITY;
        for seg in 0..spline.segment_count() {
            let segment = spline.segment(seg);
            for k in 0..=INSERT_SEARCH_SAMPLES {
                let u = k as f32 / INSERT_SEARCH_SAMPLES as f32;
                let d = segment.position(u).distance_squared(position);
                if d < best_distance {
                    best_distance = d;
                    best_segment = seg;
                }
            }
        }

        let index = best_segment + 1;
        self.insert_point(index, position)?;
        log::debug!("Kontrollpunkt #{} auf Segment {} eingefügt", index, best_segment);
        Ok(index)
    }

    // ── Kurvengeometrie ─────────────────────────────────────────────

    /// Spline der aktuellen Punktfolge (gecacht).
    pub fn spline(&self) -> Result<&ClosedSpline, TrackError> {
        Ok(&self.geometry()?.spline)
    }

    /// Arc-Length-Tabelle der aktuellen Punktfolge (gecacht).
    pub fn arc_table(&self) -> Result<&ArcLengthTable, TrackError> {
        Ok(&self.geometry()?.table)
    }

    /// Gesamtlänge der geschlossenen Kurve.
    pub fn total_perimeter(&self) -> Result<f32, TrackError> {
        Ok(self.arc_table()?.perimeter())
    }

    /// Platziert `car_count` Waggons mit Halblänge `car_spacing` für den Fortschritt `progress`.
    pub fn evaluate(
        &self,
        progress: f32,
        mode: MotionMode,
        car_count: usize,
        car_spacing: f32,
    ) -> Result<Vec<CarPlacement>, TrackError> {
        let geometry = self.geometry()?;
        Ok(place_cars(
            &geometry.spline,
            &geometry.table,
            progress,
            mode,
            CarLayout::new(car_count, car_spacing),
        ))
    }

    /// Mittellinie als Polyline, `samples_per_segment` Punkte pro Segment.
    pub fn polyline(&self, samples_per_segment: usize) -> Result<Vec<Vec2>, TrackError> {
        Ok(self.spline()?.sample(samples_per_segment))
    }

    /// Kubische Bézier-Segmente `[start, handle1, handle2, end]` durch alle Punkte.
    pub fn bezier_path(&self) -> Result<Vec<[Vec2; 4]>, TrackError> {
        let spline = self.spline()?;
        Ok((0..spline.segment_count())
            .map(|i| {
                let segment = spline.segment(i);
                let (c1, c2) = segment.bezier_handles();
                [segment.p0, c1, c2, segment.p1]
            })
            .collect())
    }

    /// Schienen im Abstand `offset` links und rechts der Mittellinie.
    pub fn rail_lines(
        &self,
        offset: f32,
        samples_per_segment: usize,
    ) -> Result<RailLines, TrackError> {
        let spline = self.spline()?;
        let sps = samples_per_segment.max(1);
        let mut rails = RailLines::default();
        for seg in 0..spline.segment_count() {
            let segment = spline.segment(seg);
            for k in 0..sps {
                let u = k as f32 / sps as f32;
                let center = segment.position(u);
                let dir = segment.velocity(u).normalize_or_zero() * offset;
                let normal = Vec2::new(dir.y, -dir.x);
                rails.left.push(center + normal);
                rails.right.push(center - normal);
            }
        }
        Ok(rails)
    }

    /// Schwellen in gleichem Bogenabstand `spacing`, beginnend bei Distanz 0.
    pub fn ties(&self, spacing: f32) -> Result<Vec<Tie>, TrackError> {
        let geometry = self.geometry()?;
        if spacing <= 0.0 {
            return Ok(Vec::new());
        }
        let peri = geometry.table.perimeter();
        let count = ((peri - spacing) / spacing).floor().max(-1.0) as i64 + 1;
        Ok((0..count.max(0))
            .map(|k| {
                let t = geometry.table.param_at_distance(k as f32 * spacing);
                Tie {
                    position: geometry.spline.position_at(t),
                    heading: geometry.spline.heading_at(t),
                }
            })
            .collect())
    }

    fn geometry(&self) -> Result<&TrackGeometry, TrackError> {
        if let Some(geometry) = self.geometry.get() {
            return Ok(geometry);
        }
        let spline = ClosedSpline::new(&self.points);
        let table = ArcLengthTable::build(&spline, self.samples_per_segment)?;
        Ok(self.geometry.get_or_init(|| TrackGeometry { spline, table }))
    }

    fn invalidate(&mut self) {
        self.geometry.take();
    }
}

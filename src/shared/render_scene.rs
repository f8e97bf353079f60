//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Alle Koordinaten sind Canvas-Pixel (Ursprung oben links, y nach unten).

use glam::Vec2;
use running_train_engine::Tie;

/// Darstellung der Strecke.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackShape {
    /// Einfache Linie: geschlossener Pfad aus kubischen Bézier-Segmenten
    Simple { segments: Vec<[Vec2; 4]> },
    /// Doppelte Schiene mit Querschwellen
    Rails {
        left: Vec<Vec2>,
        right: Vec<Vec2>,
        ties: Vec<Tie>,
    },
}

/// Ein Waggon, bereits ausgerichtet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarSprite {
    pub position: Vec2,
    /// Fahrtrichtung in Radiant
    pub heading: f32,
    /// Lok (Index 0) bekommt das Führerhaus
    pub is_locomotive: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Größe der Zeichenfläche [Breite, Höhe]
    pub canvas_size: [f32; 2],
    /// Strecke (None = ungültige Konfiguration, nichts zeichnen)
    pub track: Option<TrackShape>,
    /// Kontrollpunkte
    pub control_points: Vec<Vec2>,
    /// Aktuell gezogener Kontrollpunkt
    pub dragged_point: Option<usize>,
    /// Waggons, Lok zuerst
    pub cars: Vec<CarSprite>,
    /// Rauchwolken hinter den Waggons zeichnen
    pub smoke: bool,
    /// Landschaft (Haus, Bäume) zeichnen
    pub scenery: bool,
}

impl RenderScene {
    /// Gibt zurück, ob eine Strecke zum Zeichnen vorhanden ist.
    pub fn has_track(&self) -> bool {
        self.track.is_some()
    }
}

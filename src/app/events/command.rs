use running_train_engine::MotionMode;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Fortschritt setzen (wird modulo Punktanzahl gefaltet)
    SetProgress { value: f32 },
    /// Fortschritt um `delta` weiterschieben
    AdvanceProgress { delta: f32 },
    /// Animation starten/anhalten
    TogglePlayback,
    /// Bewegungsmodus setzen
    SetMotionMode { mode: MotionMode },
    /// Einfache Strecke statt Schienen
    SetSimpleTrack { enabled: bool },
    /// Rauch anzeigen
    SetSmoke { enabled: bool },
    /// Landschaft anzeigen
    SetScenery { enabled: bool },
    /// Drag eines Kontrollpunkts beginnen
    BeginPointDrag { index: usize },
    /// Kontrollpunkt verschieben
    MovePoint { index: usize, position: glam::Vec2 },
    /// Drag beenden
    EndPointDrag,
    /// Neuen Punkt in das nächstgelegene Segment einfügen
    InsertPointOnTrack { position: glam::Vec2 },
    /// Kontrollpunkt entfernen
    RemovePoint { index: usize },
    /// Strecke auf Startpunkte zurücksetzen
    ResetTrack,
    /// Optionen als TOML speichern
    SaveOptions,
    /// Anwendung beenden
    RequestExit,
}

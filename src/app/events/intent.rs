use running_train_engine::MotionMode;

/// Zustand der Modifier-Tasten beim Mausklick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerModifiers {
    /// Shift: Punkt auf der Strecke einfügen
    pub shift: bool,
    /// Strg/Cmd: Punkt entfernen
    pub command: bool,
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Fortschritts-Slider wurde bewegt
    ProgressChanged { value: f32 },
    /// Frame-Takt (Sekunden seit dem letzten Frame)
    FrameAdvanced { dt: f32 },
    /// Play/Pause umschalten
    PlayPauseRequested,
    /// Bewegungsmodus gewählt (Checkbox "arc-length")
    MotionModeChanged { mode: MotionMode },
    /// Checkbox "simple-track"
    SimpleTrackToggled { enabled: bool },
    /// Checkbox "smoke"
    SmokeToggled { enabled: bool },
    /// Checkbox "scenery"
    SceneryToggled { enabled: bool },
    /// Primäre Maustaste auf der Zeichenfläche gedrückt
    PointerPressed {
        canvas_pos: glam::Vec2,
        modifiers: PointerModifiers,
    },
    /// Maus mit gedrückter Taste bewegt
    PointerDragged { canvas_pos: glam::Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Strecke auf die Startpunkte zurücksetzen
    ResetTrackRequested,
    /// Aktuelle Optionen speichern
    SaveOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}

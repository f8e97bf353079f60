/// Zustand der Animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    /// Läuft die Animation?
    pub playing: bool,
    /// Segmente pro Sekunde
    pub speed: f32,
}

impl PlaybackState {
    pub fn new(speed: f32) -> Self {
        Self {
            playing: false,
            speed,
        }
    }
}

//! Canvas-Input-Handling: Maus-Events → AppIntent.
//!
//! - Klick auf Kontrollpunkt + Ziehen: Punkt verschieben
//! - Shift + Klick: Punkt auf der Strecke einfügen
//! - Strg/Cmd + Klick auf Kontrollpunkt: Punkt entfernen

use crate::app::{AppIntent, PointerModifiers};

/// Verwaltet den Maus-Zustand über Frames hinweg
#[derive(Default)]
pub struct InputState {
    /// Primäre Taste wurde auf der Zeichenfläche gedrückt und ist noch unten
    pointer_down: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// `rect` ist die Zeichenfläche; Positionen werden relativ zu ihrer
    /// linken oberen Ecke geliefert.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        rect: egui::Rect,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let (pressed, released, modifiers, press_origin) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.modifiers,
                i.pointer.press_origin(),
            )
        });

        if pressed && response.hovered() {
            // press_origin() liefert die exakte Klickposition vor der Drag-Schwelle
            if let Some(pos) = press_origin {
                events.push(AppIntent::PointerPressed {
                    canvas_pos: to_canvas(rect, pos),
                    modifiers: PointerModifiers {
                        shift: modifiers.shift,
                        command: modifiers.command,
                    },
                });
                self.pointer_down = true;
            }
        }

        if self.pointer_down && response.dragged_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(AppIntent::PointerDragged {
                    canvas_pos: to_canvas(rect, pos),
                });
            }
        }

        if released && self.pointer_down {
            events.push(AppIntent::PointerReleased);
            self.pointer_down = false;
        }

        events
    }
}

/// Bildschirmposition → Canvas-Koordinaten.
pub fn to_canvas(rect: egui::Rect, pos: egui::Pos2) -> glam::Vec2 {
    let local = pos - rect.min;
    glam::Vec2::new(local.x, local.y)
}

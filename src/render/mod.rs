//! Render-Layer: zeichnet die `RenderScene` mit dem egui-Painter.

mod painter;
pub mod scenery;

pub use painter::{color, paint_scene};

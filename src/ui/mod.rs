//! UI-Komponenten: Menü, Steuer-Panel, Status-Bar, Canvas-Input.

pub mod controls;
pub mod input;
pub mod menu;
pub mod status;

pub use controls::render_control_panel;
pub use input::InputState;
pub use menu::render_menu;
pub use status::render_status_bar;

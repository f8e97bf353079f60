//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use running_train_engine::MotionMode;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match state.perimeter() {
                Some(perimeter) => {
                    ui.label(format!(
                        "Punkte: {} | Waggons: {} | Umfang: {:.1} px",
                        state.point_count(),
                        state.car_count(),
                        perimeter
                    ));
                }
                None => {
                    ui.label("Keine gültige Strecke");
                }
            }

            ui.separator();

            ui.label(format!(
                "Fortschritt: {:.2} / {}",
                state.progress,
                state.point_count()
            ));

            ui.separator();

            let mode = match state.display.motion_mode {
                MotionMode::Naive => "naiv",
                MotionMode::ArcLength => "Arc-Length",
            };
            ui.label(format!("Modus: {}", mode));

            if let Some(index) = state.dragged_point {
                ui.separator();
                ui.label(format!("Ziehe Punkt #{}", index));
            }
        });
    });
}

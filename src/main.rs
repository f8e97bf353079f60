//! Running Train.
//!
//! Ein Zug fährt auf einer geschlossenen Catmull-Rom-Strecke, deren
//! Kontrollpunkte per Maus verschoben, eingefügt und entfernt werden.

use eframe::egui;
use running_train::{render, ui, AppController, AppIntent, AppState, TrainOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Running Train v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = TrainOptions::config_path();
        let train_options = TrainOptions::load_from_file(&config_path);
        let [width, height] = train_options.canvas_size;

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([width + 40.0, height + 120.0])
                .with_title("Running Train"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Running Train",
            options,
            Box::new(|_cc| Ok(Box::new(TrainApp::new(train_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct TrainApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl TrainApp {
    fn new(options: TrainOptions) -> Self {
        Self {
            state: AppState::from_options(options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for TrainApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::FrameAdvanced { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl TrainApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_control_panel(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);

        let dt = ctx.input(|i| i.stable_dt);
        events.push(AppIntent::FrameAdvanced { dt });

        egui::CentralPanel::default().show(ctx, |ui| {
            let [width, height] = self.state.options.canvas_size;
            let (rect, response) = ui.allocate_exact_size(
                egui::vec2(width, height),
                egui::Sense::click_and_drag(),
            );

            events.extend(self.input.collect_canvas_events(ui, &response, rect));

            let scene = self.controller.build_render_scene(&self.state);
            render::paint_scene(
                &ui.painter_at(rect),
                rect,
                &scene,
                &self.state.options,
            );

            if !scene.has_track() {
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Keine gültige Strecke. Strecke → Zurücksetzen",
                    egui::FontId::proportional(20.0),
                    egui::Color32::DARK_RED,
                );
            }
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || self.state.playback.playing
            || ctx.input(|i| i.pointer.is_moving())
        {
            ctx.request_repaint();
        }
    }
}

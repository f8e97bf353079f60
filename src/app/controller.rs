//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Fortschritt & Animation ===
            AppCommand::SetProgress { value } => handlers::playback::set_progress(state, value),
            AppCommand::AdvanceProgress { delta } => handlers::playback::advance(state, delta),
            AppCommand::TogglePlayback => handlers::playback::toggle(state),

            // === Darstellung ===
            AppCommand::SetMotionMode { mode } => handlers::display::set_motion_mode(state, mode),
            AppCommand::SetSimpleTrack { enabled } => {
                handlers::display::set_simple_track(state, enabled)
            }
            AppCommand::SetSmoke { enabled } => handlers::display::set_smoke(state, enabled),
            AppCommand::SetScenery { enabled } => handlers::display::set_scenery(state, enabled),

            // === Strecke editieren ===
            AppCommand::BeginPointDrag { index } => handlers::track::begin_drag(state, index),
            AppCommand::MovePoint { index, position } => {
                handlers::track::move_point(state, index, position)?
            }
            AppCommand::EndPointDrag => handlers::track::end_drag(state),
            AppCommand::InsertPointOnTrack { position } => {
                handlers::track::insert_on_track(state, position)?
            }
            AppCommand::RemovePoint { index } => handlers::track::remove_point(state, index)?,
            AppCommand::ResetTrack => handlers::track::reset(state)?,

            // === System ===
            AppCommand::SaveOptions => handlers::system::save_options(state)?,
            AppCommand::RequestExit => handlers::system::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen State.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}

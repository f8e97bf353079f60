//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ProgressChanged { value } => vec![AppCommand::SetProgress { value }],
        AppIntent::FrameAdvanced { dt } => {
            if state.playback.playing && dt > 0.0 {
                vec![AppCommand::AdvanceProgress {
                    delta: dt * state.playback.speed,
                }]
            } else {
                vec![]
            }
        }
        AppIntent::PlayPauseRequested => vec![AppCommand::TogglePlayback],
        AppIntent::MotionModeChanged { mode } => vec![AppCommand::SetMotionMode { mode }],
        AppIntent::SimpleTrackToggled { enabled } => vec![AppCommand::SetSimpleTrack { enabled }],
        AppIntent::SmokeToggled { enabled } => vec![AppCommand::SetSmoke { enabled }],
        AppIntent::SceneryToggled { enabled } => vec![AppCommand::SetScenery { enabled }],
        AppIntent::PointerPressed {
            canvas_pos,
            modifiers,
        } => {
            let Some(track) = state.track.as_ref() else {
                return vec![];
            };
            let hit = track.nearest_point(canvas_pos, state.options.pick_radius_px);

            if modifiers.shift {
                vec![AppCommand::InsertPointOnTrack {
                    position: canvas_pos,
                }]
            } else if modifiers.command {
                hit.map(|index| AppCommand::RemovePoint { index })
                    .into_iter()
                    .collect()
            } else {
                hit.map(|index| AppCommand::BeginPointDrag { index })
                    .into_iter()
                    .collect()
            }
        }
        AppIntent::PointerDragged { canvas_pos } => match state.dragged_point {
            Some(index) => vec![AppCommand::MovePoint {
                index,
                position: canvas_pos,
            }],
            None => vec![],
        },
        AppIntent::PointerReleased => {
            if state.dragged_point.is_some() {
                vec![AppCommand::EndPointDrag]
            } else {
                vec![]
            }
        }
        AppIntent::ResetTrackRequested => vec![AppCommand::ResetTrack],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::PointerModifiers;
    use glam::Vec2;

    #[test]
    fn test_frame_ignored_while_paused() {
        let state = AppState::new();
        let commands = map_intent_to_commands(&state, AppIntent::FrameAdvanced { dt: 0.016 });
        assert!(commands.is_empty());
    }

    #[test]
    fn test_frame_scaled_by_speed_while_playing() {
        let mut state = AppState::new();
        state.playback.playing = true;
        state.playback.speed = 2.0;
        let commands = map_intent_to_commands(&state, AppIntent::FrameAdvanced { dt: 0.5 });
        assert_eq!(commands, vec![AppCommand::AdvanceProgress { delta: 1.0 }]);
    }

    #[test]
    fn test_press_on_point_starts_drag() {
        let state = AppState::new();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::PointerPressed {
                canvas_pos: Vec2::new(152.0, 452.0),
                modifiers: PointerModifiers::default(),
            },
        );
        assert_eq!(commands, vec![AppCommand::BeginPointDrag { index: 1 }]);
    }

    #[test]
    fn test_press_on_empty_area_does_nothing() {
        let state = AppState::new();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::PointerPressed {
                canvas_pos: Vec2::new(300.0, 300.0),
                modifiers: PointerModifiers::default(),
            },
        );
        assert!(commands.is_empty());
    }

    #[test]
    fn test_ctrl_press_removes_hit_point() {
        let state = AppState::new();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::PointerPressed {
                canvas_pos: Vec2::new(450.0, 155.0),
                modifiers: PointerModifiers {
                    shift: false,
                    command: true,
                },
            },
        );
        assert_eq!(commands, vec![AppCommand::RemovePoint { index: 3 }]);
    }

    #[test]
    fn test_drag_without_active_point_is_ignored() {
        let state = AppState::new();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::PointerDragged {
                canvas_pos: Vec2::new(10.0, 10.0),
            },
        );
        assert!(commands.is_empty());
    }
}

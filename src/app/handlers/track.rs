//! Handler für das Editieren der Kontrollpunkte.

use crate::app::state::app_state::build_initial_track;
use crate::app::AppState;
use running_train_engine::{Track, TrackError};

/// Startet das Ziehen eines Kontrollpunkts.
pub fn begin_drag(state: &mut AppState, index: usize) {
    if index < state.point_count() {
        state.dragged_point = Some(index);
    }
}

/// Verschiebt einen Kontrollpunkt auf eine neue Canvas-Position.
pub fn move_point(state: &mut AppState, index: usize, position: glam::Vec2) -> anyhow::Result<()> {
    let track = require_track(state)?;
    track.move_point(index, position)?;
    Ok(())
}

/// Beendet das Ziehen.
pub fn end_drag(state: &mut AppState) {
    state.dragged_point = None;
}

/// Fügt einen Punkt in das nächstgelegene Segment ein (Shift+Klick).
pub fn insert_on_track(state: &mut AppState, position: glam::Vec2) -> anyhow::Result<()> {
    let track = require_track(state)?;
    let index = track.insert_point_on_track(position)?;
    log::info!(
        "Kontrollpunkt #{} bei ({:.0}, {:.0}) eingefügt, jetzt {} Punkte",
        index,
        position.x,
        position.y,
        track.point_count()
    );
    Ok(())
}

/// Entfernt einen Kontrollpunkt (Strg+Klick). Unter die Mindestanzahl wird nicht gelöscht.
pub fn remove_point(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    let track = require_track(state)?;
    match track.remove_point(index) {
        Ok(removed) => {
            log::info!(
                "Kontrollpunkt #{} bei ({:.0}, {:.0}) entfernt",
                index,
                removed.x,
                removed.y
            );
        }
        Err(TrackError::TooFewPoints { min, .. }) => {
            log::warn!("Entfernen abgelehnt: Strecke braucht mindestens {} Punkte", min);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    if state.dragged_point == Some(index) {
        state.dragged_point = None;
    }
    state.progress = state.wrap_progress(state.progress);
    Ok(())
}

/// Setzt die Strecke auf die Startpunkte aus den Optionen zurück.
pub fn reset(state: &mut AppState) -> anyhow::Result<()> {
    let track = build_initial_track(&state.options)?;
    state.track = Some(track);
    state.dragged_point = None;
    state.progress = state.wrap_progress(state.progress);
    log::info!("Strecke zurückgesetzt ({} Punkte)", state.point_count());
    Ok(())
}

fn require_track(state: &mut AppState) -> anyhow::Result<&mut Track> {
    state
        .track
        .as_mut()
        .ok_or_else(|| anyhow::anyhow!("Keine gültige Strecke vorhanden"))
}

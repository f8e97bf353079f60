//! Baut die `RenderScene` aus dem AppState.

use super::AppState;
use crate::shared::{CarSprite, RenderScene, TrackShape};
use running_train_engine::{Track, TrackError};

/// Erstellt die Read-only Szene für den aktuellen Frame.
pub fn build(state: &AppState) -> RenderScene {
    let mut scene = RenderScene {
        canvas_size: state.options.canvas_size,
        track: None,
        control_points: Vec::new(),
        dragged_point: state.dragged_point,
        cars: Vec::new(),
        smoke: state.display.smoke,
        scenery: state.display.scenery,
    };

    let Some(track) = state.track.as_ref() else {
        return scene;
    };
    scene.control_points = track.points().to_vec();

    match (track_shape(state, track), cars(state, track)) {
        (Ok(shape), Ok(cars)) => {
            scene.track = Some(shape);
            scene.cars = cars;
        }
        (Err(e), _) | (_, Err(e)) => {
            log::warn!("Strecke kann nicht gezeichnet werden: {}", e);
        }
    }

    scene
}

fn track_shape(state: &AppState, track: &Track) -> Result<TrackShape, TrackError> {
    if state.display.simple_track {
        return Ok(TrackShape::Simple {
            segments: track.bezier_path()?,
        });
    }

    let rails = track.rail_lines(
        state.options.rail_offset,
        state.options.rail_samples_per_segment,
    )?;
    Ok(TrackShape::Rails {
        left: rails.left,
        right: rails.right,
        ties: track.ties(state.options.tie_spacing)?,
    })
}

fn cars(state: &AppState, track: &Track) -> Result<Vec<CarSprite>, TrackError> {
    let placements = track.evaluate(
        state.progress,
        state.display.motion_mode,
        state.car_count(),
        state.options.car_half_length,
    )?;
    Ok(placements
        .into_iter()
        .enumerate()
        .map(|(i, p)| CarSprite {
            position: p.position,
            heading: p.heading,
            is_locomotive: i == 0,
        })
        .collect())
}

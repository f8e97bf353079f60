//! Running Train Library.
//! App-, Render- und UI-Schicht als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, PointerModifiers};
pub use shared::{CarSprite, RenderScene, TrackShape, TrainOptions};

pub use running_train_engine::{MotionMode, Track, TrackError};

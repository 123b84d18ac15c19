pub mod app;
pub mod cli;
pub mod error;
pub mod interface;
pub mod loader;
pub mod models;
pub mod surface;

pub use app::{Food, FoodApp, Foods, Reading, Score, ScoreSummary};
pub use error::{Result, ScoreError};
pub use models::{BoardFile, FoodEntry, Markers};
pub use surface::{Board, ElementId, Surface};

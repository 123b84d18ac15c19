mod board_file;
pub mod markers;

pub use board_file::{BoardFile, FoodEntry, ScoreField};
pub use markers::Markers;

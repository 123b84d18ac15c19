pub mod prompts;
pub mod render;
pub mod selection;

pub use prompts::{prompt_food_choice, resolve_food};
pub use render::{display_board, food_labels, format_board};
pub use selection::apply_selection;

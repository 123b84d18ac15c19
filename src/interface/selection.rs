use tracing::info;

use super::prompts::resolve_food;
use super::render::food_labels;
use crate::app::FoodApp;
use crate::error::{Result, ScoreError};
use crate::surface::Surface;

/// Click every food named in `select`, in order.
///
/// All names are resolved before anything is clicked, so one bad name leaves
/// the board untouched. Naming a food twice toggles it back off.
pub fn apply_selection<S: Surface + 'static>(
    app: &FoodApp<S>,
    select: &[String],
) -> Result<()> {
    if app.foods().is_empty() {
        return Err(ScoreError::EmptyBoard);
    }

    let labels = food_labels(app);
    let targets = select
        .iter()
        .map(|query| resolve_food(query, &labels))
        .collect::<Result<Vec<usize>>>()?;

    for &index in &targets {
        app.click(app.foods().elements()[index]);
    }

    info!(clicks = targets.len(), "selection applied");
    Ok(())
}

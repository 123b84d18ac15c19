use dialoguer::Select;
use strsim::jaro_winkler;

use crate::error::{Result, ScoreError};

/// Minimum similarity for a fuzzy name match.
const FUZZY_THRESHOLD: f64 = 0.85;

/// Find the food a user meant by `query`.
///
/// Accepts a 1-based index, an exact name (case-insensitive), or a close
/// misspelling of a name. Returns the 0-based position in `labels`.
pub fn resolve_food(query: &str, labels: &[String]) -> Result<usize> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ScoreError::InvalidInput("Empty food name".to_string()));
    }

    if let Ok(index) = query.parse::<usize>() {
        if (1..=labels.len()).contains(&index) {
            return Ok(index - 1);
        }
        return Err(ScoreError::InvalidInput(format!(
            "Food index {} out of range 1..={}",
            index,
            labels.len()
        )));
    }

    let lowered = query.to_lowercase();
    if let Some(pos) = labels.iter().position(|l| l.to_lowercase() == lowered) {
        return Ok(pos);
    }

    labels
        .iter()
        .enumerate()
        .map(|(i, l)| (i, jaro_winkler(&l.to_lowercase(), &lowered)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .ok_or_else(|| ScoreError::FoodNotFound(query.to_string()))
}

/// Ask which food to click next. `None` means the user is done.
pub fn prompt_food_choice(labels: &[String], total: &str) -> Result<Option<usize>> {
    let mut options = labels.to_vec();
    options.push("Done".to_string());

    let selection = Select::new()
        .with_prompt(format!("Total: {}. Toggle which food?", total))
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < labels.len()).then_some(selection))
}

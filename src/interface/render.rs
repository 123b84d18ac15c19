use std::fmt::Write;

use crate::app::{format_total, FoodApp};
use crate::surface::Surface;

/// Display name of every food, in board order.
///
/// Foods without a name element are called "Food N" (1-based).
pub fn food_labels<S: Surface + 'static>(app: &FoodApp<S>) -> Vec<String> {
    let foods = app.foods();
    let surface = app.surface();

    foods
        .elements()
        .iter()
        .enumerate()
        .map(|(i, &element)| {
            surface
                .query_child(element, &app.markers().name)
                .and_then(|name| surface.text(name))
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| format!("Food {}", i + 1))
        })
        .collect()
}

/// Render the board as a plain-text table with the current total.
pub fn format_board<S: Surface + 'static>(app: &FoodApp<S>) -> String {
    let labels = food_labels(app);
    let summary = app.score().summary(app);
    let mut out = String::new();

    if labels.is_empty() {
        out.push_str("No foods on the board.\n");
        return out;
    }

    let width = labels.iter().map(|l| l.len()).max().unwrap_or(10);
    let surface = app.surface();
    let markers = app.markers();

    let _ = writeln!(out, "=== Foods ({} items) ===", labels.len());
    for (i, (&element, label)) in app.foods().elements().iter().zip(&labels).enumerate() {
        let mark = if surface.has_class(element, &markers.active) {
            "x"
        } else {
            " "
        };
        let score = surface
            .query_child(element, &markers.score)
            .and_then(|s| surface.text(s))
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| "-".to_string());

        let _ = writeln!(
            out,
            "{:>3}. [{}] {:<width$}  {:>6}",
            i + 1,
            mark,
            label,
            score,
            width = width
        );
    }

    let _ = writeln!(out, "--- Total: {} ---", format_total(summary.total));
    if summary.missing > 0 || summary.malformed > 0 {
        let _ = writeln!(
            out,
            "Selected: {} ({} without score, {} malformed)",
            summary.selected, summary.missing, summary.malformed
        );
    }
    out
}

pub fn display_board<S: Surface + 'static>(app: &FoodApp<S>) {
    println!();
    print!("{}", format_board(app));
    println!();
}

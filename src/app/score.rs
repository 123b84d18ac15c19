use tracing::{debug, warn};

use super::reading::format_total;
use super::FoodApp;
use crate::surface::Surface;

/// Running total of the selected foods' scores.
///
/// Holds no state of its own: every query goes back to [`super::Foods`].
#[derive(Debug)]
pub struct Score {
    _private: (),
}

/// Breakdown of how a total was reached.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreSummary {
    pub total: f64,
    /// Foods currently selected.
    pub selected: usize,
    /// Selected foods whose score was a number.
    pub counted: usize,
    /// Selected foods without a score element.
    pub missing: usize,
    /// Selected foods whose score text was not a number.
    pub malformed: usize,
    /// The scores were finite but their sum is not.
    pub overflowed: bool,
}

impl Score {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }

    pub fn total<S: Surface + 'static>(&self, app: &FoodApp<S>) -> f64 {
        let foods = app.foods();
        let surface = app.surface();
        foods
            .selected_scores(&*surface, app.markers())
            .iter()
            .sum()
    }

    pub fn summary<S: Surface + 'static>(&self, app: &FoodApp<S>) -> ScoreSummary {
        let foods = app.foods();
        let surface = app.surface();
        let selected = foods.selected_elements(&*surface, app.markers()).len();
        let readings = foods.selected_readings(&*surface, app.markers());

        let malformed = readings.iter().filter(|(_, r)| r.is_malformed()).count();
        let total: f64 = readings.iter().map(|(_, r)| r.value_or_zero()).sum();
        ScoreSummary {
            total,
            selected,
            counted: readings.len() - malformed,
            missing: selected - readings.len(),
            malformed,
            overflowed: !total.is_finite(),
        }
    }

    /// Write the current total into the display element.
    pub fn render<S: Surface + 'static>(&self, app: &FoodApp<S>) {
        let total = self.total(app);
        if !total.is_finite() {
            warn!("selected scores overflow, total shown as {}", format_total(total));
        }
        let display = app.surface().query_first(&app.markers().display);

        match display {
            Some(id) => {
                app.surface_mut().set_text(id, &format_total(total));
                debug!(total, "score rendered");
            }
            None => warn!(
                marker = %app.markers().display,
                "no display element on the surface, total not rendered"
            ),
        }
    }
}

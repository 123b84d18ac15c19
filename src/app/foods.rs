use tracing::{debug, info};

use super::reading::{parse_score, Reading};
use super::{Food, FoodApp};
use crate::models::Markers;
use crate::surface::{ElementId, Surface};

/// Every food found on the surface when the app first asked for them.
///
/// The element list is fixed at construction. Selection queries rescan it
/// against the surface on every call and cache nothing.
#[derive(Debug)]
pub struct Foods {
    elements: Vec<ElementId>,
    items: Vec<Food>,
}

impl Foods {
    pub(crate) fn scan<S: Surface + 'static>(app: &FoodApp<S>) -> Self {
        let elements = app.surface().query_all(&app.markers().food);
        let items: Vec<Food> = elements.iter().map(|&e| Food::bind(app, e)).collect();

        info!(count = items.len(), marker = %app.markers().food, "foods scanned");
        Self { elements, items }
    }

    pub fn elements(&self) -> &[ElementId] {
        &self.elements
    }

    pub fn items(&self) -> &[Food] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements whose active flag is set, in scan order.
    pub fn selected_elements<S: Surface + ?Sized>(
        &self,
        surface: &S,
        markers: &Markers,
    ) -> Vec<ElementId> {
        self.elements
            .iter()
            .copied()
            .filter(|&e| surface.has_class(e, &markers.active))
            .collect()
    }

    /// Readings for the selected elements that have a score child.
    ///
    /// Selected elements without one are left out entirely.
    pub fn selected_readings<S: Surface + ?Sized>(
        &self,
        surface: &S,
        markers: &Markers,
    ) -> Vec<(ElementId, Reading)> {
        let mut readings = Vec::new();

        for element in self.selected_elements(surface, markers) {
            let Some(score) = surface.query_child(element, &markers.score) else {
                debug!(element = element.index(), "selected food has no score, skipped");
                continue;
            };

            let text = surface.text(score).unwrap_or_default();
            let reading = parse_score(&text);
            if reading.is_malformed() {
                debug!(element = element.index(), text = %text, "malformed score counted as 0");
            }
            readings.push((element, reading));
        }

        readings
    }

    /// Scores of the selected foods, aligned with [`Foods::selected_readings`].
    pub fn selected_scores<S: Surface + ?Sized>(
        &self,
        surface: &S,
        markers: &Markers,
    ) -> Vec<f64> {
        self.selected_readings(surface, markers)
            .iter()
            .map(|(_, reading)| reading.value_or_zero())
            .collect()
    }
}

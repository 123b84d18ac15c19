use std::rc::Rc;

use tracing::debug;

use super::FoodApp;
use crate::surface::{ElementId, Surface};

/// One selectable food on the board.
///
/// A food holds nothing but its element. Whether it is selected is the
/// element's active flag, and its score is whatever its score child displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    element: ElementId,
}

impl Food {
    /// Wrap `element` and register its click handler on the app.
    ///
    /// The handler captures this food by value, so a click on `element` always
    /// reaches this food.
    pub(crate) fn bind<S: Surface + 'static>(app: &FoodApp<S>, element: ElementId) -> Self {
        let food = Self { element };
        app.add_click_listener(
            element,
            Rc::new(move |app: &FoodApp<S>| food.handle_activation(app)),
        );
        food
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn is_active<S: Surface + 'static>(&self, app: &FoodApp<S>) -> bool {
        app.surface().has_class(self.element, &app.markers().active)
    }

    /// Toggle the selected flag, then redraw the total.
    pub fn handle_activation<S: Surface + 'static>(&self, app: &FoodApp<S>) {
        let active = app
            .surface_mut()
            .toggle_class(self.element, &app.markers().active);
        debug!(element = self.element.index(), active, "food toggled");

        app.score().render(app);
    }
}

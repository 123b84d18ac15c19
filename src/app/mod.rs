//! The food-scoring component.
//!
//! [`FoodApp`] owns the surface and the lazily created [`Foods`] and [`Score`].
//! Each is built on first use and then lives as long as the app. Everything
//! that needs them gets the app handle passed in explicitly.
//!
//! The app is single-threaded: it is built on `RefCell`/`OnceCell` and is
//! neither `Send` nor `Sync`. A click runs its toggle and render to completion
//! before the next one is dispatched.

mod food;
mod foods;
mod reading;
mod score;

pub use food::Food;
pub use foods::Foods;
pub use reading::{format_total, parse_score, Reading};
pub use score::{Score, ScoreSummary};

use std::cell::{OnceCell, Ref, RefCell, RefMut};
use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::models::Markers;
use crate::surface::{ElementId, Surface};

/// Handler run when an element is clicked.
pub type ClickHandler<S> = Rc<dyn Fn(&FoodApp<S>)>;

pub struct FoodApp<S: Surface> {
    surface: RefCell<S>,
    markers: Markers,
    foods: OnceCell<Foods>,
    score: OnceCell<Score>,
    listeners: RefCell<HashMap<ElementId, ClickHandler<S>>>,
}

impl<S: Surface + 'static> FoodApp<S> {
    pub fn new(surface: S) -> Self {
        Self::with_markers(surface, Markers::default())
    }

    pub fn with_markers(surface: S, markers: Markers) -> Self {
        Self {
            surface: RefCell::new(surface),
            markers,
            foods: OnceCell::new(),
            score: OnceCell::new(),
            listeners: RefCell::new(HashMap::new()),
        }
    }

    /// Scan the surface for foods and wire up their click handlers.
    pub fn mount(&self) -> &Foods {
        self.foods()
    }

    /// The app's single [`Foods`], scanned on first call.
    pub fn foods(&self) -> &Foods {
        self.foods.get_or_init(|| Foods::scan(self))
    }

    /// The app's single [`Score`], created on first call.
    pub fn score(&self) -> &Score {
        self.score.get_or_init(Score::new)
    }

    pub fn is_mounted(&self) -> bool {
        self.foods.get().is_some()
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Borrow the surface.
    ///
    /// Panics if called while the surface is mutably borrowed, which only a
    /// handler holding [`FoodApp::surface_mut`] across a call could cause.
    pub fn surface(&self) -> Ref<'_, S> {
        self.surface.borrow()
    }

    pub fn surface_mut(&self) -> RefMut<'_, S> {
        self.surface.borrow_mut()
    }

    pub fn into_surface(self) -> S {
        self.surface.into_inner()
    }

    /// Register `handler` for clicks on `element`, replacing any earlier one.
    pub fn add_click_listener(&self, element: ElementId, handler: ClickHandler<S>) {
        self.listeners.borrow_mut().insert(element, handler);
    }

    /// Dispatch a click on `element`. Returns false when nothing listens to it.
    pub fn click(&self, element: ElementId) -> bool {
        let handler = self.listeners.borrow().get(&element).cloned();
        match handler {
            Some(handler) => {
                handler(self);
                true
            }
            None => {
                debug!(element = element.index(), "click on element without listener");
                false
            }
        }
    }
}

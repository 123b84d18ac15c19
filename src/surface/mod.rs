//! Rendering surface the scoring component reads from and writes to.
//!
//! The component only needs to find elements by class marker, flip a class
//! flag, and read or write text. Anything that can do those things can host a
//! food board; [`Board`] is the in-memory host shipped with the crate.

mod board;
mod html;

pub use board::{Board, BoardBuilder, Content, Node};
pub use html::parse_html_board;

/// Handle to one element on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) usize);

impl ElementId {
    pub fn index(self) -> usize {
        self.0
    }
}

pub trait Surface {
    /// All elements carrying `marker` as a class, in document order.
    fn query_all(&self, marker: &str) -> Vec<ElementId>;

    /// First element carrying `marker`, in document order.
    fn query_first(&self, marker: &str) -> Option<ElementId> {
        self.query_all(marker).into_iter().next()
    }

    /// First descendant of `parent` carrying `marker`.
    fn query_child(&self, parent: ElementId, marker: &str) -> Option<ElementId>;

    fn has_class(&self, id: ElementId, marker: &str) -> bool;

    /// Flip `marker` on the element and return whether it is now set.
    fn toggle_class(&mut self, id: ElementId, marker: &str) -> bool;

    /// Text content of the element and everything below it.
    fn text(&self, id: ElementId) -> Option<String>;

    /// Replace the element's content with `text`.
    fn set_text(&mut self, id: ElementId, text: &str);
}

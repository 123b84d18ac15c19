use super::{ElementId, Surface};
use crate::models::{BoardFile, FoodEntry, Markers};

/// A piece of an element's content: a run of text or a child element.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text(String),
    Element(ElementId),
}

/// One element of a [`Board`].
///
/// Text runs and child elements share one list, so document order survives
/// mixed content such as `<p><b>1</b>00</p>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub tag: String,
    pub classes: Vec<String>,
    pub content: Vec<Content>,
}

impl Node {
    pub fn new(tag: &str, classes: &[&str]) -> Self {
        Self {
            tag: tag.to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            content: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.content.push(Content::Text(text.to_string()));
        self
    }

    /// Child elements, in document order.
    pub fn children(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.content.iter().filter_map(|c| match c {
            Content::Element(id) => Some(*id),
            Content::Text(_) => None,
        })
    }
}

/// In-memory element tree implementing [`Surface`].
///
/// Nodes live in an arena and are never removed; replacing an element's text
/// detaches its children, which then stop being reachable from the root.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    nodes: Vec<Node>,
}

impl Board {
    /// A board holding only the document root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new("#document", &[])],
        }
    }

    pub fn builder() -> BoardBuilder {
        BoardBuilder::new(Markers::default())
    }

    /// Build the standard markup for every food in a board file.
    pub fn from_board_file(file: &BoardFile) -> Self {
        file.foods
            .iter()
            .cloned()
            .fold(BoardBuilder::new(file.markers.clone()), BoardBuilder::entry)
            .build()
    }

    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    /// Nodes in the arena, root and detached ones included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: ElementId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Attach `node` after the current content of `parent`.
    pub fn append(&mut self, parent: ElementId, node: Node) -> ElementId {
        let id = ElementId(self.nodes.len());
        self.nodes.push(node);
        if let Some(parent) = self.nodes.get_mut(parent.0) {
            parent.content.push(Content::Element(id));
        }
        id
    }

    /// Add a text run after the current content of `parent`.
    pub fn append_text(&mut self, parent: ElementId, text: &str) {
        if let Some(parent) = self.nodes.get_mut(parent.0) {
            parent.content.push(Content::Text(text.to_string()));
        }
    }

    /// Pre-order walk of everything below `id`, excluding `id` itself.
    fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = match self.node(id) {
            Some(node) => node.children().collect(),
            None => return out,
        };
        stack.reverse();

        while let Some(next) = stack.pop() {
            out.push(next);
            if let Some(node) = self.node(next) {
                let mark = stack.len();
                stack.extend(node.children());
                stack[mark..].reverse();
            }
        }
        out
    }

    fn carries(&self, id: ElementId, marker: &str) -> bool {
        self.node(id)
            .map(|n| n.classes.iter().any(|c| c == marker))
            .unwrap_or(false)
    }

    fn collect_text(&self, id: ElementId, out: &mut String) {
        let Some(node) = self.node(id) else {
            return;
        };
        for piece in &node.content {
            match piece {
                Content::Text(text) => out.push_str(text),
                Content::Element(child) => self.collect_text(*child, out),
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for Board {
    fn query_all(&self, marker: &str) -> Vec<ElementId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|&id| self.carries(id, marker))
            .collect()
    }

    fn query_child(&self, parent: ElementId, marker: &str) -> Option<ElementId> {
        self.descendants(parent)
            .into_iter()
            .find(|&id| self.carries(id, marker))
    }

    fn has_class(&self, id: ElementId, marker: &str) -> bool {
        self.carries(id, marker)
    }

    fn toggle_class(&mut self, id: ElementId, marker: &str) -> bool {
        let Some(node) = self.nodes.get_mut(id.0) else {
            return false;
        };

        match node.classes.iter().position(|c| c == marker) {
            Some(pos) => {
                node.classes.remove(pos);
                false
            }
            None => {
                node.classes.push(marker.to_string());
                true
            }
        }
    }

    fn text(&self, id: ElementId) -> Option<String> {
        self.node(id)?;
        let mut text = String::new();
        self.collect_text(id, &mut text);
        Some(text)
    }

    fn set_text(&mut self, id: ElementId, text: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.content = vec![Content::Text(text.to_string())];
        }
    }
}

/// Builds the standard food board markup:
///
/// ```text
/// div.foods
///   div.food            (one per entry, plus the active flag when selected)
///     p.food__name
///     p.food__score     (omitted for unscored entries)
/// div.score
///   span.score__number  ("0")
/// ```
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    markers: Markers,
    entries: Vec<FoodEntry>,
}

impl BoardBuilder {
    pub fn new(markers: Markers) -> Self {
        Self {
            markers,
            entries: Vec::new(),
        }
    }

    pub fn food(self, name: &str, score: &str) -> Self {
        self.entry(FoodEntry::new(name, score))
    }

    /// A food with no score element at all.
    pub fn unscored(self, name: &str) -> Self {
        self.entry(FoodEntry::unscored(name))
    }

    pub fn entry(mut self, entry: FoodEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn build(self) -> Board {
        let mut board = Board::new();
        let root = board.root();
        let grid = board.append(root, Node::new("div", &["foods"]));

        for entry in &self.entries {
            let mut food = Node::new("div", &[self.markers.food.as_str()]);
            if entry.active {
                food.classes.push(self.markers.active.clone());
            }
            let food = board.append(grid, food);

            board.append(
                food,
                Node::new("p", &[self.markers.name.as_str()]).with_text(&entry.name),
            );
            if let Some(score) = entry.score_text() {
                board.append(
                    food,
                    Node::new("p", &[self.markers.score.as_str()]).with_text(&score),
                );
            }
        }

        let score = board.append(root, Node::new("div", &["score"]));
        board.append(
            score,
            Node::new("span", &[self.markers.display.as_str()]).with_text("0"),
        );
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::markers::{ACTIVE_FLAG, DISPLAY_MARKER, FOOD_MARKER, SCORE_MARKER};

    fn sample_board() -> Board {
        Board::builder()
            .food("Apple", "100")
            .unscored("Water")
            .food("Bread", "250")
            .build()
    }

    #[test]
    fn test_query_all_in_document_order() {
        let board = sample_board();
        let foods = board.query_all(FOOD_MARKER);
        assert_eq!(foods.len(), 3);

        let names: Vec<String> = foods
            .iter()
            .map(|&f| board.text(board.query_child(f, "food__name").unwrap()).unwrap())
            .collect();
        assert_eq!(names, vec!["Apple", "Water", "Bread"]);
    }

    #[test]
    fn test_document_order_ignores_arena_order() {
        let mut board = Board::new();
        let root = board.root();
        let first = board.append(root, Node::new("div", &["food"]));
        let second = board.append(root, Node::new("div", &["food"]));
        let nested = board.append(first, Node::new("div", &["food"]));

        assert_eq!(board.query_all("food"), vec![first, nested, second]);
    }

    #[test]
    fn test_query_child_only_searches_below_parent() {
        let board = sample_board();
        let foods = board.query_all(FOOD_MARKER);
        assert!(board.query_child(foods[0], SCORE_MARKER).is_some());
        assert!(board.query_child(foods[1], SCORE_MARKER).is_none());
    }

    #[test]
    fn test_toggle_class_round_trip() {
        let mut board = sample_board();
        let apple = board.query_all(FOOD_MARKER)[0];

        assert!(!board.has_class(apple, ACTIVE_FLAG));
        assert!(board.toggle_class(apple, ACTIVE_FLAG));
        assert!(board.has_class(apple, ACTIVE_FLAG));
        assert!(!board.toggle_class(apple, ACTIVE_FLAG));
        assert!(!board.has_class(apple, ACTIVE_FLAG));
        assert!(board.has_class(apple, FOOD_MARKER));
    }

    #[test]
    fn test_text_includes_descendants() {
        let board = sample_board();
        let apple = board.query_all(FOOD_MARKER)[0];
        assert_eq!(board.text(apple).as_deref(), Some("Apple100"));
    }

    #[test]
    fn test_text_follows_document_order() {
        let mut board = Board::new();
        let root = board.root();
        let score = board.append(root, Node::new("p", &["food__score"]));
        board.append(score, Node::new("b", &[]).with_text("1"));
        board.append_text(score, "00");

        assert_eq!(board.text(score).as_deref(), Some("100"));
    }

    #[test]
    fn test_set_text_replaces_children() {
        let mut board = sample_board();
        let apple = board.query_all(FOOD_MARKER)[0];
        board.set_text(apple, "gone");

        assert_eq!(board.text(apple).as_deref(), Some("gone"));
        assert!(board.query_child(apple, SCORE_MARKER).is_none());
        assert_eq!(board.query_all(SCORE_MARKER).len(), 1);
    }

    #[test]
    fn test_display_starts_at_zero() {
        let board = Board::builder().build();
        let display = board.query_first(DISPLAY_MARKER).unwrap();
        assert_eq!(board.text(display).as_deref(), Some("0"));
        assert!(board.query_all(FOOD_MARKER).is_empty());
    }

    #[test]
    fn test_active_entries_start_selected() {
        let mut entry = FoodEntry::new("Soup", "40");
        entry.active = true;
        let board = Board::builder().entry(entry).food("Rice", "10").build();
        let foods = board.query_all(FOOD_MARKER);

        assert!(board.has_class(foods[0], ACTIVE_FLAG));
        assert!(!board.has_class(foods[1], ACTIVE_FLAG));
    }

    #[test]
    fn test_custom_markers() {
        let markers = Markers {
            food: "dish".to_string(),
            ..Markers::default()
        };
        let board = BoardBuilder::new(markers).food("Tea", "5").build();
        assert_eq!(board.query_all("dish").len(), 1);
        assert!(board.query_all(FOOD_MARKER).is_empty());
    }
}

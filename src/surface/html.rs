use scraper::{ElementRef, Html};

use super::{Board, ElementId, Node};

/// Mirror an HTML document into a [`Board`].
///
/// Every element keeps its tag, classes, and its text runs and child elements
/// in document order. Comments and doctype nodes are dropped.
pub fn parse_html_board(html: &str) -> Board {
    let document = Html::parse_document(html);
    let mut board = Board::new();
    let root = board.root();
    mirror_element(&document.root_element(), root, &mut board);

    tracing::debug!(
        "HTML board: {} bytes mirrored into {} nodes",
        html.len(),
        board.node_count()
    );
    board
}

fn mirror_element(element: &ElementRef, parent: ElementId, board: &mut Board) {
    let value = element.value();
    let node = Node {
        tag: value.name().to_string(),
        classes: value.classes().map(str::to_string).collect(),
        content: Vec::new(),
    };
    let id = board.append(parent, node);

    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            board.append_text(id, text);
        } else if let Some(child) = ElementRef::wrap(child) {
            mirror_element(&child, id, board);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Surface;

    const MARKUP: &str = r#"<!DOCTYPE html>
<html>
  <body>
    <div class="foods">
      <div class="food">
        <p class="food__name">Apple</p>
        <p class="food__score">100</p>
      </div>
      <div class="food food--active">
        <p class="food__name">Bread</p>
        <p class="food__score"> 250 </p>
      </div>
      <div class="food"><p class="food__name">Water</p></div>
    </div>
    <div class="score">Total: <span class="score__number">0</span></div>
  </body>
</html>"#;

    #[test]
    fn test_parse_finds_foods_in_order() {
        let board = parse_html_board(MARKUP);
        let foods = board.query_all("food");
        assert_eq!(foods.len(), 3);

        let names: Vec<String> = foods
            .iter()
            .map(|&f| board.text(board.query_child(f, "food__name").unwrap()).unwrap())
            .collect();
        assert_eq!(names, vec!["Apple", "Bread", "Water"]);
    }

    #[test]
    fn test_parse_keeps_classes_and_text() {
        let board = parse_html_board(MARKUP);
        let foods = board.query_all("food");

        assert!(!board.has_class(foods[0], "food--active"));
        assert!(board.has_class(foods[1], "food--active"));

        let score = board.query_child(foods[1], "food__score").unwrap();
        assert_eq!(board.text(score).as_deref(), Some(" 250 "));
        assert!(board.query_child(foods[2], "food__score").is_none());
    }

    #[test]
    fn test_parse_finds_display() {
        let board = parse_html_board(MARKUP);
        let display = board.query_first("score__number").unwrap();
        assert_eq!(board.text(display).as_deref(), Some("0"));
    }

    #[test]
    fn test_mixed_content_keeps_text_order() {
        let board = parse_html_board(
            r#"<div class="food"><p class="food__name">Sea<i>weed</i> salad</p><p class="food__score"><b>1</b>00</p></div>"#,
        );
        let food = board.query_all("food")[0];

        let score = board.query_child(food, "food__score").unwrap();
        assert_eq!(board.text(score).as_deref(), Some("100"));

        let name = board.query_child(food, "food__name").unwrap();
        assert_eq!(board.text(name).as_deref(), Some("Seaweed salad"));
    }

    #[test]
    fn test_mixed_content_score_totals() {
        let app = crate::app::FoodApp::new(parse_html_board(
            r#"<div class="food"><p class="food__score"><b>1</b>00</p></div><p class="score__number">0</p>"#,
        ));
        app.click(app.mount().elements()[0]);

        assert_eq!(app.score().total(&app), 100.0);
    }

    #[test]
    fn test_parse_fragment_without_foods() {
        let board = parse_html_board("<p>nothing here</p>");
        assert!(board.query_all("food").is_empty());
        assert!(board.query_first("score__number").is_none());
    }
}

use food_score_rs::app::FoodApp;
use food_score_rs::interface::{food_labels, resolve_food};
use food_score_rs::surface::{parse_html_board, Surface};

const FOOD_PAGE: &str = r#"<!DOCTYPE html>
<html lang="ja">
<body>
  <div class="foods">
    <div class="food"><p class="food__name">Onigiri</p><p class="food__score">100</p></div>
    <div class="food"><p class="food__name">Ramen</p><p class="food__score">250</p></div>
    <div class="food"><p class="food__name">Mochi</p><p class="food__score">75</p></div>
  </div>
  <div class="score">
    <p class="score__title">Total</p>
    <p class="score__number">0</p>
  </div>
</body>
</html>"#;

#[test]
fn test_html_page_scores_selected_foods() {
    let app = FoodApp::new(parse_html_board(FOOD_PAGE));
    let labels = food_labels(&app);
    assert_eq!(labels, vec!["Onigiri", "Ramen", "Mochi"]);

    for name in ["onigiri", "mochi"] {
        let index = resolve_food(name, &labels).unwrap();
        app.click(app.foods().elements()[index]);
    }

    assert_eq!(app.score().total(&app), 175.0);

    let surface = app.surface();
    let display = surface.query_first("score__number").unwrap();
    assert_eq!(surface.text(display).as_deref(), Some("175"));
}

#[test]
fn test_html_page_without_display_still_totals() {
    let page = r#"<div class="food"><p class="food__score">12</p></div>"#;
    let app = FoodApp::new(parse_html_board(page));

    app.click(app.mount().elements()[0]);
    assert_eq!(app.score().total(&app), 12.0);
}

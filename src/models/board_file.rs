use serde::{Deserialize, Serialize};

use super::Markers;

/// On-disk description of a food board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardFile {
    #[serde(default)]
    pub markers: Markers,

    pub foods: Vec<FoodEntry>,
}

/// One food on a board file.
///
/// `score` is kept as the text the board displays, so malformed values survive
/// loading and are only judged when the total is computed. A missing score
/// produces a food without a score element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreField>,

    /// Start the board with this food already selected.
    #[serde(default)]
    pub active: bool,
}

impl FoodEntry {
    pub fn new(name: &str, score: &str) -> Self {
        Self {
            name: name.to_string(),
            score: Some(ScoreField::Text(score.to_string())),
            active: false,
        }
    }

    /// A food whose markup has no score element.
    pub fn unscored(name: &str) -> Self {
        Self {
            name: name.to_string(),
            score: None,
            active: false,
        }
    }

    /// Score as it will appear on the board, if any.
    pub fn score_text(&self) -> Option<String> {
        self.score.as_ref().map(ScoreField::to_text)
    }
}

/// A score written either as a JSON number or as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreField {
    Number(serde_json::Number),
    Text(String),
}

impl ScoreField {
    pub fn to_text(&self) -> String {
        match self {
            ScoreField::Number(n) => n.to_string(),
            ScoreField::Text(s) => s.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_accepts_numbers_and_strings() {
        let json = r#"{"foods": [
            {"name": "Apple", "score": 100},
            {"name": "Bread", "score": "250"},
            {"name": "Soup", "score": 7.5, "active": true},
            {"name": "Water"}
        ]}"#;

        let board: BoardFile = serde_json::from_str(json).unwrap();
        assert_eq!(board.foods.len(), 4);
        assert_eq!(board.foods[0].score_text().as_deref(), Some("100"));
        assert_eq!(board.foods[1].score_text().as_deref(), Some("250"));
        assert_eq!(board.foods[2].score_text().as_deref(), Some("7.5"));
        assert!(board.foods[2].active);
        assert_eq!(board.foods[3].score_text(), None);
        assert_eq!(board.markers, Markers::default());
    }
}

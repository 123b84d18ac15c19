use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::{BoardFile, Markers};
use crate::surface::{parse_html_board, Board};

/// Read a board description from a JSON file.
pub fn read_board_file<P: AsRef<Path>>(path: P) -> Result<BoardFile> {
    let content = fs::read_to_string(path)?;
    let file: BoardFile = serde_json::from_str(&content)?;
    Ok(file)
}

/// Load a board from disk.
///
/// Files ending in `.html` or `.htm` are parsed as markup and use the default
/// markers; anything else is read as a JSON board file.
pub fn load_board<P: AsRef<Path>>(path: P) -> Result<(Board, Markers)> {
    let path = path.as_ref();

    let loaded = if is_html(path) {
        let content = fs::read_to_string(path)?;
        (parse_html_board(&content), Markers::default())
    } else {
        let file = read_board_file(path)?;
        (Board::from_board_file(&file), file.markers)
    };

    info!("Loaded board from {}", path.display());
    Ok(loaded)
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
        .unwrap_or(false)
}

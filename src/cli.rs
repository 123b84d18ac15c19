use clap::{Args, Parser, Subcommand};

use crate::models::Markers;

/// food_score — toggle foods on a board and keep a running total of their scores.
#[derive(Parser, Debug)]
#[command(name = "food_score")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the board file (JSON, or HTML when it ends in .html/.htm).
    #[arg(short, long, default_value = "foods.json")]
    pub file: String,

    /// Log every toggle and render to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    #[command(flatten)]
    pub markers: MarkerOverrides,
}

/// Class names that replace the ones loaded with the board.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct MarkerOverrides {
    /// Class carried by every food element.
    #[arg(long, global = true)]
    pub food_marker: Option<String>,

    /// Class toggled on a selected food.
    #[arg(long, global = true)]
    pub active_marker: Option<String>,

    /// Class of the element holding a food's score.
    #[arg(long, global = true)]
    pub score_marker: Option<String>,

    /// Class of the element holding a food's name.
    #[arg(long, global = true)]
    pub name_marker: Option<String>,

    /// Class of the element the total is written into.
    #[arg(long, global = true)]
    pub display_marker: Option<String>,
}

impl MarkerOverrides {
    pub fn apply(&self, mut markers: Markers) -> Markers {
        let fields = [
            (&self.food_marker, &mut markers.food),
            (&self.active_marker, &mut markers.active),
            (&self.score_marker, &mut markers.score),
            (&self.name_marker, &mut markers.name),
            (&self.display_marker, &mut markers.display),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }
        markers
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Toggle foods interactively until done.
    Play,

    /// Print the board and its current total.
    Show,

    /// Toggle the given foods and print the resulting total.
    Total {
        /// Foods to click, by 1-based index or name. Repeats toggle again.
        #[arg(short, long, required = true, num_args = 1..)]
        select: Vec<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play
    }
}

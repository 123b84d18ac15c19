use std::path::Path;

use clap::Parser;
use tracing::Level;

use food_score_rs::app::{format_total, FoodApp};
use food_score_rs::cli::{Cli, Command, MarkerOverrides};
use food_score_rs::error::Result;
use food_score_rs::interface::{
    apply_selection, display_board, food_labels, prompt_food_choice,
};
use food_score_rs::loader::load_board;
use food_score_rs::surface::Board;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let path = Path::new(&cli.file);
    if !path.exists() {
        eprintln!("Board file not found: {}", cli.file);
        return Ok(());
    }

    let app = open_app(path, &cli.markers)?;

    match cli.command.unwrap_or_default() {
        Command::Play => cmd_play(&app),
        Command::Show => cmd_show(&app),
        Command::Total { select } => cmd_total(&app, &select),
    }
}

/// Load the board, scan its foods and draw the starting total.
fn open_app(path: &Path, overrides: &MarkerOverrides) -> Result<FoodApp<Board>> {
    let (board, markers) = load_board(path)?;
    let app = FoodApp::with_markers(board, overrides.apply(markers));

    let foods = app.mount();
    println!("Loaded {} foods", foods.len());
    app.score().render(&app);
    Ok(app)
}

/// Print the board as loaded.
fn cmd_show(app: &FoodApp<Board>) -> Result<()> {
    display_board(app);
    Ok(())
}

/// Click each named food in order, then print the board.
fn cmd_total(app: &FoodApp<Board>, select: &[String]) -> Result<()> {
    apply_selection(app, select)?;
    display_board(app);
    Ok(())
}

/// Let the user click foods until they pick "Done".
fn cmd_play(app: &FoodApp<Board>) -> Result<()> {
    if app.foods().is_empty() {
        println!("No foods on the board.");
        return Ok(());
    }

    let labels = food_labels(app);
    loop {
        let total = format_total(app.score().total(app));
        let Some(index) = prompt_food_choice(&labels, &total)? else {
            break;
        };
        app.click(app.foods().elements()[index]);
    }

    display_board(app);
    Ok(())
}

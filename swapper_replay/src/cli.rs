use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    about = "Replays recorded menu scenarios through the menu entry swapper",
    version
)]
pub struct Args {
    /// Scenario JSON describing configuration, items and the event sequence
    #[arg(long)]
    pub scenario: PathBuf,

    /// Optional JSON key/value store to load before and save after the replay
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Path to write the replay report as JSON
    #[arg(long)]
    pub report_json: Option<PathBuf>,

    /// Print the menu after every step instead of the summary only
    #[arg(long)]
    pub verbose: bool,
}

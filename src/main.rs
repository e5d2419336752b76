use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use drift48::core::config;
use drift48::tui;

#[derive(Parser)]
#[command(name = "drift48", about = "2048 where only the tile you pick moves")]
struct Args {
    /// Board size, 2-8; out-of-range values fall back to the default
    #[arg(short, long)]
    size: Option<usize>,

    /// Seed for the tile spawner, for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to drift48.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("drift48.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        config::Drift48Config::default()
    });
    let resolved = config::resolve(&file_config, args.size, args.seed);

    log::info!(
        "drift48 starting up: board {}x{}, target {}",
        resolved.board_size, resolved.board_size, resolved.win_target
    );

    tui::run(resolved)
}

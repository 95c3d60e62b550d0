use anyhow::{Result, anyhow};
use clap::Parser;
use clap::error::ErrorKind;
use eframe::egui;

use rusty_curve::app::CurveApp;
use rusty_curve::cli::Args;
use rusty_curve::data::series;
use rusty_curve::state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            // Wrong argument shape: usage on stdout, exit 1, no file access.
            let program = std::env::args()
                .next()
                .unwrap_or_else(|| "rusty-curve".to_string());
            println!("Usage: {program} <file prefix> <number of files>");
            std::process::exit(1);
        }
    };

    let series = series::assemble(&args.file_prefix, args.number_of_files)?;
    log::info!(
        "{} samples from {} segment files (prefix {:?})",
        series.sample_count(),
        args.number_of_files,
        args.file_prefix
    );

    let state = AppState::new(series, args.file_prefix, args.number_of_files);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    // Blocks until the window is closed.
    eframe::run_native(
        "Rusty Curve – Segment Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(CurveApp::new(state)))),
    )
    .map_err(|err| anyhow!("opening display: {err}"))
}

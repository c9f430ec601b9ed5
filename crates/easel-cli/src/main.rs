//! Easel CLI entry point.

use std::process;

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use easel::config::AppConfig;
use easel_cli::{Args, error_adapter::render_report};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();

    info!("Starting Easel");
    debug!(args:?; "Parsed arguments");

    match easel_cli::run(AppConfig::default()) {
        Ok(report) => {
            println!("{report}");
            if let Some(summary) = report.summary() {
                println!("   {summary}");
            }
        }
        Err(err) => {
            error!("{}", render_report(&err));
            process::exit(1);
        }
    }
}

//! Command-line argument definitions for the Easel CLI.
//!
//! The tool takes no arguments; [`clap`] only supplies `--help` and
//! `--version`.

use clap::Parser;

/// Renders the Stickly application architecture diagram to `diagram.png`
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {}

//! CLI logic for the Easel diagram tool.
//!
//! The binary renders one built-in scene, the Stickly application
//! architecture, to `diagram.png` in the working directory.

pub mod error_adapter;
pub mod scene;

mod args;

pub use args::Args;

use log::info;

use easel::{DiagramBuilder, EaselError, ExportReport, config::AppConfig};

/// Renders the Stickly architecture scene with `config`.
///
/// # Errors
///
/// Returns [`EaselError::Validation`] if the scene is malformed and
/// [`EaselError::Io`] if the image cannot be written.
pub fn run(config: AppConfig) -> Result<ExportReport, EaselError> {
    info!(output:? = config.render().output(), dpi = config.render().dpi(); "Rendering diagram");

    let scene = scene::stickly_architecture()?;
    let report = DiagramBuilder::new(config).export(&scene)?;

    info!(elements = report.elements(); "Diagram written");
    Ok(report)
}

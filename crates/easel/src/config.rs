//! Configuration types for Easel rendering.
//!
//! This module provides configuration structures that control where and at
//! what resolution diagrams are written. All types implement
//! [`serde::Deserialize`] so a library user may load them from TOML or any
//! other serde format; every field has a default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining render and style settings.
//! - [`RenderConfig`] - Output resolution and path.
//! - [`StyleConfig`] - Visual overrides such as the background color.
//!
//! # Example
//!
//! ```
//! # use easel::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.render().dpi(), 300);
//! assert_eq!(config.render().output().to_str(), Some("diagram.png"));
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use easel_core::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(render: RenderConfig, style: StyleConfig) -> Self {
        Self { render, style }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Output resolution and destination.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Dots per inch of the raster output.
    #[serde(default = "default_dpi")]
    dpi: u32,

    /// Destination file, relative to the working directory unless absolute.
    #[serde(default = "default_output")]
    output: PathBuf,
}

fn default_dpi() -> u32 {
    300
}

fn default_output() -> PathBuf {
    PathBuf::from("diagram.png")
}

impl RenderConfig {
    /// Creates a render configuration.
    ///
    /// # Arguments
    ///
    /// * `dpi` - Raster resolution; one canvas unit becomes `dpi` pixels.
    /// * `output` - Destination PNG path.
    pub fn new(dpi: u32, output: impl Into<PathBuf>) -> Self {
        Self {
            dpi,
            output: output.into(),
        }
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dpi: default_dpi(),
            output: default_output(),
        }
    }
}

/// Visual styling overrides.
///
/// Fields that are not set fall back to the scene's own choices.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Canvas background as a color string; overrides the scene background.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    pub fn new(background_color: Option<String>) -> Self {
        Self { background_color }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

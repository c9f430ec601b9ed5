//! Export functionality for Easel canvases.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! writing a finished [`Canvas`] to an output format. It is the final stage of
//! a render pass.
//!
//! # Pipeline Position
//!
//! ```text
//! Scene (placements as data)
//!     ↓ replay
//! Canvas (validated draw list)
//!     ↓ svg (intermediate document)
//! SVG Document
//!     ↓ png (this module: rasterize, encode, persist)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`png`] - raster output via [`png::Png`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`EaselError::Io`] at the crate boundary.
//!
//! [`EaselError::Io`]: crate::EaselError::Io

/// PNG export backend.
pub mod png;
pub(crate) mod svg;

use std::{fmt, path::PathBuf};

use crate::canvas::Canvas;

/// Abstraction for canvas export backends.
pub trait Exporter {
    /// Exports every element of `canvas`, in draw order, to the backend's
    /// output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the canvas cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_canvas(&mut self, canvas: &Canvas) -> Result<(), Error>;
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or encoding failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Outcome of a successful export.
///
/// Its [`Display`](fmt::Display) form is the confirmation line naming the
/// written file.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportReport {
    path: PathBuf,
    width: u32,
    height: u32,
    dpi: u32,
    elements: usize,
    summary: Option<String>,
}

impl ExportReport {
    pub fn new(path: PathBuf, width: u32, height: u32, dpi: u32, elements: usize) -> Self {
        Self {
            path,
            width,
            height,
            dpi,
            elements,
            summary: None,
        }
    }

    /// Attaches a one-line description of what the diagram shows.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Returns the image size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Returns the number of elements that were drawn.
    pub fn elements(&self) -> usize {
        self.elements
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Diagram generated: {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_report_display_names_file() {
        let report = ExportReport::new(PathBuf::from("diagram.png"), 6000, 4200, 300, 12);
        assert_eq!(report.to_string(), "Diagram generated: diagram.png");
        assert_eq!(report.pixel_size(), (6000, 4200));
        assert!(report.summary().is_none());
    }

    #[test]
    fn test_report_summary() {
        let report = ExportReport::new(PathBuf::from("out/a.png"), 10, 10, 72, 1)
            .with_summary("Frontend-Backend communication");
        assert_eq!(report.summary(), Some("Frontend-Backend communication"));
        assert!(!report.to_string().contains("Frontend"));
    }

    #[test]
    fn test_error_source() {
        let err = Error::from(std::io::Error::other("disk full"));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "I/O error: disk full");
        assert!(Error::Render("bad".to_string()).source().is_none());
    }
}

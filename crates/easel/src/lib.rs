//! Easel - Declarative box-and-arrow diagrams rendered to PNG.
//!
//! A diagram is a [`Scene`]: a fixed canvas plus an ordered list of labeled
//! boxes, arrows, translucent regions, legends and annotations. The
//! [`DiagramBuilder`] replays a scene onto a [`canvas::Canvas`] and exports it
//! as a PNG at the configured resolution.

pub mod canvas;
pub mod config;
pub mod export;
pub mod scene;

mod error;

pub use easel_core::{color, draw, geometry};

pub use easel_core::error::ValidationError;
pub use error::EaselError;
pub use export::ExportReport;
pub use scene::Scene;

use log::{debug, info};

use canvas::Canvas;
use config::AppConfig;

/// Builder for rendering and exporting Easel scenes.
///
/// # Examples
///
/// ```rust,no_run
/// use easel::{DiagramBuilder, Scene, config::AppConfig};
/// use easel::color::Color;
/// use easel::draw::LabeledBox;
/// use easel::geometry::{Bounds, Point, Size};
///
/// let scene = Scene::new(Bounds::from_extents(0.0, 20.0, 0.0, 14.0)).with(LabeledBox::new(
///     Point::new(8.5, 2.2),
///     Size::new(3.0, 0.8),
///     "Users",
///     Color::new("#4A90E2").unwrap(),
/// ));
///
/// let report = DiagramBuilder::new(AppConfig::default())
///     .export(&scene)
///     .expect("Failed to export");
/// println!("{report}");
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Replays `scene` onto a fresh canvas.
    ///
    /// The configured background color, when set, replaces the scene's own.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::Validation`] for an invalid canvas, an invalid
    /// configured color or the first degenerate placement.
    pub fn render_canvas(&self, scene: &Scene) -> Result<Canvas, EaselError> {
        let background = self
            .config
            .style()
            .background_color()
            .map_err(ValidationError::InvalidColor)?
            .unwrap_or_else(|| scene.background());

        let mut canvas = Canvas::new(scene.bounds(), background, self.config.render().dpi())?;
        for element in scene.elements() {
            canvas.add(element.clone())?;
        }

        debug!(elements = canvas.elements().len(); "Scene replayed");
        Ok(canvas)
    }

    /// Renders `scene` to an SVG string without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::Validation`] as [`Self::render_canvas`] does.
    pub fn render_svg(&self, scene: &Scene) -> Result<String, EaselError> {
        Ok(self.render_canvas(scene)?.render_svg())
    }

    /// Renders `scene` and writes it to the configured output path.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::Validation`] if the scene cannot be drawn and
    /// [`EaselError::Io`] if the image cannot be produced or written.
    pub fn export(&self, scene: &Scene) -> Result<ExportReport, EaselError> {
        let canvas = self.render_canvas(scene)?;
        let mut report = canvas.export(self.config.render().output())?;
        if let Some(description) = scene.description() {
            report = report.with_summary(description);
        }

        let (width, height) = report.pixel_size();
        info!(path:? = report.path(), width, height, dpi = report.dpi(); "Diagram exported");
        Ok(report)
    }
}

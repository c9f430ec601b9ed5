//! Validation errors for degenerate drawable geometry.
//!
//! Every drawable checks its own geometry before it is accepted onto a canvas.
//! A [`ValidationError`] means the caller supplied something that cannot be
//! rendered meaningfully; it is reported immediately and nothing is drawn.

use thiserror::Error;

use crate::geometry::Point;

/// Degenerate input rejected before rendering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{element} must have a positive, finite size, got {width}x{height}")]
    NonPositiveSize {
        element: &'static str,
        width: f32,
        height: f32,
    },

    #[error("{element} has a non-finite coordinate at {point:?}")]
    NonFinitePoint { element: &'static str, point: Point },

    #[error("arrow start and end coincide at ({}, {})", .point.x(), .point.y())]
    CoincidentEndpoints { point: Point },

    #[error("{element} font size must be positive, got {size}")]
    InvalidFontSize { element: &'static str, size: f32 },

    #[error("{element} line width must be positive, got {width}")]
    InvalidLineWidth { element: &'static str, width: f32 },

    #[error("{element} alpha must be within [0, 1], got {alpha}")]
    InvalidAlpha { element: &'static str, alpha: f32 },

    #[error("legend needs at least one column")]
    NoLegendColumns,

    #[error("legend needs at least one entry")]
    EmptyLegend,

    #[error("canvas extent must be positive, got x {min_x}..{max_x}, y {min_y}..{max_y}")]
    InvalidCanvasBounds {
        min_x: f32,
        max_x: f32,
        min_y: f32,
        max_y: f32,
    },

    #[error("canvas resolution must be positive, got {dpi} dpi")]
    InvalidResolution { dpi: u32 },

    #[error("canvas of {width}x{height} units at {dpi} dpi has no representable pixel size")]
    InvalidPixelSize { width: f32, height: f32, dpi: u32 },

    #[error("{0}")]
    InvalidColor(String),
}

/// Checks a point is finite.
pub(crate) fn check_point(element: &'static str, point: Point) -> Result<(), ValidationError> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinitePoint { element, point })
    }
}

/// Checks a font size in points is usable.
pub(crate) fn check_font_size(element: &'static str, size: f32) -> Result<(), ValidationError> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidFontSize { element, size })
    }
}

/// Checks a line width in points is usable.
pub(crate) fn check_line_width(element: &'static str, width: f32) -> Result<(), ValidationError> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidLineWidth { element, width })
    }
}

/// Checks an opacity lies within `[0, 1]`.
pub(crate) fn check_alpha(element: &'static str, alpha: f32) -> Result<(), ValidationError> {
    if (0.0..=1.0).contains(&alpha) {
        Ok(())
    } else {
        Err(ValidationError::InvalidAlpha { element, alpha })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_alpha_bounds() {
        assert!(check_alpha("region", 0.0).is_ok());
        assert!(check_alpha("region", 1.0).is_ok());
        assert_eq!(
            check_alpha("region", 1.5),
            Err(ValidationError::InvalidAlpha {
                element: "region",
                alpha: 1.5
            })
        );
        assert!(check_alpha("region", f32::NAN).is_err());
    }

    #[test]
    fn test_check_font_size_rejects_zero() {
        assert!(check_font_size("box", 8.0).is_ok());
        assert!(check_font_size("box", 0.0).is_err());
        assert!(check_font_size("box", -1.0).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::CoincidentEndpoints {
            point: Point::new(10.0, 6.8),
        };
        assert_eq!(err.to_string(), "arrow start and end coincide at (10, 6.8)");

        let err = ValidationError::NonPositiveSize {
            element: "box",
            width: 0.0,
            height: 0.6,
        };
        assert_eq!(
            err.to_string(),
            "box must have a positive, finite size, got 0x0.6"
        );
    }
}

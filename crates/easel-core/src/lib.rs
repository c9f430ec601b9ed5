//! Easel Core Types and Definitions
//!
//! This crate provides the drawing primitives behind Easel diagrams. It
//! includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes, extents and unit conversion ([`geometry`] module)
//! - **Draw**: Self-positioned drawables rendered to layered SVG ([`draw`] module)
//! - **Errors**: Validation of degenerate input ([`error::ValidationError`])

pub mod color;
pub mod draw;
pub mod error;
pub mod geometry;

//! Integration tests for the DiagramBuilder API
//!
//! These tests render small scenes end to end and inspect the written PNG.

use std::{fs::File, path::Path};

use easel::{
    DiagramBuilder, EaselError, Scene,
    canvas::Element,
    color::Color,
    config::{AppConfig, RenderConfig, StyleConfig},
    draw::{AnnotationBlock, Arrow, Frame, LabeledBox, LegendBuilder, Region, StrokeStyle},
    geometry::{Bounds, Point, Size},
};

const DPI: u32 = 60;

fn color(value: &str) -> Color {
    Color::new(value).unwrap()
}

fn builder(output: &Path) -> DiagramBuilder {
    DiagramBuilder::new(AppConfig::new(
        RenderConfig::new(DPI, output),
        StyleConfig::default(),
    ))
}

/// Five boxes (one two-line), two arrows (one labelled), a region drawn
/// before three of the boxes, a three-entry legend and one annotation.
fn sample_scene() -> Scene {
    Scene::new(Bounds::from_extents(0.0, 8.0, 0.0, 5.0))
        .with_description("Frontend, backend and data tiers")
        .with(LabeledBox::new(
            Point::new(3.0, 0.3),
            Size::new(2.0, 0.6),
            "Users\n(Browser)",
            color("#4A90E2"),
        ))
        .with(LabeledBox::new(
            Point::new(0.5, 1.2),
            Size::new(1.6, 0.5),
            "React",
            color("#61DAFB"),
        ))
        .with(
            Region::new(Point::new(0.2, 2.0), Size::new(7.6, 1.2), color("#68A063"), 0.1)
                .with_caption("BACKEND"),
        )
        .with(LabeledBox::new(
            Point::new(0.5, 2.4),
            Size::new(1.6, 0.5),
            "Express",
            color("#5FA04E"),
        ))
        .with(LabeledBox::new(
            Point::new(3.0, 2.4),
            Size::new(1.6, 0.5),
            "Auth",
            color("#E74C3C"),
        ))
        .with(LabeledBox::new(
            Point::new(5.5, 2.4),
            Size::new(1.6, 0.5),
            "Socket.io",
            color("#010101"),
        ))
        .with(
            Arrow::new(Point::new(4.0, 0.9), Point::new(4.0, 1.4), color("#4A90E2"))
                .with_label("User Actions"),
        )
        .with(
            Arrow::new(Point::new(1.3, 1.7), Point::new(1.3, 2.4), color("#5FA04E"))
                .with_style(StrokeStyle::Dashed),
        )
        .with(
            LegendBuilder::new(Point::new(0.2, 3.6), 3)
                .title("Components")
                .entry(color("#E34F26"), "Frontend")
                .entry(color("#68A063"), "Backend")
                .entry(color("#3498DB"), "Data")
                .build()
                .unwrap(),
        )
        .with(
            AnnotationBlock::new(Point::new(7.8, 4.8), "KEY POINTS:\n- REST for CRUD")
                .with_frame(Frame::new(color("#FFF9E6"), color("#F39C12"))),
        )
}

/// Width, height and `pHYs` density `(xppu, yppu, is_meter)` of a written PNG.
fn read_png_info(path: &Path) -> (u32, u32, Option<(u32, u32, bool)>) {
    let decoder = png::Decoder::new(File::open(path).unwrap());
    let reader = decoder.read_info().unwrap();
    let info = reader.info();
    let density = info
        .pixel_dims
        .map(|dims| (dims.xppu, dims.yppu, dims.unit == png::Unit::Meter));
    (info.width, info.height, density)
}

#[test]
fn test_export_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("diagram.png");

    let report = builder(&output).export(&sample_scene()).unwrap();

    assert!(report.to_string().contains("diagram.png"));
    assert_eq!(report.summary(), Some("Frontend, backend and data tiers"));
    assert_eq!(report.elements(), 10);

    let (width, height, pixel_dims) = read_png_info(&output);
    assert_eq!((width, height), (8 * DPI, 5 * DPI));
    assert_eq!(report.pixel_size(), (width, height));

    let expected_ppm = (f64::from(DPI) / 0.0254).round() as u32;
    assert_eq!(pixel_dims, Some((expected_ppm, expected_ppm, true)));
}

#[test]
fn test_export_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");
    let scene = sample_scene();

    builder(&first).export(&scene).unwrap();
    builder(&second).export(&scene).unwrap();

    assert_eq!(read_png_info(&first), read_png_info(&second));
    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
}

#[test]
fn test_region_precedes_later_boxes() {
    let dir = tempfile::tempdir().unwrap();
    let canvas = builder(&dir.path().join("unused.png"))
        .render_canvas(&sample_scene())
        .unwrap();

    let region_index = canvas
        .elements()
        .iter()
        .position(|element| matches!(element, Element::Region(_)))
        .unwrap();
    let box_index = canvas
        .elements()
        .iter()
        .rposition(|element| matches!(element, Element::Box(_)))
        .unwrap();
    assert!(region_index < box_index);

    let svg = canvas.render_svg();
    let region_pos = svg.find("data-element=\"region\"").unwrap();
    let express_pos = svg.find("Express").unwrap();
    assert!(region_pos < express_pos);
}

#[test]
fn test_export_to_missing_directory_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("does-not-exist").join("diagram.png");

    let err = builder(&output).export(&sample_scene()).unwrap_err();

    assert!(matches!(err, EaselError::Io(_)), "unexpected error: {err:?}");
    assert!(!output.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_sub_pixel_canvas_is_rejected_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("diagram.png");
    let scene = Scene::new(Bounds::from_extents(0.0, 0.001, 0.0, 1.0));

    let err = builder(&output).export(&scene).unwrap_err();

    assert!(matches!(err, EaselError::Validation(_)), "unexpected error: {err:?}");
    assert!(!output.exists());
}

#[test]
fn test_invalid_placement_stops_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("diagram.png");
    let scene = sample_scene().with(Arrow::new(
        Point::new(1.0, 1.0),
        Point::new(1.0, 1.0),
        color("red"),
    ));

    let err = builder(&output).export(&scene).unwrap_err();

    assert!(matches!(err, EaselError::Validation(_)));
    assert!(!output.exists());
}

use std::fs::File;

use tempfile::tempdir;

use easel::config::{AppConfig, RenderConfig, StyleConfig};
use easel_cli::{run, scene::SUMMARY};

#[test]
fn e2e_smoke_test_stickly_scene() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("diagram.png");

    // Low resolution keeps the test fast; geometry is resolution independent.
    let config = AppConfig::new(RenderConfig::new(20, &output), StyleConfig::default());
    let report = run(config).expect("Stickly scene should render");

    assert!(report.to_string().contains("diagram.png"));
    assert_eq!(report.summary(), Some(SUMMARY));

    let decoder = png::Decoder::new(File::open(&output).expect("PNG written"));
    let reader = decoder.read_info().expect("valid PNG");
    let info = reader.info();
    assert_eq!((info.width, info.height), (400, 280));
    let dims = info.pixel_dims.expect("pHYs chunk present");
    assert_eq!(dims.xppu, 787);
}

#[test]
fn e2e_smoke_test_missing_output_directory() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("nope").join("diagram.png");

    let config = AppConfig::new(RenderConfig::new(20, &output), StyleConfig::default());
    let err = run(config).unwrap_err();

    assert!(matches!(err, easel::EaselError::Io(_)));
    assert!(!output.exists());
}

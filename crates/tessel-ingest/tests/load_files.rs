//! Integration test: loading shape files from disk.

use std::fs;
use std::path::Path;

use tessel_core::ShapeKind;
use tessel_ingest::{IngestConfig, IngestError, Loader};

fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

#[test]
fn loads_both_files_and_skips_bad_records() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "rectangles.txt",
        "# rectangles\n0 0 4 3\n1 1 1 1\n-2 2 2 -2 # square\n",
    );
    write(
        dir.path(),
        "cones.txt",
        "0 0 5 0 0 0 3 5\n0 0 5 0 0 0 -3 5\n1 2 3 x 5 6 7 8\n",
    );

    let loader = Loader::new(IngestConfig::from_data_dir(dir.path())).unwrap();
    let report = loader.load_all().unwrap();

    assert_eq!(report.skipped, 3);
    let ids: Vec<_> = report.shapes.iter().map(|s| s.id().as_str()).collect();
    assert_eq!(ids, ["rect_2", "rect_4", "cone_1"]);
    assert!(report.shapes[1].as_rectangle().unwrap().is_square());
    assert_eq!(report.shapes[2].kind(), ShapeKind::Cone);
}

#[test]
fn empty_file_loads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "rectangles.txt", "\n# nothing here\n\n");
    write(dir.path(), "cones.txt", "");
    let report = Loader::new(IngestConfig::from_data_dir(dir.path()))
        .unwrap()
        .load_all()
        .unwrap();
    assert!(report.shapes.is_empty());
    assert_eq!(report.skipped, 0);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "rectangles.txt", "0 0 1 1\n");
    let loader = Loader::new(IngestConfig::from_data_dir(dir.path())).unwrap();

    assert_eq!(loader.load_rectangles().unwrap().shapes.len(), 1);
    match loader.load_cones() {
        Err(IngestError::Io { path, .. }) => assert!(path.ends_with("cones.txt")),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn custom_comment_marker() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "r.txt", "; header\n0 0 2 2 ; note\n");
    write(dir.path(), "c.txt", "");
    let cfg = IngestConfig {
        rectangles_file: dir.path().join("r.txt"),
        cones_file: dir.path().join("c.txt"),
        comment_marker: ";".to_string(),
        ..IngestConfig::from_data_dir(dir.path())
    };
    let report = Loader::new(cfg).unwrap().load_rectangles().unwrap();
    assert_eq!(report.shapes.len(), 1);
    assert_eq!(report.shapes[0].id().as_str(), "rect_2");
}

use std::fs;
use std::path::Path;

use rusty_curve::data::loader::LoadError;
use rusty_curve::data::series::{assemble, segment_path, segment_paths};
use tempfile::tempdir;

fn write_segment(dir: &Path, prefix: &str, index: usize, contents: &str) {
    fs::write(dir.join(format!("{prefix}{index}.dat")), contents).unwrap();
}

fn prefix_in(dir: &Path, prefix: &str) -> String {
    dir.join(prefix).to_str().unwrap().to_string()
}

#[test]
fn two_segment_scenario() {
    let dir = tempdir().unwrap();
    write_segment(dir.path(), "data", 0, "1.0 2.0\n");
    write_segment(dir.path(), "data", 1, "3.0\n");

    let series = assemble(&prefix_in(dir.path(), "data"), 2).unwrap();

    assert_eq!(series.values(), &[0.0, 1.0, 2.0, 3.0, 0.0]);
    assert_eq!(series.x_coords(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn series_length_is_token_count_plus_pad() {
    let dir = tempdir().unwrap();
    write_segment(dir.path(), "run", 0, "0.1 0.2 0.3\n");
    write_segment(dir.path(), "run", 1, "0.4\n");

    let series = assemble(&prefix_in(dir.path(), "run"), 2).unwrap();

    assert_eq!(series.len(), 4 + 2);
    assert_eq!(series.values()[0], 0.0);
    assert_eq!(*series.values().last().unwrap(), 0.0);
}

#[test]
fn segments_concatenate_in_index_order() {
    let dir = tempdir().unwrap();
    write_segment(dir.path(), "run", 0, "1.0\n");
    write_segment(dir.path(), "run", 1, "2.0\n");
    write_segment(dir.path(), "run", 2, "3.0\n");

    let series = assemble(&prefix_in(dir.path(), "run"), 3).unwrap();

    assert_eq!(series.values(), &[0.0, 1.0, 2.0, 3.0, 0.0]);
}

#[test]
fn zero_count_yields_the_bare_pad_without_touching_files() {
    // The prefix points into a directory that does not exist; a count of
    // zero must succeed anyway because no file is opened.
    let series = assemble("/nonexistent/run", 0).unwrap();

    assert_eq!(series.values(), &[0.0, 0.0]);
}

#[test]
fn missing_segment_aborts_assembly() {
    let dir = tempdir().unwrap();
    write_segment(dir.path(), "run", 0, "1.0\n");

    let err = assemble(&prefix_in(dir.path(), "run"), 2).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<LoadError>(),
        Some(LoadError::Io { .. })
    ));
}

#[test]
fn assembly_is_deterministic() {
    let dir = tempdir().unwrap();
    write_segment(dir.path(), "run", 0, "0.25 -0.5\n");
    write_segment(dir.path(), "run", 1, "0.75\n");

    let prefix = prefix_in(dir.path(), "run");
    let first = assemble(&prefix, 2).unwrap();
    let second = assemble(&prefix, 2).unwrap();

    assert_eq!(first, second);
}

#[test]
fn segment_names_are_prefix_index_dat() {
    assert_eq!(segment_path("run", 7), Path::new("run7.dat"));
    assert_eq!(
        segment_paths("run", 3),
        vec![
            Path::new("run0.dat"),
            Path::new("run1.dat"),
            Path::new("run2.dat")
        ]
    );
    assert!(segment_paths("run", 0).is_empty());
}

#[test]
fn x_axis_matches_series_shape() {
    let dir = tempdir().unwrap();
    write_segment(dir.path(), "run", 0, "0.1 0.2 0.3 0.4 0.5\n");

    let series = assemble(&prefix_in(dir.path(), "run"), 1).unwrap();
    let xs = series.x_coords();

    assert_eq!(xs.len(), series.len());
    assert_eq!(xs[0], 0.0);
    assert_eq!(*xs.last().unwrap(), 1.0);
    assert!(xs.windows(2).all(|w| w[0] <= w[1]));
}

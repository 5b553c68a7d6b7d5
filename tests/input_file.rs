//! End-to-end pipeline from model text through analysis.

use approx::assert_relative_eq;
use frame2d::error::FrameError;
use frame2d::input;

const E: f64 = 200e9;
const I: f64 = 8.0e-6;

const TIP_LOADED_CANTILEVER: &str = "\
POINTS
0 0
2 0

ELEMENTS
0 1 200e9 8e-6 3e-3

BOUNDS
0 X 0
0 Y 0
0 R 0

LOADING
ELEMENT 0 POINT -10000 2
";

const UNIFORMLY_LOADED_CANTILEVER: &str = "\
POINTS
0 0
2 0

ELEMENTS
0 1 200e9 8e-6 3e-3

BOUNDS
0 X 0
0 Y 0
0 R 0

LOADING
ELEMENT 0 DISTRIBUTED -3000 -3000
";

#[test]
fn tip_loaded_cantilever_matches_beam_theory() {
    let mut structure = input::parse_str(TIP_LOADED_CANTILEVER).unwrap();
    structure.analyze().unwrap();

    let (p, l) = (-10000.0, 2.0);
    let tip = structure.node_displacement(1).unwrap();
    assert_relative_eq!(tip.dy, p * l * l * l / (3.0 * E * I), epsilon = 1e-9);
}

#[test]
fn uniformly_loaded_cantilever_matches_beam_theory() {
    let mut structure = input::parse_str(UNIFORMLY_LOADED_CANTILEVER).unwrap();
    structure.analyze().unwrap();

    let (w, l) = (-3000.0_f64, 2.0_f64);
    let tip = structure.node_displacement(1).unwrap();
    assert_relative_eq!(tip.dy, w * l.powi(4) / (8.0 * E * I), epsilon = 1e-9);
    assert_relative_eq!(tip.rz, w * l.powi(3) / (6.0 * E * I), epsilon = 1e-9);
}

#[test]
fn direct_nodal_load_record() {
    let text = "\
POINTS
0 0
3 0

ELEMENTS
0 1 200e9 8e-6 3e-3

BOUNDS
0 X 0
0 Y 0
0 R 0

LOADING
POINT 1 Y -1000
";
    let mut structure = input::parse_str(text).unwrap();
    structure.analyze().unwrap();

    let tip = structure.node_displacement(1).unwrap();
    assert_relative_eq!(tip.dy, -1000.0 * 27.0 / (3.0 * E * I), epsilon = 1e-9);
}

#[test]
fn parse_file_round_trip() {
    let path = std::env::temp_dir().join("frame2d_input_file_test.txt");
    std::fs::write(&path, TIP_LOADED_CANTILEVER).unwrap();

    let mut from_file = input::parse_file(&path).unwrap();
    let mut from_str = input::parse_str(TIP_LOADED_CANTILEVER).unwrap();
    std::fs::remove_file(&path).ok();

    from_file.analyze().unwrap();
    from_str.analyze().unwrap();

    assert_eq!(
        from_file.displacements().unwrap(),
        from_str.displacements().unwrap()
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("frame2d_no_such_input.txt");
    assert!(matches!(
        input::parse_file(&path),
        Err(FrameError::Io(_))
    ));
}

//! Integration tests for elementwise arithmetic between fields

use htools_fields::{Axis, Error, FieldData, Output};
use rstest::{fixture, rstest};
use std::path::Path;
use tempfile::TempDir;

fn write_snapshot(directory: &Path, name: &str, values: &[f64]) {
    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
    std::fs::write(directory.join(name), bytes).unwrap();
}

/// A cylindrical 2x3x1 run with density 1..7, energy 0..6, and an x velocity
#[fixture]
fn run() -> (TempDir, Output) {
    let dir = TempDir::new().unwrap();
    let output = Output {
        directory: dir.path().to_path_buf(),
        nx: 2,
        ny: 3,
        nz: 1,
        nghx: 1,
        nghy: 3,
        nghz: 1,
        xdomain: vec![-3.14, -1.57, 0.0, 1.57, 3.14],
        ydomain: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
        zdomain: vec![-0.75, -0.25, 0.25, 0.75],
        coordinate_system: "cylindrical".parse().unwrap(),
    };

    let density: Vec<f64> = (1..7).map(f64::from).collect();
    let energy: Vec<f64> = (0..6).map(f64::from).collect();
    write_snapshot(&output.directory, "gasdens0.dat", &density);
    write_snapshot(&output.directory, "gasenergy0.dat", &energy);
    write_snapshot(&output.directory, "gasvx0.dat", &[2.0; 6]);
    (dir, output)
}

#[rstest]
fn same_grid_fields_combine_elementwise(run: (TempDir, Output)) {
    let (_dir, output) = run;
    let density = output.density(0).unwrap();
    let energy = output.energy(0).unwrap();

    let sum = energy.try_add(&density).unwrap();
    assert_eq!(sum.raw(), [1.0, 3.0, 5.0, 7.0, 9.0, 11.0]);

    let diff = density.try_sub(&energy).unwrap();
    assert_eq!(diff.raw(), [1.0; 6]);

    let quotient = energy.try_div(&density).unwrap();
    assert_eq!(quotient.raw()[3], 3.0 / 4.0);

    // results keep the shared coordinate arrays and shape
    assert_eq!(sum.x(), density.x());
    assert_eq!(sum.data().shape(), (2, 3, 1));
}

#[rstest]
fn derived_fields_chain(run: (TempDir, Output)) {
    let (_dir, output) = run;
    let density = output.density(0).unwrap();
    let energy = output.energy(0).unwrap();

    let result = energy.try_add(&density).unwrap().try_mul(&density).unwrap();
    assert_eq!(result.raw()[2], 5.0 * 3.0);
}

#[rstest]
fn powf_applies_to_every_value(run: (TempDir, Output)) {
    let (_dir, output) = run;
    let density = output.density(0).unwrap();

    let squared = density.powf(2.0);
    assert_eq!(squared.raw(), [1.0, 4.0, 9.0, 16.0, 25.0, 36.0]);
    assert_eq!(squared.x(), density.x());
}

#[rstest]
fn staggered_grids_do_not_combine(run: (TempDir, Output)) {
    let (_dir, output) = run;
    let density = output.density(0).unwrap();
    let vx = output.velocity(Axis::X, 0).unwrap();

    // vx is face-centred along x, so the x coordinates differ
    assert!(matches!(
        density.try_mul(&vx),
        Err(Error::IncompatibleGrids { operation: "multiply" })
    ));
}

#[rstest]
fn nudged_coordinates_are_not_close_enough(run: (TempDir, Output)) {
    let (_dir, output) = run;
    let energy = output.energy(0).unwrap();

    // grid equality is exact, a tiny shift of one interior edge is enough
    let other = Output {
        xdomain: vec![-3.14, -1.57, 0.001, 1.57, 3.14],
        ..output.clone()
    };
    let shifted = other.density(0).unwrap();
    assert!(matches!(
        energy.try_add(&shifted),
        Err(Error::IncompatibleGrids { operation: "add" })
    ));
}

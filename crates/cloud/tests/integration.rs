use std::io::Write;

use tinvol_cloud::{parse_cloud, read_cloud, CloudReader};
use tinvol_mesh::CartesianCoordinate;
use tinvol_test_data::{CSV_FLAT_SQUARE, CSV_PLATEAU, XYZ_TILTED_SQUARE};

#[test]
fn parse_fixtures() {
    for fixture in [CSV_FLAT_SQUARE, XYZ_TILTED_SQUARE, CSV_PLATEAU] {
        let cloud = parse_cloud(fixture.bytes).unwrap();
        assert_eq!(fixture.points, cloud.len());
    }
}

#[test]
fn elevation_column_is_kept() {
    let cloud = parse_cloud(CSV_FLAT_SQUARE.bytes).unwrap();
    assert!(cloud.has_elevation());
    assert_eq!(Some(102.0), cloud.elevation(3));
    assert_eq!(Some(CartesianCoordinate::new(0.0, 1.0, 2.0)), cloud.point(3));
}

#[test]
fn read_from_disk() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(XYZ_TILTED_SQUARE.bytes).unwrap();
    f.flush().unwrap();

    let cloud = read_cloud(f.path()).unwrap();
    assert_eq!(Some(CartesianCoordinate::new(1.0, 1.0, 3.0)), cloud.point(4));
}

#[test]
fn read_from_buffered_reader() {
    let mut reader = std::io::BufReader::new(CSV_PLATEAU.bytes);
    let cloud = reader.read_cloud().unwrap();
    assert_eq!(
        Some(CartesianCoordinate::new(500_050.0, 4_400_050.0, 40.0)),
        cloud.point(4)
    );
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_cloud(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, tinvol_cloud::CloudError::Io(_)));
}

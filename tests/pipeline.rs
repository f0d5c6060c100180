// Integration tests for the CSV-to-CSV pipeline: ingest, name grouping,
// envelope narrowing, and the anchor-table output format.

use std::fs;

use anchorline::io::{read_addresses, read_streets, CsvSink};
use anchorline::polyline::{self, PRECISION};
use anchorline::parse::StrictParser;
use anchorline::sink::VecSink;
use anchorline::{pipeline, Source};
use geo::Coord;

fn encoded(coords: &[(f64, f64)]) -> String {
    let coords: Vec<Coord<f64>> = coords.iter().map(|&(x, y)| Coord { x, y }).collect();
    polyline::encode(&coords, PRECISION)
}

fn write_fixtures(dir: &std::path::Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let main_street = encoded(&[(0.0, 0.0), (0.02, 0.0), (0.04, 0.0)]);
    let far_main_street = encoded(&[(3.0, 3.0), (3.04, 3.0)]);
    let side_street = encoded(&[(0.0, 0.0), (0.0, 0.04)]);

    let streets = dir.join("streets.csv");
    fs::write(
        &streets,
        format!(
            "id,name,polyline\nS1,Main Street,{main_street}\nS2,Main Street,{far_main_street}\nS3,Side Street,{side_street}\n",
        ),
    )
    .unwrap();

    let addresses = dir.join("addresses.csv");
    fs::write(
        &addresses,
        "number,street,lon,lat\n\
         1,MAIN  STREET,0.01,0.00001\n\
         3,Main Street,0.03,0.00001\n\
         2,Main Street,0.01,-0.00001\n\
         4,Main Street,0.03,-0.00001\n\
         7,Unknown Road,0.01,0.00001\n",
    )
    .unwrap();

    (streets, addresses)
}

#[test]
fn grouping_feeds_only_nearby_same_name_streets() {
    let dir = tempfile::tempdir().unwrap();
    let (streets_path, addresses_path) = write_fixtures(dir.path());

    let streets = read_streets(&streets_path).unwrap();
    let addresses = read_addresses(&addresses_path).unwrap();
    assert_eq!(streets.len(), 3);
    assert_eq!(addresses.len(), 5);

    let mut sink = VecSink::new();
    pipeline::run(&streets, &addresses, &StrictParser, &mut sink).unwrap();
    let anchors = sink.into_anchors();

    // Four observed anchors plus one zigzag vertex anchor at (0.02, 0);
    // the same-name street three degrees away is outside the batch
    // envelope, and the unknown road contributes nothing.
    assert_eq!(anchors.len(), 5);
    assert!(anchors.iter().all(|a| a.street_id.to_string() == "S1"));
    let vertex = anchors.iter().find(|a| a.source == Source::Vtx).unwrap();
    assert!((vertex.housenumber - 2.5).abs() < 1e-3);
}

#[test]
fn anchor_table_round_trips_through_csv() {
    let dir = tempfile::tempdir().unwrap();
    let (streets_path, addresses_path) = write_fixtures(dir.path());

    let streets = read_streets(&streets_path).unwrap();
    let addresses = read_addresses(&addresses_path).unwrap();

    let mut sink = CsvSink::new();
    pipeline::run(&streets, &addresses, &StrictParser, &mut sink).unwrap();
    assert_eq!(sink.len(), 5);

    let out = dir.path().join("anchors.csv");
    sink.finish(&out).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    let mut lines = written.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,source,housenumber,lon,lat,parity,proj_lon,proj_lat",
    );
    assert_eq!(lines.count(), 5);

    // Vertex rows leave the observed-only columns empty.
    let vertex_row = written.lines().find(|l| l.contains("VTX")).unwrap();
    assert!(vertex_row.starts_with("S1,VTX,2.500,,,,"));
}

#[test]
fn missing_columns_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.csv");
    fs::write(&bad, "id,polyline\nS1,??\n").unwrap();
    let err = read_streets(&bad).unwrap_err();
    assert!(err.to_string().contains("name"));
}

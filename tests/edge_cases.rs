use geobox::{
    Axis, Direction, GeohashError, Geohasher, GeohasherBuilder, MAX_PRECISION, decode, encode,
};

fn lenient() -> Geohasher {
    GeohasherBuilder::new()
        .strict_coordinates(false)
        .build()
        .expect("Failed to build lenient geohasher")
}

/// Test 1: Empty hash decodes to the whole globe
#[test]
fn test_empty_hash_is_full_globe() {
    let globe = decode("", None).unwrap();
    assert_eq!(globe.min_lat(), -90.0);
    assert_eq!(globe.max_lat(), 90.0);
    assert_eq!(globe.min_lon(), -180.0);
    assert_eq!(globe.max_lon(), 180.0);
    assert_eq!(globe.lat(), 0.0);
    assert_eq!(globe.lon(), 0.0);
    assert_eq!(globe.precision(), 12);
}

/// Test 2: Extreme coordinate values are valid input
#[test]
fn test_extreme_coordinates() {
    assert_eq!(encode(90.0, 180.0, Some(6)).unwrap().hash(), "zzzzzz");
    assert_eq!(encode(-90.0, -180.0, Some(6)).unwrap().hash(), "000000");

    let north_pole = encode(90.0, 0.0, Some(6)).unwrap();
    assert_eq!(north_pole.max_lat(), 90.0);

    let date_line = encode(0.0, -180.0, Some(6)).unwrap();
    assert_eq!(date_line.min_lon(), -180.0);
}

/// Test 3: Out-of-range and non-finite coordinates are rejected
#[test]
fn test_invalid_coordinates() {
    let cases = [
        (91.0, 0.0, Axis::Latitude),
        (-90.000001, 0.0, Axis::Latitude),
        (0.0, 180.5, Axis::Longitude),
        (0.0, -361.0, Axis::Longitude),
    ];

    for (lat, lon, axis) in cases {
        match encode(lat, lon, None) {
            Err(GeohashError::InvalidCoordinate { axis: got, .. }) => assert_eq!(got, axis),
            other => panic!("({}, {}) should be rejected, got {:?}", lat, lon, other),
        }
    }

    assert!(matches!(
        encode(f64::NAN, 0.0, None),
        Err(GeohashError::InvalidCoordinate {
            axis: Axis::Latitude,
            ..
        })
    ));
}

/// Test 4: Invalid symbols name the character and its position
#[test]
fn test_invalid_characters() {
    let cases = [
        ("DE30DS", 'D', 0),
        ("de30da", 'a', 5),
        ("de3 ds", ' ', 3),
        ("dé30ds", 'é', 1),
        ("il", 'i', 0),
        ("0o", 'o', 1),
    ];

    for (hash, character, position) in cases {
        assert_eq!(
            decode(hash, None).unwrap_err(),
            GeohashError::InvalidCharacter {
                character,
                position
            },
            "{:?}",
            hash
        );
    }
}

/// Test 5: Neighbors fail at the north pole
#[test]
fn test_neighbors_at_north_pole() {
    let cell = encode(90.0, 0.0, Some(6)).unwrap();

    match cell.neighbors() {
        Err(GeohashError::NeighborOutOfBounds {
            direction,
            latitude,
            ..
        }) => {
            assert_eq!(direction, Direction::Up);
            assert!(latitude > 90.0);
        }
        other => panic!("expected out-of-bounds neighbor, got {:?}", other),
    }

    let hasher = Geohasher::default();
    assert!(hasher.neighbor(&cell, Direction::Down).is_ok());
    assert!(hasher.neighbor(&cell, Direction::Left).is_ok());
    assert!(hasher.neighbor(&cell, Direction::Right).is_ok());
    assert!(hasher.neighbor(&cell, Direction::UpRight).is_err());
}

/// Test 6: Neighbors fail at the south pole
#[test]
fn test_neighbors_at_south_pole() {
    let cell = encode(-90.0, 45.0, Some(5)).unwrap();

    assert!(matches!(
        cell.neighbors(),
        Err(GeohashError::NeighborOutOfBounds {
            direction: Direction::Down,
            ..
        })
    ));
}

/// Test 7: Neighbors do not wrap across the antimeridian
#[test]
fn test_neighbors_at_antimeridian() {
    let east = encode(0.0, 180.0, Some(6)).unwrap();
    assert!(matches!(
        east.neighbors(),
        Err(GeohashError::NeighborOutOfBounds {
            direction: Direction::Right,
            ..
        })
    ));

    let west = encode(10.0, -180.0, Some(6)).unwrap();
    match west.neighbors() {
        Err(GeohashError::NeighborOutOfBounds {
            direction,
            longitude,
            ..
        }) => {
            assert_eq!(direction, Direction::Left);
            assert!(longitude < -180.0);
        }
        other => panic!("expected out-of-bounds neighbor, got {:?}", other),
    }

    let hasher = Geohasher::default();
    let in_range: Vec<_> = Direction::ALL
        .into_iter()
        .filter_map(|direction| hasher.neighbor(&west, direction).ok())
        .collect();
    assert_eq!(in_range.len(), 5);
}

/// Test 8: Lenient mode keeps the unchecked shift, which does not reach the true neighbor
#[test]
fn test_lenient_neighbors_collapse_onto_edge_cells() {
    let hasher = lenient();

    let arctic = hasher.encode(90.0, 0.0, Some(6)).unwrap();
    let neighbors = hasher.neighbors(&arctic).unwrap();
    assert_eq!(neighbors.up().hash(), arctic.hash());
    assert_eq!(neighbors.down(), &hasher.neighbor(&arctic, Direction::Down).unwrap());

    let east = hasher.encode(0.0, 180.0, Some(6)).unwrap();
    let neighbors = hasher.neighbors(&east).unwrap();
    // The real neighbor is on the far west edge; the shift stays put instead.
    assert_eq!(neighbors.right().hash(), east.hash());
    assert_ne!(neighbors.right().hash(), encode(0.0, -180.0, Some(6)).unwrap().hash());
}

/// Test 9: Precision zero falls back to the default instead of failing
#[test]
fn test_zero_precision_defaults() {
    assert_eq!(encode(18.5, -67.5, Some(0)).unwrap().hash().len(), 12);
    assert_eq!(decode("d7", Some(0)).unwrap().precision(), 12);
}

/// Test 10: Coordinates on a midpoint go to the lower half
#[test]
fn test_midpoint_ties() {
    // Longitude 0 and latitude 0 are the first midpoints on each axis.
    let cell = encode(0.0, 0.0, Some(1)).unwrap();
    assert_eq!(cell.hash(), "7");
    assert_eq!(cell.max_lat(), 0.0);
    assert_eq!(cell.max_lon(), 0.0);

    let just_above = encode(1e-9, 1e-9, Some(1)).unwrap();
    assert_eq!(just_above.hash(), "s");
}

/// Test 11: The largest accepted precision still produces the requested length
#[test]
fn test_high_precision() {
    let cell = encode(46.75546, -101.43264, Some(MAX_PRECISION)).unwrap();
    assert_eq!(cell.hash().len(), MAX_PRECISION);
    assert!(cell.hash().starts_with("c8rcgze421mw"));
    assert!(cell.height() > 0.0);
    assert!(cell.width() > 0.0);
}

/// Test 12: Oversized precision is rejected instead of allocating
#[test]
fn test_precision_above_limit_rejected() {
    for precision in [MAX_PRECISION + 1, 1 << 40, usize::MAX] {
        let result = std::panic::catch_unwind(|| encode(10.0, 10.0, Some(precision)));
        let result = result.unwrap_or_else(|_| panic!("encode panicked at precision {}", precision));
        assert_eq!(
            result.unwrap_err(),
            GeohashError::InvalidPrecision {
                precision,
                max: MAX_PRECISION
            }
        );

        assert!(matches!(
            decode("c8rcgze", Some(precision)),
            Err(GeohashError::InvalidPrecision { .. })
        ));
    }

    // A hash longer than the limit cannot be parsed with its length as precision.
    let long = "c".repeat(MAX_PRECISION + 1);
    assert!(long.parse::<geobox::GeoBox>().is_err());
}

use std::collections::HashMap;

use coireacht::{
    engine::{Catalog, Engine, Station},
    geocode::{Geocoder, ResolutionError, ResolvedAddress},
    shared::Coordinate,
};

/// Lookup-table resolver standing in for the real geocoding service.
struct TableGeocoder {
    table: HashMap<String, Coordinate>,
}

impl Geocoder for TableGeocoder {
    fn resolve(&self, query: &str) -> Result<ResolvedAddress, ResolutionError> {
        if query.trim().is_empty() {
            return Err(ResolutionError::Malformed(query.to_string()));
        }
        self.table
            .get(query)
            .map(|coordinate| ResolvedAddress {
                address: query.to_string(),
                coordinate: *coordinate,
            })
            .ok_or_else(|| ResolutionError::NotFound(query.to_string()))
    }
}

/// Resolver that never answers, like a service behind a dead network.
struct OfflineGeocoder;

impl Geocoder for OfflineGeocoder {
    fn resolve(&self, query: &str) -> Result<ResolvedAddress, ResolutionError> {
        Err(ResolutionError::Unavailable(format!(
            "connection refused resolving {query}"
        )))
    }
}

fn station(name: &str, division: &str, latitude: f64, longitude: f64, violent: f64) -> Station {
    Station {
        index: 0,
        name: name.into(),
        division: division.into(),
        coordinate: Coordinate::new(latitude, longitude),
        violent_5yr_avg: violent,
        property_5yr_avg: 0.0,
        public_order_5yr_avg: 0.0,
    }
}

fn small_engine() -> Engine {
    Engine::new().with_catalog(Catalog::from_stations(vec![
        station("Alpha", "Eastern", 53.0, -6.0, 5.0),
        station("Bravo", "Eastern", 53.1, -6.1, 2.0),
        station("Charlie", "Western", 54.0, -7.0, 9.0),
    ]))
}

#[test]
fn resolve_then_score_test() {
    let engine = small_engine();
    let geocoder = TableGeocoder {
        table: HashMap::from([
            ("A96 C7W2".to_string(), Coordinate::new(53.99, -6.99)),
            ("D02 XY45".to_string(), Coordinate::new(53.01, -6.01)),
        ]),
    };

    let resolved = geocoder.resolve("A96 C7W2").unwrap();
    let risk = engine.assess(&resolved.coordinate).unwrap();
    assert_eq!(risk.station.name.as_ref(), "Charlie");
    assert_eq!(risk.score.value(), 0.0);

    let resolved = geocoder.resolve("D02 XY45").unwrap();
    let risk = engine.assess(&resolved.coordinate).unwrap();
    assert_eq!(risk.station.name.as_ref(), "Alpha");
    assert_eq!(risk.score.value(), 2.5);
}

#[test]
fn resolve_not_found_test() {
    let geocoder = TableGeocoder {
        table: HashMap::new(),
    };
    let err = geocoder.resolve("1 Fake Street, Nowhere").unwrap_err();
    assert!(matches!(err, ResolutionError::NotFound(_)));
    assert!(err.to_string().contains("1 Fake Street, Nowhere"));
}

#[test]
fn resolve_unavailable_test() {
    let geocoder = OfflineGeocoder;
    let err = geocoder.resolve("D02 XY45").unwrap_err();
    assert!(matches!(err, ResolutionError::Unavailable(_)));
    // The engine never sees a coordinate when resolution fails.
    assert!(err.to_string().contains("unavailable"));
}

#[test]
fn resolve_malformed_test() {
    let geocoder = TableGeocoder {
        table: HashMap::new(),
    };
    let err = geocoder.resolve("   ").unwrap_err();
    assert!(matches!(err, ResolutionError::Malformed(_)));
}

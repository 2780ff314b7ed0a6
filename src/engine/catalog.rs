use std::{collections::HashMap, sync::Arc, time::Instant};

use tracing::debug;

use crate::{
    engine::{QueryError, Station},
    garda::{self, GardaReader},
    shared::Coordinate,
};

/// Every loaded station, in load order. The order carries no meaning
/// beyond breaking ties, but it is preserved so repeated queries against
/// the same data always resolve the same way.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    stations: Box<[Station]>,
    station_lookup: HashMap<Arc<str>, u32>,
    dropped_rows: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Default::default()
    }

    /// Builds the catalog from the two Garda exports. Attribute rows are
    /// joined against the coordinate table by station name; rows without a
    /// coordinate entry are dropped without failing the load, and the drop
    /// count is kept for [`Catalog::dropped_rows`].
    pub fn load_garda(mut self, garda: GardaReader) -> Result<Self, garda::Error> {
        debug!("Loading station locations...");
        let now = Instant::now();
        let mut locations: HashMap<String, Coordinate> = HashMap::new();
        garda.stream_locations(|(_, row)| {
            locations.insert(row.name, Coordinate::new(row.latitude, row.longitude));
        })?;
        debug!("Loading station locations took {:?}", now.elapsed());

        debug!("Loading stations...");
        let now = Instant::now();
        let mut station_lookup: HashMap<Arc<str>, u32> = HashMap::new();
        let mut stations: Vec<Station> = Vec::new();
        let mut dropped: usize = 0;
        garda.stream_stations(|(_, row)| {
            let Some(coordinate) = locations.get(row.station.as_str()) else {
                dropped += 1;
                return;
            };
            let mut value = Station::from((row, *coordinate));
            value.index = stations.len() as u32;
            station_lookup.insert(value.name.clone(), value.index);
            stations.push(value);
        })?;
        self.stations = stations.into();
        self.station_lookup = station_lookup;
        self.dropped_rows = dropped;
        debug!(
            "Loading stations took {:?} ({dropped} rows without coordinates dropped)",
            now.elapsed()
        );
        Ok(self)
    }

    /// Builds a catalog from already assembled records, re-stamping their
    /// indexes to match the given order.
    pub fn from_stations(stations: Vec<Station>) -> Self {
        let mut station_lookup: HashMap<Arc<str>, u32> = HashMap::new();
        let stations: Box<[Station]> = stations
            .into_iter()
            .enumerate()
            .map(|(i, mut station)| {
                station.index = i as u32;
                station_lookup.insert(station.name.clone(), station.index);
                station
            })
            .collect();
        Self {
            stations,
            station_lookup,
            dropped_rows: 0,
        }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Get a station with the given name.
    /// If no station is found with the given name None is returned.
    pub fn station_by_name(&self, name: &str) -> Option<&Station> {
        let station_index = self.station_lookup.get(name)?;
        Some(&self.stations[*station_index as usize])
    }

    /// Attribute rows skipped during the last load because the coordinate
    /// table had no entry for their station name.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Finds the station closest to the given coordinate with a full scan
    /// over the catalog. Ties go to the earliest loaded station.
    pub fn nearest_station(&self, coordinate: &Coordinate) -> Result<&Station, QueryError> {
        let mut nearest: Option<(&Station, f64)> = None;
        for station in self.stations.iter() {
            let distance = station.coordinate.planar_distance(coordinate);
            match nearest {
                Some((_, best)) if distance < best => nearest = Some((station, distance)),
                None => nearest = Some((station, distance)),
                _ => (),
            }
        }
        nearest
            .map(|(station, _)| station)
            .ok_or(QueryError::EmptyCatalog)
    }
}

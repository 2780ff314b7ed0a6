use std::sync::Arc;

use crate::{garda::models::GardaStationRow, shared::Coordinate};

/// One Garda station with its division and five-year incident averages.
/// Records are built once during the catalog load and never mutated after.
#[derive(Debug, Default, Clone)]
pub struct Station {
    pub index: u32,
    pub name: Arc<str>,
    pub division: Arc<str>,
    pub coordinate: Coordinate,
    pub violent_5yr_avg: f64,
    pub property_5yr_avg: f64,
    pub public_order_5yr_avg: f64,
}

impl From<(GardaStationRow, Coordinate)> for Station {
    fn from((row, coordinate): (GardaStationRow, Coordinate)) -> Self {
        Self {
            index: 0,
            name: row.station.into(),
            division: row.division.into(),
            coordinate,
            violent_5yr_avg: row.violent_5yr_avg,
            property_5yr_avg: row.property_5yr_avg,
            public_order_5yr_avg: row.public_order_5yr_avg,
        }
    }
}

use serde::{Deserialize, Serialize};

/// Row of the coordinate table. The file carries no header row, so the
/// fields are read by position: name, latitude, longitude.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GardaLocationRow {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Row of the station attribute export, addressed by header name.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct GardaStationRow {
    pub station: String,
    pub division: String,
    pub violent_5yr_avg: f64,
    pub property_5yr_avg: f64,
    pub public_order_5yr_avg: f64,
}

pub struct Config {
    pub locations_path: String,
    pub stations_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locations_path: "data/fixed_garda_locations.csv".into(),
            stations_path: "data/garda_stations.csv".into(),
        }
    }
}

pub mod engine;
pub mod garda;
pub mod geocode;
pub mod shared;

pub mod prelude {
    pub use crate::engine::{
        Catalog, Engine, QueryError, Rank, RankingIndex, RiskScore, Station, StationRisk,
    };
    pub use crate::garda::{Config, GardaReader};
    pub use crate::geocode::{Geocoder, ResolutionError, ResolvedAddress};
    pub use crate::shared::Coordinate;
}

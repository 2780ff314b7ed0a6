use std::sync::Arc;

use thiserror::Error;

mod catalog;
mod ranking;
mod score;
mod station;

pub use catalog::*;
pub use ranking::*;
pub use score::*;
pub use station::*;

use crate::shared::Coordinate;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Catalog contains no stations")]
    EmptyCatalog,
    #[error("Station {0} is missing from the ranking index")]
    NotRanked(Arc<str>),
}

/// Query facade owning the catalog together with the ranking index derived
/// from it. Built once, then shared freely; every query reads the same
/// immutable data.
#[derive(Debug, Default, Clone)]
pub struct Engine {
    catalog: Catalog,
    rankings: RankingIndex,
}

impl Engine {
    pub fn new() -> Self {
        Default::default()
    }

    /// Adopts a catalog and derives its ranking index.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.rankings = RankingIndex::build(&catalog);
        self.catalog = catalog;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rankings(&self) -> &RankingIndex {
        &self.rankings
    }

    /// See [`Catalog::nearest_station`].
    pub fn nearest_station(&self, coordinate: &Coordinate) -> Result<&Station, QueryError> {
        self.catalog.nearest_station(coordinate)
    }

    /// Risk score for a coordinate, derived from the nearest station's rank
    /// within its own division.
    pub fn score(&self, coordinate: &Coordinate) -> Result<RiskScore, QueryError> {
        let station = self.catalog.nearest_station(coordinate)?;
        let rank = self.rankings.rank_of(station)?;
        Ok(RiskScore::from(rank))
    }

    /// Like [`Engine::score`] but keeps the station and rank the score was
    /// derived from.
    pub fn assess(&self, coordinate: &Coordinate) -> Result<StationRisk<'_>, QueryError> {
        let station = self.catalog.nearest_station(coordinate)?;
        let rank = self.rankings.rank_of(station)?;
        Ok(StationRisk {
            station,
            rank,
            score: RiskScore::from(rank),
        })
    }
}

use std::{collections::HashMap, sync::Arc};

use rayon::prelude::*;

use crate::engine::{Catalog, QueryError, Station};

/// A station's zero-based position within its division ordering, together
/// with the size of that division.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    pub index: u32,
    pub of: u32,
}

/// Per-division view over a catalog. Every division maps to its stations
/// ordered ascending by five-year violent incident average.
#[derive(Debug, Default, Clone)]
pub struct RankingIndex {
    divisions: HashMap<Arc<str>, Box<[u32]>>,
}

impl RankingIndex {
    /// Groups the catalog by division and sorts each group by violent
    /// incident average. The sort is stable, so stations with equal
    /// averages keep their catalog order. An index is only valid for the
    /// catalog it was built from.
    pub fn build(catalog: &Catalog) -> Self {
        let mut grouped: HashMap<Arc<str>, Vec<u32>> = HashMap::new();
        for station in catalog.stations() {
            grouped
                .entry(station.division.clone())
                .or_default()
                .push(station.index);
        }

        let mut divisions: Vec<(Arc<str>, Vec<u32>)> = grouped.into_iter().collect();
        divisions.par_iter_mut().for_each(|(_, ranking)| {
            ranking.sort_by(|a, b| {
                let a = catalog.stations()[*a as usize].violent_5yr_avg;
                let b = catalog.stations()[*b as usize].violent_5yr_avg;
                a.total_cmp(&b)
            });
        });

        Self {
            divisions: divisions
                .into_iter()
                .map(|(division, ranking)| (division, ranking.into()))
                .collect(),
        }
    }

    /// The ranked station indexes for a division, lowest violent incident
    /// average first.
    pub fn division(&self, name: &str) -> Option<&[u32]> {
        self.divisions.get(name).map(|ranking| ranking.as_ref())
    }

    pub fn divisions(&self) -> impl Iterator<Item = (&str, &[u32])> {
        self.divisions
            .iter()
            .map(|(division, ranking)| (division.as_ref(), ranking.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.divisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.divisions.is_empty()
    }

    /// A station's position within its division ordering.
    /// Fails with [`QueryError::NotRanked`] when the division or the
    /// station itself is missing, which only happens when the index was
    /// built from a different catalog than the station came from.
    pub fn rank_of(&self, station: &Station) -> Result<Rank, QueryError> {
        let ranking = self
            .divisions
            .get(station.division.as_ref())
            .ok_or_else(|| QueryError::NotRanked(station.name.clone()))?;
        let position = ranking
            .iter()
            .position(|index| *index == station.index)
            .ok_or_else(|| QueryError::NotRanked(station.name.clone()))?;
        Ok(Rank {
            index: position as u32,
            of: ranking.len() as u32,
        })
    }
}

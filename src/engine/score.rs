use std::fmt::Display;

use crate::engine::{Rank, Station};

/// Relative risk score on the half-open scale [0, 5).
/// The value is division-local: it ranks a station against the other
/// stations of its own division, so raw scores are not comparable across
/// divisions.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct RiskScore(f64);

impl RiskScore {
    /// Upper bound of the scale. Never reached, since a rank index is
    /// always strictly smaller than the division size.
    pub const SCALE: f64 = 5.0;

    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Whole-step presentation value in 0..=5.
    pub fn rounded(&self) -> f64 {
        self.0.round()
    }
}

impl From<Rank> for RiskScore {
    fn from(rank: Rank) -> Self {
        // Division orderings are never empty, so `of` is never zero here.
        Self(f64::from(rank.index) / f64::from(rank.of) * Self::SCALE)
    }
}

impl Display for RiskScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.0))
    }
}

/// The full answer to one coordinate query: the nearest station, its rank
/// within its division and the score derived from that rank.
#[derive(Debug, Clone, Copy)]
pub struct StationRisk<'a> {
    pub station: &'a Station,
    pub rank: Rank,
    pub score: RiskScore,
}

#[test]
fn score_lowest_rank_test() {
    let score = RiskScore::from(Rank { index: 0, of: 28 });
    assert_eq!(score.value(), 0.0);
}

#[test]
fn score_formula_test() {
    let score = RiskScore::from(Rank { index: 1, of: 2 });
    assert_eq!(score.value(), 2.5);
}

#[test]
fn score_below_scale_test() {
    let score = RiskScore::from(Rank { index: 27, of: 28 });
    assert!(score.value() < RiskScore::SCALE);
    assert_eq!(score.rounded(), 5.0);
}

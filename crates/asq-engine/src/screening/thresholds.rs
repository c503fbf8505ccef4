//! Cutoff table and score classification.
//!
//! The table is an immutable value constructed once and passed by reference
//! into the classifier, never implicit global state, so classification stays
//! pure and safe to call from any number of threads.

use super::domain::{AsqInterval, DevelopmentStatus, Domain, ThresholdPair};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat thresholds applied to every domain of an interval without a curated
/// row. A known approximation pending complete published data; lookups report
/// when it was used so callers can surface the degradation.
pub const DEFAULT_THRESHOLDS: ThresholdPair = ThresholdPair {
    cutoff: 20.0,
    monitoring: 30.0,
};

/// Where a threshold lookup got its figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdSource {
    Curated,
    Default,
}

/// Thresholds for all five domains of one interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalCutoffs {
    pub communication: ThresholdPair,
    pub gross_motor: ThresholdPair,
    pub fine_motor: ThresholdPair,
    pub problem_solving: ThresholdPair,
    pub personal_social: ThresholdPair,
}

impl IntervalCutoffs {
    pub const fn domain(&self, domain: Domain) -> ThresholdPair {
        match domain {
            Domain::Communication => self.communication,
            Domain::GrossMotor => self.gross_motor,
            Domain::FineMotor => self.fine_motor,
            Domain::ProblemSolving => self.problem_solving,
            Domain::PersonalSocial => self.personal_social,
        }
    }

    const fn uniform(pair: ThresholdPair) -> Self {
        Self {
            communication: pair,
            gross_motor: pair,
            fine_motor: pair,
            problem_solving: pair,
            personal_social: pair,
        }
    }
}

const fn pair(cutoff: f64, monitoring: f64) -> ThresholdPair {
    ThresholdPair { cutoff, monitoring }
}

/// Published ASQ-3 cutoff and monitoring thresholds keyed by interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutoffTable {
    curated: BTreeMap<AsqInterval, IntervalCutoffs>,
    fallback: IntervalCutoffs,
}

impl CutoffTable {
    /// The curated table shipped with the portal: exact technical-manual
    /// figures for the 2-, 4-, 6- and 8-month questionnaires, flat defaults
    /// elsewhere.
    pub fn published() -> Self {
        let mut curated = BTreeMap::new();
        curated.insert(
            AsqInterval::Month2,
            IntervalCutoffs {
                communication: pair(15.31, 24.96),
                gross_motor: pair(22.45, 33.89),
                fine_motor: pair(16.30, 27.93),
                problem_solving: pair(21.29, 31.75),
                personal_social: pair(17.87, 28.59),
            },
        );
        curated.insert(
            AsqInterval::Month4,
            IntervalCutoffs {
                communication: pair(17.01, 27.68),
                gross_motor: pair(19.04, 33.02),
                fine_motor: pair(20.24, 33.15),
                problem_solving: pair(23.29, 35.13),
                personal_social: pair(20.00, 32.55),
            },
        );
        curated.insert(
            AsqInterval::Month6,
            IntervalCutoffs {
                communication: pair(13.52, 26.19),
                gross_motor: pair(7.13, 24.47),
                fine_motor: pair(18.88, 32.00),
                problem_solving: pair(21.09, 34.05),
                personal_social: pair(16.47, 29.44),
            },
        );
        curated.insert(
            AsqInterval::Month8,
            IntervalCutoffs {
                communication: pair(17.12, 30.17),
                gross_motor: pair(17.53, 33.81),
                fine_motor: pair(24.04, 38.01),
                problem_solving: pair(25.66, 38.33),
                personal_social: pair(20.06, 33.36),
            },
        );

        Self {
            curated,
            fallback: IntervalCutoffs::uniform(DEFAULT_THRESHOLDS),
        }
    }

    /// Build a table from externally managed rows, e.g. an admin-editable
    /// threshold store handing the classifier a point-in-time snapshot.
    pub fn from_rows(
        rows: BTreeMap<AsqInterval, IntervalCutoffs>,
        fallback: IntervalCutoffs,
    ) -> Self {
        Self {
            curated: rows,
            fallback,
        }
    }

    pub fn is_curated(&self, interval: AsqInterval) -> bool {
        self.curated.contains_key(&interval)
    }

    pub fn curated_intervals(&self) -> impl Iterator<Item = AsqInterval> + '_ {
        self.curated.keys().copied()
    }

    /// Thresholds for the pair, plus whether they came from a curated row or
    /// the flat default.
    pub fn lookup(&self, interval: AsqInterval, domain: Domain) -> (ThresholdPair, ThresholdSource) {
        match self.curated.get(&interval) {
            Some(row) => (row.domain(domain), ThresholdSource::Curated),
            None => (self.fallback.domain(domain), ThresholdSource::Default),
        }
    }

    pub fn thresholds(&self, interval: AsqInterval, domain: Domain) -> ThresholdPair {
        self.lookup(interval, domain).0
    }

    /// Inclusive at the cutoff: a score exactly equal to it still flags the
    /// domain for intervention.
    pub fn needs_intervention(&self, score: u32, interval: AsqInterval, domain: Domain) -> bool {
        f64::from(score) <= self.thresholds(interval, domain).cutoff
    }

    /// True strictly above the cutoff and at or below the monitoring bound.
    pub fn needs_monitoring(&self, score: u32, interval: AsqInterval, domain: Domain) -> bool {
        let thresholds = self.thresholds(interval, domain);
        let score = f64::from(score);
        score > thresholds.cutoff && score <= thresholds.monitoring
    }

    /// Classifies a domain total. The three bands partition the score axis:
    /// (-inf, cutoff] intervention, (cutoff, monitoring] monitoring,
    /// (monitoring, +inf) on-track.
    pub fn status(&self, score: u32, interval: AsqInterval, domain: Domain) -> DevelopmentStatus {
        if self.needs_intervention(score, interval, domain) {
            DevelopmentStatus::NeedsIntervention
        } else if self.needs_monitoring(score, interval, domain) {
            DevelopmentStatus::NeedsMonitoring
        } else {
            DevelopmentStatus::OnTrack
        }
    }
}

impl Default for CutoffTable {
    fn default() -> Self {
        Self::published()
    }
}

//! Aggregate screening analytics for the owner dashboard.
//!
//! Pure fold over scored assessments; chart rendering and the queries feeding
//! this live with the callers.

use super::assessment::AssessmentOutcome;
use super::domain::Domain;
use serde::Serialize;

/// Per-domain aggregate across a set of assessments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainAnalytics {
    pub domain: Domain,
    /// Mean domain total, rounded to the nearest whole score.
    pub average_score: u32,
    /// Share of scored records flagged for intervention, as a rounded percent.
    pub intervention_rate_percent: u32,
    pub scored_assessments: usize,
}

/// Dashboard headline numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioMetrics {
    pub total_assessments: usize,
    pub domain_analytics: Vec<DomainAnalytics>,
}

pub fn portfolio_metrics(outcomes: &[AssessmentOutcome]) -> PortfolioMetrics {
    PortfolioMetrics {
        total_assessments: outcomes.len(),
        domain_analytics: domain_analytics(outcomes),
    }
}

/// Average score and intervention rate per domain, skipping domains no
/// assessment has scored.
pub fn domain_analytics(outcomes: &[AssessmentOutcome]) -> Vec<DomainAnalytics> {
    let mut analytics = Vec::new();
    for domain in Domain::ALL {
        let mut total: u64 = 0;
        let mut flagged = 0usize;
        let mut scored = 0usize;
        for outcome in outcomes {
            for record in outcome
                .domain_scores
                .iter()
                .filter(|record| record.domain == domain)
            {
                total += u64::from(record.total_score);
                flagged += usize::from(record.needs_intervention);
                scored += 1;
            }
        }
        if scored == 0 {
            continue;
        }
        analytics.push(DomainAnalytics {
            domain,
            average_score: round_ratio(total, scored as u64),
            intervention_rate_percent: round_ratio(flagged as u64 * 100, scored as u64),
            scored_assessments: scored,
        });
    }
    analytics
}

/// Completed assessments as a rounded percent of all started ones. Zero when
/// nothing was started.
pub fn completion_rate_percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    round_ratio(completed as u64 * 100, total as u64)
}

fn round_ratio(numerator: u64, denominator: u64) -> u32 {
    ((numerator as f64 / denominator as f64).round()) as u32
}

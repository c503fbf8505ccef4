//! Assessment orchestration: turns one completed questionnaire submission
//! into the per-domain score records the portal persists.

use super::age::{midnight_utc, precise_age_in_months, AdministrationWindow};
use super::domain::{AnswerRecord, AsqInterval, DevelopmentStatus, Domain, DomainScoreRecord};
use super::scoring::{answer_points, max_score};
use super::thresholds::CutoffTable;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One completed questionnaire as handed over by the form collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub child_id: String,
    pub date_of_birth: NaiveDate,
    /// Interval the questionnaire was administered against. When absent the
    /// engine resolves the nearest interval from the child's age.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<AsqInterval>,
    pub answers: Vec<AnswerRecord>,
}

/// Scored assessment, ready for the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub child_id: String,
    /// Whole months at the moment of assessment, floor of the precise age.
    pub age_at_assessment: u32,
    pub interval: AsqInterval,
    /// One record per domain that had at least one answered question.
    pub domain_scores: Vec<DomainScoreRecord>,
    pub overall_status: DevelopmentStatus,
    pub completed_at: DateTime<Utc>,
}

/// Stateless engine that applies a cutoff-table snapshot to submissions.
///
/// The table is owned by value so the engine never depends on mutable shared
/// state; swapping thresholds means constructing a new engine.
#[derive(Debug, Clone)]
pub struct ScreeningEngine {
    cutoffs: CutoffTable,
    window: AdministrationWindow,
}

impl ScreeningEngine {
    pub fn new(cutoffs: CutoffTable) -> Self {
        Self {
            cutoffs,
            window: AdministrationWindow::default(),
        }
    }

    pub fn with_window(cutoffs: CutoffTable, window: AdministrationWindow) -> Self {
        Self { cutoffs, window }
    }

    pub fn cutoffs(&self) -> &CutoffTable {
        &self.cutoffs
    }

    pub fn window(&self) -> AdministrationWindow {
        self.window
    }

    /// Score a submission against the reference instant `now`.
    ///
    /// Deterministic and total: every submission yields an outcome. Domains
    /// without answers produce no record rather than a zero score.
    pub fn assess(&self, submission: &AssessmentSubmission, now: DateTime<Utc>) -> AssessmentOutcome {
        let precise_age = precise_age_in_months(midnight_utc(submission.date_of_birth), now);
        let age_at_assessment = precise_age.floor() as u32;
        let interval = submission
            .interval
            .unwrap_or_else(|| AsqInterval::nearest(precise_age));

        if !self.cutoffs.is_curated(interval) {
            warn!(
                interval = interval.months(),
                child_id = %submission.child_id,
                "no curated cutoff row for interval; applying default thresholds"
            );
        }

        let mut domain_scores = Vec::new();
        for domain in Domain::ALL {
            let answers: Vec<&AnswerRecord> = submission
                .answers
                .iter()
                .filter(|answer| answer.domain == domain)
                .collect();
            if answers.is_empty() {
                continue;
            }

            let total_score: u32 = answers.iter().map(|answer| answer_points(answer)).sum();
            let thresholds = self.cutoffs.thresholds(interval, domain);
            domain_scores.push(DomainScoreRecord {
                domain,
                total_score,
                max_possible_score: max_score(answers.len()),
                threshold: thresholds.cutoff.round() as u32,
                needs_intervention: self.cutoffs.needs_intervention(total_score, interval, domain),
                status: self.cutoffs.status(total_score, interval, domain),
            });
        }

        let overall_status = overall_status(&domain_scores);

        AssessmentOutcome {
            child_id: submission.child_id.clone(),
            age_at_assessment,
            interval,
            domain_scores,
            overall_status,
            completed_at: now,
        }
    }
}

impl Default for ScreeningEngine {
    fn default() -> Self {
        Self::new(CutoffTable::published())
    }
}

/// Roll-up across one assessment's domains: more than two flagged domains
/// escalates the whole assessment to intervention, any flagged domain to
/// monitoring.
pub fn overall_status(domain_scores: &[DomainScoreRecord]) -> DevelopmentStatus {
    let flagged = domain_scores
        .iter()
        .filter(|record| record.needs_intervention)
        .count();
    if flagged > 2 {
        DevelopmentStatus::NeedsIntervention
    } else if flagged > 0 {
        DevelopmentStatus::NeedsMonitoring
    } else {
        DevelopmentStatus::OnTrack
    }
}

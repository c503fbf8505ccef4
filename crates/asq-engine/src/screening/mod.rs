//! ASQ-3 screening: age resolution, answer scoring, and cutoff
//! classification, plus the assessment, catalog, and analytics layers built
//! on them.
//!
//! Everything here is pure, synchronous computation. Inputs (date of birth,
//! answers, a reference instant, a cutoff-table snapshot) come from the
//! callers; persistence, authentication, and HTTP surfaces live elsewhere.

pub mod age;
pub mod analytics;
pub mod assessment;
pub mod domain;
pub mod format;
pub mod import;
pub mod scoring;
pub mod thresholds;
pub mod videos;

pub use age::{age_in_months, precise_age_in_months, AdministrationWindow};
pub use assessment::{overall_status, AssessmentOutcome, AssessmentSubmission, ScreeningEngine};
pub use domain::{
    AnswerRecord, AnswerValue, AsqInterval, DevelopmentStatus, Domain, DomainScoreRecord,
    LabelParseError, ThresholdPair,
};
pub use import::{AnswerImportError, AnswerSheetImporter};
pub use thresholds::{CutoffTable, IntervalCutoffs, ThresholdSource, DEFAULT_THRESHOLDS};
pub use videos::{InterventionVideo, VideoCatalog, VideoCatalogError};

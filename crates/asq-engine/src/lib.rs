//! Screening engine for the ECD portal: resolves a child's chronological age
//! to the matching ASQ-3 questionnaire interval, scores submitted answers
//! into per-domain totals, and classifies those totals against the published
//! cutoff and monitoring thresholds.

pub mod config;
pub mod error;
pub mod screening;
pub mod telemetry;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parse failure for one of the closed screening vocabularies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelParseError {
    #[error("unknown domain label '{0}'")]
    Domain(String),
    #[error("unknown answer label '{0}'")]
    Answer(String),
    #[error("{0} is not a standardized ASQ-3 interval")]
    Interval(u8),
}

/// Standardized ASQ-3 questionnaire intervals, named by nominal age in months.
///
/// An interval identifies which version of the questionnaire applies; it is
/// not a raw age. The derived ordering follows the nominal ages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum AsqInterval {
    Month2,
    Month4,
    Month6,
    Month8,
    Month9,
    Month10,
    Month12,
    Month14,
    Month16,
    Month18,
    Month20,
    Month22,
    Month24,
    Month27,
    Month30,
    Month33,
    Month36,
    Month42,
    Month48,
    Month54,
    Month60,
}

impl AsqInterval {
    /// Every standardized interval, youngest first.
    pub const ALL: [AsqInterval; 21] = [
        AsqInterval::Month2,
        AsqInterval::Month4,
        AsqInterval::Month6,
        AsqInterval::Month8,
        AsqInterval::Month9,
        AsqInterval::Month10,
        AsqInterval::Month12,
        AsqInterval::Month14,
        AsqInterval::Month16,
        AsqInterval::Month18,
        AsqInterval::Month20,
        AsqInterval::Month22,
        AsqInterval::Month24,
        AsqInterval::Month27,
        AsqInterval::Month30,
        AsqInterval::Month33,
        AsqInterval::Month36,
        AsqInterval::Month42,
        AsqInterval::Month48,
        AsqInterval::Month54,
        AsqInterval::Month60,
    ];

    pub const fn months(self) -> u8 {
        match self {
            AsqInterval::Month2 => 2,
            AsqInterval::Month4 => 4,
            AsqInterval::Month6 => 6,
            AsqInterval::Month8 => 8,
            AsqInterval::Month9 => 9,
            AsqInterval::Month10 => 10,
            AsqInterval::Month12 => 12,
            AsqInterval::Month14 => 14,
            AsqInterval::Month16 => 16,
            AsqInterval::Month18 => 18,
            AsqInterval::Month20 => 20,
            AsqInterval::Month22 => 22,
            AsqInterval::Month24 => 24,
            AsqInterval::Month27 => 27,
            AsqInterval::Month30 => 30,
            AsqInterval::Month33 => 33,
            AsqInterval::Month36 => 36,
            AsqInterval::Month42 => 42,
            AsqInterval::Month48 => 48,
            AsqInterval::Month54 => 54,
            AsqInterval::Month60 => 60,
        }
    }
}

impl TryFrom<u8> for AsqInterval {
    type Error = LabelParseError;

    fn try_from(months: u8) -> Result<Self, Self::Error> {
        AsqInterval::ALL
            .iter()
            .copied()
            .find(|interval| interval.months() == months)
            .ok_or(LabelParseError::Interval(months))
    }
}

impl From<AsqInterval> for u8 {
    fn from(interval: AsqInterval) -> Self {
        interval.months()
    }
}

impl fmt::Display for AsqInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-month", self.months())
    }
}

/// The five developmental areas screened independently by the ASQ-3.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Domain {
    Communication,
    GrossMotor,
    FineMotor,
    ProblemSolving,
    PersonalSocial,
}

impl Domain {
    pub const ALL: [Domain; 5] = [
        Domain::Communication,
        Domain::GrossMotor,
        Domain::FineMotor,
        Domain::ProblemSolving,
        Domain::PersonalSocial,
    ];

    /// Stable wire label shared with the question bank and stored scores.
    pub const fn label(self) -> &'static str {
        match self {
            Domain::Communication => "COMMUNICATION",
            Domain::GrossMotor => "GROSS_MOTOR",
            Domain::FineMotor => "FINE_MOTOR",
            Domain::ProblemSolving => "PROBLEM_SOLVING",
            Domain::PersonalSocial => "PERSONAL_SOCIAL",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Domain::Communication => "Communication",
            Domain::GrossMotor => "Gross Motor",
            Domain::FineMotor => "Fine Motor",
            Domain::ProblemSolving => "Problem Solving",
            Domain::PersonalSocial => "Personal-Social",
        }
    }
}

impl FromStr for Domain {
    type Err = LabelParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .iter()
            .copied()
            .find(|domain| domain.label() == value)
            .ok_or_else(|| LabelParseError::Domain(value.to_string()))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Categorical answer a parent gives to a single questionnaire item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnswerValue {
    Yes,
    Sometimes,
    NotYet,
}

impl AnswerValue {
    /// Fixed per-question score. The mapping is total: every answer has
    /// exactly one score.
    pub const fn points(self) -> u32 {
        match self {
            AnswerValue::Yes => 10,
            AnswerValue::Sometimes => 5,
            AnswerValue::NotYet => 0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AnswerValue::Yes => "YES",
            AnswerValue::Sometimes => "SOMETIMES",
            AnswerValue::NotYet => "NOT_YET",
        }
    }
}

impl FromStr for AnswerValue {
    type Err = LabelParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "YES" => Ok(AnswerValue::Yes),
            "SOMETIMES" => Ok(AnswerValue::Sometimes),
            "NOT_YET" => Ok(AnswerValue::NotYet),
            other => Err(LabelParseError::Answer(other.to_string())),
        }
    }
}

/// Tri-state classification of one domain score against its thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DevelopmentStatus {
    OnTrack,
    NeedsMonitoring,
    NeedsIntervention,
}

impl DevelopmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            DevelopmentStatus::OnTrack => "on-track",
            DevelopmentStatus::NeedsMonitoring => "needs-monitoring",
            DevelopmentStatus::NeedsIntervention => "needs-intervention",
        }
    }
}

impl fmt::Display for DevelopmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One answered questionnaire item as submitted by the form collaborator.
///
/// `score` carries an explicit override; when absent the fixed answer map
/// applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_id: String,
    pub domain: Domain,
    pub answer: AnswerValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

/// Cutoff and monitoring boundaries for one (interval, domain) pair.
///
/// Scores at or below `cutoff` warrant intervention; scores above `cutoff`
/// but at or below `monitoring` warrant monitoring. `cutoff < monitoring` is
/// assumed by design, not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPair {
    pub cutoff: f64,
    pub monitoring: f64,
}

/// The per-domain row handed to the persistence collaborator after scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainScoreRecord {
    pub domain: Domain,
    pub total_score: u32,
    pub max_possible_score: u32,
    /// Cutoff rounded to the nearest whole score, kept for display.
    pub threshold: u32,
    pub needs_intervention: bool,
    pub status: DevelopmentStatus,
}

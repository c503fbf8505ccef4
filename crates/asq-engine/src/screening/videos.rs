//! Intervention video catalog and recommendation matching.
//!
//! Videos are curated per domain with an interval range and a score
//! threshold; a low domain score surfaces the matching help content.

use super::domain::{AsqInterval, Domain, DomainScoreRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterventionVideo {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    pub domain: Domain,
    pub min_interval: AsqInterval,
    pub max_interval: AsqInterval,
    /// Scores at or below this value trigger the recommendation.
    pub score_threshold: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum VideoCatalogError {
    #[error("video '{title}' has min interval {min} months above max interval {max} months")]
    InvertedIntervalRange { title: String, min: u8, max: u8 },
}

/// Validated, read-only set of intervention videos.
///
/// Serialized as a plain list; deserialization runs the same range
/// validation as [`VideoCatalog::new`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<InterventionVideo>", into = "Vec<InterventionVideo>")]
pub struct VideoCatalog {
    videos: Vec<InterventionVideo>,
}

impl VideoCatalog {
    pub fn new(videos: Vec<InterventionVideo>) -> Result<Self, VideoCatalogError> {
        for video in &videos {
            if video.min_interval > video.max_interval {
                return Err(VideoCatalogError::InvertedIntervalRange {
                    title: video.title.clone(),
                    min: video.min_interval.months(),
                    max: video.max_interval.months(),
                });
            }
        }
        Ok(Self { videos })
    }

    pub fn videos(&self) -> &[InterventionVideo] {
        &self.videos
    }

    /// Videos matching the domain, covering the interval, and whose threshold
    /// is at or above the achieved score.
    pub fn recommend(
        &self,
        domain: Domain,
        interval: AsqInterval,
        score: u32,
    ) -> Vec<&InterventionVideo> {
        self.videos
            .iter()
            .filter(|video| {
                video.domain == domain
                    && video.min_interval <= interval
                    && interval <= video.max_interval
                    && score <= video.score_threshold
            })
            .collect()
    }

    /// Recommendations for one scored domain record.
    pub fn recommend_for(
        &self,
        record: &DomainScoreRecord,
        interval: AsqInterval,
    ) -> Vec<&InterventionVideo> {
        self.recommend(record.domain, interval, record.total_score)
    }
}

impl TryFrom<Vec<InterventionVideo>> for VideoCatalog {
    type Error = VideoCatalogError;

    fn try_from(videos: Vec<InterventionVideo>) -> Result<Self, Self::Error> {
        Self::new(videos)
    }
}

impl From<VideoCatalog> for Vec<InterventionVideo> {
    fn from(catalog: VideoCatalog) -> Self {
        catalog.videos
    }
}

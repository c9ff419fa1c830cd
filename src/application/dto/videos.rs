use crate::domain::video::{PublishState, VideoRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read model handed to the admin layer. `published` is the visibility of the
/// record at the instant the DTO was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDto {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub slug: String,
    pub video_id: String,
    pub active: bool,
    pub state: PublishState,
    #[serde(default)]
    pub publish_timestamp: Option<DateTime<Utc>>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VideoDto {
    pub fn from_record(video: VideoRecord, now: DateTime<Utc>) -> Self {
        let published = video.is_published(now);
        Self {
            id: video.id.into(),
            title: video.title.into_inner(),
            description: video.description,
            slug: video.slug.into_inner(),
            video_id: video.external_id.into_inner(),
            active: video.active,
            state: video.state,
            publish_timestamp: video.publish_timestamp,
            published,
            created_at: video.created_at,
            updated_at: video.updated_at,
        }
    }
}

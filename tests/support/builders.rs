// tests/support/builders.rs
use chrono::{DateTime, Utc};

use video_catalog::domain::video::*;

use super::clock::fixed_now;

pub struct VideoRecordBuilder {
    id: i64,
    title: String,
    active: bool,
    state: PublishState,
    publish_timestamp: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl VideoRecordBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Video".into(),
            active: true,
            state: PublishState::Draft,
            publish_timestamp: None,
            created_at: fixed_now(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn state(mut self, state: PublishState) -> Self {
        self.state = state;
        self
    }

    pub fn publish_timestamp(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.publish_timestamp = at;
        self
    }

    pub fn published_at(self, at: DateTime<Utc>) -> Self {
        self.state(PublishState::Publish).publish_timestamp(Some(at))
    }

    pub fn build(self) -> VideoRecord {
        VideoRecord {
            id: VideoId::new(self.id).unwrap(),
            title: VideoTitle::new(self.title).unwrap(),
            description: None,
            slug: VideoSlug::new(format!("video-{}", self.id)).unwrap(),
            external_id: ExternalVideoId::new(format!("ext-{}", self.id)).unwrap(),
            active: self.active,
            state: self.state,
            publish_timestamp: self.publish_timestamp,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

impl Default for VideoRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

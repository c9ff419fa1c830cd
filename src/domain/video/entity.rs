// src/domain/video/entity.rs
use crate::domain::video::publication::{self, PublicationFields};
use crate::domain::video::value_objects::{
    ExternalVideoId, PublishState, VideoId, VideoSlug, VideoTitle,
};
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    pub id: VideoId,
    pub title: VideoTitle,
    pub description: Option<String>,
    pub slug: VideoSlug,
    pub external_id: ExternalVideoId,
    pub active: bool,
    pub state: PublishState,
    pub publish_timestamp: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VideoRecord {
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        publication::is_visible(self, now)
    }

    /// The hosting-platform id, but only while the record is visible.
    pub fn public_video_id(&self, now: DateTime<Utc>) -> Option<&ExternalVideoId> {
        self.is_published(now).then_some(&self.external_id)
    }

    /// Editable copy of this record, used as the starting point of an update.
    pub fn to_draft(&self) -> VideoDraft {
        VideoDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            slug: Some(self.slug.clone()),
            external_id: self.external_id.clone(),
            active: self.active,
            state: self.state,
            publish_timestamp: self.publish_timestamp,
        }
    }
}

impl PublicationFields for VideoRecord {
    fn active(&self) -> bool {
        self.active
    }

    fn state(&self) -> PublishState {
        self.state
    }

    fn publish_timestamp(&self) -> Option<DateTime<Utc>> {
        self.publish_timestamp
    }
}

impl fmt::Display for VideoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.external_id)
    }
}

/// A record on its way to the store. The slug may still be missing until the
/// pre-commit pipeline has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDraft {
    pub title: VideoTitle,
    pub description: Option<String>,
    pub slug: Option<VideoSlug>,
    pub external_id: ExternalVideoId,
    pub active: bool,
    pub state: PublishState,
    pub publish_timestamp: Option<DateTime<Utc>>,
}

impl VideoDraft {
    pub fn new(title: VideoTitle, external_id: ExternalVideoId) -> Self {
        Self {
            title,
            description: None,
            slug: None,
            external_id,
            active: true,
            state: PublishState::Draft,
            publish_timestamp: None,
        }
    }
}

impl PublicationFields for VideoDraft {
    fn active(&self) -> bool {
        self.active
    }

    fn state(&self) -> PublishState {
        self.state
    }

    fn publish_timestamp(&self) -> Option<DateTime<Utc>> {
        self.publish_timestamp
    }
}

#[derive(Debug, Clone)]
pub struct NewVideo {
    pub title: VideoTitle,
    pub description: Option<String>,
    pub slug: VideoSlug,
    pub external_id: ExternalVideoId,
    pub active: bool,
    pub state: PublishState,
    pub publish_timestamp: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PublicationFields for NewVideo {
    fn active(&self) -> bool {
        self.active
    }

    fn state(&self) -> PublishState {
        self.state
    }

    fn publish_timestamp(&self) -> Option<DateTime<Utc>> {
        self.publish_timestamp
    }
}

/// Full replacement of the mutable columns of one row. The slug is fixed at
/// creation and never part of an update.
#[derive(Debug, Clone)]
pub struct VideoUpdate {
    pub id: VideoId,
    pub title: VideoTitle,
    pub description: Option<String>,
    pub external_id: ExternalVideoId,
    pub active: bool,
    pub state: PublishState,
    pub publish_timestamp: Option<DateTime<Utc>>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VideoUpdate {
    pub fn from_draft(
        id: VideoId,
        draft: VideoDraft,
        original_updated_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            external_id: draft.external_id,
            active: draft.active,
            state: draft.state,
            publish_timestamp: draft.publish_timestamp,
            original_updated_at,
            updated_at,
        }
    }
}

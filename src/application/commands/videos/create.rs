// src/application/commands/videos/create.rs
use super::{
    VideoCommandService,
    service::{log_rejected, normalize_optional},
};
use crate::{
    application::{
        dto::VideoDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::video::{
        ExternalVideoId, NewVideo, PublishState, VideoDraft, VideoSlug, VideoTitle,
    },
};
use chrono::{DateTime, Utc};

pub struct CreateVideoCommand {
    pub title: String,
    pub description: Option<String>,
    /// Left empty to derive one from the title.
    pub slug: Option<String>,
    pub video_id: String,
    pub active: bool,
    pub state: PublishState,
    pub publish_timestamp: Option<DateTime<Utc>>,
}

impl CreateVideoCommand {
    pub fn builder() -> CreateVideoCommandBuilder {
        CreateVideoCommandBuilder::default()
    }
}

pub struct CreateVideoCommandBuilder {
    title: Option<String>,
    description: Option<String>,
    slug: Option<String>,
    video_id: Option<String>,
    active: bool,
    state: PublishState,
    publish_timestamp: Option<DateTime<Utc>>,
}

impl Default for CreateVideoCommandBuilder {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            slug: None,
            video_id: None,
            active: true,
            state: PublishState::Draft,
            publish_timestamp: None,
        }
    }
}

impl CreateVideoCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn video_id(mut self, video_id: impl Into<String>) -> Self {
        self.video_id = Some(video_id.into());
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

    pub fn publish_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.publish_timestamp = Some(at);
        self
    }

    /// Shorthand for `state(Publish)` plus `publish_timestamp(at)`.
    pub fn published_at(self, at: DateTime<Utc>) -> Self {
        self.state(PublishState::Publish).publish_timestamp(at)
    }

    pub fn build(self) -> ApplicationResult<CreateVideoCommand> {
        Ok(CreateVideoCommand {
            title: self
                .title
                .ok_or_else(|| ApplicationError::validation("title is required"))?,
            description: self.description,
            slug: self.slug,
            video_id: self
                .video_id
                .ok_or_else(|| ApplicationError::validation("video_id is required"))?,
            active: self.active,
            state: self.state,
            publish_timestamp: self.publish_timestamp,
        })
    }
}

impl VideoCommandService {
    pub async fn create_video(&self, command: CreateVideoCommand) -> ApplicationResult<VideoDto> {
        let title = VideoTitle::new(command.title)?;
        let external_id = ExternalVideoId::new(command.video_id)?;
        let slug = normalize_optional(command.slug)
            .map(VideoSlug::new)
            .transpose()?;

        let mut draft = VideoDraft {
            title,
            description: normalize_optional(command.description),
            slug,
            external_id,
            active: command.active,
            state: command.state,
            publish_timestamp: command.publish_timestamp,
        };

        let slug = self
            .pipeline
            .run(&mut draft)
            .inspect_err(|err| log_rejected("create", err))?;

        let now = self.clock.now();
        let new_video = NewVideo {
            title: draft.title,
            description: draft.description,
            slug,
            external_id: draft.external_id,
            active: draft.active,
            state: draft.state,
            publish_timestamp: draft.publish_timestamp,
            created_at: now,
            updated_at: now,
        };

        let created = self
            .write_repo
            .insert(new_video)
            .await
            .inspect_err(|err| log_rejected("create", err))?;

        tracing::info!(
            id = %created.id,
            slug = %created.slug,
            video_id = %created.external_id,
            state = %created.state,
            "video created"
        );
        Ok(VideoDto::from_record(created, now))
    }
}

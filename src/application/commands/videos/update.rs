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
        ExternalVideoId, PublishState, VideoDraft, VideoId, VideoTitle, VideoUpdate,
    },
};
use chrono::{DateTime, Utc};

/// Partial update. `None` leaves a field untouched; the nested options on
/// `description` and `publish_timestamp` allow clearing them. There is no slug
/// field: a stored slug never changes.
#[derive(Debug, Clone, Default)]
pub struct UpdateVideoCommand {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub video_id: Option<String>,
    pub active: Option<bool>,
    pub state: Option<PublishState>,
    pub publish_timestamp: Option<Option<DateTime<Utc>>>,
}

impl UpdateVideoCommand {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn video_id(mut self, video_id: impl Into<String>) -> Self {
        self.video_id = Some(video_id.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn state(mut self, state: PublishState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn publish_timestamp(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.publish_timestamp = Some(at);
        self
    }
}

impl VideoCommandService {
    pub async fn update_video(&self, command: UpdateVideoCommand) -> ApplicationResult<VideoDto> {
        let id = VideoId::new(command.id)?;
        let video = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("video not found"))?;

        let original_updated_at = video.updated_at;
        let mut draft = video.to_draft();
        apply_patch(&mut draft, command)?;

        self.pipeline
            .run(&mut draft)
            .inspect_err(|err| log_rejected("update", err))?;

        let now = self.clock.now();
        let update = VideoUpdate::from_draft(id, draft, original_updated_at, now);
        let updated = self
            .write_repo
            .update(update)
            .await
            .inspect_err(|err| log_rejected("update", err))?;

        tracing::info!(
            id = %updated.id,
            state = %updated.state,
            active = updated.active,
            "video updated"
        );
        Ok(VideoDto::from_record(updated, now))
    }
}

fn apply_patch(draft: &mut VideoDraft, command: UpdateVideoCommand) -> ApplicationResult<()> {
    let UpdateVideoCommand {
        id: _,
        title,
        description,
        video_id,
        active,
        state,
        publish_timestamp,
    } = command;

    if let Some(title) = title {
        draft.title = VideoTitle::new(title)?;
    }
    if let Some(description) = description {
        draft.description = normalize_optional(description);
    }
    if let Some(video_id) = video_id {
        draft.external_id = ExternalVideoId::new(video_id)?;
    }
    if let Some(active) = active {
        draft.active = active;
    }
    if let Some(state) = state {
        draft.state = state;
    }
    if let Some(publish_timestamp) = publish_timestamp {
        draft.publish_timestamp = publish_timestamp;
    }
    Ok(())
}

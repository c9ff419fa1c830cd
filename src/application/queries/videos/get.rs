use super::VideoQueryService;
use crate::{
    application::{
        dto::VideoDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::video::{VideoId, VideoSlug},
};
use chrono::{DateTime, Utc};

pub struct GetVideoByIdQuery {
    pub id: i64,
}

/// Public lookup; records not visible at `at` are reported as missing.
pub struct GetPublishedVideoBySlugQuery {
    pub slug: String,
    pub at: Option<DateTime<Utc>>,
}

impl VideoQueryService {
    pub async fn get_video_by_id(&self, query: GetVideoByIdQuery) -> ApplicationResult<VideoDto> {
        let id = VideoId::new(query.id)?;
        let video = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("video not found"))?;
        Ok(VideoDto::from_record(video, self.clock.now()))
    }

    pub async fn get_published_video_by_slug(
        &self,
        query: GetPublishedVideoBySlugQuery,
    ) -> ApplicationResult<VideoDto> {
        let slug = VideoSlug::new(query.slug)?;
        let now = query.at.unwrap_or_else(|| self.clock.now());
        let video = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|video| video.is_published(now))
            .ok_or_else(|| ApplicationError::not_found("video not found"))?;
        Ok(VideoDto::from_record(video, now))
    }
}

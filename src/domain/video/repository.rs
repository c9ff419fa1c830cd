use crate::domain::errors::DomainResult;
use crate::domain::video::entity::{NewVideo, VideoRecord, VideoUpdate};
use crate::domain::video::projection::VideoListQuery;
use crate::domain::video::value_objects::{PlaylistId, VideoId, VideoSlug};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Write side of the persistence engine. Each call is one atomic commit;
/// uniqueness of `slug` and `video_id` is enforced here and reported as
/// [`crate::domain::errors::ConstraintViolation`].
#[async_trait]
pub trait VideoWriteRepository: Send + Sync {
    async fn insert(&self, video: NewVideo) -> DomainResult<VideoRecord>;
    /// Fails with `Conflict` when the row changed since `original_updated_at`.
    async fn update(&self, update: VideoUpdate) -> DomainResult<VideoRecord>;
    /// Sets `active = false` on the still-active rows among `ids` and returns
    /// how many rows changed.
    async fn deactivate_many(&self, ids: &[VideoId], updated_at: DateTime<Utc>)
    -> DomainResult<u64>;
}

#[async_trait]
pub trait VideoReadRepository: Send + Sync {
    async fn find_by_id(&self, id: VideoId) -> DomainResult<Option<VideoRecord>>;
    async fn find_by_slug(&self, slug: &VideoSlug) -> DomainResult<Option<VideoRecord>>;
    async fn list(&self, query: &VideoListQuery) -> DomainResult<Vec<VideoRecord>>;
}

/// Read-only view of the playlist collaborator's membership table.
#[async_trait]
pub trait PlaylistMembership: Send + Sync {
    async fn playlist_ids_for(&self, video: VideoId) -> DomainResult<Vec<PlaylistId>>;
}

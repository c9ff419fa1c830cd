//! Process-local store with the same guarantees the database schema gives:
//! unique `slug` and `video_id`, the publish-timestamp check, optimistic
//! concurrency on `updated`. Every operation runs under one lock, so each
//! call commits atomically.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::errors::{ConstraintViolation, DomainError, DomainResult};
use crate::domain::video::{
    NewVideo, PlaylistId, PlaylistMembership, VideoId, VideoListQuery, VideoReadRepository,
    VideoRecord, VideoSlug, VideoUpdate, VideoWriteRepository, publication,
};

#[derive(Default)]
struct Store {
    last_id: i64,
    videos: BTreeMap<VideoId, VideoRecord>,
    playlists: HashMap<VideoId, Vec<PlaylistId>>,
}

impl Store {
    fn ensure_unique(
        &self,
        slug: Option<&VideoSlug>,
        external_id: &str,
        ignore: Option<VideoId>,
    ) -> DomainResult<()> {
        for video in self.videos.values() {
            if Some(video.id) == ignore {
                continue;
            }
            if slug.is_some_and(|slug| *slug == video.slug) {
                return Err(ConstraintViolation::DuplicateSlug.into());
            }
            if video.external_id.as_str() == external_id {
                return Err(ConstraintViolation::DuplicateExternalId.into());
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryVideoRepository {
    inner: Mutex<Store>,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, Store>> {
        self.inner
            .lock()
            .map_err(|_| DomainError::Persistence("video store lock poisoned".into()))
    }

    /// Records that `playlist` features `video`. Stands in for the playlist
    /// collaborator, which owns this relation.
    pub fn link_playlist(&self, playlist: PlaylistId, video: VideoId) -> DomainResult<()> {
        let mut store = self.lock()?;
        if !store.videos.contains_key(&video) {
            return Err(DomainError::NotFound("video not found".into()));
        }
        let entries = store.playlists.entry(video).or_default();
        if !entries.contains(&playlist) {
            entries.push(playlist);
        }
        Ok(())
    }
}

#[async_trait]
impl VideoWriteRepository for InMemoryVideoRepository {
    async fn insert(&self, video: NewVideo) -> DomainResult<VideoRecord> {
        let mut store = self.lock()?;
        store.ensure_unique(Some(&video.slug), video.external_id.as_str(), None)?;
        publication::validate(&video)?;

        let id = VideoId::new(store.last_id + 1)?;
        store.last_id += 1;

        let record = VideoRecord {
            id,
            title: video.title,
            description: video.description,
            slug: video.slug,
            external_id: video.external_id,
            active: video.active,
            state: video.state,
            publish_timestamp: video.publish_timestamp,
            created_at: video.created_at,
            updated_at: video.updated_at,
        };
        store.videos.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, update: VideoUpdate) -> DomainResult<VideoRecord> {
        let mut store = self.lock()?;
        let current = store
            .videos
            .get(&update.id)
            .ok_or_else(|| DomainError::NotFound("video not found".into()))?;
        if current.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "video was modified concurrently, please retry".into(),
            ));
        }

        let mut record = current.clone();
        record.title = update.title;
        record.description = update.description;
        record.external_id = update.external_id;
        record.active = update.active;
        record.state = update.state;
        record.publish_timestamp = update.publish_timestamp;
        record.updated_at = update.updated_at;

        store.ensure_unique(None, record.external_id.as_str(), Some(record.id))?;
        publication::validate(&record)?;

        store.videos.insert(record.id, record.clone());
        Ok(record)
    }

    async fn deactivate_many(
        &self,
        ids: &[VideoId],
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let mut store = self.lock()?;
        let mut affected = 0;
        for id in ids {
            if let Some(video) = store.videos.get_mut(id) {
                if video.active {
                    video.active = false;
                    video.updated_at = updated_at;
                    affected += 1;
                }
            }
        }
        Ok(affected)
    }
}

#[async_trait]
impl VideoReadRepository for InMemoryVideoRepository {
    async fn find_by_id(&self, id: VideoId) -> DomainResult<Option<VideoRecord>> {
        Ok(self.lock()?.videos.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &VideoSlug) -> DomainResult<Option<VideoRecord>> {
        Ok(self
            .lock()?
            .videos
            .values()
            .find(|video| video.slug == *slug)
            .cloned())
    }

    async fn list(&self, query: &VideoListQuery) -> DomainResult<Vec<VideoRecord>> {
        let store = self.lock()?;
        let mut matching: Vec<VideoRecord> = store
            .videos
            .values()
            .filter(|video| query.matches(video))
            .cloned()
            .collect();
        drop(store);

        matching.sort_by(|a, b| query.ordering.compare(a, b));
        let offset = usize::try_from(query.offset).unwrap_or(usize::MAX);
        Ok(matching
            .into_iter()
            .skip(offset)
            .take(query.limit as usize)
            .collect())
    }
}

#[async_trait]
impl PlaylistMembership for InMemoryVideoRepository {
    async fn playlist_ids_for(&self, video: VideoId) -> DomainResult<Vec<PlaylistId>> {
        let mut ids = self
            .lock()?
            .playlists
            .get(&video)
            .cloned()
            .unwrap_or_default();
        ids.sort_unstable();
        Ok(ids)
    }
}

use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::video::{PlaylistId, PlaylistMembership, VideoId};
use async_trait::async_trait;
use sqlx::PgPool;

/// Reads the playlist collaborator's `playlist_videos` table. Never writes.
#[derive(Clone)]
pub struct PostgresPlaylistMembership {
    pool: PgPool,
}

impl PostgresPlaylistMembership {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlaylistMembership for PostgresPlaylistMembership {
    async fn playlist_ids_for(&self, video: VideoId) -> DomainResult<Vec<PlaylistId>> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT DISTINCT playlist_id FROM playlist_videos WHERE video_id = $1 ORDER BY playlist_id",
        )
        .bind(i64::from(video))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ids.into_iter().map(PlaylistId::new).collect()
    }
}

use super::VideoQueryService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::video::{PlaylistId, VideoId},
};

pub struct GetPlaylistIdsQuery {
    pub video_id: i64,
}

impl VideoQueryService {
    /// Ids of the playlists featuring the video, ascending.
    pub async fn get_playlist_ids(
        &self,
        query: GetPlaylistIdsQuery,
    ) -> ApplicationResult<Vec<PlaylistId>> {
        let id = VideoId::new(query.video_id)?;
        if self.read_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("video not found"));
        }

        let mut ids = self.playlists.playlist_ids_for(id).await?;
        ids.sort_unstable();
        ids.dedup();
        Ok(ids)
    }
}

use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::video::{PlaylistMembership, VideoReadRepository},
};

pub struct VideoQueryService {
    pub(super) read_repo: Arc<dyn VideoReadRepository>,
    pub(super) playlists: Arc<dyn PlaylistMembership>,
    pub(super) clock: Arc<dyn Clock>,
}

impl VideoQueryService {
    pub fn new(
        read_repo: Arc<dyn VideoReadRepository>,
        playlists: Arc<dyn PlaylistMembership>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            playlists,
            clock,
        }
    }
}

// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::videos::VideoCommandService,
        ports::{ClockPort, SlugGeneratorPort},
        queries::videos::VideoQueryService,
    },
    domain::video::{
        PlaylistMembership, VideoReadRepository, VideoWriteRepository,
        services::{PreCommitPipeline, VideoSlugService},
    },
};

/// Wires repositories and ports into the command and query services handed
/// to the admin layer.
pub struct ApplicationServices {
    video_commands: Arc<VideoCommandService>,
    video_queries: Arc<VideoQueryService>,
}

impl ApplicationServices {
    pub fn new(
        video_write_repo: Arc<dyn VideoWriteRepository>,
        video_read_repo: Arc<dyn VideoReadRepository>,
        playlists: Arc<dyn PlaylistMembership>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
    ) -> Self {
        let slug_service = Arc::new(VideoSlugService::new(Arc::clone(&slugger)));
        let pipeline = Arc::new(PreCommitPipeline::new(Arc::clone(&slug_service)));

        let video_commands = Arc::new(VideoCommandService::new(
            Arc::clone(&video_write_repo),
            Arc::clone(&video_read_repo),
            Arc::clone(&pipeline),
            Arc::clone(&clock),
        ));

        let video_queries = Arc::new(VideoQueryService::new(
            Arc::clone(&video_read_repo),
            Arc::clone(&playlists),
            Arc::clone(&clock),
        ));

        Self {
            video_commands,
            video_queries,
        }
    }

    pub fn video_commands(&self) -> Arc<VideoCommandService> {
        Arc::clone(&self.video_commands)
    }

    pub fn video_queries(&self) -> Arc<VideoQueryService> {
        Arc::clone(&self.video_queries)
    }
}

// tests/support/helpers.rs
use std::sync::Arc;

use video_catalog::application::commands::videos::VideoCommandService;
use video_catalog::application::ports::{time::Clock, util::SlugGenerator};
use video_catalog::application::queries::videos::VideoQueryService;
use video_catalog::application::services::ApplicationServices;
use video_catalog::domain::video::{PlaylistMembership, VideoReadRepository, VideoWriteRepository};
use video_catalog::infrastructure::repositories::InMemoryVideoRepository;
use video_catalog::infrastructure::util::DefaultSlugGenerator;

use super::clock::ManualClock;

pub struct TestHarness {
    pub repo: Arc<InMemoryVideoRepository>,
    pub clock: Arc<ManualClock>,
    pub commands: Arc<VideoCommandService>,
    pub queries: Arc<VideoQueryService>,
}

/// Services backed by the in-memory store and a manual clock.
pub fn harness() -> TestHarness {
    let repo = Arc::new(InMemoryVideoRepository::new());
    let clock = Arc::new(ManualClock::default());

    let write: Arc<dyn VideoWriteRepository> = repo.clone();
    let read: Arc<dyn VideoReadRepository> = repo.clone();
    let playlists: Arc<dyn PlaylistMembership> = repo.clone();
    let clock_port: Arc<dyn Clock> = clock.clone();
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = ApplicationServices::new(write, read, playlists, clock_port, slugger);

    TestHarness {
        repo,
        clock,
        commands: services.video_commands(),
        queries: services.video_queries(),
    }
}

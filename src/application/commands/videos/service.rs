// src/application/commands/videos/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        errors::DomainError,
        video::{
            VideoReadRepository, VideoWriteRepository,
            services::PreCommitPipeline,
        },
    },
};

pub struct VideoCommandService {
    pub(super) write_repo: Arc<dyn VideoWriteRepository>,
    pub(super) read_repo: Arc<dyn VideoReadRepository>,
    pub(super) pipeline: Arc<PreCommitPipeline>,
    pub(super) clock: Arc<dyn Clock>,
}

impl VideoCommandService {
    pub fn new(
        write_repo: Arc<dyn VideoWriteRepository>,
        read_repo: Arc<dyn VideoReadRepository>,
        pipeline: Arc<PreCommitPipeline>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            pipeline,
            clock,
        }
    }
}

pub(super) fn log_rejected(operation: &'static str, err: &DomainError) {
    tracing::warn!(operation, error = %err, "video write rejected");
}

/// Blank optional text is stored as absent.
pub(super) fn normalize_optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// src/domain/video/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::video::entity::VideoDraft;
use crate::domain::video::publication;
use crate::domain::video::value_objects::VideoSlug;

/// Domain service that fills in a missing slug from the title.
///
/// Collisions are left to the store's uniqueness constraint; no suffix is
/// appended.
pub struct VideoSlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl VideoSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// Returns `true` when a slug was derived, `false` when one was already set.
    pub fn assign_if_missing(&self, draft: &mut VideoDraft) -> DomainResult<bool> {
        if draft.slug.is_some() {
            return Ok(false);
        }

        let derived = self.generator.slugify(draft.title.as_str());
        if derived.is_empty() {
            return Err(DomainError::invalid(format!(
                "title {:?} does not produce a usable slug",
                draft.title.as_str()
            )));
        }

        draft.slug = Some(VideoSlug::new(derived)?);
        Ok(true)
    }
}

/// Steps run, in order, on every draft before it is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreCommitStep {
    AssignSlug,
    ValidatePublication,
}

pub const PRE_COMMIT_STEPS: [PreCommitStep; 2] =
    [PreCommitStep::AssignSlug, PreCommitStep::ValidatePublication];

pub struct PreCommitPipeline {
    slugs: Arc<VideoSlugService>,
}

impl PreCommitPipeline {
    pub fn new(slugs: Arc<VideoSlugService>) -> Self {
        Self { slugs }
    }

    /// Runs every step; the first failure stops the write.
    pub fn run(&self, draft: &mut VideoDraft) -> DomainResult<VideoSlug> {
        for step in PRE_COMMIT_STEPS {
            match step {
                PreCommitStep::AssignSlug => {
                    self.slugs.assign_if_missing(draft)?;
                }
                PreCommitStep::ValidatePublication => publication::validate(draft)?,
            }
        }

        draft
            .slug
            .clone()
            .ok_or_else(|| DomainError::invalid("slug missing after pre-commit"))
    }
}

// src/application/commands/videos/unpublish.rs
use super::VideoCommandService;
use crate::{application::error::ApplicationResult, domain::video::VideoId};

/// Hide a batch of records through the `active` kill-switch. Publish state
/// and timestamps are left as they are.
pub struct BulkUnpublishCommand {
    pub ids: Vec<i64>,
}

impl VideoCommandService {
    pub async fn bulk_unpublish(&self, command: BulkUnpublishCommand) -> ApplicationResult<u64> {
        let mut ids = command
            .ids
            .into_iter()
            .map(VideoId::new)
            .collect::<Result<Vec<_>, _>>()?;
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(0);
        }

        let now = self.clock.now();
        let affected = self.write_repo.deactivate_many(&ids, now).await?;

        tracing::info!(
            requested = ids.len(),
            affected,
            "{affected} video(s) were unpublished"
        );
        Ok(affected)
    }
}

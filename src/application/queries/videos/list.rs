use super::VideoQueryService;
use crate::{
    application::{
        dto::{OffsetPage, VideoDto},
        error::ApplicationResult,
    },
    domain::video::{CreatedRange, PublishState, VideoListQuery, VideoOrdering, VideoProjection},
};
use chrono::{DateTime, Utc};

/// Admin listing over every record.
#[derive(Debug, Clone, Default)]
pub struct ListAllVideosQuery {
    pub ordering: Option<VideoOrdering>,
    pub search: Option<String>,
    pub state: Option<PublishState>,
    pub active: Option<bool>,
    pub created: CreatedRange,
    pub limit: u32,
    pub offset: u64,
}

/// Listing over the records visible at `at` (the clock's reading when absent).
#[derive(Debug, Clone, Default)]
pub struct ListPublishedVideosQuery {
    pub at: Option<DateTime<Utc>>,
    pub ordering: Option<VideoOrdering>,
    pub search: Option<String>,
    pub created: CreatedRange,
    pub limit: u32,
    pub offset: u64,
}

impl VideoQueryService {
    pub async fn list_all(
        &self,
        query: ListAllVideosQuery,
    ) -> ApplicationResult<OffsetPage<VideoDto>> {
        let now = self.clock.now();
        let list_query = VideoProjection::All
            .query(now)
            .with_ordering(query.ordering)
            .with_search(query.search)
            .with_state(query.state)
            .with_active(query.active)
            .with_created(query.created)
            .with_limit(query.limit)
            .with_offset(query.offset);

        self.fetch_page(list_query, now).await
    }

    pub async fn list_published(
        &self,
        query: ListPublishedVideosQuery,
    ) -> ApplicationResult<OffsetPage<VideoDto>> {
        let now = query.at.unwrap_or_else(|| self.clock.now());
        let list_query = VideoProjection::Published
            .query(now)
            .with_ordering(query.ordering)
            .with_search(query.search)
            .with_created(query.created)
            .with_limit(query.limit)
            .with_offset(query.offset);

        self.fetch_page(list_query, now).await
    }

    /// Fetches one extra row to learn whether another page follows.
    async fn fetch_page(
        &self,
        query: VideoListQuery,
        now: DateTime<Utc>,
    ) -> ApplicationResult<OffsetPage<VideoDto>> {
        let limit = query.limit;
        let offset = query.offset;
        let lookahead = VideoListQuery {
            limit: limit.saturating_add(1),
            ..query
        };

        let mut records = self.read_repo.list(&lookahead).await?;
        tracing::debug!(
            rows = records.len(),
            limit,
            offset,
            published_only = lookahead.published.is_some(),
            "listed videos"
        );

        let next_offset = if records.len() > limit as usize {
            records.truncate(limit as usize);
            Some(offset + u64::from(limit))
        } else {
            None
        };

        let items = records
            .into_iter()
            .map(|record| VideoDto::from_record(record, now))
            .collect();
        Ok(OffsetPage::new(items, next_offset))
    }
}

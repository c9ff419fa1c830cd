//! Named read paths over the video table.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use crate::domain::video::entity::VideoRecord;
use crate::domain::video::publication::PublishedFilter;
use crate::domain::video::value_objects::PublishState;

pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoProjection {
    /// Every record, newest first.
    All,
    /// Records visible at the evaluation instant, most recently published first.
    Published,
}

impl VideoProjection {
    pub const fn default_ordering(self) -> VideoOrdering {
        match self {
            Self::All => VideoOrdering::CreatedDesc,
            Self::Published => VideoOrdering::PublishTimestampDesc,
        }
    }

    pub const fn default_page_size(self) -> u32 {
        match self {
            Self::All => 25,
            Self::Published => 20,
        }
    }

    /// Base query for this projection. `now` is only consulted by `Published`.
    pub fn query(self, now: DateTime<Utc>) -> VideoListQuery {
        VideoListQuery {
            published: match self {
                Self::All => None,
                Self::Published => Some(PublishedFilter::at(now)),
            },
            state: None,
            active: None,
            search: None,
            created: CreatedRange::default(),
            ordering: self.default_ordering(),
            limit: self.default_page_size(),
            offset: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoOrdering {
    CreatedDesc,
    CreatedAsc,
    /// Records without a publish timestamp sort last.
    PublishTimestampDesc,
    PublishTimestampAsc,
    /// Case-insensitive.
    TitleAsc,
}

impl VideoOrdering {
    /// In-process equivalent of the SQL ordering; ties break on id, newest first.
    pub fn compare(self, a: &VideoRecord, b: &VideoRecord) -> Ordering {
        let primary = match self {
            Self::CreatedDesc => b.created_at.cmp(&a.created_at),
            Self::CreatedAsc => a.created_at.cmp(&b.created_at),
            Self::PublishTimestampDesc => {
                nulls_last(a.publish_timestamp, b.publish_timestamp, |x, y| y.cmp(&x))
            }
            Self::PublishTimestampAsc => {
                nulls_last(a.publish_timestamp, b.publish_timestamp, |x, y| x.cmp(&y))
            }
            Self::TitleAsc => a
                .title
                .as_str()
                .to_lowercase()
                .cmp(&b.title.as_str().to_lowercase()),
        };
        primary.then_with(|| b.id.cmp(&a.id))
    }
}

fn nulls_last(
    a: Option<DateTime<Utc>>,
    b: Option<DateTime<Utc>>,
    cmp: impl Fn(DateTime<Utc>, DateTime<Utc>) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => cmp(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Half-open `[from, until)` window over the creation instant. Either end may
/// be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreatedRange {
    pub from: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl CreatedRange {
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| at >= from) && self.until.is_none_or(|until| at < until)
    }
}

/// Filtered, ordered and paged listing request handed to the read repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoListQuery {
    pub published: Option<PublishedFilter>,
    pub state: Option<PublishState>,
    pub active: Option<bool>,
    pub search: Option<String>,
    pub created: CreatedRange,
    pub ordering: VideoOrdering,
    pub limit: u32,
    pub offset: u64,
}

impl VideoListQuery {
    pub fn with_state(mut self, state: Option<PublishState>) -> Self {
        self.state = state;
        self
    }

    pub fn with_active(mut self, active: Option<bool>) -> Self {
        self.active = active;
        self
    }

    /// Blank search terms are dropped.
    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty());
        self
    }

    pub fn with_created(mut self, created: CreatedRange) -> Self {
        self.created = created;
        self
    }

    pub fn with_ordering(mut self, ordering: Option<VideoOrdering>) -> Self {
        if let Some(ordering) = ordering {
            self.ordering = ordering;
        }
        self
    }

    /// Zero keeps the projection default; anything else is capped.
    pub fn with_limit(mut self, limit: u32) -> Self {
        if limit != 0 {
            self.limit = limit.min(MAX_PAGE_SIZE);
        }
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// In-process evaluation of every filter in this query.
    pub fn matches(&self, record: &VideoRecord) -> bool {
        if let Some(filter) = &self.published {
            if !filter.matches(record) {
                return false;
            }
        }
        if self.state.is_some_and(|state| state != record.state) {
            return false;
        }
        if self.active.is_some_and(|active| active != record.active) {
            return false;
        }
        if !self.created.contains(record.created_at) {
            return false;
        }
        match &self.search {
            Some(term) => {
                let term = term.to_lowercase();
                record.title.as_str().to_lowercase().contains(&term)
                    || record.external_id.as_str().to_lowercase().contains(&term)
            }
            None => true,
        }
    }
}

//! Publication rules for video records.
//!
//! `state` records what an editor intends; visibility is what end users get.
//! Visibility is defined once, as the conjunction of [`VISIBILITY_CLAUSES`].
//! The instance check ([`is_visible`]) and the query-time filter
//! ([`PublishedFilter`]) both walk that list, and every persistence adapter
//! renders the same clauses, so the two cannot drift apart.

use chrono::{DateTime, Utc};

use crate::domain::errors::ValidationError;
use crate::domain::video::value_objects::PublishState;

/// The fields visibility depends on. Implemented by stored records and by
/// in-flight drafts so validation and visibility run on either.
pub trait PublicationFields {
    fn active(&self) -> bool;
    fn state(&self) -> PublishState;
    fn publish_timestamp(&self) -> Option<DateTime<Utc>>;
}

/// One conjunct of the visibility predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityClause {
    /// `active == true`
    Active,
    /// `state == PUBLISH`
    StateIsPublish,
    /// `publish_timestamp IS NOT NULL AND publish_timestamp <= now`
    PublishedNotAfter,
}

pub const VISIBILITY_CLAUSES: [VisibilityClause; 3] = [
    VisibilityClause::Active,
    VisibilityClause::StateIsPublish,
    VisibilityClause::PublishedNotAfter,
];

impl VisibilityClause {
    pub fn holds<R: PublicationFields + ?Sized>(self, record: &R, now: DateTime<Utc>) -> bool {
        match self {
            Self::Active => record.active(),
            Self::StateIsPublish => record.state() == PublishState::Publish,
            Self::PublishedNotAfter => record.publish_timestamp().is_some_and(|at| at <= now),
        }
    }
}

/// Pre-commit check. A record marked for publication must carry the instant
/// it goes live.
pub fn validate<R: PublicationFields + ?Sized>(record: &R) -> Result<(), ValidationError> {
    if record.state() == PublishState::Publish && record.publish_timestamp().is_none() {
        return Err(ValidationError::MissingPublishTimestamp);
    }
    Ok(())
}

/// Whether `record` should be shown to end users at `now`.
pub fn is_visible<R: PublicationFields + ?Sized>(record: &R, now: DateTime<Utc>) -> bool {
    VISIBILITY_CLAUSES
        .iter()
        .all(|clause| clause.holds(record, now))
}

/// Query-time form of [`is_visible`], with `now` frozen at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishedFilter {
    now: DateTime<Utc>,
}

impl PublishedFilter {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn clauses(&self) -> &'static [VisibilityClause] {
        &VISIBILITY_CLAUSES
    }

    pub fn matches<R: PublicationFields + ?Sized>(&self, record: &R) -> bool {
        is_visible(record, self.now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    struct Fields {
        active: bool,
        state: PublishState,
        at: Option<DateTime<Utc>>,
    }

    impl PublicationFields for Fields {
        fn active(&self) -> bool {
            self.active
        }
        fn state(&self) -> PublishState {
            self.state
        }
        fn publish_timestamp(&self) -> Option<DateTime<Utc>> {
            self.at
        }
    }

    fn published(at: Option<DateTime<Utc>>) -> Fields {
        Fields {
            active: true,
            state: PublishState::Publish,
            at,
        }
    }

    #[test]
    fn publish_without_timestamp_is_rejected() {
        assert_eq!(
            validate(&published(None)),
            Err(ValidationError::MissingPublishTimestamp)
        );
    }

    #[test]
    fn draft_without_timestamp_is_valid() {
        let draft = Fields {
            active: true,
            state: PublishState::Draft,
            at: None,
        };
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn scheduled_publish_becomes_visible_at_its_instant() {
        let now = Utc::now();
        let at = now + Duration::hours(1);
        let record = published(Some(at));

        assert!(!is_visible(&record, now));
        assert!(is_visible(&record, at));
        assert!(is_visible(&record, at + Duration::seconds(1)));
    }

    #[test]
    fn kill_switch_hides_published_record() {
        let now = Utc::now();
        let mut record = published(Some(now - Duration::days(1)));
        assert!(is_visible(&record, now));
        record.active = false;
        assert!(!is_visible(&record, now));
    }

    #[test]
    fn draft_with_past_timestamp_is_hidden() {
        let now = Utc::now();
        let record = Fields {
            active: true,
            state: PublishState::Draft,
            at: Some(now - Duration::days(1)),
        };
        assert!(!is_visible(&record, now));
    }

    #[test]
    fn filter_freezes_now() {
        let now = Utc::now();
        let filter = PublishedFilter::at(now);
        let record = published(Some(now + Duration::milliseconds(1)));
        assert_eq!(filter.now(), now);
        assert!(!filter.matches(&record));
        assert_eq!(filter.clauses().len(), 3);
    }
}

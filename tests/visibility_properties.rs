//! The published-only listing must select exactly the records the per-record
//! visibility check accepts, for any record and any evaluation instant.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration};
use proptest::prelude::*;

mod support;

use support::{VideoRecordBuilder, fixed_now};
use video_catalog::domain::video::{
    NewVideo, PublishState, PublishedFilter, VideoListQuery, VideoProjection, VideoReadRepository,
    VideoRecord, VideoWriteRepository, is_visible, validate,
};
use video_catalog::infrastructure::repositories::InMemoryVideoRepository;

fn arbitrary_state() -> impl Strategy<Value = PublishState> {
    prop_oneof![Just(PublishState::Draft), Just(PublishState::Publish)]
}

prop_compose! {
    /// Publish timestamps within a day either side of the fixed instant, at
    /// second resolution so boundaries are hit often.
    fn arbitrary_timestamp()(offset in -86_400i64..86_400) -> DateTime<chrono::Utc> {
        fixed_now() + Duration::seconds(offset)
    }
}

prop_compose! {
    fn arbitrary_record()(
        id in 1i64..10_000,
        active in any::<bool>(),
        state in arbitrary_state(),
        publish_timestamp in proptest::option::of(arbitrary_timestamp()),
    ) -> VideoRecord {
        VideoRecordBuilder::new()
            .id(id)
            .active(active)
            .state(state)
            .publish_timestamp(publish_timestamp)
            .build()
    }
}

fn to_new_video(record: VideoRecord) -> NewVideo {
    NewVideo {
        title: record.title,
        description: record.description,
        slug: record.slug,
        external_id: record.external_id,
        active: record.active,
        state: record.state,
        publish_timestamp: record.publish_timestamp,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}

proptest! {
    #[test]
    fn filter_agrees_with_instance_check(
        record in arbitrary_record(),
        now in arbitrary_timestamp(),
    ) {
        let filter = PublishedFilter::at(now);
        prop_assert_eq!(filter.matches(&record), is_visible(&record, now));
        prop_assert_eq!(record.is_published(now), is_visible(&record, now));
    }

    #[test]
    fn published_projection_agrees_with_instance_check(
        record in arbitrary_record(),
        now in arbitrary_timestamp(),
    ) {
        let query: VideoListQuery = VideoProjection::Published.query(now);
        prop_assert_eq!(query.matches(&record), is_visible(&record, now));
    }

    #[test]
    fn visibility_requires_every_condition(
        record in arbitrary_record(),
        now in arbitrary_timestamp(),
    ) {
        let expected = record.active
            && record.state == PublishState::Publish
            && record.publish_timestamp.is_some_and(|at| at <= now);
        prop_assert_eq!(is_visible(&record, now), expected);
    }

    #[test]
    fn visible_records_always_pass_validation(
        record in arbitrary_record(),
        now in arbitrary_timestamp(),
    ) {
        if is_visible(&record, now) {
            prop_assert!(validate(&record).is_ok());
        }
    }

    #[test]
    fn store_listing_selects_exactly_the_visible_records(
        records in prop::collection::btree_map(1i64..500, arbitrary_record(), 0..40),
        now in arbitrary_timestamp(),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        let (expected, listed) = runtime.block_on(async {
            let repo = InMemoryVideoRepository::new();
            let mut expected = BTreeSet::new();

            for (key, record) in records {
                let record = VideoRecordBuilder::new()
                    .id(key)
                    .active(record.active)
                    .state(record.state)
                    .publish_timestamp(record.publish_timestamp)
                    .build();
                if validate(&record).is_err() {
                    continue;
                }
                let visible = is_visible(&record, now);
                let stored = repo.insert(to_new_video(record)).await.unwrap();
                if visible {
                    expected.insert(stored.slug.into_inner());
                }
            }

            let query = VideoProjection::Published.query(now).with_limit(100);
            let listed: BTreeSet<String> = repo
                .list(&query)
                .await
                .unwrap()
                .into_iter()
                .map(|video| video.slug.into_inner())
                .collect();
            (expected, listed)
        });

        prop_assert_eq!(listed, expected);
    }
}

// src/infrastructure/repositories/postgres_video.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::video::{
    ExternalVideoId, NewVideo, PublishState, PublishedFilter, VideoId, VideoListQuery,
    VideoOrdering, VideoReadRepository, VideoRecord, VideoSlug, VideoTitle, VideoUpdate,
    VideoWriteRepository, VisibilityClause,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const SELECT_VIDEO: &str = "SELECT id, title, description, slug, video_id, active, state, publish_timestamp, created, updated FROM videos";

#[derive(Clone)]
pub struct PostgresVideoRepository {
    pool: PgPool,
}

impl PostgresVideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct VideoRow {
    id: i64,
    title: String,
    description: Option<String>,
    slug: String,
    video_id: String,
    active: bool,
    state: String,
    publish_timestamp: Option<DateTime<Utc>>,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl TryFrom<VideoRow> for VideoRecord {
    type Error = DomainError;

    fn try_from(row: VideoRow) -> Result<Self, Self::Error> {
        Ok(VideoRecord {
            id: VideoId::new(row.id)?,
            title: VideoTitle::new(row.title)?,
            description: row.description,
            slug: VideoSlug::new(row.slug)?,
            external_id: ExternalVideoId::new(row.video_id)?,
            active: row.active,
            state: row.state.parse::<PublishState>()?,
            publish_timestamp: row.publish_timestamp,
            created_at: row.created,
            updated_at: row.updated,
        })
    }
}

#[async_trait]
impl VideoWriteRepository for PostgresVideoRepository {
    async fn insert(&self, video: NewVideo) -> DomainResult<VideoRecord> {
        let NewVideo {
            title,
            description,
            slug,
            external_id,
            active,
            state,
            publish_timestamp,
            created_at,
            updated_at,
        } = video;

        let row = sqlx::query_as::<_, VideoRow>(
            "INSERT INTO videos (title, description, slug, video_id, active, state, publish_timestamp, created, updated)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id, title, description, slug, video_id, active, state, publish_timestamp, created, updated",
        )
        .bind(title.as_str())
        .bind(description)
        .bind(slug.as_str())
        .bind(external_id.as_str())
        .bind(active)
        .bind(state.code())
        .bind(publish_timestamp)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        VideoRecord::try_from(row)
    }

    async fn update(&self, update: VideoUpdate) -> DomainResult<VideoRecord> {
        let VideoUpdate {
            id,
            title,
            description,
            external_id,
            active,
            state,
            publish_timestamp,
            original_updated_at,
            updated_at,
        } = update;

        let maybe_row = sqlx::query_as::<_, VideoRow>(
            "UPDATE videos
             SET title = $1, description = $2, video_id = $3, active = $4, state = $5,
                 publish_timestamp = $6, updated = $7
             WHERE id = $8 AND updated = $9
             RETURNING id, title, description, slug, video_id, active, state, publish_timestamp, created, updated",
        )
        .bind(title.as_str())
        .bind(description)
        .bind(external_id.as_str())
        .bind(active)
        .bind(state.code())
        .bind(publish_timestamp)
        .bind(updated_at)
        .bind(i64::from(id))
        .bind(original_updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match maybe_row {
            Some(row) => VideoRecord::try_from(row),
            None => {
                let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM videos WHERE id = $1")
                    .bind(i64::from(id))
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(map_sqlx)?
                    .is_some();
                if exists {
                    Err(DomainError::Conflict(
                        "video was modified concurrently, please retry".into(),
                    ))
                } else {
                    Err(DomainError::NotFound("video not found".into()))
                }
            }
        }
    }

    async fn deactivate_many(
        &self,
        ids: &[VideoId],
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let result = sqlx::query(
            "UPDATE videos SET active = FALSE, updated = $1 WHERE id = ANY($2) AND active = TRUE",
        )
        .bind(updated_at)
        .bind(ids)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }
}

fn push_connector(builder: &mut QueryBuilder<'_, Postgres>, has_where: &mut bool) {
    if *has_where {
        builder.push(" AND ");
    } else {
        builder.push(" WHERE ");
        *has_where = true;
    }
}

/// SQL rendering of one visibility clause. Kept exhaustive so a new clause
/// cannot be added without deciding how the database evaluates it.
fn push_visibility_clause(
    builder: &mut QueryBuilder<'_, Postgres>,
    clause: VisibilityClause,
    now: DateTime<Utc>,
) {
    match clause {
        VisibilityClause::Active => {
            builder.push("active = TRUE");
        }
        VisibilityClause::StateIsPublish => {
            builder.push("state = ");
            builder.push_bind(PublishState::Publish.code());
        }
        VisibilityClause::PublishedNotAfter => {
            builder.push("(publish_timestamp IS NOT NULL AND publish_timestamp <= ");
            builder.push_bind(now);
            builder.push(")");
        }
    }
}

fn push_published_filter(
    builder: &mut QueryBuilder<'_, Postgres>,
    filter: &PublishedFilter,
    has_where: &mut bool,
) {
    for clause in filter.clauses() {
        push_connector(builder, has_where);
        push_visibility_clause(builder, *clause, filter.now());
    }
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

const fn order_by(ordering: VideoOrdering) -> &'static str {
    match ordering {
        VideoOrdering::CreatedDesc => " ORDER BY created DESC, id DESC",
        VideoOrdering::CreatedAsc => " ORDER BY created ASC, id DESC",
        VideoOrdering::PublishTimestampDesc => " ORDER BY publish_timestamp DESC NULLS LAST, id DESC",
        VideoOrdering::PublishTimestampAsc => " ORDER BY publish_timestamp ASC NULLS LAST, id DESC",
        VideoOrdering::TitleAsc => " ORDER BY LOWER(title) ASC, id DESC",
    }
}

pub(crate) fn build_list_query(query: &VideoListQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder: QueryBuilder<'static, Postgres> = QueryBuilder::new(SELECT_VIDEO);
    let mut has_where = false;

    if let Some(filter) = &query.published {
        push_published_filter(&mut builder, filter, &mut has_where);
    }

    if let Some(state) = query.state {
        push_connector(&mut builder, &mut has_where);
        builder.push("state = ");
        builder.push_bind(state.code());
    }

    if let Some(active) = query.active {
        push_connector(&mut builder, &mut has_where);
        builder.push("active = ");
        builder.push_bind(active);
    }

    if let Some(from) = query.created.from {
        push_connector(&mut builder, &mut has_where);
        builder.push("created >= ");
        builder.push_bind(from);
    }

    if let Some(until) = query.created.until {
        push_connector(&mut builder, &mut has_where);
        builder.push("created < ");
        builder.push_bind(until);
    }

    if let Some(term) = &query.search {
        let pattern = escape_like(term);
        push_connector(&mut builder, &mut has_where);
        builder.push("(title ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR video_id ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }

    builder.push(order_by(query.ordering));
    builder.push(" LIMIT ");
    builder.push_bind(i64::from(query.limit));
    builder.push(" OFFSET ");
    builder.push_bind(i64::try_from(query.offset).unwrap_or(i64::MAX));

    builder
}

#[async_trait]
impl VideoReadRepository for PostgresVideoRepository {
    async fn find_by_id(&self, id: VideoId) -> DomainResult<Option<VideoRecord>> {
        let row = sqlx::query_as::<_, VideoRow>(
            "SELECT id, title, description, slug, video_id, active, state, publish_timestamp, created, updated
             FROM videos WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(VideoRecord::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &VideoSlug) -> DomainResult<Option<VideoRecord>> {
        let row = sqlx::query_as::<_, VideoRow>(
            "SELECT id, title, description, slug, video_id, active, state, publish_timestamp, created, updated
             FROM videos WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(VideoRecord::try_from).transpose()
    }

    async fn list(&self, query: &VideoListQuery) -> DomainResult<Vec<VideoRecord>> {
        let mut builder = build_list_query(query);
        let rows = builder
            .build_query_as::<VideoRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(VideoRecord::try_from)
            .collect::<Result<Vec<_>, _>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::video::{CreatedRange, VideoProjection};

    #[test]
    fn published_projection_renders_every_visibility_clause() {
        let query = VideoProjection::Published.query(Utc::now());
        let builder = build_list_query(&query);
        let sql = builder.sql();

        assert!(sql.starts_with(SELECT_VIDEO));
        assert!(sql.contains(
            " WHERE active = TRUE AND state = $1 AND (publish_timestamp IS NOT NULL AND publish_timestamp <= $2)"
        ));
        assert!(sql.contains("ORDER BY publish_timestamp DESC NULLS LAST, id DESC"));
        assert!(sql.ends_with(" LIMIT $3 OFFSET $4"));
    }

    #[test]
    fn all_projection_has_no_where_clause() {
        let query = VideoProjection::All.query(Utc::now());
        let builder = build_list_query(&query);
        let sql = builder.sql();

        assert!(!sql.contains("WHERE"));
        assert!(sql.contains("ORDER BY created DESC, id DESC"));
    }

    #[test]
    fn filters_and_search_are_joined_with_and() {
        let query = VideoProjection::All
            .query(Utc::now())
            .with_state(Some(PublishState::Draft))
            .with_active(Some(true))
            .with_search(Some("intro".into()));
        let builder = build_list_query(&query);

        assert!(builder.sql().contains(
            " WHERE state = $1 AND active = $2 AND (title ILIKE $3 OR video_id ILIKE $4)"
        ));
    }

    #[test]
    fn created_window_is_half_open() {
        let now = Utc::now();
        let query = VideoProjection::All.query(now).with_created(CreatedRange {
            from: Some(now - chrono::Duration::days(7)),
            until: Some(now),
        });
        let builder = build_list_query(&query);

        assert!(builder.sql().contains(" WHERE created >= $1 AND created < $2"));
    }

    #[test]
    fn title_ordering_ignores_case() {
        let query = VideoProjection::All
            .query(Utc::now())
            .with_ordering(Some(VideoOrdering::TitleAsc));
        let builder = build_list_query(&query);

        assert!(builder.sql().contains("ORDER BY LOWER(title) ASC, id DESC"));
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "%50\\%\\_off\\\\%");
    }
}

use crate::domain::errors::{ConstraintViolation, DomainError, ValidationError};

const CNT_VIDEO_SLUG: &str = "videos_slug_key";
const CNT_VIDEO_EXTERNAL_ID: &str = "videos_video_id_key";
const CNT_VIDEO_PUBLISH_CHECK: &str = "videos_publish_requires_timestamp_chk";
const CNT_VIDEO_STATE_CHECK: &str = "videos_state_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_VIDEO_SLUG => ConstraintViolation::DuplicateSlug.into(),
                    CNT_VIDEO_EXTERNAL_ID => ConstraintViolation::DuplicateExternalId.into(),
                    CNT_VIDEO_PUBLISH_CHECK => ValidationError::MissingPublishTimestamp.into(),
                    CNT_VIDEO_STATE_CHECK => DomainError::invalid("unknown publish state"),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::invalid("check constraint violated");
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MAX_TITLE_LEN: usize = 220;
pub const MAX_EXTERNAL_ID_LEN: usize = 220;
pub const MAX_SLUG_LEN: usize = 220;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VideoId(i64);

impl VideoId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::invalid("video id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<VideoId> for i64 {
    fn from(value: VideoId) -> Self {
        value.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a playlist owned by the playlist collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistId(i64);

impl PlaylistId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::invalid("playlist id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PlaylistId> for i64 {
    fn from(value: PlaylistId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoTitle(String);

impl VideoTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid("title cannot be empty"));
        }
        if value.chars().count() > MAX_TITLE_LEN {
            return Err(DomainError::invalid(format!(
                "title cannot exceed {MAX_TITLE_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for VideoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// URL-safe, unique handle. Once stored it never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoSlug(String);

impl VideoSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid("slug cannot be empty"));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DomainError::invalid(
                "slug may only contain letters, digits, '-' and '_'",
            ));
        }
        if value.len() > MAX_SLUG_LEN {
            return Err(DomainError::invalid(format!(
                "slug cannot exceed {MAX_SLUG_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for VideoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of the video in the external hosting platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExternalVideoId(String);

impl ExternalVideoId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid("video_id cannot be empty"));
        }
        if trimmed.chars().count() > MAX_EXTERNAL_ID_LEN {
            return Err(DomainError::invalid(format!(
                "video_id cannot exceed {MAX_EXTERNAL_ID_LEN} characters"
            )));
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ExternalVideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Administrative publication intent. Visibility is derived separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PublishState {
    #[default]
    Draft,
    Publish,
}

impl PublishState {
    /// Two-letter code stored in the `state` column.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Draft => "DR",
            Self::Publish => "PU",
        }
    }
}

impl fmt::Display for PublishState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => f.write_str("DRAFT"),
            Self::Publish => f.write_str("PUBLISH"),
        }
    }
}

impl FromStr for PublishState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "DR" | "DRAFT" | "draft" => Ok(Self::Draft),
            "PU" | "PUBLISH" | "publish" => Ok(Self::Publish),
            other => Err(DomainError::invalid(format!(
                "unknown publish state: {other}"
            ))),
        }
    }
}

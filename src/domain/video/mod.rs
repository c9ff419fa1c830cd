pub mod entity;
pub mod projection;
pub mod publication;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewVideo, VideoDraft, VideoRecord, VideoUpdate};
pub use projection::{CreatedRange, VideoListQuery, VideoOrdering, VideoProjection};
pub use publication::{PublicationFields, PublishedFilter, VisibilityClause, is_visible, validate};
pub use repository::{PlaylistMembership, VideoReadRepository, VideoWriteRepository};
pub use value_objects::{
    ExternalVideoId, PlaylistId, PublishState, VideoId, VideoSlug, VideoTitle,
};

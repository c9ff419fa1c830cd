mod get;
mod list;
mod playlists;
mod service;

pub use get::{GetPublishedVideoBySlugQuery, GetVideoByIdQuery};
pub use list::{ListAllVideosQuery, ListPublishedVideosQuery};
pub use playlists::GetPlaylistIdsQuery;
pub use service::VideoQueryService;

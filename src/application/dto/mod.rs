pub mod pagination;
pub mod videos;

pub use pagination::OffsetPage;
pub use videos::VideoDto;

// src/infrastructure/repositories/mod.rs
mod error;
mod memory_video;
mod postgres_playlist;
mod postgres_video;

pub use error::map_sqlx;
pub use memory_video::InMemoryVideoRepository;
pub use postgres_playlist::PostgresPlaylistMembership;
pub use postgres_video::PostgresVideoRepository;

// src/application/commands/videos/mod.rs
mod create;
mod service;
mod unpublish;
mod update;

pub use create::{CreateVideoCommand, CreateVideoCommandBuilder};
pub use service::VideoCommandService;
pub use unpublish::BulkUnpublishCommand;
pub use update::UpdateVideoCommand;

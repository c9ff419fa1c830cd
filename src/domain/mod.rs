pub mod errors;
pub mod video;

// src/application/ports/util.rs

/// Turns free text into a lowercase, dash-separated, URL-safe token.
/// Returns an empty string when the input has no usable characters.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

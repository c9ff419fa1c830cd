use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Slugs via the `slug` crate: transliterated to ASCII, lowercased,
/// non-alphanumeric runs collapsed to a single `-`, edges trimmed.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_punctuation_runs() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Hello, World! 2024"), "hello-world-2024");
        assert_eq!(slugger.slugify("  --Rust -- Intro--  "), "rust-intro");
        assert_eq!(slugger.slugify("?!"), "");
    }
}

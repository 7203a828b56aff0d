// src/application/ports/util.rs

/// Turns free text into a URL-safe slug. Implementations must return a
/// non-empty string for any input, falling back to a fixed placeholder
/// when nothing survives normalization.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

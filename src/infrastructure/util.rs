use crate::application::ports::util::SlugGenerator;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Emitted when nothing of the title survives normalization.
const FALLBACK_SLUG: &str = "question";

/// Title-to-slug normalization: accent folding via NFD, then an ASCII
/// keep-set of letters, digits, underscore, and hyphen, with whitespace
/// runs becoming single hyphens. Idempotent over its own output.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let lowered = input.trim().to_lowercase();

        let mut slug = String::with_capacity(lowered.len());
        let mut previous_hyphen = false;
        for c in lowered.nfd().filter(|c| !is_combining_mark(*c)) {
            let mapped = if c.is_whitespace() {
                '-'
            } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                continue;
            };

            if mapped == '-' {
                if previous_hyphen {
                    continue;
                }
                previous_hyphen = true;
            } else {
                previous_hyphen = false;
            }
            slug.push(mapped);
        }

        let slug = slug.trim_matches('-');
        if slug.is_empty() {
            FALLBACK_SLUG.to_string()
        } else {
            slug.to_string()
        }
    }
}

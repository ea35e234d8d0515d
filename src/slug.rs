//! URL-slug text transform.

use regex::Regex;

/// Turn arbitrary text into a URL slug.
///
/// Lowercases and trims, strips everything outside word characters,
/// whitespace and hyphens, collapses whitespace/underscore/hyphen runs into
/// a single hyphen, and trims leading/trailing hyphens. Idempotent.
pub fn slugify(text: &str) -> String {
    // Note: we just create the regexes here (regex crate caches)
    let strip = Regex::new(r"[^\w\s-]").unwrap();
    let collapse = Regex::new(r"[\s_-]+").unwrap();

    let lowered = text.trim().to_lowercase();
    let stripped = strip.replace_all(&lowered, "");
    let collapsed = collapse.replace_all(&stripped, "-");

    collapsed.trim_matches('-').to_string()
}

//! Per-request locale resolution and message lookup.
//!
//! The request's locale is derived from an optional `lang` query parameter,
//! recomputed on each call. Lookups that miss (unknown locale, missing key)
//! silently fall back to the default locale and never fail.

use std::collections::HashMap;

use crate::i18n::Locale;

/// Code of the fallback locale. Its message table must contain every key
/// used by the response formatter.
pub const DEFAULT_LOCALE: &str = "eng";

/// Narrow capability for anything that can carry a requested locale.
///
/// The response formatter depends only on this contract, not on a specific
/// web framework's request type.
pub trait LocaleSource {
    /// The raw `lang` query parameter, if present.
    fn lang(&self) -> Option<&str>;
}

/// Query parameters as extracted by `axum::extract::Query`.
impl LocaleSource for HashMap<String, String> {
    fn lang(&self) -> Option<&str> {
        self.get("lang").map(String::as_str)
    }
}

impl LocaleSource for axum::extract::Query<HashMap<String, String>> {
    fn lang(&self) -> Option<&str> {
        self.0.lang()
    }
}

/// A bare optional code, convenient for tests and non-HTTP callers.
impl LocaleSource for Option<&str> {
    fn lang(&self) -> Option<&str> {
        *self
    }
}

/// Resolve the locale requested by `src`.
///
/// Returns the raw `lang` parameter, or [`DEFAULT_LOCALE`] when the
/// parameter is absent or empty. Unknown codes are returned as-is; they
/// resolve through the fallback at lookup time.
pub fn request_locale<S: LocaleSource + ?Sized>(src: &S) -> String {
    match src.lang() {
        Some(lang) if !lang.trim().is_empty() => lang.trim().to_string(),
        _ => DEFAULT_LOCALE.to_string(),
    }
}

/// Resolve the locale requested by `src` to a validated [`Locale`].
///
/// Unknown or disabled codes resolve to the default locale.
pub fn resolve_locale<S: LocaleSource + ?Sized>(src: &S) -> Locale {
    Locale::from_code(&request_locale(src)).unwrap_or_else(|_| Locale::default_locale())
}

/// Resolve `key` to localized text for the locale requested by `src`.
///
/// Pure function of (request locale, key, registry). An unknown locale or a
/// key missing from the requested locale's table falls back to the default
/// locale; a key absent even there yields `None`. Never fails.
pub fn translate<S: LocaleSource + ?Sized>(src: &S, key: &str) -> Option<&'static str> {
    resolve_locale(src)
        .message(key)
        .or_else(|| Locale::default_locale().message(key))
}

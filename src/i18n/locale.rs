//! Validated locale handle.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};

/// A locale known to the registry.
///
/// Construction is validated, so lookups through [`Locale::config`] cannot
/// miss. Per-request resolution (`resolve_locale`) produces one of these,
/// substituting the default locale for unknown codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    /// English, the default/fallback locale.
    pub const ENGLISH: Locale = Locale { code: "eng" };

    /// French.
    pub const FRENCH: Locale = Locale { code: "fra" };

    /// Spanish.
    pub const SPANISH: Locale = Locale { code: "spa" };

    /// Create a Locale from a locale code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is valid and the locale is enabled
    /// * `Err` if the code is not found or the locale is disabled
    pub fn from_code(code: &str) -> Result<Locale> {
        let registry = LocaleRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Get the default (fallback) locale.
    pub fn default_locale() -> Locale {
        let config = LocaleRegistry::get().default_locale();
        Locale { code: config.code }
    }

    /// Get the ISO 639-2 locale code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the locale code is not found in the registry. This should
    /// never happen if the Locale was constructed properly (via `from_code`
    /// or constants).
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// Message for `key` in this locale's own table, without fallback.
    ///
    /// `translate` layers the default-locale fallback on top of this.
    pub fn message(&self, key: &str) -> Option<&'static str> {
        self.config().message(key)
    }
}

//! Locale registry: Single source of truth for all supported locales.
//!
//! This module provides a centralized registry of all locales supported by the
//! application, each carrying its static message table. It uses a singleton
//! pattern with `OnceLock` to ensure thread-safe initialization and access.

use std::sync::OnceLock;

use crate::i18n::strings::{MessageTable, ENG_MESSAGES, FRA_MESSAGES, SPA_MESSAGES};

/// Configuration for a supported locale.
///
/// Contains the locale's metadata and its message table. The default locale
/// is complete; other tables may be partial and fall back to it.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-2 locale code (e.g., "eng", "fra")
    pub code: &'static str,

    /// English name of the locale (e.g., "English", "French")
    pub name: &'static str,

    /// Native name of the locale (e.g., "English", "Français")
    pub native_name: &'static str,

    /// Whether this is the default/fallback locale (only one should be true)
    pub is_default: bool,

    /// Whether this locale is enabled for use
    pub enabled: bool,

    /// Key/text table for this locale
    pub messages: MessageTable,
}

impl LocaleConfig {
    /// Look up a message key in this locale's table.
    ///
    /// # Returns
    /// * `Some(text)` if the key exists in this table
    /// * `None` if the key is absent (callers fall back to the default locale)
    pub fn message(&self, key: &str) -> Option<&'static str> {
        self.messages
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| *text)
    }
}

/// Global locale registry singleton.
///
/// This registry contains all supported locales and provides methods to query
/// and access them. It's initialized once on first access and remains
/// immutable thereafter.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Get the default locale configuration.
    ///
    /// The default locale is the fallback for every lookup and must contain
    /// every key used by the system. There should be exactly one.
    ///
    /// # Panics
    /// Panics if no default locale is found or if multiple default locales
    /// are defined (this indicates a configuration error).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

/// Default locale configurations.
///
/// This function returns the initial set of supported locales.
/// Currently supports English (default), French, and Spanish.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "eng",
            name: "English",
            native_name: "English",
            is_default: true,
            enabled: true,
            messages: ENG_MESSAGES,
        },
        LocaleConfig {
            code: "fra",
            name: "French",
            native_name: "Français",
            is_default: false,
            enabled: true,
            messages: FRA_MESSAGES,
        },
        LocaleConfig {
            code: "spa",
            name: "Spanish",
            native_name: "Español",
            is_default: false,
            enabled: true,
            messages: SPA_MESSAGES,
        },
    ]
}

//! Internationalization (i18n) module for localized API messages.
//!
//! This module provides a centralized, extensible architecture for resolving
//! message keys to localized text. All locale metadata, localized strings,
//! and lookup logic is contained here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their
//!   message tables
//! - `locale`: Type-safe Locale type validated against the registry
//! - `strings`: Static message tables, one per locale
//! - `translate`: Per-request locale resolution and key lookup
//!
//! # Example
//!
//! ```rust,ignore
//! use apikit::i18n::{request_locale, translate};
//!
//! // Query parameters extracted by the web framework
//! let params: HashMap<String, String> = query.0;
//!
//! let locale = request_locale(&params);             // "fra", or "eng" by default
//! let text = translate(&params, "not_found");       // localized, with fallback
//! ```

mod locale;
mod registry;
mod strings;
mod translate;

pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::MessageTable;
pub use translate::{request_locale, resolve_locale, translate, LocaleSource, DEFAULT_LOCALE};

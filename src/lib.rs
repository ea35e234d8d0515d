//! Cross-cutting helpers for HTTP API services built on axum.
//!
//! Three independent pieces:
//!
//! - [`response`]: uniform JSON envelopes with fixed status codes and
//!   localized messages, returned as finalized axum responses
//! - [`i18n`]: message-key lookup against a static locale registry, driven
//!   by the request's `lang` query parameter with default-locale fallback
//! - [`notify`]: best-effort webhook delivery of block-style payloads, with
//!   failures contained at the notifier boundary
//!
//! Handlers call into [`response`]; only the server-error path touches the
//! notifier, and a failed notification never reaches the handler.

pub mod config;
pub mod i18n;
pub mod notify;
pub mod response;
pub mod slug;

pub use config::Config;
pub use i18n::{request_locale, resolve_locale, translate, Locale, LocaleSource};
pub use notify::{error_blocks, log_blocks, Notifier};
pub use slug::slugify;

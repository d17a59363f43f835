//! Core crate for `aoiler`, a natural-language command dispatcher.
//!
//! A free-text query is classified into one of six services (file search,
//! organizer, formatter, OCR, converter or the LLM fallback) and run by the
//! [`host::Host`]. Frontends reach a host through the
//! [`aoiler_protocol::Backend`] trait, either in-process or over stdio via
//! [`host::serve`] and [`host::RemoteBackend`].

pub mod app_dirs;
pub mod host;
pub mod logging;
pub mod services;

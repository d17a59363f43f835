//! Terminal chat frontend for `aoiler`.
//!
//! The UI thread owns a [`session::Session`] and never talks to the backend
//! directly: queries, path suggestions and startup arguments go through the
//! [`worker`] thread, and replies are pumped back into the session once per
//! frame.

mod actions;
mod app;
mod components;
mod config;
pub mod debounce;
pub mod present;
mod render;
mod runtime;
pub mod session;
pub mod suggest;
pub mod theme;
pub mod worker;

pub use app::App;
pub use config::TuiConfig;
pub use runtime::run;
pub use theme::Theme;

//! Configuration loading and resolution.
//!
//! `load` merges the default config files, any `-c` files,
//! `AOILER__SECTION__KEY` environment variables and CLI flags, then validates
//! the result into a [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;

//! Widgets that make up the chat screen.

pub(crate) mod input;
pub(crate) mod log;
pub(crate) mod scrollbar;
pub(crate) mod suggestions;

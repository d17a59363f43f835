//! The six backend services a query can be dispatched to, plus path
//! completion.
//!
//! Services are plain synchronous functions or small option-carrying structs.
//! Every failure is a [`ServiceError`]; the host turns those into
//! `success: false` responses.

pub mod autocomplete;
mod command;
pub mod converter;
mod error;
pub mod filesearch;
pub mod linter;
pub mod llm;
pub mod ocr;
pub mod organizer;
mod paths;

pub use autocomplete::{AutocompleteOptions, PathCompleter};
pub use error::ServiceError;
pub use filesearch::{FileSearch, SearchOptions};
pub use llm::{Llm, LlmOptions};
pub use ocr::{Ocr, OcrOptions};

pub use paths::expand_home;
pub(crate) use paths::normalized_words;

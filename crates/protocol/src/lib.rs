//! Shared contract between the `aoiler` host and its frontends.
//!
//! The host exposes a handful of remote procedures (see [`RpcCall`]). Every
//! frontend talks to it through the [`Backend`] trait, either in-process or
//! over the newline-delimited JSON transport described in [`rpc`].
//!
//! Query responses travel as loosely typed JSON (`service` tag plus an
//! opaque `result` payload). [`QueryResponse::outcome`] turns that into the
//! exhaustive [`Outcome`] sum type so that rendering code matches on the tag
//! instead of probing the payload's shape.

pub mod backend;
pub mod error;
pub mod query;
pub mod rpc;
pub mod service;
pub mod suggest;

pub use backend::Backend;
pub use error::{BackendError, ProtocolError};
pub use query::{Outcome, QueryRequest, QueryResponse, ServiceResult};
pub use rpc::{RpcCall, RpcReply, RpcRequest};
pub use service::{
	ConverterResult, EntryKind, FileSearchResult, LinterResult, LlmResult, OcrResult,
	OrganizerResult, ServiceKind,
};
pub use suggest::AutoCompleteResult;

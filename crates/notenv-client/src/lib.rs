//! Transport client for the not-env backend.
//!
//! Defines the [`VariableSource`] boundary the SDK core depends on, the
//! HTTP implementation that talks to a real backend, and the failure
//! taxonomy initialization reports.
//!
//! # Failure classification
//!
//! - [`FetchError::Network`] -- DNS, connection, TLS, or timeout failure
//! - [`FetchError::Backend`] -- the backend answered with a non-2xx status
//! - [`FetchError::Parse`] -- a 2xx body that does not match the wire shape
//!
//! No classification carries the bearer credential in its detail text.

pub mod error;
pub mod http;
pub mod source;
pub mod wire;

pub use error::{FetchError, FetchResult};
pub use http::HttpVariableSource;
pub use source::{StaticVariableSource, VariableSource};
pub use wire::{VariableEntry, VariablesResponse};

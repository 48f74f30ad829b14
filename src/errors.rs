//! Error types of the crate.
//!
//! Tag search itself never fails: absence of a tag is reported with `None`, and malformed
//! attribute lists are handled according to [`MalformedAttributes`](crate::MalformedAttributes).
//! The errors below are surfaced by the lower level APIs.

pub use crate::parser::{AttributeError, AttributeSyntaxError};
use thiserror::Error;

/// An error that occurs when a byte document can't be decoded.
#[derive(Error, Debug, Eq, PartialEq, Copy, Clone)]
pub enum EncodingError {
    /// The provided value doesn't match any of the [labels specified in the standard].
    ///
    /// [labels specified in the standard]: https://encoding.spec.whatwg.org/#names-and-labels
    #[error("Unknown character encoding has been provided.")]
    UnknownEncoding,
}

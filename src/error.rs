//! Error type definitions.
//!
//! A failed call is either a response the API rejected (non-success status)
//! or a transport problem (connection, timeout, body, JSON decoding). The URL
//! matcher has no error channel at all: an unrecognized URL is a normal
//! `None`, never an error.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`crate::Client`] calls.
#[derive(Error, Debug)]
pub enum ClientError {
    /// An HTTP response was received but its status indicates failure.
    /// The response body is not parsed in this case.
    #[error("Request failed: {status}")]
    RequestFailed {
        /// The failing HTTP status, including its canonical reason text.
        status: StatusCode,
    },

    /// The request could not be completed (DNS, connection, timeout) or the
    /// response body could not be decoded as JSON. Propagated unchanged from
    /// the transport.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

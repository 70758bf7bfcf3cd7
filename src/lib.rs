#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod attendee;
pub mod basic;
pub mod error;
pub mod event;
pub mod order;
pub(crate) mod serde_helpers;
pub mod system;
pub mod temporal;
pub mod types;
pub mod webhook;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Error, Kind};

pub type Result<T> = std::result::Result<T, Error>;

/// Decodes a JSON document into `T`.
///
/// Every field of every resource is optional, so `{}` decodes into the default value of
/// any schema type. The decoded value owns all of its data; `bytes` can be reused as
/// soon as the call returns.
///
/// # Errors
///
/// Returns a [`Kind::Decode`] error naming the offending field when the bytes are not
/// valid JSON, a value has the wrong shape, or a date or datetime literal does not match
/// its fixed layout. A malformed literal fails the whole document.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_helpers::deserialize_with_warnings(bytes)
}

/// Encodes a value into JSON bytes. Absent fields are omitted.
///
/// # Errors
///
/// Returns a [`Kind::Internal`] error if the serializer fails.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| Error::with_source(Kind::Internal, e))
}

/// Interprets the body of a response given its HTTP status code.
///
/// A 2xx body is decoded into `T`. Any other status yields a [`Kind::Api`] error
/// carrying the [`ApiError`] envelope from the body. A body that is not an envelope
/// still produces an [`ApiError`], with the raw body as its description. A missing
/// `status_code` in the envelope is filled from `status_code`.
///
/// # Errors
///
/// Returns a [`Kind::Api`] error for a non-2xx status, or the errors of [`decode`].
pub fn decode_response<T: DeserializeOwned>(status_code: u16, body: &[u8]) -> Result<T> {
    if (200..300).contains(&status_code) {
        return decode(body);
    }

    let mut envelope = decode::<ApiError>(body).unwrap_or_else(|_e| {
        ApiError::builder()
            .error_description(String::from_utf8_lossy(body))
            .build()
    });
    if envelope.status_code == 0 {
        envelope.status_code = status_code;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        status = status_code,
        error = %envelope.error,
        "response carried an API error envelope"
    );

    Err(envelope.into())
}

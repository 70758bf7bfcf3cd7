//! Serde helpers for path-aware decoding.
//!
//! Every decode goes through [`serde_path_to_error`] so a failure names the field it
//! happened in. When the `tracing` feature is enabled, fields present in the payload
//! but unknown to the target type are reported as warnings, helping detect API changes.

use serde::Deserialize as _;
use serde::de::{DeserializeOwned, Deserializer};
use serde_json::Value;

/// Decode JSON bytes, tracking the path of the first failing field.
///
/// Unknown fields trigger warnings (with the `tracing` feature) but never fail the
/// decode. Trailing non-whitespace after the document is an error.
#[cfg(feature = "tracing")]
pub fn deserialize_with_warnings<T: DeserializeOwned>(bytes: &[u8]) -> crate::Result<T> {
    use std::any::type_name;

    tracing::trace!(
        type_name = %type_name::<T>(),
        len = bytes.len(),
        "decoding JSON"
    );

    let mut unknown_paths: Vec<String> = Vec::new();
    let mut de = serde_json::Deserializer::from_slice(bytes);

    let value: T = {
        let mut track = |path: serde_ignored::Path<'_>| unknown_paths.push(path.to_string());
        let ignored = serde_ignored::Deserializer::new(&mut de, &mut track);
        serde_path_to_error::deserialize(ignored)?
    };
    de.end()?;

    if !unknown_paths.is_empty() {
        let type_name = type_name::<T>();
        for path in unknown_paths {
            tracing::warn!(
                type_name = %type_name,
                field = %path,
                "unknown field in API response"
            );
        }
    }

    Ok(value)
}

/// Path-aware decoding without unknown-field reporting when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub fn deserialize_with_warnings<T: DeserializeOwned>(bytes: &[u8]) -> crate::Result<T> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value: T = serde_path_to_error::deserialize(&mut de)?;
    de.end()?;

    Ok(value)
}

/// Decodes a present opaque field, keeping an explicit `null` as [`Value::Null`].
///
/// Use with `#[serde(default)]` so a missing key still decodes to `None`.
pub(crate) fn opaque<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

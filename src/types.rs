//! Re-exported types from external crates for convenience.
//!
//! These types appear in the public schema and are re-exported here
//! so users don't need to add these dependencies to their `Cargo.toml`.

/// Calendar and instant types wrapped by [`crate::temporal`].
pub use chrono::{NaiveDate, Utc};
/// Arbitrary precision decimal type for currency values.
pub use rust_decimal::Decimal;
/// Macro for creating [`Decimal`] literals at compile time.
///
/// # Example
/// ```
/// use eventbrite_schema::types::dec;
/// let price = dec!(12.50);
/// ```
pub use rust_decimal_macros::dec;
/// Untyped JSON value used for fields whose shape the API does not document.
pub use serde_json::Value;

//! Basic value types shared by every resource: money, rich text, addresses, images and
//! the pagination envelope.
//!
//! <https://www.eventbrite.com/platform/api#/introduction/basic-types>

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::types::Decimal;

/// An ISO 3166 alpha-2 country code.
pub type CountryCode = String;

/// An ISO 4217 three-letter currency code.
pub type CurrencyCode = String;

/// A monetary amount.
///
/// `display` is a localized rendering for humans and is never parsed back into `value`.
/// `value` keeps the digits of the wire number, so `1250` and `25.0` encode unchanged.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Currency {
    pub currency: Option<CurrencyCode>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub value: Option<Decimal>,
    pub display: Option<String>,
}

/// Returned for fields which carry HTML, like event names and descriptions.
///
/// `html` is the original markup while `text` is a stripped rendering. Either may be
/// missing and the two are not kept in sync.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct MultipartText {
    pub text: Option<String>,
    pub html: Option<String>,
}

/// The common address format used across countries and regions.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Address {
    pub address_1: Option<String>,
    pub address_2: Option<String>,
    pub city: Option<String>,
    /// ISO 3166-2 code for the state, province, region or district
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<CountryCode>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub localized_address_display: Option<String>,
    pub localized_area_display: Option<String>,
    /// Display lines in the order the address country writes them
    pub localized_multi_line_address_display: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Image {
    pub id: Option<String>,
    pub url: Option<String>,
}

/// Pagination metadata returned next to the resource list of every list endpoint.
///
/// `has_more_items` decides whether another page exists; the counts are informational.
///
/// <https://www.eventbrite.com/platform/api#/introduction/paginated-responses>
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Pagination {
    pub object_count: Option<u32>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub page_count: Option<u32>,
    pub has_more_items: Option<bool>,
    /// Opaque token for continuation-based pagination
    pub continuation: Option<String>,
}

impl Pagination {
    /// Whether the server reported further pages. A missing flag means no.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more_items.unwrap_or_default()
    }
}

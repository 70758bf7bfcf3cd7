//! Date and time values with fixed wire layouts.
//!
//! [`Date`] and [`DateTime`] are parsed strictly: the literal must match the layout
//! character for character, so that encoding a decoded value reproduces the input
//! bytes exactly. [`DatetimeTz`] is carried verbatim and never parsed.

use std::fmt;
use std::str::FromStr;

use bon::Builder;
use chrono::{Datelike as _, NaiveDate, NaiveDateTime, SubsecRound as _, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::Result;
use crate::error::MalformedTemporal;

const DATE_LAYOUT: &str = "YYYY-MM-DD";
const DATE_FORMAT: &str = "%Y-%m-%d";

const DATETIME_LAYOUT: &str = "YYYY-MM-DDTHH:MM:SSZ";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Years that fit the four digit `YYYY` field. Outside this range chrono writes a sign.
const YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// Checks `input` against a layout where every `Y`, `M`, `D`, `H` or `S` stands for an
/// ASCII digit and every other character must match literally.
fn matches_layout(input: &str, layout: &str) -> bool {
    input.len() == layout.len()
        && input.bytes().zip(layout.bytes()).all(|(c, l)| match l {
            b'Y' | b'M' | b'D' | b'H' | b'S' => c.is_ascii_digit(),
            _ => c == l,
        })
}

/// Removes one surrounding pair of JSON string quotes, if present.
fn unquote(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_prefix(b"\"").unwrap_or(bytes);
    bytes.strip_suffix(b"\"").unwrap_or(bytes)
}

fn literal<'a>(bytes: &'a [u8], layout: &'static str) -> Result<&'a str> {
    std::str::from_utf8(unquote(bytes))
        .map_err(|_e| MalformedTemporal::new(String::from_utf8_lossy(bytes), layout).into())
}

fn quoted<T: fmt::Display>(value: T) -> Vec<u8> {
    format!("\"{value}\"").into_bytes()
}

/// A calendar date without time of day, written as `YYYY-MM-DD`.
///
/// The zero value is the Unix epoch date, `1970-01-01`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct Date(NaiveDate);

impl Date {
    /// Wraps a date whose year fits the wire layout.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedTemporal`] for years outside `0000..=9999`.
    pub fn new(date: NaiveDate) -> std::result::Result<Self, MalformedTemporal> {
        if YEARS.contains(&date.year()) {
            Ok(Self(date))
        } else {
            Err(MalformedTemporal::new(date.to_string(), DATE_LAYOUT))
        }
    }

    #[must_use]
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Decodes a date from its wire bytes, with or without the surrounding JSON quotes.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(literal(bytes, DATE_LAYOUT)?.parse()?)
    }

    /// Encodes the date as a JSON string literal.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        quoted(self)
    }
}

impl FromStr for Date {
    type Err = MalformedTemporal;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if !matches_layout(s, DATE_LAYOUT) {
            return Err(MalformedTemporal::new(s, DATE_LAYOUT));
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_e| MalformedTemporal::new(s, DATE_LAYOUT))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = MalformedTemporal;

    fn try_from(date: NaiveDate) -> std::result::Result<Self, Self::Error> {
        Self::new(date)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// An instant in UTC with whole-second precision, written as `YYYY-MM-DDTHH:MM:SSZ`.
///
/// The zero value is the Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct DateTime(chrono::DateTime<Utc>);

impl DateTime {
    /// Wraps an instant, dropping any sub-second component the wire format cannot carry.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedTemporal`] for years outside `0000..=9999`.
    pub fn new(instant: chrono::DateTime<Utc>) -> std::result::Result<Self, MalformedTemporal> {
        if YEARS.contains(&instant.year()) {
            Ok(Self(instant.trunc_subsecs(0)))
        } else {
            Err(MalformedTemporal::new(instant.to_rfc3339(), DATETIME_LAYOUT))
        }
    }

    #[must_use]
    pub const fn as_utc(&self) -> chrono::DateTime<Utc> {
        self.0
    }

    /// Decodes an instant from its wire bytes, with or without the surrounding JSON quotes.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(literal(bytes, DATETIME_LAYOUT)?.parse()?)
    }

    /// Encodes the instant as a JSON string literal.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        quoted(self)
    }
}

impl FromStr for DateTime {
    type Err = MalformedTemporal;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if !matches_layout(s, DATETIME_LAYOUT) {
            return Err(MalformedTemporal::new(s, DATETIME_LAYOUT));
        }
        NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
            .map(|naive| Self(naive.and_utc()))
            .map_err(|_e| MalformedTemporal::new(s, DATETIME_LAYOUT))
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATETIME_FORMAT))
    }
}

impl TryFrom<chrono::DateTime<Utc>> for DateTime {
    type Error = MalformedTemporal;

    fn try_from(instant: chrono::DateTime<Utc>) -> std::result::Result<Self, Self::Error> {
        Self::new(instant)
    }
}

impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A combination of an Olson timezone name and two renderings of the same instant,
/// one in UTC and one in the named timezone.
///
/// All three values are passed through untouched.
///
/// <https://www.eventbrite.com/platform/api#/introduction/basic-types/datetime-with-timezone>
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct DatetimeTz {
    pub timezone: Option<String>,
    pub utc: Option<String>,
    pub local: Option<String>,
}

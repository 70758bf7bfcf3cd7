//! Events and the resources hanging off them: venues, organizers, the category taxonomy
//! and ticket classes.
//!
//! Related resources appear twice on the wire: as an `..._id` field that is always sent,
//! and as an inline object that is only sent when the request asked for the expansion.
//! Both are kept as independent fields.

#![allow(
    clippy::module_name_repetitions,
    reason = "EventStatus mirrors the upstream field name"
)]

use bon::Builder;
use std::fmt;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::basic::{Address, Currency, CurrencyCode, Image, MultipartText};
use crate::temporal::{DateTime, DatetimeTz};

/// Lifecycle state of an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum EventStatus {
    Draft,
    Live,
    Started,
    Ended,
    Completed,
    Canceled,
    /// Unknown status from the API (captures the raw value)
    #[serde(untagged)]
    Unknown(String),
}

/// A single event.
///
/// <https://www.eventbrite.com/platform/api#/reference/event>
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Event {
    pub id: Option<String>,
    pub name: Option<MultipartText>,
    pub summary: Option<String>,
    pub description: Option<MultipartText>,
    pub url: Option<String>,
    pub start: Option<DatetimeTz>,
    pub end: Option<DatetimeTz>,
    pub created: Option<DateTime>,
    pub changed: Option<DateTime>,
    pub published: Option<DateTime>,
    pub capacity: Option<u32>,
    pub capacity_is_custom: Option<bool>,
    pub status: Option<EventStatus>,
    pub currency: Option<CurrencyCode>,
    pub listed: Option<bool>,
    pub shareable: Option<bool>,
    pub online_event: Option<bool>,
    /// Minutes a buyer has to complete checkout
    pub tx_time_limit: Option<u32>,
    pub hide_start_date: Option<bool>,
    pub hide_end_date: Option<bool>,
    pub locale: Option<String>,
    pub is_locked: Option<bool>,
    pub privacy_setting: Option<String>,
    pub is_series: Option<bool>,
    pub is_series_parent: Option<bool>,
    pub is_reserved_seating: Option<bool>,
    pub source: Option<String>,
    pub is_free: Option<bool>,
    pub version: Option<String>,
    pub resource_uri: Option<String>,
    pub organizer_id: Option<String>,
    pub organizer: Option<Organizer>,
    pub venue_id: Option<String>,
    pub venue: Option<Venue>,
    pub category_id: Option<String>,
    pub category: Option<Category>,
    pub subcategory_id: Option<String>,
    pub subcategory: Option<SubCategory>,
    pub format_id: Option<String>,
    pub logo_id: Option<String>,
    pub logo: Option<Image>,
    pub ticket_classes: Option<Vec<TicketClass>>,
}

/// A location where an event happens.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Venue {
    pub id: Option<String>,
    pub name: Option<String>,
    pub address: Option<Address>,
    pub capacity: Option<u32>,
    pub age_restriction: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub resource_uri: Option<String>,
}

/// The owner shown on an event listing, with name and contact details.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Organizer {
    pub id: Option<String>,
    pub name: Option<String>,
    /// May be very long and contain significant formatting
    pub description: Option<MultipartText>,
    /// The organizer's page on Eventbrite
    pub url: Option<String>,
    pub logo_id: Option<String>,
    pub logo: Option<Image>,
}

/// An overarching category (vertical) such as "Music" or "Endurance".
///
/// A category owns its subcategories. Each subcategory may point back at its parent
/// through a [`CategoryRef`]; when decoding a category those back-references are filled
/// from the category's own scalar fields instead of being decoded again, so a payload
/// that nests the parent inside its children never recurses.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(from = "CategoryWire")]
#[non_exhaustive]
pub struct Category {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Name in the current locale, if available
    pub name_localized: Option<String>,
    /// Shorter name for sidebars and other small spaces
    pub short_name: Option<String>,
    pub short_name_localized: Option<String>,
    /// Only sent by some endpoints
    pub sub_categories: Option<Vec<SubCategory>>,
}

impl Category {
    /// Shallow copy of the scalar fields, used as a subcategory's parent link.
    #[must_use]
    pub fn to_ref(&self) -> CategoryRef {
        CategoryRef {
            id: self.id.clone(),
            name: self.name.clone(),
            name_localized: self.name_localized.clone(),
            short_name: self.short_name.clone(),
            short_name_localized: self.short_name_localized.clone(),
        }
    }
}

/// Non-owning view of a [`Category`]: its scalar fields without the subcategory list.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct CategoryRef {
    pub id: Option<String>,
    pub name: Option<String>,
    pub name_localized: Option<String>,
    pub short_name: Option<String>,
    pub short_name_localized: Option<String>,
}

/// A more specific category sitting underneath a [`Category`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct SubCategory {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Only present when the payload included it
    pub parent_category: Option<CategoryRef>,
}

#[derive(Deserialize)]
struct CategoryWire {
    id: Option<String>,
    name: Option<String>,
    name_localized: Option<String>,
    short_name: Option<String>,
    short_name_localized: Option<String>,
    sub_categories: Option<Vec<NestedSubCategory>>,
}

/// A subcategory inside a category payload. Its parent is the enclosing category, so
/// only the presence of the link is recorded.
#[derive(Deserialize)]
struct NestedSubCategory {
    id: Option<String>,
    name: Option<String>,
    parent_category: Option<ParentLink>,
}

/// A nested `parent_category` object, walked without being kept.
///
/// It must be an object. Its entries are consumed as [`Walked`] values rather than
/// ignored, so the unknown-field reporting of the decoder does not flag them.
struct ParentLink;

impl<'de> Deserialize<'de> for ParentLink {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LinkVisitor;

        impl<'de> Visitor<'de> for LinkVisitor {
            type Value = ParentLink;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a parent category object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                while map.next_entry::<Walked, Walked>()?.is_some() {}
                Ok(ParentLink)
            }
        }

        deserializer.deserialize_map(LinkVisitor)
    }
}

/// Any JSON value, read to its end and dropped.
struct Walked;

impl<'de> Deserialize<'de> for Walked {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(WalkVisitor)
    }
}

struct WalkVisitor;

impl<'de> Visitor<'de> for WalkVisitor {
    type Value = Walked;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
        Ok(Walked)
    }

    fn visit_i64<E: de::Error>(self, _v: i64) -> Result<Self::Value, E> {
        Ok(Walked)
    }

    fn visit_u64<E: de::Error>(self, _v: u64) -> Result<Self::Value, E> {
        Ok(Walked)
    }

    fn visit_f64<E: de::Error>(self, _v: f64) -> Result<Self::Value, E> {
        Ok(Walked)
    }

    fn visit_str<E: de::Error>(self, _v: &str) -> Result<Self::Value, E> {
        Ok(Walked)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Walked)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Walked)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        Walked::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<Walked>()?.is_some() {}
        Ok(Walked)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<Walked, Walked>()?.is_some() {}
        Ok(Walked)
    }
}

impl From<CategoryWire> for Category {
    fn from(wire: CategoryWire) -> Self {
        let mut category = Category {
            id: wire.id,
            name: wire.name,
            name_localized: wire.name_localized,
            short_name: wire.short_name,
            short_name_localized: wire.short_name_localized,
            sub_categories: None,
        };
        let parent = category.to_ref();

        category.sub_categories = wire.sub_categories.map(|subs| {
            subs.into_iter()
                .map(|sub| SubCategory {
                    id: sub.id,
                    name: sub.name,
                    parent_category: sub.parent_category.map(|_| parent.clone()),
                })
                .collect()
        });

        category
    }
}

/// How an event listing is displayed.
///
/// <https://www.eventbrite.com/platform/api#/reference/event-display-settings>
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct DisplaySettings {
    pub show_start_date: Option<bool>,
    pub show_end_date: Option<bool>,
    pub show_start_end_time: Option<bool>,
    pub show_timezone: Option<bool>,
    pub show_map: Option<bool>,
    /// Number of remaining tickets
    pub show_remaining: Option<bool>,
    pub show_organizer_facebook: Option<bool>,
    pub show_organizer_twitter: Option<bool>,
    /// Which of the viewer's Facebook friends are going
    pub show_facebook_friends_going: Option<bool>,
    pub show_attendee_list: Option<bool>,
    /// `tickets_vertical` or `endurance_vertical`
    pub terminology: Option<String>,
}

/// One of the purchasable ticket types of an event.
///
/// The quantity, visibility and sales window fields are only returned to users with
/// event owner permission.
///
/// <https://www.eventbrite.com/platform/api#/reference/ticket-class>
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct TicketClass {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Display cost, paid tickets only
    pub cost: Option<Currency>,
    /// Display fee, paid tickets only
    pub fee: Option<Currency>,
    pub donation: Option<bool>,
    pub free: Option<bool>,
    /// Per order
    pub minimum_quantity: Option<u32>,
    /// Per order
    pub maximum_quantity: Option<u32>,
    pub event_id: Option<String>,
    pub event: Option<Box<Event>>,
    pub quantity_total: Option<u32>,
    /// Confirmed sales, excluding checkouts in progress
    pub quantity_sold: Option<u32>,
    pub hidden: Option<bool>,
    pub sales_start: Option<String>,
    pub sales_end: Option<String>,
    /// Ticket class whose sell-out starts sales of this one
    pub sales_start_after: Option<String>,
    pub include_fee: Option<bool>,
    pub split_fee: Option<bool>,
    pub hide_description: Option<bool>,
    pub auto_hide: Option<bool>,
    pub auto_hide_before: Option<String>,
    pub auto_hide_after: Option<String>,
    pub resource_uri: Option<String>,
}

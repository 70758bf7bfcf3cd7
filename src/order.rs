//! Orders placed for an event.
//!
//! <https://www.eventbrite.com/platform/api#/reference/order>

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::attendee::Attendee;
use crate::basic::Currency;
use crate::event::Event;
use crate::temporal::DateTime;

/// A purchase of one or more tickets.
///
/// As with attendees, `event_id` and the expanded `event` are independent fields.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Order {
    pub id: Option<String>,
    pub created: Option<DateTime>,
    pub changed: Option<DateTime>,
    /// Buyer's full name
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub costs: Option<OrderCosts>,
    pub status: Option<String>,
    /// Seconds left to complete a pending order
    pub time_remaining: Option<u32>,
    pub event_id: Option<String>,
    pub event: Option<Box<Event>>,
    pub attendees: Option<Vec<Attendee>>,
    pub resource_uri: Option<String>,
}

/// Breakdown of what the buyer paid.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct OrderCosts {
    pub base_price: Option<Currency>,
    pub eventbrite_fee: Option<Currency>,
    pub payment_fee: Option<Currency>,
    pub tax: Option<Currency>,
    /// Total including fees and tax
    pub gross: Option<Currency>,
}

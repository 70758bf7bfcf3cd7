//! Account-level integrations: webhooks and tracking beacons.

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{StringWithSeparator, formats::CommaSeparator, serde_as, skip_serializing_none};

/// A webhook registered on the account.
///
/// `actions` travels as one comma-separated string (`order.placed,event.published`) and
/// is split into its parts, keeping their order.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Webhook {
    pub id: Option<String>,
    /// Where the webhook delivers its payload
    pub endpoint_url: Option<String>,
    #[serde_as(as = "Option<StringWithSeparator::<CommaSeparator, String>>")]
    pub actions: Option<Vec<String>>,
    /// Restricts the webhook to a single event
    pub event_id: Option<String>,
    pub resource_uri: Option<String>,
}

/// A tracking pixel an organizer fires on their event pages.
///
/// <https://www.eventbrite.com/platform/api#/reference/tracking-beacon>
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct TrackingBeacon {
    pub id: Option<String>,
    /// Third party type, e.g. `Facebook Pixel`, `Twitter Ads`, `AdWords`,
    /// `Google Analytics`, `Simple Image Pixel` or `Adroll iPixel`
    pub tracking_type: Option<String>,
    pub event_id: Option<String>,
    /// Fires on all of this user's events
    pub user_id: Option<String>,
    /// The third party's own identifier
    pub pixel_id: Option<String>,
    /// Where the pixel fires. Undocumented shape, kept verbatim
    #[serde(default, deserialize_with = "crate::serde_helpers::opaque")]
    pub triggers: Option<Value>,
}

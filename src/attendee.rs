//! Attendees and their nested sub-resources.
//!
//! Attendee objects are private and only returned to the event owner.
//!
//! <https://www.eventbrite.com/platform/api#/reference/attendee>

#![allow(
    clippy::module_name_repetitions,
    reason = "Attendee prefix mirrors the upstream resource names"
)]

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use crate::basic::Address;
use crate::event::Event;
use crate::order::Order;
use crate::temporal::{Date, DateTime};

/// The details of one person coming to an event.
///
/// `event_id` and `order_id` are always sent; `event` and `order` are only present when
/// the request expanded them. The pairs are independent of each other.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Attendee {
    pub id: Option<String>,
    /// When the order was placed
    pub created: Option<DateTime>,
    pub changed: Option<DateTime>,
    pub ticket_class_id: Option<String>,
    /// Name of the ticket class at the time of registration
    pub ticket_class_name: Option<String>,
    pub variant_id: Option<String>,
    pub quantity: Option<u32>,
    pub profile: Option<AttendeeProfile>,
    pub addresses: Option<Vec<AttendeeAddress>>,
    /// Answers to the event's custom questions
    pub answers: Option<Vec<AttendeeAnswer>>,
    pub barcodes: Option<Vec<AttendeeBarcode>>,
    pub team: Option<AttendeeTeam>,
    /// Undocumented shape, kept verbatim
    #[serde(default, deserialize_with = "crate::serde_helpers::opaque")]
    pub affiliate: Option<Value>,
    pub checked_in: Option<bool>,
    pub cancelled: Option<bool>,
    pub refunded: Option<bool>,
    /// Scheduled for deprecation upstream
    pub status: Option<String>,
    pub event_id: Option<String>,
    pub event: Option<Box<Event>>,
    pub order_id: Option<String>,
    pub order: Option<Box<Order>>,
    /// Absent unless the attendee is a guest
    #[serde(rename = "guestlist_id")]
    pub guest_list_id: Option<String>,
    /// Absent unless the attendee is a guest
    pub invited_by: Option<String>,
    /// Undocumented shape, kept verbatim
    #[serde(default, deserialize_with = "crate::serde_helpers::opaque")]
    pub promotional_code: Option<Value>,
    /// Bib number for races and endurance events. Undocumented shape, kept verbatim
    #[serde(default, deserialize_with = "crate::serde_helpers::opaque")]
    pub assigned_number: Option<Value>,
    pub resource_uri: Option<String>,
}

/// An attendee's personal information.
///
/// Prefer `name` over `first_name`/`last_name` for forward compatibility with
/// non-Western names.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct AttendeeProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Title or honorific (Mr., Mrs., ...)
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub age: Option<u32>,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub blog: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<Date>,
    /// As formatted by the attendee
    pub cell_phone: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct AttendeeAddress {
    pub home: Option<Address>,
    pub ship: Option<Address>,
    pub work: Option<Address>,
}

/// Kind of custom question an answer belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum QuestionType {
    MultipleChoice,
    Text,
    /// Unknown question type from the API (captures the raw value)
    #[serde(untagged)]
    Unknown(String),
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct AttendeeAnswer {
    pub question_id: Option<String>,
    pub question: Option<String>,
    #[serde(rename = "type")]
    pub question_type: Option<QuestionType>,
    pub answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum BarcodeStatus {
    Unused,
    Used,
    Refunded,
    /// Unknown barcode status from the API (captures the raw value)
    #[serde(untagged)]
    Unknown(String),
}

/// Entry barcode of an attendee, usually one per attendee.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct AttendeeBarcode {
    /// `None` when the organizer turned off printable tickets
    pub barcode: Option<String>,
    pub status: Option<BarcodeStatus>,
    pub created: Option<DateTime>,
    pub changed: Option<DateTime>,
}

/// Team membership, for events with teams configured.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct AttendeeTeam {
    pub id: Option<String>,
    pub name: Option<String>,
    pub date_joined: Option<DateTime>,
    pub event_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_fields_are_preserved() {
        let json = serde_json::json!({
            "affiliate": "ebdsoporgprofile",
            "promotional_code": { "code": "EARLY", "promotion_type": "discount" },
            "assigned_number": 42
        });

        let attendee: Attendee = serde_json::from_value(json.clone()).expect("valid attendee");
        assert_eq!(attendee.assigned_number, Some(serde_json::json!(42)));
        assert_eq!(serde_json::to_value(&attendee).expect("serialize"), json);
    }

    #[test]
    fn explicit_null_opaque_field_is_kept() {
        let attendee: Attendee =
            crate::decode(br#"{"affiliate":null,"assigned_number":7}"#).expect("valid attendee");

        assert_eq!(attendee.affiliate, Some(Value::Null));
        assert_eq!(attendee.promotional_code, None);
        assert_eq!(
            crate::encode(&attendee).expect("encode"),
            br#"{"affiliate":null,"assigned_number":7}"#.to_vec()
        );
    }

    #[test]
    fn answer_type_uses_wire_key() {
        let answer: AttendeeAnswer = serde_json::from_str(
            r#"{"question_id":"1","question":"T-shirt size?","type":"multiple_choice","answer":"M"}"#,
        )
        .expect("valid answer");

        assert_eq!(answer.question_type, Some(QuestionType::MultipleChoice));
        assert_eq!(answer.answer.as_deref(), Some("M"));
    }

    #[test]
    fn barcode_status_falls_back_to_unknown() {
        let barcode: AttendeeBarcode =
            serde_json::from_str(r#"{"barcode":"1234","status":"void"}"#).expect("valid barcode");

        assert_eq!(barcode.status, Some(BarcodeStatus::Unknown("void".to_owned())));
        assert_eq!(BarcodeStatus::Refunded.to_string(), "refunded");
    }

    #[test]
    fn birth_date_uses_date_layout() {
        let profile: AttendeeProfile =
            serde_json::from_str(r#"{"birth_date":"1990-04-12"}"#).expect("valid profile");
        let date = profile.birth_date.expect("birth date");

        assert_eq!(date.to_string(), "1990-04-12");
        serde_json::from_str::<AttendeeProfile>(r#"{"birth_date":"1990-04-12T00:00:00Z"}"#)
            .unwrap_err();
    }
}

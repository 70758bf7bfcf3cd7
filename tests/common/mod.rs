#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Not every test binary uses every fixture"
)]

use serde_json::{Value, json};

pub const EVENT_ID: &str = "718306411007";
pub const ORDER_ID: &str = "1234567890";

/// An event as returned with `expand=venue,organizer,category`.
#[must_use]
pub fn event() -> Value {
    json!({
        "id": EVENT_ID,
        "name": { "text": "Rust Meetup", "html": "<b>Rust</b> Meetup" },
        "description": { "text": "Talks and pizza" },
        "url": "https://www.eventbrite.com/e/rust-meetup-718306411007",
        "start": {
            "timezone": "Europe/London",
            "utc": "2023-09-14T17:30:00Z",
            "local": "2023-09-14T18:30:00"
        },
        "end": {
            "timezone": "Europe/London",
            "utc": "2023-09-14T20:00:00Z",
            "local": "2023-09-14T21:00:00"
        },
        "created": "2023-08-01T09:00:00Z",
        "changed": "2023-08-02T10:15:00Z",
        "capacity": 120,
        "status": "live",
        "currency": "GBP",
        "online_event": false,
        "is_free": false,
        "organizer_id": "55",
        "organizer": { "id": "55", "name": "Rust London" },
        "venue_id": "77",
        "venue": {
            "id": "77",
            "name": "The Hall",
            "address": {
                "address_1": "1 Main St",
                "city": "London",
                "country": "GB",
                "localized_multi_line_address_display": ["1 Main St", "London"]
            }
        },
        "category_id": "102",
        "category": { "id": "102", "name": "Science & Technology" }
    })
}

/// An attendee with every sub-resource populated and no expansions.
#[must_use]
pub fn attendee() -> Value {
    json!({
        "id": "9001",
        "created": "2023-09-01T12:00:00Z",
        "changed": "2023-09-02T08:30:00Z",
        "ticket_class_name": "General Admission",
        "profile": {
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "age": 36,
            "birth_date": "1815-12-10"
        },
        "addresses": [
            { "home": { "city": "London", "country": "GB" } },
            { "work": { "city": "Cambridge" } }
        ],
        "answers": [
            { "question_id": "1", "question": "Dietary needs?", "type": "text", "answer": "None" },
            { "question_id": "2", "question": "T-shirt?", "type": "multiple_choice", "answer": "M" }
        ],
        "barcodes": [
            {
                "barcode": "90011234001",
                "status": "unused",
                "created": "2023-09-01T12:00:00Z",
                "changed": "2023-09-01T12:00:00Z"
            }
        ],
        "team": {
            "id": "t1",
            "name": "Analytical Engines",
            "date_joined": "2023-09-01T12:05:00Z",
            "event_id": EVENT_ID
        },
        "checked_in": false,
        "cancelled": false,
        "refunded": false,
        "status": "Attending",
        "event_id": EVENT_ID,
        "order_id": ORDER_ID,
        "promotional_code": { "code": "EARLY" }
    })
}

#[must_use]
pub fn bytes(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).unwrap()
}

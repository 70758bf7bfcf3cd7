/// Benchmarks for decoding the resource schema.
///
/// Covers the two shapes that dominate real traffic: attendee list pages with nested
/// sub-resources, and category listings with subcategory back-references.
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use eventbrite_schema::attendee::Attendee;
use eventbrite_schema::basic::Pagination;
use eventbrite_schema::event::Category;
use eventbrite_schema::temporal::DateTime;
use serde::Deserialize;

const ATTENDEE: &str = r#"{
    "id": "9001",
    "created": "2023-09-01T12:00:00Z",
    "changed": "2023-09-02T08:30:00Z",
    "ticket_class_name": "General Admission",
    "profile": {
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "birth_date": "1815-12-10"
    },
    "answers": [
        {"question_id": "1", "question": "Dietary needs?", "type": "text", "answer": "None"}
    ],
    "barcodes": [
        {"barcode": "90011234001", "status": "unused", "created": "2023-09-01T12:00:00Z"}
    ],
    "checked_in": false,
    "cancelled": false,
    "refunded": false,
    "event_id": "718306411007",
    "order_id": "1234567890"
}"#;

#[derive(Deserialize)]
struct AttendeePage {
    #[expect(dead_code, reason = "Decoded for realistic cost only")]
    pagination: Pagination,
    #[expect(dead_code, reason = "Decoded for realistic cost only")]
    attendees: Vec<Attendee>,
}

fn attendee_page(count: usize) -> String {
    let attendees = vec![ATTENDEE; count].join(",");
    format!(
        r#"{{"pagination": {{"object_count": {count}, "page_number": 1, "page_size": 50, "page_count": 1, "has_more_items": false}}, "attendees": [{attendees}]}}"#
    )
}

fn category(subcategories: usize) -> String {
    let subs = (0..subcategories)
        .map(|i| {
            format!(
                r#"{{"id": "{i}", "name": "Sub {i}", "parent_category": {{"id": "103", "name": "Music"}}}}"#
            )
        })
        .collect::<Vec<_>>()
        .join(",");
    format!(r#"{{"id": "103", "name": "Music", "short_name": "Music", "sub_categories": [{subs}]}}"#)
}

fn bench_attendees(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema/attendees");

    for count in [1_usize, 50] {
        let json = attendee_page(count);
        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::new("AttendeePage", count), &json, |b, json| {
            b.iter(|| {
                let _: AttendeePage =
                    eventbrite_schema::decode(std::hint::black_box(json.as_bytes()))
                        .expect("Deserialization should succeed");
            });
        });
    }

    group.finish();
}

fn bench_categories(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema/categories");

    for count in [5_usize, 100] {
        let json = category(count);
        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::new("Category", count), &json, |b, json| {
            b.iter(|| {
                let _: Category = eventbrite_schema::decode(std::hint::black_box(json.as_bytes()))
                    .expect("Deserialization should succeed");
            });
        });
    }

    group.finish();
}

fn bench_temporal(c: &mut Criterion) {
    c.bench_function("schema/temporal/DateTime", |b| {
        b.iter(|| {
            DateTime::decode(std::hint::black_box(br#""2023-05-01T14:30:00Z""#))
                .expect("Deserialization should succeed")
        });
    });
}

criterion_group!(benches, bench_attendees, bench_categories, bench_temporal);
criterion_main!(benches);

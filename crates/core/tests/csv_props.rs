//! Property-based tests for the CSV codec round-trip.

use proptest::prelude::*;

use catalog_core::codec::{parse, serialize, EXPORT_FIELDS};
use catalog_core::domain::AppRecord;

/// Strategy for non-empty identifier-ish values (names, companies).
fn required_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{0,15}"
}

/// Strategy for free-form field values, biased toward CSV special characters.
fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Plain values
        "[a-zA-Z0-9 ]{0,20}",
        // Values with embedded commas
        ("[a-zA-Z0-9]{0,8}", "[a-zA-Z0-9]{0,8}").prop_map(|(a, b)| format!("{a},{b}")),
        // Values with embedded quotes
        ("[a-zA-Z0-9]{0,8}", "[a-zA-Z0-9]{0,8}").prop_map(|(a, b)| format!("{a}\"{b}\"")),
        // Values with embedded newlines
        ("[a-zA-Z0-9]{0,8}", "[a-zA-Z0-9]{0,8}").prop_map(|(a, b)| format!("{a}\n{b}")),
        // Everything at once
        Just("he said, \"line one\nline two\"".to_string()),
        Just(String::new()),
    ]
}

fn record_strategy() -> impl Strategy<Value = AppRecord> {
    (
        required_value_strategy(),
        required_value_strategy(),
        value_strategy(),
        value_strategy(),
        value_strategy(),
        value_strategy(),
        value_strategy(),
        value_strategy(),
    )
        .prop_map(
            |(name, company, website, is_free, field, description, logo, date_added)| AppRecord {
                id: 0,
                name,
                company,
                website,
                is_free,
                field,
                description,
                logo,
                date_added,
            },
        )
}

/// Strategy for record sets with unique ids, as the store guarantees.
fn records_strategy() -> impl Strategy<Value = Vec<AppRecord>> {
    prop::collection::vec(record_strategy(), 1..6).prop_map(|mut records| {
        for (index, record) in records.iter_mut().enumerate() {
            record.id = index as i64 + 1;
        }
        records
    })
}

proptest! {
    /// serialize -> parse reconstructs the record set field for field.
    #[test]
    fn prop_round_trip_preserves_records(records in records_strategy()) {
        let text = serialize(&records, &EXPORT_FIELDS).unwrap();
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(records, reparsed);
    }

    /// Serialized output always ends each line, the last included, with `\n`.
    #[test]
    fn prop_serialized_output_ends_with_newline(records in records_strategy()) {
        let text = serialize(&records, &EXPORT_FIELDS).unwrap();
        prop_assert!(text.ends_with('\n'));
        prop_assert!(text.starts_with("id,name,company,"));
    }
}

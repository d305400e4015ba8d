//! CSV codec for the catalog.
//!
//! Parsing is lenient by contract: malformed rows, rows whose field count
//! does not match the header, and rows missing `name` or `company` are
//! dropped without error. The only failure signal is [`CatalogError::ParseEmpty`],
//! raised when the input has fewer than two usable lines or when no row
//! survives filtering; callers recover from it with the default record set.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use csv::{ReaderBuilder, WriterBuilder};
use tracing::{debug, warn};

use crate::domain::AppRecord;
use crate::error::{CatalogError, Result};

/// Column order used for export and for the bundled catalog file.
pub const EXPORT_FIELDS: [&str; 9] = [
    "id",
    "name",
    "company",
    "website",
    "isFree",
    "field",
    "description",
    "logo",
    "dateAdded",
];

/// Parses CSV text into catalog records.
///
/// The first row is the header (each name trimmed); quoting follows RFC 4180,
/// so commas, doubled quotes and newlines inside quoted fields are preserved.
/// A missing or non-numeric `id` is synthesized from a timestamp base and the
/// row index; every id, parsed or synthesized, is forced distinct within the
/// returned set.
pub fn parse(text: &str) -> Result<Vec<AppRecord>> {
    parse_with_id_base(text, Utc::now().timestamp_millis())
}

/// Same as [`parse`] with an explicit base for synthesized ids.
pub fn parse_with_id_base(text: &str, id_base: i64) -> Result<Vec<AppRecord>> {
    if text.lines().filter(|line| !line.trim().is_empty()).count() < 2 {
        return Err(CatalogError::ParseEmpty);
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    debug!(?headers, "parsing CSV catalog");

    let mut records = Vec::new();
    let mut assigned_ids: HashSet<i64> = HashSet::new();

    for (index, row) in reader.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                warn!(row = index + 1, %err, "dropping malformed CSV row");
                continue;
            }
        };

        if row.len() != headers.len() {
            warn!(
                row = index + 1,
                expected = headers.len(),
                actual = row.len(),
                "dropping CSV row with mismatched field count"
            );
            continue;
        }

        let fields: HashMap<&str, &str> = headers
            .iter()
            .map(String::as_str)
            .zip(row.iter())
            .collect();

        let name = fields.get("name").copied().unwrap_or("");
        let company = fields.get("company").copied().unwrap_or("");
        if name.is_empty() || company.is_empty() {
            warn!(row = index + 1, "dropping CSV row missing name or company");
            continue;
        }

        let id = assign_id(
            fields.get("id").and_then(|v| v.trim().parse::<i64>().ok()),
            id_base,
            index,
            &mut assigned_ids,
        );

        let get = |key: &str| fields.get(key).copied().unwrap_or("").to_string();
        records.push(AppRecord {
            id,
            name: name.to_string(),
            company: company.to_string(),
            website: get("website"),
            is_free: get("isFree"),
            field: get("field"),
            description: get("description"),
            logo: get("logo"),
            date_added: get("dateAdded"),
        });
    }

    if records.is_empty() {
        return Err(CatalogError::ParseEmpty);
    }
    debug!(count = records.len(), "parsed CSV catalog");
    Ok(records)
}

/// Picks an id for a parsed row, keeping ids unique within this parse pass.
///
/// A parsed id that collides with an earlier row is treated like a missing
/// one and re-synthesized rather than trusted.
fn assign_id(parsed: Option<i64>, base: i64, row_index: usize, assigned: &mut HashSet<i64>) -> i64 {
    let mut id = match parsed {
        Some(id) if !assigned.contains(&id) => id,
        _ => base + row_index as i64 + 1,
    };
    while !assigned.insert(id) {
        id += 1;
    }
    id
}

/// Serializes records to CSV text with the given column order.
///
/// The header line comes first; fields containing a comma, quote or newline
/// are quoted with inner quotes doubled; every line, the last included, ends
/// with `\n`.
pub fn serialize(records: &[AppRecord], fields: &[&str]) -> Result<String> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(fields)?;
    for record in records {
        writer.write_record(fields.iter().map(|f| record.value_of(f)))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CatalogError::WriteFailure(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CatalogError::WriteFailure(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,name,company,website,isFree,field,description,logo,dateAdded";

    fn row(id: &str, name: &str, company: &str) -> String {
        format!("{id},{name},{company},https://x.test,Yes,Tools,desc,logo.png,2024-01-15")
    }

    #[test]
    fn test_parse_basic_rows() {
        let text = format!("{HEADER}\n{}\n{}\n", row("1", "Alpha", "Acme"), row("2", "Beta", "Bmax"));
        let records = parse(&text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].name, "Alpha");
        assert_eq!(records[1].company, "Bmax");
        assert_eq!(records[1].date_added, "2024-01-15");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse(""), Err(CatalogError::ParseEmpty)));
    }

    #[test]
    fn test_parse_header_only() {
        assert!(matches!(parse(HEADER), Err(CatalogError::ParseEmpty)));
    }

    #[test]
    fn test_parse_blank_lines_do_not_count_as_usable() {
        let text = format!("{HEADER}\n\n   \n");
        assert!(matches!(parse(&text), Err(CatalogError::ParseEmpty)));
    }

    #[test]
    fn test_parse_drops_rows_with_mismatched_field_count() {
        let text = "name,company\nAlpha,Acme,extra\n";
        assert!(matches!(parse(text), Err(CatalogError::ParseEmpty)));

        let text = "name,company\nAlpha,Acme,extra\nBeta,Bmax\n";
        let records = parse(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Beta");
    }

    #[test]
    fn test_parse_drops_rows_missing_name_or_company() {
        assert!(matches!(parse("name,company\n,\n"), Err(CatalogError::ParseEmpty)));

        let text = "name,company\n,Acme\nAlpha,\nBeta,Bmax\n";
        let records = parse(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Beta");
    }

    #[test]
    fn test_parse_quoted_comma() {
        let text = "name,company\n\"Alpha, Inc\",Acme\n";
        let records = parse(text).unwrap();
        assert_eq!(records[0].name, "Alpha, Inc");
    }

    #[test]
    fn test_parse_doubled_quote_escape() {
        let text = "name,company,description\nAlpha,Acme,\"he said \"\"hi\"\"\"\n";
        let records = parse(text).unwrap();
        assert_eq!(records[0].description, "he said \"hi\"");
    }

    #[test]
    fn test_parse_newline_inside_quoted_field() {
        let text = "name,company,description\nAlpha,Acme,\"line one\nline two\"\n";
        let records = parse(text).unwrap();
        assert_eq!(records[0].description, "line one\nline two");
    }

    #[test]
    fn test_parse_trims_header_names() {
        let text = " name , company \nAlpha,Acme\n";
        let records = parse(text).unwrap();
        assert_eq!(records[0].name, "Alpha");
        assert_eq!(records[0].company, "Acme");
    }

    #[test]
    fn test_parse_synthesizes_missing_id() {
        let text = "name,company\nAlpha,Acme\nBeta,Bmax\n";
        let records = parse_with_id_base(text, 1000).unwrap();
        assert_eq!(records[0].id, 1001);
        assert_eq!(records[1].id, 1002);
    }

    #[test]
    fn test_parse_synthesizes_non_numeric_id() {
        let text = "id,name,company\nabc,Alpha,Acme\n";
        let records = parse_with_id_base(text, 500).unwrap();
        assert_eq!(records[0].id, 501);
    }

    #[test]
    fn test_parse_keeps_numeric_ids() {
        let text = "id,name,company\n7,Alpha,Acme\n";
        let records = parse(text).unwrap();
        assert_eq!(records[0].id, 7);
    }

    #[test]
    fn test_parse_deduplicates_colliding_ids() {
        let text = "id,name,company\n7,Alpha,Acme\n7,Beta,Bmax\n";
        let records = parse_with_id_base(text, 100).unwrap();
        assert_eq!(records[0].id, 7);
        assert_ne!(records[1].id, 7);
        let ids: HashSet<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_serialize_header_and_trailing_newline() {
        let out = serialize(&[], &["id", "name"]).unwrap();
        assert_eq!(out, "id,name\n");
    }

    #[test]
    fn test_serialize_quotes_special_characters() {
        let record = AppRecord {
            id: 1,
            name: "x,y".to_string(),
            company: "Acme".to_string(),
            website: String::new(),
            is_free: String::new(),
            field: String::new(),
            description: "say \"hi\"".to_string(),
            logo: String::new(),
            date_added: String::new(),
        };
        let out = serialize(&[record], &["name", "company", "description"]).unwrap();
        assert_eq!(out, "name,company,description\n\"x,y\",Acme,\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn test_round_trip_preserves_records() {
        let text = format!(
            "{HEADER}\n1,\"Alpha, Inc\",Acme,https://a.test,\"Yes, free\",Tools,\"multi\nline \"\"desc\"\"\",logo.png,2024-01-15\n"
        );
        let records = parse(&text).unwrap();
        let out = serialize(&records, &EXPORT_FIELDS).unwrap();
        let reparsed = parse(&out).unwrap();
        assert_eq!(records, reparsed);
    }
}

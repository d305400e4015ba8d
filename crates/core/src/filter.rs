//! Listing filters and catalog statistics.

use std::collections::BTreeSet;

use crate::domain::AppRecord;

/// Price filter matching the catalog's free-text `isFree` labels.
///
/// A record counts as free when its label contains a "yes" token, case
/// insensitively ("Yes", "Yes (free tier)", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceFilter {
    Free,
    Paid,
}

pub fn is_free(record: &AppRecord) -> bool {
    record.is_free.to_lowercase().contains("yes")
}

/// Applies optional field and price filters to a record listing.
pub fn apply_filters(
    records: &[AppRecord],
    field: Option<&str>,
    price: Option<PriceFilter>,
) -> Vec<AppRecord> {
    records
        .iter()
        .filter(|r| field.map_or(true, |f| r.field == f))
        .filter(|r| match price {
            Some(PriceFilter::Free) => is_free(r),
            Some(PriceFilter::Paid) => !is_free(r),
            None => true,
        })
        .cloned()
        .collect()
}

/// Summary counters shown on the catalog's front page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    pub free: usize,
    pub fields: Vec<String>,
}

pub fn catalog_stats(records: &[AppRecord]) -> CatalogStats {
    let fields: BTreeSet<String> = records
        .iter()
        .filter(|r| !r.field.is_empty())
        .map(|r| r.field.clone())
        .collect();
    CatalogStats {
        total: records.len(),
        free: records.iter().filter(|r| is_free(r)).count(),
        fields: fields.into_iter().collect(),
    }
}

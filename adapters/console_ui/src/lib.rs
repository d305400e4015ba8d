use catalog_core::domain::AppRecord;
use catalog_core::error::Result;
use catalog_core::filter::is_free;
use catalog_core::ports::{CatalogView, Severity};
use catalog_core::utils::normalize_date_added;

/// Console implementation of the CatalogView trait.
///
/// Renders record listings to stdout and severity-tagged notifications to
/// stderr.
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        Self
    }

    /// Formats records into the listing text printed by `render`.
    fn format_listing(&self, records: &[AppRecord]) -> String {
        if records.is_empty() {
            return "No applications found.\n".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!("{} application(s)\n\n", records.len()));

        for record in records {
            let price = if is_free(record) { "free" } else { "paid" };
            output.push_str(&format!(
                "[{}] {} - {} ({price})\n",
                record.id, record.name, record.company
            ));
            if !record.field.is_empty() {
                output.push_str(&format!("    field:   {}\n", record.field));
            }
            if !record.website.is_empty() {
                output.push_str(&format!("    website: {}\n", record.website));
            }
            if !record.description.is_empty() {
                output.push_str(&format!("    {}\n", record.description.trim()));
            }
            if !record.date_added.is_empty() {
                output.push_str(&format!(
                    "    added:   {}\n",
                    normalize_date_added(&record.date_added)
                ));
            }
            output.push('\n');
        }

        output
    }
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogView for ConsoleView {
    fn render(&self, records: &[AppRecord]) -> Result<()> {
        print!("{}", self.format_listing(records));
        Ok(())
    }

    fn notify(&self, message: &str, severity: Severity) {
        let tag = match severity {
            Severity::Info => "info",
            Severity::Success => "ok",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        eprintln!("[{tag}] {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: &str) -> AppRecord {
        AppRecord {
            id,
            name: name.to_string(),
            company: "Acme".to_string(),
            website: "https://a.test".to_string(),
            is_free: "Yes (free tier)".to_string(),
            field: "Tools".to_string(),
            description: "Does things.".to_string(),
            logo: String::new(),
            date_added: "2024-01-15T10:30:00Z".to_string(),
        }
    }

    #[test]
    fn test_format_listing_empty() {
        let view = ConsoleView::new();
        assert_eq!(view.format_listing(&[]), "No applications found.\n");
    }

    #[test]
    fn test_format_listing_includes_core_fields() {
        let view = ConsoleView::new();
        let listing = view.format_listing(&[record(7, "Alpha")]);
        assert!(listing.contains("1 application(s)"));
        assert!(listing.contains("[7] Alpha - Acme (free)"));
        assert!(listing.contains("field:   Tools"));
        assert!(listing.contains("website: https://a.test"));
    }

    #[test]
    fn test_format_listing_normalizes_date() {
        let view = ConsoleView::new();
        let listing = view.format_listing(&[record(1, "Alpha")]);
        assert!(listing.contains("added:   2024-01-15"));
        assert!(!listing.contains("10:30:00"));
    }

    #[test]
    fn test_format_listing_marks_paid_records() {
        let view = ConsoleView::new();
        let mut paid = record(2, "Beta");
        paid.is_free = "No".to_string();
        let listing = view.format_listing(&[paid]);
        assert!(listing.contains("(paid)"));
    }

    #[test]
    fn test_format_listing_skips_empty_optional_fields() {
        let view = ConsoleView::new();
        let mut bare = record(3, "Gamma");
        bare.field = String::new();
        bare.website = String::new();
        bare.description = String::new();
        bare.date_added = String::new();
        let listing = view.format_listing(&[bare]);
        assert!(!listing.contains("field:"));
        assert!(!listing.contains("website:"));
        assert!(!listing.contains("added:"));
    }
}

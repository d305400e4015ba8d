//! Submission validation, applied before a draft reaches the store.

use url::Url;

/// An application name must be ASCII letters only, without spaces.
pub fn validate_app_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
}

/// A company name must be ASCII letters, spaces allowed.
pub fn validate_company_name(company: &str) -> bool {
    !company.trim().is_empty()
        && company.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// A website must be an absolute http(s) URL.
pub fn validate_website(website: &str) -> bool {
    match Url::parse(website) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Logo URL substituted when a submission leaves the logo field empty.
pub const PLACEHOLDER_LOGO: &str = "https://via.placeholder.com/100?text=AI+App";

/// One catalog entry describing a single AI application.
///
/// Field names serialize to the CSV column names (`isFree`, `dateAdded`),
/// which are also the keys used in the persisted JSON snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppRecord {
    pub id: i64,
    pub name: String,
    pub company: String,
    pub website: String,
    pub is_free: String,
    pub field: String,
    pub description: String,
    pub logo: String,
    pub date_added: String,
}

impl AppRecord {
    /// Looks up a field value by its CSV column name.
    /// Unknown column names yield an empty string.
    pub fn value_of(&self, field: &str) -> String {
        match field {
            "id" => self.id.to_string(),
            "name" => self.name.clone(),
            "company" => self.company.clone(),
            "website" => self.website.clone(),
            "isFree" => self.is_free.clone(),
            "field" => self.field.clone(),
            "description" => self.description.clone(),
            "logo" => self.logo.clone(),
            "dateAdded" => self.date_added.clone(),
            _ => String::new(),
        }
    }
}

/// A not-yet-stored catalog entry, as collected from user input.
///
/// The store assigns `id` and `dateAdded` when the draft is accepted.
#[derive(Debug, Clone, Default)]
pub struct AppDraft {
    pub name: String,
    pub company: String,
    pub website: String,
    pub is_free: String,
    pub field: String,
    pub description: String,
    pub logo: String,
}

impl AppDraft {
    /// Validates the draft and promotes it to a full record.
    ///
    /// Rejects drafts missing `name` or `company`; an empty logo falls back
    /// to [`PLACEHOLDER_LOGO`].
    pub fn into_record(self, id: i64, date_added: String) -> Result<AppRecord> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::InvalidDraft("name is required".into()));
        }
        if self.company.trim().is_empty() {
            return Err(CatalogError::InvalidDraft("company is required".into()));
        }

        let logo = if self.logo.trim().is_empty() {
            PLACEHOLDER_LOGO.to_string()
        } else {
            self.logo
        };

        Ok(AppRecord {
            id,
            name: self.name,
            company: self.company,
            website: self.website,
            is_free: self.is_free,
            field: self.field,
            description: self.description,
            logo,
            date_added,
        })
    }
}

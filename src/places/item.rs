use serde::{Deserialize, Serialize};

use crate::error::SuggestError;

/// One candidate place, normalized from an API record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionItem {
    city: String,
    country: String,
    code: String,
}

impl SuggestionItem {
    pub fn new(
        city: impl Into<String>,
        country: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
            code: code.into(),
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Raw record as returned by the places endpoint
///
/// Extra fields (coordinates, weight, type, ...) are ignored.
#[derive(Debug, Deserialize)]
struct PlaceRecord {
    name: String,
    // Null for some records (e.g. countries); rendered as an empty label
    country_name: Option<String>,
    code: String,
}

impl From<PlaceRecord> for SuggestionItem {
    fn from(record: PlaceRecord) -> Self {
        SuggestionItem {
            city: record.name,
            country: record.country_name.unwrap_or_default(),
            code: record.code,
        }
    }
}

/// Parse a places response body, preserving API order
pub fn parse_places(body: &str) -> Result<Vec<SuggestionItem>, SuggestError> {
    let records: Vec<PlaceRecord> = serde_json::from_str(body)?;
    Ok(records.into_iter().map(SuggestionItem::from).collect())
}

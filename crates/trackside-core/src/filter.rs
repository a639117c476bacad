//! # List Filters
//!
//! Caller-supplied criteria that narrow and order a list query.
//!
//! ## Filter Fields
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ListFilter                                       │
//! │                                                                         │
//! │  meeting_ids   [1, 2]      → meeting_id IN (?,?)     empty = no limit  │
//! │  visible_only  true        → visible = ?             false = no limit  │
//! │  sort_by       "number"    → SortField::Number       empty = default   │
//! │  order         "asc"       → SortOrder::Asc          other = DESC      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sort Allow-List
//! Column names cannot be bound as SQL parameters, so `sort_by` is parsed
//! into [`SortField`] and only the enum's literal column text reaches the
//! query. Anything outside the list is rejected with a validation error.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// List Filter
// =============================================================================

/// Criteria for a list query. Read-only input to the query builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListFilter {
    /// Only records in these meetings (empty = any meeting).
    pub meeting_ids: Vec<i64>,

    /// Only visible records when true.
    pub visible_only: bool,

    /// Column to sort by (empty = advertised start time).
    pub sort_by: String,

    /// "ASC"/"ASCENDING" (any case) for ascending, anything else descending.
    pub order: String,
}

impl ListFilter {
    /// Resolves `sort_by` against the allow-list.
    pub fn sort_field(&self) -> Result<SortField, ValidationError> {
        if self.sort_by.is_empty() {
            return Ok(SortField::default());
        }
        self.sort_by.parse()
    }

    /// Resolves `order`; never fails.
    pub fn sort_order(&self) -> SortOrder {
        SortOrder::parse_lenient(&self.order)
    }
}

// =============================================================================
// Sort Field
// =============================================================================

/// Columns a list query may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Id,
    MeetingId,
    Name,
    Number,
    Visible,
    #[default]
    AdvertisedStartTime,
}

impl SortField {
    /// Every sortable field, in column order.
    pub const ALL: [SortField; 6] = [
        SortField::Id,
        SortField::MeetingId,
        SortField::Name,
        SortField::Number,
        SortField::Visible,
        SortField::AdvertisedStartTime,
    ];

    /// SQL column name.
    pub const fn column(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::MeetingId => "meeting_id",
            SortField::Name => "name",
            SortField::Number => "number",
            SortField::Visible => "visible",
            SortField::AdvertisedStartTime => "advertised_start_time",
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

impl std::str::FromStr for SortField {
    type Err = ValidationError;

    /// Case-insensitive match on the column name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        SortField::ALL
            .into_iter()
            .find(|field| field.column() == lowered)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "sort_by".to_string(),
                value: s.to_string(),
                allowed: SortField::ALL
                    .iter()
                    .map(|field| field.column().to_string())
                    .collect(),
            })
    }
}

// =============================================================================
// Sort Order
// =============================================================================

/// Sort direction. Descending puts the latest start times first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// `ASC` for "asc"/"ascending" in any case, `DESC` for everything else
    /// (including empty input).
    pub fn parse_lenient(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "ASC" | "ASCENDING" => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    /// SQL keyword.
    pub const fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_parsing() {
        assert_eq!("number".parse::<SortField>().unwrap(), SortField::Number);
        assert_eq!("NAME".parse::<SortField>().unwrap(), SortField::Name);
        assert_eq!(
            "Meeting_Id".parse::<SortField>().unwrap(),
            SortField::MeetingId
        );
        assert_eq!(
            "advertised_start_time".parse::<SortField>().unwrap(),
            SortField::AdvertisedStartTime
        );
    }

    #[test]
    fn test_sort_field_rejects_unknown_columns() {
        assert!("status".parse::<SortField>().is_err());
        assert!("number; DROP TABLE races".parse::<SortField>().is_err());
        assert!("name desc, id".parse::<SortField>().is_err());

        let err = "colour".parse::<SortField>().unwrap_err();
        match err {
            ValidationError::NotAllowed {
                field,
                value,
                allowed,
            } => {
                assert_eq!(field, "sort_by");
                assert_eq!(value, "colour");
                assert_eq!(allowed.len(), SortField::ALL.len());
                assert!(allowed.contains(&"advertised_start_time".to_string()));
            }
        }
    }

    #[test]
    fn test_empty_sort_by_uses_default_field() {
        let filter = ListFilter::default();
        assert_eq!(filter.sort_field().unwrap(), SortField::AdvertisedStartTime);
    }

    #[test]
    fn test_sort_order_is_lenient() {
        assert_eq!(SortOrder::parse_lenient("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::parse_lenient("ASC"), SortOrder::Asc);
        assert_eq!(SortOrder::parse_lenient("Ascending"), SortOrder::Asc);
        assert_eq!(SortOrder::parse_lenient("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::parse_lenient(""), SortOrder::Desc);
        assert_eq!(SortOrder::parse_lenient("upwards"), SortOrder::Desc);
        assert_eq!(SortOrder::parse_lenient("asc;"), SortOrder::Desc);
    }

    #[test]
    fn test_filter_deserializes_with_missing_fields() {
        let filter: ListFilter = serde_json::from_str(r#"{"meeting_ids":[5]}"#).unwrap();
        assert_eq!(filter.meeting_ids, vec![5]);
        assert!(!filter.visible_only);
        assert!(filter.sort_by.is_empty());
        assert!(filter.order.is_empty());
    }
}

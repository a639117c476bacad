//! # List Query Builder
//!
//! Turns an optional [`ListFilter`] into SQL text with positional
//! placeholders and the matching, ordered argument list.
//!
//! ## How It Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  base:   SELECT * FROM items                                           │
//! │  filter: { meeting_ids: [1, 2], visible_only: true }                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  clauses: meeting_id IN (?,?)      args: [1, 2]                        │
//! │           visible = ?                    [.., true]                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SELECT * FROM items                                                   │
//! │    WHERE meeting_id IN (?,?) AND visible = ?                           │
//! │    ORDER BY advertised_start_time DESC                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every placeholder is pushed together with its argument, so the two can
//! never drift apart. The ORDER BY text comes from
//! [`crate::filter::SortField::column`] and [`crate::filter::SortOrder::keyword`],
//! never from caller input.

use crate::error::CoreResult;
use crate::filter::ListFilter;

// =============================================================================
// Query Fragment
// =============================================================================

/// A value bound to one `?` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlArg {
    Int(i64),
    Bool(bool),
}

/// SQL text plus its bound arguments, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFragment {
    sql: String,
    args: Vec<SqlArg>,
}

impl QueryFragment {
    /// Starts a fragment from a base query with no arguments.
    pub fn new(base: impl Into<String>) -> Self {
        QueryFragment {
            sql: base.into(),
            args: Vec::new(),
        }
    }

    /// SQL text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Bound arguments, in placeholder order.
    pub fn args(&self) -> &[SqlArg] {
        &self.args
    }

    /// Number of `?` placeholders in the SQL text.
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }
}

// =============================================================================
// Builder
// =============================================================================

/// WHERE clauses accumulated before they are joined into the query.
#[derive(Default)]
struct Clauses {
    text: Vec<String>,
    args: Vec<SqlArg>,
}

impl Clauses {
    fn push(&mut self, clause: String, args: impl IntoIterator<Item = SqlArg>) {
        self.text.push(clause);
        self.args.extend(args);
    }
}

/// Builds the list query for `base` narrowed and ordered by `filter`.
///
/// ## Rules
/// - `None` filter: `base` is returned untouched with no arguments
/// - Non-empty `meeting_ids`: `meeting_id IN (?,?,…)`, ids bound in input order
/// - `visible_only`: `visible = ?` bound to `true`
/// - Clauses joined with `AND` behind a single `WHERE` (omitted if none)
/// - Always ends with `ORDER BY <column> <ASC|DESC>`
///
/// ## Errors
/// [`crate::CoreError::InvalidFilter`] when `sort_by` is not a sortable column.
///
/// ## Example
/// ```rust
/// use trackside_core::{build_list_query, ListFilter, SqlArg};
///
/// let filter = ListFilter {
///     meeting_ids: vec![1, 2],
///     visible_only: true,
///     ..ListFilter::default()
/// };
/// let query = build_list_query("SELECT * FROM items", Some(&filter)).unwrap();
///
/// assert_eq!(
///     query.sql(),
///     "SELECT * FROM items WHERE meeting_id IN (?,?) AND visible = ? ORDER BY advertised_start_time DESC"
/// );
/// assert_eq!(query.args(), &[SqlArg::Int(1), SqlArg::Int(2), SqlArg::Bool(true)]);
/// ```
pub fn build_list_query(base: &str, filter: Option<&ListFilter>) -> CoreResult<QueryFragment> {
    let Some(filter) = filter else {
        return Ok(QueryFragment::new(base));
    };

    // Resolve ordering first so a rejected filter never produces SQL.
    let sort_field = filter.sort_field()?;
    let sort_order = filter.sort_order();

    let mut clauses = Clauses::default();

    if !filter.meeting_ids.is_empty() {
        let placeholders = vec!["?"; filter.meeting_ids.len()].join(",");
        clauses.push(
            format!("meeting_id IN ({placeholders})"),
            filter.meeting_ids.iter().copied().map(SqlArg::Int),
        );
    }

    // false or omitted means all records, visible or not
    if filter.visible_only {
        clauses.push("visible = ?".to_string(), [SqlArg::Bool(true)]);
    }

    let mut query = QueryFragment::new(base);

    if !clauses.text.is_empty() {
        query.sql.push_str(" WHERE ");
        query.sql.push_str(&clauses.text.join(" AND "));
        query.args = clauses.args;
    }

    query.sql.push_str(" ORDER BY ");
    query.sql.push_str(sort_field.column());
    query.sql.push(' ');
    query.sql.push_str(sort_order.keyword());

    Ok(query)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    const BASE: &str = "SELECT * FROM items";

    fn filter(meeting_ids: Vec<i64>, visible_only: bool, sort_by: &str, order: &str) -> ListFilter {
        ListFilter {
            meeting_ids,
            visible_only,
            sort_by: sort_by.to_string(),
            order: order.to_string(),
        }
    }

    #[test]
    fn test_no_filter_returns_base_query() {
        let query = build_list_query(BASE, None).unwrap();
        assert_eq!(query.sql(), BASE);
        assert!(query.args().is_empty());
    }

    #[test]
    fn test_meeting_ids_and_visible_only() {
        let f = filter(vec![1, 2], true, "", "");
        let query = build_list_query(BASE, Some(&f)).unwrap();

        assert_eq!(
            query.sql(),
            "SELECT * FROM items WHERE meeting_id IN (?,?) AND visible = ? ORDER BY advertised_start_time DESC"
        );
        assert_eq!(
            query.args(),
            &[SqlArg::Int(1), SqlArg::Int(2), SqlArg::Bool(true)]
        );
    }

    #[test]
    fn test_empty_filter_has_no_where_clause() {
        let f = ListFilter::default();
        let query = build_list_query(BASE, Some(&f)).unwrap();

        assert_eq!(
            query.sql(),
            "SELECT * FROM items ORDER BY advertised_start_time DESC"
        );
        assert!(!query.sql().contains("WHERE"));
        assert!(query.args().is_empty());
    }

    #[test]
    fn test_sort_by_number_ascending() {
        let f = filter(vec![], false, "number", "asc");
        let query = build_list_query(BASE, Some(&f)).unwrap();
        assert_eq!(query.sql(), "SELECT * FROM items ORDER BY number ASC");
    }

    #[test]
    fn test_sort_by_is_lowercased() {
        let f = filter(vec![], false, "MEETING_ID", "ascending");
        let query = build_list_query(BASE, Some(&f)).unwrap();
        assert!(query.sql().ends_with(" ORDER BY meeting_id ASC"));
    }

    #[test]
    fn test_unrecognized_order_falls_back_to_desc() {
        for order in ["", "desc", "sideways", "ASC; DROP TABLE items"] {
            let f = filter(vec![], false, "name", order);
            let query = build_list_query(BASE, Some(&f)).unwrap();
            assert!(
                query.sql().ends_with(" ORDER BY name DESC"),
                "order {order:?} gave {}",
                query.sql()
            );
        }
    }

    #[test]
    fn test_visible_only_alone() {
        let f = filter(vec![], true, "", "");
        let query = build_list_query(BASE, Some(&f)).unwrap();
        assert_eq!(
            query.sql(),
            "SELECT * FROM items WHERE visible = ? ORDER BY advertised_start_time DESC"
        );
        assert_eq!(query.args(), &[SqlArg::Bool(true)]);
    }

    #[test]
    fn test_placeholders_match_args_for_any_id_count() {
        for n in 1..=25_i64 {
            let ids: Vec<i64> = (0..n).map(|i| 100 - i).collect();
            let f = filter(ids.clone(), false, "", "");
            let query = build_list_query(BASE, Some(&f)).unwrap();

            let expected_in = format!("meeting_id IN ({})", vec!["?"; n as usize].join(","));
            assert!(query.sql().contains(&expected_in));
            assert_eq!(query.placeholder_count(), n as usize);

            let bound: Vec<SqlArg> = ids.into_iter().map(SqlArg::Int).collect();
            assert_eq!(query.args(), bound.as_slice());
        }
    }

    #[test]
    fn test_exactly_one_order_by() {
        let f = filter(vec![3], true, "id", "asc");
        let query = build_list_query(BASE, Some(&f)).unwrap();
        assert_eq!(query.sql().matches("ORDER BY").count(), 1);
        assert_eq!(query.placeholder_count(), query.args().len());
    }

    #[test]
    fn test_unknown_sort_field_is_rejected() {
        let f = filter(vec![1], false, "number; DROP TABLE items", "");
        let err = build_list_query(BASE, Some(&f)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidFilter(_)));
    }
}

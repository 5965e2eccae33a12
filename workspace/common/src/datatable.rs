//! Table pagination and sorting state, and its URL query-string form.
//!
//! The query string is the only place this state lives between renders, so
//! encoding has to be deterministic and decoding has to accept anything a
//! user can type into the address bar.
//!
//! Wire format:
//! - `page`: 1-based page number (`page_index + 1`)
//! - `limit`: page size
//! - `sorting`: repeated once per sort column, in priority order; `id` sorts
//!   ascending, `-id` sorts descending

use serde::{Deserialize, Serialize};

/// Page size used when the URL does not carry a usable `limit`.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

pub const PAGE_PARAM: &str = "page";
pub const LIMIT_PARAM: &str = "limit";
pub const SORTING_PARAM: &str = "sorting";

const DESC_PREFIX: char = '-';

/// Current page of a result list. `page_index` is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaginationState {
    pub page_index: u64,
    pub page_size: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    pub fn new(page_index: u64, page_size: u64) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    /// 1-based page number as used on the wire.
    pub fn page_number(&self) -> u64 {
        self.page_index.saturating_add(1)
    }

    pub fn with_page_index(self, page_index: u64) -> Self {
        Self { page_index, ..self }
    }

    /// Changing the page size invalidates the current offset, so the index
    /// goes back to the first page.
    pub fn with_page_size(self, page_size: u64) -> Self {
        Self {
            page_index: 0,
            page_size,
        }
    }
}

/// One sort column. Column ids must be non-empty and must not start with `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnSort {
    pub id: String,
    pub desc: bool,
}

impl ColumnSort {
    pub fn asc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: false,
        }
    }

    pub fn desc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: true,
        }
    }

    /// Wire form: `id` or `-id`.
    pub fn to_param(&self) -> String {
        if self.desc {
            format!("{}{}", DESC_PREFIX, self.id)
        } else {
            self.id.clone()
        }
    }

    /// Parses `id` / `-id`. Returns `None` when no column id remains.
    pub fn from_param(value: &str) -> Option<Self> {
        let (id, desc) = match value.strip_prefix(DESC_PREFIX) {
            Some(rest) => (rest, true),
            None => (value, false),
        };

        if id.is_empty() || id.starts_with(DESC_PREFIX) {
            return None;
        }

        Some(Self {
            id: id.to_string(),
            desc,
        })
    }
}

/// Sort columns in priority order. Empty means the API default ordering.
pub type SortingState = Vec<ColumnSort>;

/// Pagination and sorting parameters in the shape the search API expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiPageParams {
    pub page: u64,
    pub limit: u64,
    pub sorting: Vec<String>,
}

/// Raw query fields. Everything stays a list of strings so neither a bad
/// nor a repeated field can take the others down with it.
#[derive(Debug, Default, Deserialize)]
struct RawSearchParams {
    #[serde(default)]
    page: Vec<String>,
    #[serde(default)]
    limit: Vec<String>,
    #[serde(default)]
    sorting: Vec<String>,
}

/// Ordered key/value pairs for the given state: `page`, `limit`, then one
/// `sorting` entry per column.
pub fn search_param_pairs(
    pagination: &PaginationState,
    sorting: &[ColumnSort],
) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(2 + sorting.len());
    pairs.push((PAGE_PARAM.to_string(), pagination.page_number().to_string()));
    pairs.push((LIMIT_PARAM.to_string(), pagination.page_size.to_string()));
    pairs.extend(
        sorting
            .iter()
            .map(|column| (SORTING_PARAM.to_string(), column.to_param())),
    );
    pairs
}

/// Joins pairs into a query string without the leading `?`.
///
/// Uses `application/x-www-form-urlencoded` (space as `+`), the same
/// encoding the router applies to query pairs, so a URL built from this
/// string is exactly the one the browser ends up on.
pub fn encode_pairs(pairs: &[(String, String)]) -> String {
    match serde_html_form::to_string(pairs) {
        Ok(query) => query,
        Err(e) => {
            tracing::error!("Failed to encode query pairs {:?}: {}", pairs, e);
            String::new()
        }
    }
}

/// Encodes pagination and sorting into a query string (no leading `?`).
pub fn serialize_search_params(pagination: &PaginationState, sorting: &[ColumnSort]) -> String {
    encode_pairs(&search_param_pairs(pagination, sorting))
}

/// Decodes pagination and sorting from a query string.
///
/// Never fails. A repeated `page` or `limit` uses its first value. Each
/// missing or malformed field falls back to its default independently of
/// the others; a query string that cannot be decoded at all
/// yields the defaults for everything.
pub fn parse_search_params(query: &str) -> (PaginationState, SortingState) {
    let query = query.trim_start_matches('?');

    let raw: RawSearchParams = match serde_html_form::from_str(query) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!("Unreadable table query '{}', using defaults: {}", query, e);
            RawSearchParams::default()
        }
    };

    let page_index = match raw.page.first() {
        None => 0,
        Some(value) => match value.trim().parse::<u64>() {
            Ok(page) if page >= 1 => page - 1,
            _ => {
                tracing::debug!("Ignoring invalid page '{}'", value);
                0
            }
        },
    };

    let page_size = match raw.limit.first() {
        None => DEFAULT_PAGE_SIZE,
        Some(value) => match value.trim().parse::<u64>() {
            Ok(limit) if limit > 0 => limit,
            _ => {
                tracing::debug!("Ignoring invalid limit '{}'", value);
                DEFAULT_PAGE_SIZE
            }
        },
    };

    let sorting = raw
        .sorting
        .iter()
        .filter_map(|value| {
            let column = ColumnSort::from_param(value);
            if column.is_none() {
                tracing::debug!("Ignoring invalid sorting entry '{}'", value);
            }
            column
        })
        .collect();

    (PaginationState::new(page_index, page_size), sorting)
}

/// Converts table state into search API parameters.
pub fn api_params(pagination: &PaginationState, sorting: &[ColumnSort]) -> ApiPageParams {
    ApiPageParams {
        page: pagination.page_number(),
        limit: pagination.page_size,
        sorting: sorting.iter().map(ColumnSort::to_param).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_example() {
        let pagination = PaginationState::new(2, 20);
        let sorting = vec![ColumnSort::desc("created_at")];

        let query = serialize_search_params(&pagination, &sorting);
        assert_eq!(query, "page=3&limit=20&sorting=-created_at");

        let (decoded_pagination, decoded_sorting) = parse_search_params(&query);
        assert_eq!(decoded_pagination, pagination);
        assert_eq!(decoded_sorting, sorting);
    }

    #[test]
    fn test_round_trip_preserves_sort_order() {
        let pagination = PaginationState::new(0, 50);
        let sorting = vec![
            ColumnSort::asc("amount"),
            ColumnSort::desc("created_at"),
            ColumnSort::asc("type"),
        ];

        let query = serialize_search_params(&pagination, &sorting);
        let (decoded_pagination, decoded_sorting) = parse_search_params(&query);

        assert_eq!(decoded_pagination, pagination);
        assert_eq!(decoded_sorting, sorting);
    }

    #[test]
    fn test_round_trip_with_reserved_characters_in_column_id() {
        let pagination = PaginationState::new(7, 1);
        let sorting = vec![ColumnSort::desc("order.product name&x=1")];

        let query = serialize_search_params(&pagination, &sorting);
        let (decoded_pagination, decoded_sorting) = parse_search_params(&query);

        assert_eq!(decoded_pagination, pagination);
        assert_eq!(decoded_sorting, sorting);
    }

    #[test]
    fn test_round_trip_extreme_values() {
        let pagination = PaginationState::new(u64::MAX - 1, u64::MAX);
        let sorting = SortingState::new();

        let query = serialize_search_params(&pagination, &sorting);
        assert_eq!(parse_search_params(&query), (pagination, sorting));
    }

    #[test]
    fn test_encode_pairs_uses_form_encoding() {
        let pairs = vec![
            ("sorting".to_string(), "-order name".to_string()),
            ("q".to_string(), "a~b*c&d=e".to_string()),
        ];
        assert_eq!(encode_pairs(&pairs), "sorting=-order+name&q=a%7Eb*c%26d%3De");
        assert_eq!(encode_pairs(&[]), "");
    }

    #[test]
    fn test_serialize_is_deterministic() {
        let pagination = PaginationState::new(4, 10);
        let sorting = vec![ColumnSort::asc("amount"), ColumnSort::desc("created_at")];

        let first = serialize_search_params(&pagination, &sorting);
        let second = serialize_search_params(&PaginationState::new(4, 10), &sorting.clone());
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_pagination_uses_defaults() {
        let (pagination, sorting) = parse_search_params("");
        assert_eq!(pagination.page_index, 0);
        assert_eq!(pagination.page_size, DEFAULT_PAGE_SIZE);
        assert!(sorting.is_empty());

        let (pagination, sorting) = parse_search_params("?type=payouts&sorting=amount");
        assert_eq!(pagination, PaginationState::default());
        assert_eq!(sorting, vec![ColumnSort::asc("amount")]);
    }

    #[test]
    fn test_malformed_fields_fall_back_independently() {
        let (pagination, _) = parse_search_params("page=abc&limit=15");
        assert_eq!(pagination, PaginationState::new(0, 15));

        let (pagination, _) = parse_search_params("page=4&limit=0");
        assert_eq!(pagination, PaginationState::new(3, DEFAULT_PAGE_SIZE));

        let (pagination, _) = parse_search_params("page=0&limit=-5");
        assert_eq!(pagination, PaginationState::default());

        let (pagination, _) = parse_search_params("page=99999999999999999999999&limit=10");
        assert_eq!(pagination, PaginationState::new(0, 10));
    }

    #[test]
    fn test_repeated_keys_use_first_value() {
        let (pagination, sorting) =
            parse_search_params("page=3&page=4&limit=10&limit=50&sorting=-amount");
        assert_eq!(pagination, PaginationState::new(2, 10));
        assert_eq!(sorting, vec![ColumnSort::desc("amount")]);
    }

    #[test]
    fn test_invalid_sorting_entries_are_skipped() {
        let (_, sorting) = parse_search_params("sorting=&sorting=-&sorting=--x&sorting=-amount");
        assert_eq!(sorting, vec![ColumnSort::desc("amount")]);
    }

    #[test]
    fn test_accepts_leading_question_mark_and_plus_spaces() {
        let (pagination, sorting) = parse_search_params("?page=2&limit=5&sorting=net+amount");
        assert_eq!(pagination, PaginationState::new(1, 5));
        assert_eq!(sorting, vec![ColumnSort::asc("net amount")]);
    }

    #[test]
    fn test_column_sort_param_forms() {
        assert_eq!(ColumnSort::asc("amount").to_param(), "amount");
        assert_eq!(ColumnSort::desc("amount").to_param(), "-amount");
        assert_eq!(ColumnSort::from_param("-amount"), Some(ColumnSort::desc("amount")));
        assert_eq!(ColumnSort::from_param(""), None);
        assert_eq!(ColumnSort::from_param("-"), None);
    }

    #[test]
    fn test_with_page_size_resets_index() {
        let pagination = PaginationState::new(5, 20).with_page_size(50);
        assert_eq!(pagination, PaginationState::new(0, 50));

        let pagination = PaginationState::new(5, 20).with_page_index(2);
        assert_eq!(pagination, PaginationState::new(2, 20));
    }

    #[test]
    fn test_api_params() {
        let params = api_params(
            &PaginationState::new(1, 25),
            &[ColumnSort::desc("created_at"), ColumnSort::asc("amount")],
        );

        assert_eq!(params.page, 2);
        assert_eq!(params.limit, 25);
        assert_eq!(params.sorting, vec!["-created_at".to_string(), "amount".to_string()]);
    }
}

//! Page state of the incoming finance view: which tab is open, which page of
//! it, and how it is sorted. All of it round-trips through the URL.

use serde::{Deserialize, Serialize};

use crate::datatable::{
    self, ApiPageParams, ColumnSort, PaginationState, SortingState, encode_pairs,
    search_param_pairs,
};
use crate::{ListResource, TransactionType};

/// Query parameter holding the active tab.
pub const TAB_PARAM: &str = "type";

/// Tabs of the incoming finance page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomingTab {
    /// Balance transactions credited to the account.
    #[default]
    Transactions,
    /// Transfers from the account to the bank account.
    Payouts,
}

impl IncomingTab {
    pub const ALL: [IncomingTab; 2] = [IncomingTab::Transactions, IncomingTab::Payouts];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncomingTab::Transactions => "transactions",
            IncomingTab::Payouts => "payouts",
        }
    }

    /// Reads the `type` parameter. Missing or unknown values select
    /// [`IncomingTab::Transactions`].
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("payouts") => IncomingTab::Payouts,
            Some("transactions") | None => IncomingTab::Transactions,
            Some(other) => {
                tracing::debug!("Unknown incoming tab '{}', showing transactions", other);
                IncomingTab::Transactions
            }
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            IncomingTab::Transactions => "Transactions",
            IncomingTab::Payouts => "Payouts",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            IncomingTab::Transactions => "Made from the platform to your account",
            IncomingTab::Payouts => "Made from your account to your bank account",
        }
    }
}

/// Only the `type` parameter; the table fields are decoded by
/// [`datatable::parse_search_params`]. A repeated `type` uses its first value.
#[derive(Debug, Default, Deserialize)]
struct RawTabParam {
    #[serde(default, rename = "type")]
    tab: Vec<String>,
}

/// Everything the incoming finance page renders from. Built fresh from the
/// URL on every navigation; changes produce a new value and a new URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IncomingFinanceState {
    pub tab: IncomingTab,
    pub pagination: PaginationState,
    pub sorting: SortingState,
}

impl IncomingFinanceState {
    pub fn new(tab: IncomingTab, pagination: PaginationState, sorting: SortingState) -> Self {
        Self {
            tab,
            pagination,
            sorting,
        }
    }

    /// Decodes the page state from a location query string, substituting
    /// defaults for anything missing or malformed.
    pub fn from_query(query: &str) -> Self {
        let trimmed = query.trim_start_matches('?');
        let (pagination, sorting) = datatable::parse_search_params(trimmed);

        let tab_param = match serde_html_form::from_str::<RawTabParam>(trimmed) {
            Ok(raw) => raw.tab.into_iter().next(),
            Err(e) => {
                tracing::warn!("Unreadable tab parameter in '{}': {}", trimmed, e);
                None
            }
        };

        Self {
            tab: IncomingTab::from_param(tab_param.as_deref()),
            pagination,
            sorting,
        }
    }

    /// Query pairs: pagination and sorting first, then `type`.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = search_param_pairs(&self.pagination, &self.sorting);
        pairs.push((TAB_PARAM.to_string(), self.tab.as_str().to_string()));
        pairs
    }

    /// Query string without the leading `?`. Equal states give identical
    /// strings.
    pub fn query_string(&self) -> String {
        encode_pairs(&self.query_pairs())
    }

    /// Full in-app URL of this state for the given organization.
    pub fn href(&self, organization_slug: &str) -> String {
        format!("{}?{}", incoming_finance_path(organization_slug), self.query_string())
    }

    /// Same pagination and sorting, different tab.
    pub fn with_tab(&self, tab: IncomingTab) -> Self {
        Self {
            tab,
            ..self.clone()
        }
    }

    pub fn with_pagination(&self, pagination: PaginationState) -> Self {
        Self {
            pagination,
            ..self.clone()
        }
    }

    /// A new ordering makes the current offset meaningless, so the page index
    /// goes back to 0.
    pub fn with_sorting(&self, sorting: SortingState) -> Self {
        Self {
            pagination: self.pagination.with_page_index(0),
            sorting,
            ..self.clone()
        }
    }

    /// Balance transactions of the account, platform fees excluded.
    pub fn balances_request(&self, account_id: &str) -> TransactionSearchParams {
        TransactionSearchParams::new(
            account_id,
            TransactionType::Balance,
            Some(true),
            datatable::api_params(&self.pagination, &self.sorting),
        )
    }

    /// Payout transactions of the account.
    pub fn payouts_request(&self, account_id: &str) -> TransactionSearchParams {
        TransactionSearchParams::new(
            account_id,
            TransactionType::Payout,
            None,
            datatable::api_params(&self.pagination, &self.sorting),
        )
    }

    /// Request backing the given tab.
    pub fn request_for(&self, tab: IncomingTab, account_id: &str) -> TransactionSearchParams {
        match tab {
            IncomingTab::Transactions => self.balances_request(account_id),
            IncomingTab::Payouts => self.payouts_request(account_id),
        }
    }
}

/// Path of the incoming finance page of an organization.
pub fn incoming_finance_path(organization_slug: &str) -> String {
    format!(
        "/dashboard/{}/finance/incoming",
        urlencoding::encode(organization_slug)
    )
}

/// Parameters of `GET /transactions/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSearchParams {
    pub account_id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub exclude_platform_fees: Option<bool>,
    pub page: u64,
    pub limit: u64,
    pub sorting: Vec<String>,
}

impl TransactionSearchParams {
    pub fn new(
        account_id: &str,
        transaction_type: TransactionType,
        exclude_platform_fees: Option<bool>,
        page_params: ApiPageParams,
    ) -> Self {
        Self {
            account_id: account_id.to_string(),
            transaction_type,
            exclude_platform_fees,
            page: page_params.page,
            limit: page_params.limit,
            sorting: page_params.sorting,
        }
    }

    /// Deterministic query pairs for the search endpoint.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("account_id".to_string(), self.account_id.clone()),
            ("type".to_string(), self.transaction_type.as_str().to_string()),
        ];
        if let Some(exclude) = self.exclude_platform_fees {
            pairs.push(("exclude_platform_fees".to_string(), exclude.to_string()));
        }
        pairs.push(("page".to_string(), self.page.to_string()));
        pairs.push(("limit".to_string(), self.limit.to_string()));
        pairs.extend(
            self.sorting
                .iter()
                .map(|column| ("sorting".to_string(), column.clone())),
        );
        pairs
    }

    pub fn query_string(&self) -> String {
        encode_pairs(&self.query_pairs())
    }
}

/// What a transaction list component needs from a search result.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionListView<T> {
    pub items: Vec<T>,
    /// Never below 1, so pagination controls keep a stable shape.
    pub page_count: u64,
    pub is_loading: bool,
}

impl<T: Clone> TransactionListView<T> {
    /// Builds the view from a possibly absent result. Absent data gives an
    /// empty list with one page.
    pub fn from_result(data: Option<&ListResource<T>>, is_loading: bool) -> Self {
        Self {
            items: data.map(|list| list.items.clone()).unwrap_or_default(),
            page_count: data.map(|list| list.pagination.max_page).unwrap_or(1).max(1),
            is_loading,
        }
    }
}

/// Next sorting after a click on `column_id`'s header.
///
/// The clicked column moves to the front and cycles ascending, descending,
/// then unsorted. Other columns keep their relative order.
pub fn toggle_column_sort(sorting: &[ColumnSort], column_id: &str) -> SortingState {
    let current = sorting.iter().find(|column| column.id == column_id);
    let mut next: SortingState = Vec::with_capacity(sorting.len() + 1);

    match current {
        None => next.push(ColumnSort::asc(column_id)),
        Some(column) if !column.desc => next.push(ColumnSort::desc(column_id)),
        Some(_) => {}
    }

    next.extend(
        sorting
            .iter()
            .filter(|column| column.id != column_id)
            .cloned(),
    );
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PaginationMeta;
    use crate::datatable::DEFAULT_PAGE_SIZE;

    fn sample_state() -> IncomingFinanceState {
        IncomingFinanceState::new(
            IncomingTab::Transactions,
            PaginationState::new(2, 20),
            vec![ColumnSort::desc("created_at")],
        )
    }

    #[test]
    fn test_tab_from_query() {
        assert_eq!(IncomingFinanceState::from_query("?type=payouts").tab, IncomingTab::Payouts);
        assert_eq!(
            IncomingFinanceState::from_query("type=transactions").tab,
            IncomingTab::Transactions
        );
        assert_eq!(IncomingFinanceState::from_query("").tab, IncomingTab::Transactions);
        assert_eq!(
            IncomingFinanceState::from_query("type=refunds&page=2").tab,
            IncomingTab::Transactions
        );
    }

    #[test]
    fn test_repeated_tab_uses_first_value() {
        let state = IncomingFinanceState::from_query(
            "?page=3&limit=10&sorting=-amount&type=payouts&type=payouts",
        );
        assert_eq!(state.tab, IncomingTab::Payouts);
        assert_eq!(state.pagination, PaginationState::new(2, 10));
        assert_eq!(state.sorting, vec![ColumnSort::desc("amount")]);

        let state = IncomingFinanceState::from_query("type=payouts&type=transactions");
        assert_eq!(state.tab, IncomingTab::Payouts);
    }

    #[test]
    fn test_state_round_trip() {
        let state = sample_state().with_tab(IncomingTab::Payouts);
        let decoded = IncomingFinanceState::from_query(&state.query_string());
        assert_eq!(decoded, state);
    }

    #[test]
    fn test_query_string_layout() {
        assert_eq!(
            sample_state().query_string(),
            "page=3&limit=20&sorting=-created_at&type=transactions"
        );
    }

    #[test]
    fn test_tab_switch_preserves_pagination_and_sorting() {
        let state = sample_state();
        let switched = state.with_tab(IncomingTab::Payouts);

        assert_eq!(switched.tab, IncomingTab::Payouts);
        assert_eq!(switched.pagination, state.pagination);
        assert_eq!(switched.sorting, state.sorting);

        let href = switched.href("acme");
        assert_eq!(
            href,
            "/dashboard/acme/finance/incoming?page=3&limit=20&sorting=-created_at&type=payouts"
        );
    }

    #[test]
    fn test_page_change_keeps_tab() {
        let state = sample_state().with_tab(IncomingTab::Payouts);
        let next = state.with_pagination(PaginationState::new(3, 20));

        let decoded = IncomingFinanceState::from_query(&next.query_string());
        assert_eq!(decoded.tab, IncomingTab::Payouts);
        assert_eq!(decoded.pagination.page_index, 3);
    }

    #[test]
    fn test_sorting_change_resets_page_index() {
        let next = sample_state().with_sorting(vec![ColumnSort::asc("amount")]);
        assert_eq!(next.pagination, PaginationState::new(0, 20));
        assert_eq!(next.sorting, vec![ColumnSort::asc("amount")]);
    }

    #[test]
    fn test_missing_pagination_in_url() {
        let state = IncomingFinanceState::from_query("type=payouts");
        assert_eq!(state.pagination.page_index, 0);
        assert_eq!(state.pagination.page_size, DEFAULT_PAGE_SIZE);
        assert!(state.sorting.is_empty());
    }

    #[test]
    fn test_requests_share_pagination_and_differ_in_kind() {
        let state = sample_state();
        let balances = state.balances_request("acc_1");
        let payouts = state.payouts_request("acc_1");

        assert_eq!(balances.transaction_type, TransactionType::Balance);
        assert_eq!(balances.exclude_platform_fees, Some(true));
        assert_eq!(payouts.transaction_type, TransactionType::Payout);
        assert_eq!(payouts.exclude_platform_fees, None);

        for request in [&balances, &payouts] {
            assert_eq!(request.account_id, "acc_1");
            assert_eq!(request.page, 3);
            assert_eq!(request.limit, 20);
            assert_eq!(request.sorting, vec!["-created_at".to_string()]);
        }

        assert_eq!(state.request_for(IncomingTab::Payouts, "acc_1"), payouts);
    }

    #[test]
    fn test_search_query_string() {
        let balances = sample_state().balances_request("acc 1");
        assert_eq!(
            balances.query_string(),
            "account_id=acc+1&type=balance&exclude_platform_fees=true&page=3&limit=20&sorting=-created_at"
        );

        let payouts = sample_state().payouts_request("acc_1");
        assert_eq!(
            payouts.query_string(),
            "account_id=acc_1&type=payout&page=3&limit=20&sorting=-created_at"
        );
    }

    #[test]
    fn test_list_view_without_data() {
        let view = TransactionListView::<u32>::from_result(None, true);
        assert!(view.items.is_empty());
        assert_eq!(view.page_count, 1);
        assert!(view.is_loading);
    }

    #[test]
    fn test_list_view_with_zero_pages() {
        let empty = ListResource::<u32> {
            items: vec![],
            pagination: PaginationMeta {
                total_count: 0,
                max_page: 0,
            },
        };
        let view = TransactionListView::from_result(Some(&empty), false);
        assert!(view.items.is_empty());
        assert_eq!(view.page_count, 1);
    }

    #[test]
    fn test_list_view_with_data() {
        let list = ListResource {
            items: vec![1u32, 2, 3],
            pagination: PaginationMeta {
                total_count: 43,
                max_page: 3,
            },
        };
        let view = TransactionListView::from_result(Some(&list), false);
        assert_eq!(view.items, vec![1, 2, 3]);
        assert_eq!(view.page_count, 3);
        assert!(!view.is_loading);
    }

    #[test]
    fn test_toggle_column_sort_cycles() {
        let sorting = toggle_column_sort(&[], "amount");
        assert_eq!(sorting, vec![ColumnSort::asc("amount")]);

        let sorting = toggle_column_sort(&sorting, "amount");
        assert_eq!(sorting, vec![ColumnSort::desc("amount")]);

        let sorting = toggle_column_sort(&sorting, "amount");
        assert!(sorting.is_empty());
    }

    #[test]
    fn test_toggle_column_sort_moves_column_to_front() {
        let sorting = vec![ColumnSort::desc("created_at"), ColumnSort::asc("amount")];
        let next = toggle_column_sort(&sorting, "amount");
        assert_eq!(
            next,
            vec![ColumnSort::desc("amount"), ColumnSort::desc("created_at")]
        );
    }
}

use common::datatable::encode_pairs;
use common::{ListResource, TransactionDto, TransactionSearchParams, TransactionsSummary};
use crate::api_client;

/// Search transactions of an account with pagination and sorting
pub async fn search_transactions(params: &TransactionSearchParams) -> Result<ListResource<TransactionDto>, String> {
    log::trace!(
        "Searching {} transactions for account ID: {} (page {}, limit {})",
        params.transaction_type.as_str(),
        params.account_id,
        params.page,
        params.limit
    );
    let endpoint = api_client::with_query("/transactions/search", &params.query_string());
    let result = api_client::get::<ListResource<TransactionDto>>(&endpoint).await;
    match &result {
        Ok(list) => log::info!(
            "Fetched {} {} transactions ({} total, {} pages)",
            list.items.len(),
            params.transaction_type.as_str(),
            list.pagination.total_count,
            list.pagination.max_page
        ),
        Err(e) => log::error!("Failed to search {} transactions: {}", params.transaction_type.as_str(), e),
    }
    result
}

/// Get balance and payout totals for an account
pub async fn get_transactions_summary(account_id: &str) -> Result<TransactionsSummary, String> {
    log::trace!("Fetching transactions summary for account ID: {}", account_id);
    let endpoint = api_client::with_query(
        "/transactions/summary",
        &encode_pairs(&[("account_id".to_string(), account_id.to_string())]),
    );
    let result = api_client::get::<TransactionsSummary>(&endpoint).await;
    match &result {
        Ok(summary) => log::info!(
            "Fetched summary for account ID: {} (balance {} {})",
            account_id,
            summary.balance.amount,
            summary.balance.currency
        ),
        Err(e) => log::error!("Failed to fetch summary for account {}: {}", account_id, e),
    }
    result
}

use common::{CreatePayoutRequest, TransactionDto};
use crate::api_client;

/// Withdraw the available balance of an account to its bank account
pub async fn create_payout(account_id: &str) -> Result<TransactionDto, String> {
    log::debug!("Creating payout for account ID: {}", account_id);
    let request = CreatePayoutRequest {
        account_id: account_id.to_string(),
    };
    let result = api_client::post::<TransactionDto, _>("/payouts", &request).await;
    match &result {
        Ok(payout) => log::info!("Successfully created payout {} ({} {})", payout.id, payout.amount, payout.currency),
        Err(e) => log::error!("Failed to create payout for account {}: {}", account_id, e),
    }
    result
}

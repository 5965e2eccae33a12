//! Common transport-layer types shared with the finance API, plus the pure
//! page-state logic of the incoming finance page.
//! The structs mirror the API's request/response payloads so the frontend
//! can deserialize responses without duplicating shapes.

pub mod datatable;
pub mod incoming;
pub mod money;

pub use datatable::{
    ApiPageParams, ColumnSort, DEFAULT_PAGE_SIZE, PaginationState, SortingState,
    parse_search_params, serialize_search_params,
};
pub use incoming::{IncomingFinanceState, IncomingTab, TransactionListView, TransactionSearchParams};
pub use money::format_amount;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generic API response wrapper used by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

/// Error payload returned by the API on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub success: bool,
}

// ===================== Pagination =====================

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PaginationMeta {
    pub total_count: u64,
    pub max_page: u64,
}

/// A page of items together with its pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListResource<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> Default for ListResource<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: PaginationMeta::default(),
        }
    }
}

// ===================== Organizations =====================

/// Organization descriptor (mirrors the API's Organization).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrganizationDto {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// Payout account attached to an organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrganizationAccountDto {
    pub id: String,
    pub account_type: String,
    pub status: String,
    pub currency: Option<String>,
    pub country: String,
    pub is_details_submitted: bool,
    pub is_charges_enabled: bool,
    pub is_payouts_enabled: bool,
}

impl OrganizationAccountDto {
    /// Whether the account can receive payouts right now.
    pub fn is_ready_for_payouts(&self) -> bool {
        self.is_details_submitted && self.is_payouts_enabled
    }
}

// ===================== Transactions =====================

/// Kind of a transaction record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Payment,
    ProcessorFee,
    Refund,
    Dispute,
    Balance,
    Payout,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Payment => "payment",
            TransactionType::ProcessorFee => "processor_fee",
            TransactionType::Refund => "refund",
            TransactionType::Dispute => "dispute",
            TransactionType::Balance => "balance",
            TransactionType::Payout => "payout",
        }
    }
}

/// Product a transaction's order was placed for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionProduct {
    pub id: String,
    pub name: String,
}

/// Order embedded in a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionOrder {
    pub id: String,
    pub product: Option<TransactionProduct>,
}

/// Fee incurred by the account for a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionFee {
    pub id: String,
    pub amount: i64,
    pub account_amount: i64,
    pub platform_fee_type: Option<String>,
}

/// Transaction response model. Amounts are integer minor units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDto {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub currency: String,
    pub amount: i64,
    pub account_currency: String,
    pub account_amount: i64,
    #[serde(default)]
    pub tax_amount: i64,
    pub platform_fee_type: Option<String>,
    pub order: Option<TransactionOrder>,
    pub payout_transaction_id: Option<String>,
    pub incurred_by_transaction_id: Option<String>,
    #[serde(default)]
    pub account_incurred_fees: Vec<TransactionFee>,
}

impl TransactionDto {
    /// Sum of the fees the account paid for this transaction, in account
    /// currency.
    pub fn fees_total(&self) -> i64 {
        self.account_incurred_fees
            .iter()
            .map(|fee| fee.account_amount)
            .sum()
    }

    /// What actually reached (or left) the account after fees.
    pub fn net_amount(&self) -> i64 {
        self.account_amount - self.fees_total()
    }

    /// Short human description for list rows.
    pub fn description(&self) -> String {
        match (&self.transaction_type, &self.order) {
            (_, Some(TransactionOrder { product: Some(product), .. })) => product.name.clone(),
            (TransactionType::Payout, _) => "Payout".to_string(),
            (TransactionType::Refund, _) => "Refund".to_string(),
            (TransactionType::Dispute, _) => "Dispute".to_string(),
            (TransactionType::ProcessorFee, _) => "Processor fee".to_string(),
            _ => "Payment".to_string(),
        }
    }
}

/// Amount in a single currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionsBalance {
    pub currency: String,
    pub amount: i64,
}

/// Account totals shown above the transaction tabs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionsSummary {
    pub balance: TransactionsBalance,
    pub payout: TransactionsBalance,
}

/// Request body for withdrawing the account balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatePayoutRequest {
    pub account_id: String,
}

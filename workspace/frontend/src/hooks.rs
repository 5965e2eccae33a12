use common::{
    ListResource, OrganizationAccountDto, OrganizationDto, TransactionDto,
    TransactionSearchParams, TransactionsSummary,
};
use yew::prelude::*;

use crate::api_client::{organization, transaction};
use crate::common::fetch_hook::use_fetch_with_deps;

/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Organization identified by the route slug.
#[hook]
pub fn use_organization(slug: String) -> (UseStateHandle<FetchState<OrganizationDto>>, Callback<()>) {
    use_fetch_with_deps(Some(slug), |slug: String| async move {
        organization::get_organization_by_slug(&slug).await
    })
}

/// Payout account of the organization. `Success(None)` means the
/// organization has not set one up.
#[hook]
pub fn use_organization_account(
    organization_id: Option<String>,
) -> (UseStateHandle<FetchState<Option<OrganizationAccountDto>>>, Callback<()>) {
    use_fetch_with_deps(organization_id, |organization_id: String| async move {
        organization::get_organization_account(&organization_id).await
    })
}

/// Balance and payout totals of an account.
#[hook]
pub fn use_transactions_summary(
    account_id: Option<String>,
) -> (UseStateHandle<FetchState<TransactionsSummary>>, Callback<()>) {
    use_fetch_with_deps(account_id, |account_id: String| async move {
        transaction::get_transactions_summary(&account_id).await
    })
}

/// One page of transactions. Refetches whenever the parameters change and
/// stays idle while they are `None` (account not known yet).
#[hook]
pub fn use_search_transactions(
    params: Option<TransactionSearchParams>,
) -> (UseStateHandle<FetchState<ListResource<TransactionDto>>>, Callback<()>) {
    use_fetch_with_deps(params, |params: TransactionSearchParams| async move {
        transaction::search_transactions(&params).await
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_state_accessors() {
        let state: FetchState<u32> = FetchState::Success(7);
        assert_eq!(state.data(), Some(&7));
        assert!(!state.is_loading());
        assert!(state.error().is_none());

        let state: FetchState<u32> = FetchState::Error("boom".to_string());
        assert!(state.data().is_none());
        assert_eq!(state.error().map(String::as_str), Some("boom"));

        assert!(FetchState::<u32>::Loading.is_loading());
        assert!(FetchState::<u32>::default() == FetchState::NotStarted);
    }
}

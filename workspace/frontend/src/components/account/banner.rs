use common::{OrganizationAccountDto, OrganizationDto};
use yew::prelude::*;

use crate::hooks::FetchState;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub organization: OrganizationDto,
    /// `Success(None)` when the organization has no payout account yet
    pub account: FetchState<Option<OrganizationAccountDto>>,
}

/// Warning shown above the balances, if any. Nothing is shown until the
/// account lookup has finished.
pub fn banner_message(account: &FetchState<Option<OrganizationAccountDto>>) -> Option<&'static str> {
    let FetchState::Success(account) = account else {
        return None;
    };

    match account {
        None => Some("You need to set up a payout account to receive money from your sales."),
        Some(account) if !account.is_details_submitted => {
            Some("Your payout account setup is incomplete. Submit the missing details to receive payouts.")
        }
        Some(account) if !account.is_payouts_enabled => {
            Some("Payouts are currently disabled on your account.")
        }
        Some(_) => None,
    }
}

#[function_component(AccountBanner)]
pub fn account_banner(props: &Props) -> Html {
    let Some(message) = banner_message(&props.account) else {
        return html! {};
    };

    log::debug!(
        "Account banner for organization {}: {}",
        props.organization.slug,
        message
    );

    html! {
        <div class="alert alert-warning shadow mb-6">
            <i class="fas fa-exclamation-triangle"></i>
            <div class="flex flex-col">
                <span class="font-semibold">{ &props.organization.name }</span>
                <span class="text-sm">{ message }</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(details: bool, payouts: bool) -> OrganizationAccountDto {
        OrganizationAccountDto {
            id: "acc_1".to_string(),
            account_type: "stripe".to_string(),
            status: "active".to_string(),
            currency: Some("usd".to_string()),
            country: "US".to_string(),
            is_details_submitted: details,
            is_charges_enabled: true,
            is_payouts_enabled: payouts,
        }
    }

    #[test]
    fn test_banner_message() {
        assert!(banner_message(&FetchState::Success(None))
            .is_some_and(|m| m.contains("set up")));
        assert!(banner_message(&FetchState::Success(Some(account(false, false))))
            .is_some_and(|m| m.contains("incomplete")));
        assert!(banner_message(&FetchState::Success(Some(account(true, false))))
            .is_some_and(|m| m.contains("disabled")));
        assert_eq!(banner_message(&FetchState::Success(Some(account(true, true)))), None);
    }

    #[test]
    fn test_banner_silent_until_account_known() {
        assert_eq!(banner_message(&FetchState::NotStarted), None);
        assert_eq!(banner_message(&FetchState::Loading), None);
        assert_eq!(banner_message(&FetchState::Error("offline".to_string())), None);
    }
}

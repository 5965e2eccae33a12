use common::{format_amount, OrganizationAccountDto, TransactionsSummary};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api_client::payout;
use crate::common::toast::ToastContext;
use crate::hooks::{use_transactions_summary, FetchState};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub account: OrganizationAccountDto,
    /// Called after a payout was created, so the payouts list can refetch
    pub on_withdraw_success: Callback<()>,
}

/// Whether the *Withdraw* button should be enabled.
pub fn can_withdraw(account: &OrganizationAccountDto, summary: Option<&TransactionsSummary>) -> bool {
    account.is_ready_for_payouts() && summary.is_some_and(|summary| summary.balance.amount > 0)
}

#[function_component(AccountBalance)]
pub fn account_balance(props: &Props) -> Html {
    let (summary_state, refetch_summary) = use_transactions_summary(Some(props.account.id.clone()));
    let toast = use_context::<ToastContext>();
    let withdrawing = use_state(|| false);

    let summary = summary_state.data();
    let enabled = can_withdraw(&props.account, summary) && !*withdrawing;

    let on_withdraw = {
        let account_id = props.account.id.clone();
        let on_withdraw_success = props.on_withdraw_success.clone();
        let refetch_summary = refetch_summary.clone();
        let withdrawing = withdrawing.clone();
        let toast = toast.clone();

        Callback::from(move |_: MouseEvent| {
            let account_id = account_id.clone();
            let on_withdraw_success = on_withdraw_success.clone();
            let refetch_summary = refetch_summary.clone();
            let withdrawing = withdrawing.clone();
            let toast = toast.clone();

            withdrawing.set(true);
            log::info!("Requesting payout for account {}", account_id);

            spawn_local(async move {
                match payout::create_payout(&account_id).await {
                    Ok(created) => {
                        log::info!("Payout {} created", created.id);
                        if let Some(toast) = &toast {
                            toast.show_success(format!(
                                "Payout of {} requested",
                                format_amount(created.amount.abs(), &created.currency)
                            ));
                        }
                        refetch_summary.emit(());
                        on_withdraw_success.emit(());
                    }
                    Err(e) => {
                        log::error!("Payout for account {} failed: {}", account_id, e);
                        if let Some(toast) = &toast {
                            toast.show_error(format!("Withdrawal failed: {}", e));
                        }
                    }
                }
                withdrawing.set(false);
            });
        })
    };

    let body = match &*summary_state {
        FetchState::NotStarted | FetchState::Loading => html! {
            <span class="loading loading-dots loading-md"></span>
        },
        FetchState::Error(_) => html! {
            <span class="text-error text-sm">{"Balance unavailable"}</span>
        },
        FetchState::Success(summary) => html! {
            <div class="stats stats-vertical md:stats-horizontal">
                <div class="stat">
                    <div class="stat-title">{"Balance"}</div>
                    <div class="stat-value text-success">
                        { format_amount(summary.balance.amount, &summary.balance.currency) }
                    </div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"Paid out"}</div>
                    <div class="stat-value">
                        { format_amount(summary.payout.amount, &summary.payout.currency) }
                    </div>
                </div>
            </div>
        },
    };

    html! {
        <div class="card bg-base-100 shadow mb-6">
            <div class="card-body flex-row justify-between items-center">
                { body }
                <div class="card-actions">
                    <button class="btn btn-primary" disabled={!enabled} onclick={on_withdraw}>
                        if *withdrawing {
                            <span class="loading loading-spinner loading-sm"></span>
                        } else {
                            <i class="fas fa-money-bill-wave"></i>
                        }
                        {" Withdraw"}
                    </button>
                </div>
            </div>
        </div>
    }
}

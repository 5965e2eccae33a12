use common::{
    IncomingFinanceState, IncomingTab, PaginationState, SortingState, TransactionListView,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::error::ErrorDisplay;
use crate::common::loading::LoadingSpinner;
use crate::components::account::balance::AccountBalance;
use crate::components::account::banner::AccountBanner;
use crate::components::common::tabs::IncomingTabs;
use crate::components::layout::layout::Layout;
use crate::components::transactions::list::{PayoutTransactionsList, TransactionsList};
use crate::hooks::{use_organization, use_organization_account, use_search_transactions, FetchState};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Organization slug from the route
    pub organization: String,
}

/// Moves the browser to `next`. Tab switches replace the history entry,
/// table changes push a new one.
fn navigate(
    navigator: Option<&Navigator>,
    organization: &str,
    next: &IncomingFinanceState,
    replace: bool,
) {
    let Some(navigator) = navigator else {
        log::error!("No navigator available, cannot open {}", next.href(organization));
        return;
    };

    let route = Route::IncomingFinance {
        organization: organization.to_string(),
    };
    // The router form-encodes these pairs exactly like `query_string`, so
    // the browser lands on `href`.
    let pairs = next.query_pairs();
    log::debug!(
        "{} {}",
        if replace { "Replacing with" } else { "Navigating to" },
        next.href(organization)
    );

    let result = if replace {
        navigator.replace_with_query(&route, &pairs)
    } else {
        navigator.push_with_query(&route, &pairs)
    };

    if let Err(e) = result {
        log::error!("Navigation to {} failed: {}", next.href(organization), e);
    }
}

#[function_component(IncomingFinancePage)]
pub fn incoming_finance_page(props: &Props) -> Html {
    let location = use_location();
    let navigator = use_navigator();

    let state = IncomingFinanceState::from_query(
        location.as_ref().map(|loc| loc.query_str()).unwrap_or_default(),
    );

    let (organization_state, refetch_organization) = use_organization(props.organization.clone());
    let organization_id = organization_state.data().map(|org| org.id.clone());

    let (account_state, refetch_account) = use_organization_account(organization_id);
    let account = account_state.data().cloned().flatten();

    let balances_request = account.as_ref().map(|acc| state.balances_request(&acc.id));
    let payouts_request = account.as_ref().map(|acc| state.payouts_request(&acc.id));

    let (balances_state, refetch_balances) = use_search_transactions(balances_request);
    let (payouts_state, refetch_payouts) = use_search_transactions(payouts_request);

    let account_loading = organization_state.is_loading() || account_state.is_loading();
    let balances = TransactionListView::from_result(
        balances_state.data(),
        account_loading || balances_state.is_loading(),
    );
    let payouts = TransactionListView::from_result(
        payouts_state.data(),
        account_loading || payouts_state.is_loading(),
    );

    let on_tab_select = {
        let navigator = navigator.clone();
        let organization = props.organization.clone();
        let state = state.clone();
        Callback::from(move |tab: IncomingTab| {
            if tab != state.tab {
                navigate(navigator.as_ref(), &organization, &state.with_tab(tab), true);
            }
        })
    };

    let on_pagination_change = {
        let navigator = navigator.clone();
        let organization = props.organization.clone();
        let state = state.clone();
        Callback::from(move |pagination: PaginationState| {
            navigate(navigator.as_ref(), &organization, &state.with_pagination(pagination), false);
        })
    };

    let on_sorting_change = {
        let navigator = navigator.clone();
        let organization = props.organization.clone();
        let state = state.clone();
        Callback::from(move |sorting: SortingState| {
            navigate(navigator.as_ref(), &organization, &state.with_sorting(sorting), false);
        })
    };

    let on_refresh = {
        let refetch_balances = refetch_balances.clone();
        let refetch_payouts = refetch_payouts.clone();
        Callback::from(move |_| {
            log::debug!("Incoming finance refresh triggered");
            refetch_balances.emit(());
            refetch_payouts.emit(());
        })
    };

    let organization = match &*organization_state {
        FetchState::NotStarted | FetchState::Loading => {
            return html! { <LoadingSpinner /> };
        }
        FetchState::Error(error) => {
            return html! {
                <ErrorDisplay
                    title="Organization could not be loaded"
                    message={error.clone()}
                    on_retry={Some(refetch_organization.clone())}
                />
            };
        }
        FetchState::Success(organization) => organization.clone(),
    };

    let account_section = match &*account_state {
        FetchState::NotStarted | FetchState::Loading => html! { <LoadingSpinner /> },
        FetchState::Error(error) => html! {
            <ErrorDisplay
                title="Payout account could not be loaded"
                message={error.clone()}
                on_retry={Some(refetch_account.clone())}
                inline={true}
            />
        },
        FetchState::Success(Some(account)) => html! {
            <AccountBalance
                account={account.clone()}
                on_withdraw_success={refetch_payouts.clone()}
            />
        },
        FetchState::Success(None) => html! {},
    };

    let list = match state.tab {
        IncomingTab::Transactions => html! {
            <TransactionsList
                view={balances}
                pagination={state.pagination}
                sorting={state.sorting.clone()}
                on_pagination_change={on_pagination_change}
                on_sorting_change={on_sorting_change}
            />
        },
        IncomingTab::Payouts => html! {
            <PayoutTransactionsList
                view={payouts}
                pagination={state.pagination}
                sorting={state.sorting.clone()}
                on_pagination_change={on_pagination_change}
                on_sorting_change={on_sorting_change}
            />
        },
    };

    html! {
        <Layout
            title="Incoming"
            organization={props.organization.clone()}
            on_refresh={Some(on_refresh)}
        >
            <AccountBanner organization={organization.clone()} account={(*account_state).clone()} />
            { account_section }
            <div class="flex flex-col gap-1 mb-4">
                <h2 class="text-2xl font-bold">{ state.tab.title() }</h2>
                <p class="text-base-content/70">{ state.tab.description() }</p>
            </div>
            <IncomingTabs active={state.tab} on_select={on_tab_select} />
            { list }
        </Layout>
    }
}

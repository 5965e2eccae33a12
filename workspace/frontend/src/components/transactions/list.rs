use common::{
    format_amount, PaginationState, SortingState, TransactionDto, TransactionListView,
};
use yew::prelude::*;

use super::sortable_header::SortableHeader;
use crate::common::loading::LoadingRows;
use crate::components::common::pagination::Pagination;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub view: TransactionListView<TransactionDto>,
    pub pagination: PaginationState,
    pub sorting: SortingState,
    pub on_pagination_change: Callback<PaginationState>,
    pub on_sorting_change: Callback<SortingState>,
}

struct Column {
    id: &'static str,
    label: &'static str,
    numeric: bool,
}

const BALANCE_COLUMNS: [Column; 5] = [
    Column { id: "created_at", label: "Date", numeric: false },
    Column { id: "description", label: "Description", numeric: false },
    Column { id: "amount", label: "Amount", numeric: true },
    Column { id: "fees", label: "Fees", numeric: true },
    Column { id: "net", label: "Net", numeric: true },
];

const PAYOUT_COLUMNS: [Column; 4] = [
    Column { id: "created_at", label: "Date", numeric: false },
    Column { id: "amount", label: "Amount", numeric: true },
    Column { id: "fees", label: "Fees", numeric: true },
    Column { id: "net", label: "Net", numeric: true },
];

fn amount_class(amount: i64) -> &'static str {
    if amount < 0 { "text-error" } else { "text-success" }
}

fn render_table(props: &Props, columns: &[Column], rows: Html, empty_message: &str) -> Html {
    let body = if props.view.is_loading {
        html! { <LoadingRows columns={columns.len()} /> }
    } else if props.view.items.is_empty() {
        html! {
            <tr>
                <td colspan={columns.len().to_string()} class="text-center text-base-content/60 py-8">
                    { empty_message }
                </td>
            </tr>
        }
    } else {
        rows
    };

    html! {
        <>
            <div class="overflow-x-auto bg-base-100 shadow rounded-box">
                <table class="table table-zebra">
                    <thead>
                        <tr>
                            { for columns.iter().map(|column| html! {
                                <SortableHeader
                                    key={column.id}
                                    column_id={column.id}
                                    label={column.label}
                                    sorting={props.sorting.clone()}
                                    on_sorting_change={props.on_sorting_change.clone()}
                                    class={classes!(column.numeric.then_some("text-right"))}
                                />
                            })}
                        </tr>
                    </thead>
                    <tbody>
                        { body }
                    </tbody>
                </table>
            </div>
            <Pagination
                pagination={props.pagination}
                page_count={props.view.page_count}
                on_change={props.on_pagination_change.clone()}
            />
        </>
    }
}

/// Balance transactions: sales, refunds and the fees charged on them.
#[function_component(TransactionsList)]
pub fn transactions_list(props: &Props) -> Html {
    let rows = html! {
        <>
        { for props.view.items.iter().map(|t| {
            let net = t.net_amount();
            html! {
                <tr key={t.id.clone()} class="hover">
                    <td class="whitespace-nowrap">{ t.created_at.format("%b %d, %Y").to_string() }</td>
                    <td class="font-medium">{ t.description() }</td>
                    <td class="font-mono text-right">{ format_amount(t.account_amount, &t.account_currency) }</td>
                    <td class="font-mono text-right">{ format_amount(-t.fees_total(), &t.account_currency) }</td>
                    <td class={classes!("font-mono", "text-right", "font-bold", amount_class(net))}>
                        { format_amount(net, &t.account_currency) }
                    </td>
                </tr>
            }
        })}
        </>
    };

    render_table(props, &BALANCE_COLUMNS, rows, "No transactions yet")
}

/// Transfers from the account to the organization's bank account.
#[function_component(PayoutTransactionsList)]
pub fn payout_transactions_list(props: &Props) -> Html {
    let rows = html! {
        <>
        { for props.view.items.iter().map(|t| {
            // Payout amounts leave the account, show them as positive
            let gross = t.account_amount.abs();
            let fees = t.fees_total();
            html! {
                <tr key={t.id.clone()} class="hover">
                    <td class="whitespace-nowrap">{ t.created_at.format("%b %d, %Y").to_string() }</td>
                    <td class="font-mono text-right">{ format_amount(gross, &t.account_currency) }</td>
                    <td class="font-mono text-right">{ format_amount(-fees, &t.account_currency) }</td>
                    <td class="font-mono text-right font-bold">{ format_amount(gross - fees, &t.account_currency) }</td>
                </tr>
            }
        })}
        </>
    };

    render_table(props, &PAYOUT_COLUMNS, rows, "No payouts yet")
}

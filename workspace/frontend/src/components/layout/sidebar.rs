use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub organization: String,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &Props) -> Html {
    let incoming = Route::IncomingFinance {
        organization: props.organization.clone(),
    };

    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="my-drawer"></label>
            <ul class="menu p-4 w-80 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <li class="mb-4">
                    <div class="flex items-center gap-3 px-2">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content font-bold text-2xl">
                            <i class="fas fa-wallet"></i>
                        </div>
                        <span class="text-2xl font-bold tracking-tight">{ &props.organization }</span>
                    </div>
                </li>

                <li class="menu-title">{"Finance"}</li>
                <li><Link<Route> to={incoming} classes="nav-link"><i class="fas fa-arrow-down w-5"></i> {"Incoming"}</Link<Route>></li>
            </ul>
        </div>
    }
}

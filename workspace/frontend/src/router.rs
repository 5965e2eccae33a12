use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::incoming_finance::IncomingFinancePage;
use crate::pages::not_found::NotFoundPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/dashboard/:organization/finance/incoming")]
    IncomingFinance { organization: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::IncomingFinance { organization } => {
            log::trace!("Rendering Incoming Finance page for organization: {}", organization);
            html! { <IncomingFinancePage {organization} /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <NotFoundPage /> }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incoming_finance_route_path() {
        let route = Route::IncomingFinance {
            organization: "acme".to_string(),
        };
        assert_eq!(route.to_path(), "/dashboard/acme/finance/incoming");
        assert_eq!(
            Route::recognize("/dashboard/acme/finance/incoming"),
            Some(route)
        );
    }

    #[test]
    fn test_route_path_matches_shared_helper() {
        let route = Route::IncomingFinance {
            organization: "acme".to_string(),
        };
        assert_eq!(route.to_path(), common::incoming::incoming_finance_path("acme"));
    }
}

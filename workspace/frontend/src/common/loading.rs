use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingRowsProps {
    pub columns: usize,
    #[prop_or(3)]
    pub rows: usize,
}

/// Centered loading spinner without text
#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="flex justify-center items-center py-12">
            <span class="loading loading-spinner loading-lg"></span>
        </div>
    }
}

/// Placeholder table rows shown while a page of results is loading
#[function_component(LoadingRows)]
pub fn loading_rows(props: &LoadingRowsProps) -> Html {
    html! {
        <>
            { for (0..props.rows).map(|row| html! {
                <tr key={row}>
                    { for (0..props.columns).map(|_| html! {
                        <td><div class="skeleton h-4 w-full"></div></td>
                    })}
                </tr>
            })}
        </>
    }
}

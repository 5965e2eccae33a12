use common::{incoming::toggle_column_sort, ColumnSort, SortingState};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub column_id: AttrValue,
    pub label: AttrValue,
    pub sorting: SortingState,
    pub on_sorting_change: Callback<SortingState>,
    #[prop_or_default]
    pub class: Classes,
}

/// Font Awesome icon for the column's current direction.
pub fn sort_icon(sorting: &[ColumnSort], column_id: &str) -> &'static str {
    match sorting.iter().find(|column| column.id == column_id) {
        None => "fas fa-sort opacity-30",
        Some(column) if column.desc => "fas fa-sort-down",
        Some(_) => "fas fa-sort-up",
    }
}

#[function_component(SortableHeader)]
pub fn sortable_header(props: &Props) -> Html {
    let onclick = {
        let sorting = props.sorting.clone();
        let column_id = props.column_id.clone();
        let on_sorting_change = props.on_sorting_change.clone();
        Callback::from(move |_: MouseEvent| {
            let next = toggle_column_sort(&sorting, &column_id);
            log::debug!("Sorting on '{}' changed: {:?}", column_id, next);
            on_sorting_change.emit(next);
        })
    };

    html! {
        <th class={classes!("cursor-pointer", "select-none", props.class.clone())} {onclick}>
            <span class="inline-flex items-center gap-2">
                { &props.label }
                <i class={sort_icon(&props.sorting, &props.column_id)}></i>
            </span>
        </th>
    }
}

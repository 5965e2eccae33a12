use common::PaginationState;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Page sizes offered in the selector. The current size is always offered
/// too, even when it came from a hand-edited URL.
const PAGE_SIZE_OPTIONS: [u64; 4] = [10, 20, 50, 100];

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub pagination: PaginationState,
    /// Total number of pages, at least 1
    pub page_count: u64,
    pub on_change: Callback<PaginationState>,
}

/// Page buttons to show for a 1-based `current` page. `None` is an ellipsis.
pub fn visible_pages(current: u64, total_pages: u64) -> Vec<Option<u64>> {
    let max_visible = 5;
    let mut pages = Vec::new();

    if total_pages <= max_visible {
        pages.extend((1..=total_pages).map(Some));
        return pages;
    }

    // First, last, current and neighbors
    pages.push(Some(1));

    let current = current.clamp(1, total_pages);
    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total_pages - 1);

    if start > 2 {
        pages.push(None);
    }

    pages.extend((start..=end).map(Some));

    if end < total_pages - 1 {
        pages.push(None);
    }

    pages.push(Some(total_pages));
    pages
}

fn page_size_options(current: u64) -> Vec<u64> {
    let mut options = PAGE_SIZE_OPTIONS.to_vec();
    if !options.contains(&current) {
        options.push(current);
        options.sort_unstable();
    }
    options
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let total_pages = props.page_count.max(1);
    let pagination = props.pagination;
    let current = pagination.page_number();

    let go_to = {
        let on_change = props.on_change.clone();
        move |page: u64| {
            let on_change = on_change.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                log::debug!("Pagination: go to page {}", page);
                on_change.emit(pagination.with_page_index(page - 1));
            })
        }
    };

    let on_page_size = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<u64>() {
                Ok(size) if size > 0 => {
                    log::debug!("Pagination: page size {}", size);
                    on_change.emit(pagination.with_page_size(size));
                }
                _ => log::warn!("Ignoring invalid page size '{}'", select.value()),
            }
        })
    };

    html! {
        <div class="flex justify-center items-center gap-2 my-4">
            <button
                class="btn btn-sm"
                disabled={current <= 1}
                onclick={go_to(current.saturating_sub(1).max(1))}
            >
                <i class="fas fa-chevron-left"></i>
            </button>

            {for visible_pages(current, total_pages).into_iter().map(|page| {
                match page {
                    None => html! {
                        <span class="px-2">{"..."}</span>
                    },
                    Some(page) => html! {
                        <button
                            class={classes!(
                                "btn",
                                "btn-sm",
                                if page == current { "btn-primary" } else { "" }
                            )}
                            onclick={go_to(page)}
                        >
                            {page}
                        </button>
                    },
                }
            })}

            <button
                class="btn btn-sm"
                disabled={current >= total_pages}
                onclick={go_to((current + 1).min(total_pages))}
            >
                <i class="fas fa-chevron-right"></i>
            </button>

            <select class="select select-sm select-bordered ml-4" onchange={on_page_size}>
                {for page_size_options(pagination.page_size).into_iter().map(|size| html! {
                    <option value={size.to_string()} selected={size == pagination.page_size}>
                        {format!("{} / page", size)}
                    </option>
                })}
            </select>

            <div class="ml-4 text-sm text-base-content/70">
                {format!("Page {} of {}", current, total_pages)}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_pages_few() {
        assert_eq!(visible_pages(1, 1), vec![Some(1)]);
        assert_eq!(
            visible_pages(2, 4),
            vec![Some(1), Some(2), Some(3), Some(4)]
        );
    }

    #[test]
    fn test_visible_pages_with_ellipses() {
        assert_eq!(
            visible_pages(5, 10),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );
        assert_eq!(
            visible_pages(1, 10),
            vec![Some(1), Some(2), None, Some(10)]
        );
        assert_eq!(
            visible_pages(10, 10),
            vec![Some(1), None, Some(9), Some(10)]
        );
    }

    #[test]
    fn test_visible_pages_out_of_range_current() {
        // A hand-edited URL can point past the last page
        assert_eq!(
            visible_pages(40, 10),
            vec![Some(1), None, Some(9), Some(10)]
        );
    }

    #[test]
    fn test_page_size_options_include_current() {
        assert_eq!(page_size_options(20), vec![10, 20, 50, 100]);
        assert_eq!(page_size_options(30), vec![10, 20, 30, 50, 100]);
    }
}

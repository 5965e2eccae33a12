use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_else(|| "Something went wrong".to_string())]
    pub title: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    /// Render as a single alert row instead of a centered block
    #[prop_or_default]
    pub inline: bool,
}

#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Showing error '{}': {}", props.title, props.message);

    let retry = props.on_retry.clone().map(|on_retry| {
        let onclick = Callback::from(move |_: MouseEvent| {
            log::debug!("Retry requested from error display");
            on_retry.emit(());
        });
        html! {
            <button class="btn btn-sm" {onclick}>
                <i class="fas fa-redo"></i>
                {" Retry"}
            </button>
        }
    });

    let alert = html! {
        <div role="alert" class="alert alert-error">
            <i class="fas fa-exclamation-circle text-xl"></i>
            <div class="flex flex-col">
                <span class="font-semibold">{ &props.title }</span>
                <span class="text-sm">{ &props.message }</span>
            </div>
            { for retry }
        </div>
    };

    if props.inline {
        html! { <div class="mb-6">{ alert }</div> }
    } else {
        html! {
            <div class="flex justify-center py-12">
                <div class="max-w-lg w-full">{ alert }</div>
            </div>
        }
    }
}

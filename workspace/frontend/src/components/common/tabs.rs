use common::IncomingTab;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub active: IncomingTab,
    pub on_select: Callback<IncomingTab>,
}

#[function_component(IncomingTabs)]
pub fn incoming_tabs(props: &Props) -> Html {
    html! {
        <div role="tablist" class="tabs tabs-boxed mb-4 w-fit">
            { for IncomingTab::ALL.iter().copied().map(|tab| {
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_select.emit(tab);
                    })
                };
                html! {
                    <a
                        role="tab"
                        key={tab.as_str()}
                        class={classes!("tab", (tab == props.active).then_some("tab-active"))}
                        {onclick}
                    >
                        { tab.title() }
                    </a>
                }
            })}
        </div>
    }
}

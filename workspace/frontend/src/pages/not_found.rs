use yew::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-5xl font-bold">{"404"}</h1>
                    <p class="py-6">{"This page does not exist."}</p>
                </div>
            </div>
        </div>
    }
}

use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="pt-16 p-4 container mx-auto">
            <section class="max-w-xl mx-auto text-center py-16">
                <h1 class="text-3xl font-bold mb-2">{"Newsroom"}</h1>
                <p class="text-gray-600 mb-6">
                    {"Write, tag and publish news posts from one dashboard."}
                </p>
                <Link<Route>
                    classes="inline-block px-4 py-2 rounded bg-blue-600 text-white"
                    to={Route::Dashboard}
                >
                    {"Open dashboard"}
                </Link<Route>>
            </section>
        </main>
    }
}

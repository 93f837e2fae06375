use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="pt-16 p-4 container mx-auto text-center">
            <h1 class="text-2xl font-semibold mb-2">{"Page not found"}</h1>
            <Link<Route> classes="text-blue-600 underline" to={Route::Home}>
                {"Back to home"}
            </Link<Route>>
        </main>
    }
}

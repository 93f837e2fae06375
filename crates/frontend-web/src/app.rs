use crate::components::Navbar;
use crate::pages::{Dashboard, Home, Login, NotFound, PostCreate, PostEdit, PostList};
use newsroom_frontend_common::auth::AuthProvider;
use newsroom_frontend_common::toast::ToastProvider;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/posts")]
    Posts,
    #[at("/dashboard/posts/new")]
    PostNew,
    #[at("/dashboard/posts/:id/edit")]
    PostEdit { id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::Posts => html! { <PostList /> },
        Route::PostNew => html! { <PostCreate /> },
        Route::PostEdit { id } => html! { <PostEdit {id} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider>
                <ToastProvider>
                    <Navbar />
                    <Switch<Route> render={switch} />
                </ToastProvider>
            </AuthProvider>
        </BrowserRouter>
    }
}

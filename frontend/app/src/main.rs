use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod components;
mod identity;
mod pages;
mod session;

use common::screens::fullscreen_message::FullscreenMsg;
use components::navbar::MainNav;
use pages::{
    gallery::GalleryPage, login::LoginPage, profile::ProfilePage, settings::SettingsPage,
    signup::SignupPage, upload::UploadPage,
};
use session::SessionProvider;

#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub(crate) enum Route {
    #[at("/")]
    Gallery,
    #[at("/signin")]
    SignIn,
    #[at("/signup")]
    SignUp,
    #[at("/upload")]
    Upload,
    #[at("/profile")]
    Profile,
    #[at("/settings")]
    Settings,

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Gallery => html!(<GalleryPage />),
        Route::SignIn => html!(<LoginPage />),
        Route::SignUp => html!(<SignupPage />),
        Route::Upload => html!(<UploadPage />),
        Route::Profile => html!(<ProfilePage />),
        Route::Settings => html!(<SettingsPage />),
        Route::NotFound => html!(<FullscreenMsg message="Page not found" show_reload_button={false} />),
    }
}

#[function_component(MarketApp)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <div class="min-vh-100 d-flex flex-column">
                    <MainNav />
                    <main class="flex-grow-1">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </SessionProvider>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<MarketApp>::new().render();
}

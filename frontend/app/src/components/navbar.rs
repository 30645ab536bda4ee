use wasm_bindgen::UnwrapThrowExt;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::signup::SignupQuery;
use crate::session::{use_session, SessionState};
use crate::Route;

/// Sticky top navigation. The account side of the bar follows the session:
/// sign-in/join links while signed out, upload/profile/sign-out once in.
#[function_component]
pub fn MainNav() -> Html {
    let session = use_session();
    let navigator = use_navigator().unwrap();

    let join_link = |label: &str, account_type: &'static str| {
        let navigator = navigator.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator
                .push_with_query(
                    &Route::SignUp,
                    &SignupQuery {
                        account_type: account_type.to_owned(),
                    },
                )
                .unwrap_throw();
        });
        html! {
            <li class="nav-item">
                <a class="nav-link" href="#" {onclick}>{label}</a>
            </li>
        }
    };

    let account_items = match &session.state {
        SessionState::SignedIn(profile) => {
            let sign_out = {
                let sign_out = session.sign_out.clone();
                let navigator = navigator.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    sign_out.emit(());
                    navigator.push(&Route::Gallery);
                })
            };
            html! {
                <>
                    <li class="nav-item">
                        <Link<Route> classes="nav-link" to={Route::Upload}>{"Upload"}</Link<Route>>
                    </li>
                    <li class="nav-item">
                        <Link<Route> classes="nav-link" to={Route::Profile}>{"Profile"}</Link<Route>>
                    </li>
                    <li class="nav-item">
                        <Link<Route> classes="nav-link" to={Route::Settings}>{"Settings"}</Link<Route>>
                    </li>
                    <li class="nav-item">
                        <a class="nav-link" href="#" onclick={sign_out}>
                            {format!("Sign out ({})", profile.email)}
                        </a>
                    </li>
                </>
            }
        }
        SessionState::SignedOut => html! {
            <>
                <li class="nav-item">
                    <Link<Route> classes="nav-link" to={Route::SignIn}>{"Sign in"}</Link<Route>>
                </li>
                { join_link("Join as artist", "artist") }
                { join_link("Join as print shop", "printshop") }
            </>
        },
        SessionState::Unknown => html!(),
    };

    html! {
        <nav class="navbar navbar-expand bg-white border-bottom shadow-sm sticky-top px-3">
            <Link<Route> classes="navbar-brand" to={Route::Gallery}>{"ArtPrints Kanairo"}</Link<Route>>
            <ul class="navbar-nav me-auto">
                <li class="nav-item">
                    <Link<Route> classes="nav-link" to={Route::Gallery}>{"Home"}</Link<Route>>
                </li>
            </ul>
            <ul class="navbar-nav">
                {account_items}
            </ul>
        </nav>
    }
}

use gloo_storage::{SessionStorage, Storage};
use wasm_bindgen::UnwrapThrowExt;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::{self, use_session};
use crate::{api, identity, Route};

/// Last email used to sign in, prefilled on the next visit.
const LOGIN_EMAIL_KEY: &str = "login_email";

#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let email = use_state(|| {
        SessionStorage::get::<String>(LOGIN_EMAIL_KEY).unwrap_or_default()
    });
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);
    let navigator = use_navigator().unwrap();
    let session = use_session();

    let email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        let navigator = navigator.clone();
        let refresh = session.refresh.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email_value = (*email).clone();
            let password_value = (*password).clone();
            let error = error.clone();
            let busy = busy.clone();
            let navigator = navigator.clone();
            let refresh = refresh.clone();
            error.set(None);
            busy.set(true);
            spawn_local(async move {
                let outcome = async {
                    let token = identity::sign_in(&email_value, &password_value).await?;
                    api::session_login(&token).await?;
                    Ok::<String, api::ApiError>(token)
                }
                .await;
                match outcome {
                    Ok(token) => {
                        session::store_id_token(&token);
                        SessionStorage::set(LOGIN_EMAIL_KEY, email_value).unwrap_throw();
                        refresh.emit(());
                        navigator.push(&Route::Gallery);
                    }
                    Err(why) => {
                        log::error!("Login failed: {why}");
                        error.set(Some(format!("Failed to sign in: {why}")));
                    }
                }
                busy.set(false);
            });
        })
    };

    let maybe_error = match &*error {
        Some(text) => html!(<p class="text-danger text-center small">{text}</p>),
        None => html!(),
    };

    html! {
        <div class="card" style="max-width: 24rem; width: 100%;">
            <div class="card-body">
                <h5 class="card-title text-center">{"Welcome back"}</h5>
                <form {onsubmit}>
                    <div class="mb-3">
                        <label class="form-label" for="email">{"Email"}</label>
                        <input id="email" type="email" class="form-control" required={true}
                            value={(*email).clone()} oninput={email_input} disabled={*busy} />
                    </div>
                    <div class="mb-3">
                        <label class="form-label" for="password">{"Password"}</label>
                        <input id="password" type="password" class="form-control" required={true}
                            value={(*password).clone()} oninput={password_input} disabled={*busy} />
                    </div>
                    {maybe_error}
                    <div class="d-grid">
                        <button type="submit" class="btn btn-primary" disabled={*busy}>
                            { if *busy { "Signing in..." } else { "Sign in" } }
                        </button>
                    </div>
                </form>
                <p class="text-center small mt-3 mb-0">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::SignUp}>{"Sign up"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}

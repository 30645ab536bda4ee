use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::{self, use_session};
use crate::{api, identity, Route};

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    /// "artist" or "printshop", from the join links. The backend assigns
    /// roles when the profile is first saved; here it only shapes the copy.
    #[prop_or_default]
    pub account_type: Option<AttrValue>,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let email = use_state(String::new);
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
                    let token = identity::sign_up(&email_value, &password_value).await?;
                    api::session_login(&token).await?;
                    Ok::<String, api::ApiError>(token)
                }
                .await;
                match outcome {
                    Ok(token) => {
                        session::store_id_token(&token);
                        refresh.emit(());
                        // Fresh accounts land on settings to fill in a profile.
                        navigator.push(&Route::Settings);
                    }
                    Err(why) => {
                        log::error!("Signup failed: {why}");
                        error.set(Some(format!("Failed to sign up: {why}")));
                    }
                }
                busy.set(false);
            });
        })
    };

    let title = match props.account_type.as_deref() {
        Some("artist") => "Join as an artist",
        Some("printshop") => "Join as a print shop",
        _ => "Create your account",
    };

    let maybe_error = match &*error {
        Some(text) => html!(<p class="text-danger text-center small">{text}</p>),
        None => html!(),
    };

    html! {
        <div class="card" style="max-width: 24rem; width: 100%;">
            <div class="card-body">
                <h5 class="card-title text-center">{title}</h5>
                <form {onsubmit}>
                    <div class="mb-3">
                        <label class="form-label" for="signup-email">{"Email"}</label>
                        <input id="signup-email" type="email" class="form-control" required={true}
                            value={(*email).clone()} oninput={email_input} disabled={*busy} />
                    </div>
                    <div class="mb-3">
                        <label class="form-label" for="signup-password">{"Password"}</label>
                        <input id="signup-password" type="password" class="form-control" required={true}
                            minlength="6" value={(*password).clone()} oninput={password_input} disabled={*busy} />
                    </div>
                    {maybe_error}
                    <div class="d-grid">
                        <button type="submit" class="btn btn-primary" disabled={*busy}>
                            { if *busy { "Creating account..." } else { "Sign up" } }
                        </button>
                    </div>
                </form>
                <p class="text-center small mt-3 mb-0">
                    {"Already have an account? "}
                    <Link<Route> to={Route::SignIn}>{"Sign in"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}

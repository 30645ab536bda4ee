//! Process-wide "current session" state, modeled as a context the component
//! tree subscribes to instead of an ambient global. The provider resolves
//! the session once on mount by asking the backend who the cookie belongs
//! to; pages trigger a refresh after a successful login.

use communication::UserProfile;
use gloo_storage::{SessionStorage, Storage};
use wasm_bindgen::UnwrapThrowExt;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::api;

/// The identity token is kept for the one endpoint that wants a bearer
/// header instead of the cookie (artwork upload).
const ID_TOKEN_KEY: &str = "identity_token";

pub fn store_id_token(token: &str) {
    SessionStorage::set(ID_TOKEN_KEY, token.to_owned()).unwrap_throw();
}

pub fn stored_id_token() -> Option<String> {
    SessionStorage::get(ID_TOKEN_KEY).ok()
}

#[derive(Clone, PartialEq, Debug)]
pub enum SessionState {
    /// Not yet resolved; the cookie check is still in flight.
    Unknown,
    SignedOut,
    SignedIn(UserProfile),
}

#[derive(Clone, PartialEq)]
pub struct Session {
    pub state: SessionState,
    /// Re-resolve the session against the backend (after a login).
    pub refresh: Callback<()>,
    /// End the session: tell the backend, drop the stored token.
    pub sign_out: Callback<()>,
}

#[hook]
pub fn use_session() -> Session {
    use_context::<Session>().expect("use_session outside of a SessionProvider")
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn SessionProvider(props: &SessionProviderProps) -> Html {
    let state = use_state_eq(|| SessionState::Unknown);

    let refresh = {
        let state = state.clone();
        Callback::from(move |_| {
            let state = state.clone();
            spawn_local(async move {
                match api::fetch_profile().await {
                    Ok(envelope) => state.set(SessionState::SignedIn(envelope.user)),
                    Err(why) => {
                        // No cookie or an expired one; either way, signed out.
                        log::debug!("No active session: {why}");
                        state.set(SessionState::SignedOut);
                    }
                }
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_once(move || {
            refresh.emit(());
            || ()
        });
    }

    let sign_out = {
        let state = state.clone();
        Callback::from(move |_| {
            let state = state.clone();
            spawn_local(async move {
                if let Err(why) = api::session_logout().await {
                    log::error!("Logout request failed: {why}");
                }
                SessionStorage::delete(ID_TOKEN_KEY);
                state.set(SessionState::SignedOut);
            });
        })
    };

    let session = Session {
        state: (*state).clone(),
        refresh,
        sign_out,
    };

    html! {
        <ContextProvider<Session> context={session}>
            { for props.children.iter() }
        </ContextProvider<Session>>
    }
}

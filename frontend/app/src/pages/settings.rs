use communication::UserProfile;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_effect_once;

use common::layout::Container;

use crate::api;
use crate::components::profile_form::ProfileForm;
use crate::components::protected::Protected;

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    html! {
        <Protected>
            <SettingsView />
        </Protected>
    }
}

#[function_component]
fn SettingsView() -> Html {
    let profile = use_state(|| None::<UserProfile>);

    {
        let profile = profile.clone();
        use_effect_once(move || {
            spawn_local(async move {
                match api::fetch_profile().await {
                    Ok(envelope) => profile.set(Some(envelope.user)),
                    Err(why) => {
                        // The form still works with empty defaults.
                        log::error!("Failed to fetch profile: {why}");
                        profile.set(Some(UserProfile::default()));
                    }
                }
            });
            || ()
        });
    }

    let body = match &*profile {
        None => html! {
            // Same shape as the loaded form, as grey bars.
            <div class="placeholder-glow" aria-hidden="true">
                <div class="placeholder col-12 mb-3" style="height: 2.5rem;"></div>
                <div class="placeholder col-12 mb-3" style="height: 6rem;"></div>
                <div class="placeholder col-6" style="height: 2.5rem;"></div>
            </div>
        },
        Some(defaults) => html!(<ProfileForm default_values={defaults.clone()} />),
    };

    html! {
        <Container class="col-lg-6">
            <h2 class="mb-4">{"Profile settings"}</h2>
            {body}
        </Container>
    }
}

use communication::profile::ProfileEnvelope;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_effect_once;

use common::components::RoleBadge;
use common::layout::{CardGrid, Container};
use common::screens::fullscreen_message::FullscreenMsg;

use crate::api;
use crate::components::artwork_card::ArtworkCard;
use crate::components::protected::Protected;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    html! {
        <Protected>
            <ProfileView />
        </Protected>
    }
}

#[function_component]
fn ProfileView() -> Html {
    let envelope = use_state(|| None::<Result<ProfileEnvelope, String>>);

    {
        let envelope = envelope.clone();
        use_effect_once(move || {
            spawn_local(async move {
                match api::fetch_profile().await {
                    Ok(data) => envelope.set(Some(Ok(data))),
                    Err(why) => {
                        log::error!("Failed to fetch profile: {why}");
                        envelope.set(Some(Err(why.to_string())));
                    }
                }
            });
            || ()
        });
    }

    let data = match &*envelope {
        None => return html!(<FullscreenMsg message="Loading profile..." />),
        Some(Err(why)) => {
            return html! {
                <FullscreenMsg
                    message="Could not load your profile"
                    detail={why.clone()}
                    show_reload_button={true}
                />
            }
        }
        Some(Ok(data)) => data,
    };
    let profile = &data.user;

    let banner = match &profile.background_url {
        Some(url) => html! {
            <img src={url.clone()} alt="Background"
                class="w-100 rounded mb-4" style="height: 12rem; object-fit: cover;" />
        },
        None => html!(),
    };

    let avatar = match &profile.avatar_url {
        Some(url) => html! {
            <img src={url.clone()} alt="Avatar"
                class="rounded-circle border" style="height: 6rem; width: 6rem; object-fit: cover;" />
        },
        None => html!(),
    };

    let roles = profile
        .roles
        .iter()
        .map(|role| html!(<RoleBadge key={role.clone()} role={role.clone()} />))
        .collect::<Html>();

    let maybe_description = match &profile.description {
        Some(text) => html!(<p class="mt-4">{text}</p>),
        None => html!(),
    };

    let artworks = if data.artworks.is_empty() {
        html!(<p class="text-muted">{"No artworks uploaded yet."}</p>)
    } else {
        let cards = data.artworks.iter().map(|art| {
            html! {
                <div class="col" key={art.id.clone()}>
                    <ArtworkCard artwork={art.clone()} />
                </div>
            }
        });
        html!(<CardGrid>{ for cards }</CardGrid>)
    };

    html! {
        <Container>
            {banner}
            <div class="d-flex gap-4 align-items-center">
                {avatar}
                <div>
                    <h1 class="h3 mb-1">{&profile.name}</h1>
                    <p class="text-muted small mb-1">{&profile.email}</p>
                    <p class="small mb-2">{&profile.date_of_birth}</p>
                    <div>{roles}</div>
                </div>
            </div>
            {maybe_description}
            <h2 class="h5 mt-5 mb-3">{"Your artworks"}</h2>
            {artworks}
        </Container>
    }
}

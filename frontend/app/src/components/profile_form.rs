use communication::UserProfile;
use gloo_dialogs::alert;
use wasm_bindgen::UnwrapThrowExt;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, FormData, HtmlInputElement, HtmlTextAreaElement, Url};
use yew::prelude::*;

use crate::api;

#[derive(Properties, PartialEq)]
pub struct ProfileFormProps {
    #[prop_or_default]
    pub default_values: UserProfile,
}

/// Edit form for the session user's profile. Text fields are prefilled from
/// the saved profile; picking an avatar or background shows a local preview
/// before anything is sent. Submitting posts everything as one multipart
/// form; only the outcome is reported.
#[function_component(ProfileForm)]
pub fn profile_form(props: &ProfileFormProps) -> Html {
    let defaults = &props.default_values;
    let name = use_state(|| defaults.name.clone());
    let date_of_birth = use_state(|| defaults.date_of_birth.clone());
    let description = use_state(|| defaults.description.clone().unwrap_or_default());
    let avatar = use_state(|| None::<File>);
    let background = use_state(|| None::<File>);
    let preview_avatar = use_state(|| defaults.avatar_url.clone());
    let preview_background = use_state(|| defaults.background_url.clone());
    let submitting = use_state(|| false);

    let name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let dob_input = {
        let date_of_birth = date_of_birth.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date_of_birth.set(input.value());
        })
    };

    let description_input = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    // Shared shape for the two image pickers.
    let file_picker = |file_state: UseStateHandle<Option<File>>,
                       preview_state: UseStateHandle<Option<String>>| {
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                let url = Url::create_object_url_with_blob(&file).unwrap_throw();
                preview_state.set(Some(url));
                file_state.set(Some(file));
            }
        })
    };

    let avatar_change = file_picker(avatar.clone(), preview_avatar.clone());
    let background_change = file_picker(background.clone(), preview_background.clone());

    let onsubmit = {
        let name = name.clone();
        let date_of_birth = date_of_birth.clone();
        let description = description.clone();
        let avatar = avatar.clone();
        let background = background.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = FormData::new().unwrap_throw();
            form.append_with_str("name", &name).unwrap_throw();
            form.append_with_str("dateOfBirth", &date_of_birth).unwrap_throw();
            form.append_with_str("description", &description).unwrap_throw();
            if let Some(file) = &*avatar {
                form.append_with_blob("avatar", file).unwrap_throw();
            }
            if let Some(file) = &*background {
                form.append_with_blob("background", file).unwrap_throw();
            }

            submitting.set(true);
            let submitting = submitting.clone();
            spawn_local(async move {
                match api::update_profile(form).await {
                    Ok(_) => alert("Profile updated."),
                    Err(why) => {
                        log::error!("Profile update failed: {why}");
                        alert(&format!("Failed to update profile: {why}"));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let avatar_preview = match &*preview_avatar {
        Some(url) => html!(<img src={url.clone()} class="mt-2 rounded-circle" style="height: 5rem; width: 5rem; object-fit: cover;" alt="Avatar preview" />),
        None => html!(),
    };

    let background_preview = match &*preview_background {
        Some(url) => html!(<img src={url.clone()} class="mt-2 rounded w-100" style="height: 5rem; object-fit: cover;" alt="Background preview" />),
        None => html!(),
    };

    html! {
        <form class="card p-4" {onsubmit}>
            <div class="mb-3">
                <label class="form-label" for="profile-name">{"Name"}</label>
                <input id="profile-name" type="text" class="form-control"
                    value={(*name).clone()} oninput={name_input} disabled={*submitting} />
            </div>
            <div class="mb-3">
                <label class="form-label" for="profile-dob">{"Date of birth"}</label>
                <input id="profile-dob" type="date" class="form-control"
                    value={(*date_of_birth).clone()} oninput={dob_input} disabled={*submitting} />
            </div>
            <div class="mb-3">
                <label class="form-label" for="profile-description">{"Description"}</label>
                <textarea id="profile-description" class="form-control" rows="3"
                    value={(*description).clone()} oninput={description_input} disabled={*submitting} />
            </div>
            <div class="row mb-3">
                <div class="col-6">
                    <label class="form-label">{"Avatar"}</label>
                    <input type="file" class="form-control" accept="image/*"
                        onchange={avatar_change} disabled={*submitting} />
                    {avatar_preview}
                </div>
                <div class="col-6">
                    <label class="form-label">{"Background"}</label>
                    <input type="file" class="form-control" accept="image/*"
                        onchange={background_change} disabled={*submitting} />
                    {background_preview}
                </div>
            </div>
            <div class="d-flex justify-content-end">
                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    { if *submitting { "Updating..." } else { "Update profile" } }
                </button>
            </div>
        </form>
    }
}

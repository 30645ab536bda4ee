use wasm_bindgen::UnwrapThrowExt;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlInputElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::session;
use crate::{api, Route};

const MAX_UPLOAD_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

/// Artwork upload form: pick an image, it is posted right away with the
/// identity token as bearer credential, and the hosted URL comes back.
#[function_component(ImageUploader)]
pub fn image_uploader() -> Html {
    let uploading = use_state(|| false);
    let uploaded_url = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);
    let navigator = use_navigator().unwrap();

    let onchange = {
        let uploading = uploading.clone();
        let uploaded_url = uploaded_url.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // Allow re-selecting the same file after a failure.
            input.set_value("");

            if file.size() > MAX_UPLOAD_BYTES {
                error.set(Some("That image is over the 5 MB limit.".to_owned()));
                return;
            }
            let Some(token) = session::stored_id_token() else {
                error.set(Some("Your session has no upload credential; sign in again.".to_owned()));
                return;
            };

            error.set(None);
            uploaded_url.set(None);
            uploading.set(true);

            let uploading = uploading.clone();
            let uploaded_url = uploaded_url.clone();
            let error = error.clone();
            spawn_local(async move {
                let form = FormData::new().unwrap_throw();
                form.append_with_blob("file", &file).unwrap_throw();
                match api::upload_artwork(form, &token).await {
                    Ok(response) => uploaded_url.set(Some(response.url)),
                    Err(why) => {
                        log::error!("Upload failed: {why}");
                        error.set(Some(format!("Upload failed: {why}")));
                    }
                }
                uploading.set(false);
            });
        })
    };

    let view_gallery = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Gallery))
    };

    let body = if *uploading {
        html! {
            <>
                <div class="progress mb-3">
                    <div class="progress-bar progress-bar-striped progress-bar-animated" style="width: 100%;"></div>
                </div>
                <p class="text-muted small">{"Uploading..."}</p>
            </>
        }
    } else if let Some(url) = &*uploaded_url {
        html! {
            <>
                <img src={url.clone()} class="rounded mx-auto d-block mb-3" style="max-height: 15rem;" />
                <p class="text-muted small">{"Upload successful! Pick another file to replace it."}</p>
                <button class="btn btn-primary w-100" onclick={view_gallery}>{"View gallery"}</button>
            </>
        }
    } else {
        html! {
            <p class="text-muted small">{"Choose an image to publish to the gallery."}</p>
        }
    };

    let maybe_error = match &*error {
        Some(text) => html!(<p class="text-danger small mb-0">{text}</p>),
        None => html!(),
    };

    html! {
        <div class="card" style="max-width: 28rem; width: 100%;">
            <div class="card-body text-center">
                <div class="border border-2 rounded p-4">
                    {body}
                    <input
                        type="file"
                        class="form-control mt-3"
                        accept=".png,.jpg,.jpeg,.webp"
                        disabled={*uploading}
                        {onchange}
                    />
                    <p class="text-muted small mt-2 mb-0">{"Supports: PNG, JPG, JPEG, WEBP (max 5 MB)"}</p>
                    {maybe_error}
                </div>
            </div>
        </div>
    }
}

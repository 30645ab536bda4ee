use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};
use yew::prelude::*;

/// Decode resolution of the placeholder. The canvas is stretched by CSS, so
/// a small bitmap is enough; the hash carries no more detail anyway.
const PLACEHOLDER_SIZE: u32 = 32;

#[derive(Properties, PartialEq)]
pub struct BlurhashCanvasProps {
    pub hash: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Low-resolution placeholder painted from an artwork's blurhash string,
/// shown underneath the full image until that one has loaded.
#[function_component]
pub fn BlurhashCanvas(props: &BlurhashCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |hash: &AttrValue| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    match blurhash::decode(hash, PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, 1.0) {
                        Ok(pixels) => {
                            let context = canvas
                                .get_context("2d")
                                .unwrap_throw()
                                .unwrap_throw()
                                .dyn_into::<CanvasRenderingContext2d>()
                                .unwrap_throw();
                            let image = ImageData::new_with_u8_clamped_array_and_sh(
                                Clamped(&pixels),
                                PLACEHOLDER_SIZE,
                                PLACEHOLDER_SIZE,
                            )
                            .unwrap_throw();
                            context.put_image_data(&image, 0.0, 0.0).unwrap_throw();
                        }
                        // A bad hash is cosmetic only; the canvas stays blank.
                        Err(why) => log::debug!("Undecodable blurhash: {why:?}"),
                    }
                }
                || ()
            },
            props.hash.clone(),
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            width={PLACEHOLDER_SIZE.to_string()}
            height={PLACEHOLDER_SIZE.to_string()}
            class={props.class.clone()}
            style="width: 100%; height: 100%;"
        />
    }
}

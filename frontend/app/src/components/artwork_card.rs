use communication::Artwork;
use yew::prelude::*;

use common::components::PriceDisplay;

use super::blurhash_canvas::BlurhashCanvas;

#[derive(Properties, PartialEq)]
pub struct ArtworkCardProps {
    pub artwork: Artwork,

    /// Forwarded to the card's root node so the gallery can point its
    /// visibility sentinel at the last rendered card.
    #[prop_or_default]
    pub node_ref: NodeRef,

    /// Cart affordance; cards without it (e.g. on the profile page) render
    /// no cart button.
    #[prop_or_default]
    pub on_add_to_cart: Option<Callback<Artwork>>,
}

#[function_component]
pub fn ArtworkCard(props: &ArtworkCardProps) -> Html {
    let art = &props.artwork;
    let image_loaded = use_state_eq(|| false);

    let onload = {
        let image_loaded = image_loaded.clone();
        Callback::from(move |_: Event| image_loaded.set(true))
    };

    // Placeholder sits underneath the image and is dropped once the real
    // pixels have arrived.
    let placeholder = if *image_loaded {
        html!()
    } else {
        match &art.blurhash {
            Some(hash) => html! {
                <div class="position-absolute top-0 start-0 w-100 h-100">
                    <BlurhashCanvas hash={hash.clone()} />
                </div>
            },
            None => html! {
                <div class="position-absolute top-0 start-0 w-100 h-100 bg-secondary bg-opacity-25"></div>
            },
        }
    };

    let image_style = format!(
        "height: 12rem; width: 100%; object-fit: cover; transition: opacity 0.4s; opacity: {};",
        if *image_loaded { "1" } else { "0" }
    );

    let maybe_description = match &art.description {
        Some(text) => html! {
            <p class="card-text small text-muted"
                style="display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; overflow: hidden;">
                {text}
            </p>
        },
        None => html!(),
    };

    let maybe_price = match art.price {
        Some(price) => html!(<PriceDisplay {price} />),
        None => html!(),
    };

    let maybe_cart_button = match &props.on_add_to_cart {
        Some(on_add_to_cart) => {
            let on_add_to_cart = on_add_to_cart.clone();
            let artwork = art.clone();
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                on_add_to_cart.emit(artwork.clone());
            });
            html!(<button class="btn btn-sm btn-outline-primary" {onclick}>{"Add to cart"}</button>)
        }
        None => html!(),
    };

    html! {
        <div class="card h-100" ref={props.node_ref.clone()}>
            <div class="position-relative" style="height: 12rem; overflow: hidden;">
                {placeholder}
                <img
                    src={art.image_url.clone()}
                    alt={art.title.clone()}
                    class="position-relative"
                    style={image_style}
                    {onload}
                />
            </div>
            <div class="card-body">
                <h5 class="card-title text-truncate">{&art.title}</h5>
                {maybe_description}
                <div class="d-flex justify-content-between align-items-center">
                    {maybe_price}
                    {maybe_cart_button}
                </div>
            </div>
        </div>
    }
}

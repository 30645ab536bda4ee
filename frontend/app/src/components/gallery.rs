use std::cell::Cell;
use std::rc::Rc;

use communication::Artwork;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use common::components::SkeletonCard;
use common::layout::CardGrid;

use crate::api;

use super::artwork_card::ArtworkCard;
use super::feed::{FeedAction, FeedState, SKELETON_BATCH};
use super::sentinel::use_visibility_sentinel;

/// Infinite-scroll artwork grid.
///
/// Page 1 loads on mount; every time the last card scrolls into view the
/// feed advances one page, until the backend answers with an empty page.
/// A "Load more" button triggers the same advance for non-pointer input.
#[function_component]
pub fn ArtworkGallery() -> Html {
    let feed = use_reducer_eq(FeedState::new);
    let last_card_ref = use_node_ref();

    // Fetch whenever a load is pending. `loading` is only ever set together
    // with the page that should be fetched, so depending on both covers the
    // initial mount and every accepted advance, and nothing else.
    {
        let deps = (feed.page, feed.loading);
        let feed = feed.clone();
        use_effect_with_deps(
            move |&(page, loading)| {
                let cancelled = Rc::new(Cell::new(false));
                if loading {
                    let feed = feed.clone();
                    let cancelled = cancelled.clone();
                    spawn_local(async move {
                        let outcome = api::fetch_artworks(page).await;
                        if cancelled.get() {
                            // The gallery unmounted while the request was in
                            // flight; do not touch dead component state.
                            return;
                        }
                        match outcome {
                            Ok(items) => feed.dispatch(FeedAction::Loaded(items)),
                            Err(why) => {
                                log::error!("Failed to fetch artworks page {page}: {why}");
                                feed.dispatch(FeedAction::Failed);
                            }
                        }
                    });
                }
                move || cancelled.set(true)
            },
            deps,
        );
    }

    let advance = {
        let feed = feed.clone();
        Callback::from(move |_: ()| feed.dispatch(FeedAction::Advance))
    };

    // Manual trigger for keyboard and other non-pointer input.
    let load_more = {
        let feed = feed.clone();
        Callback::from(move |_: MouseEvent| feed.dispatch(FeedAction::Advance))
    };

    // While loading or after exhaustion this attaches nothing; once a page
    // lands, the flag flips back and the observer re-attaches to whatever
    // card is the last one now.
    use_visibility_sentinel(last_card_ref.clone(), feed.can_advance(), advance);

    let add_to_cart = Callback::from(|artwork: Artwork| {
        spawn_local(async move {
            if let Err(why) = api::create_order(&artwork.id).await {
                log::error!("Failed to order artwork {}: {why}", artwork.id);
                gloo_dialogs::alert("Could not add this artwork to your cart.");
            }
        });
    });

    let total = feed.artworks.len();
    let cards = feed.artworks.iter().enumerate().map(|(index, art)| {
        let node_ref = if index + 1 == total {
            last_card_ref.clone()
        } else {
            NodeRef::default()
        };
        html! {
            <div class="col" key={art.id.clone()}>
                <ArtworkCard
                    artwork={art.clone()}
                    {node_ref}
                    on_add_to_cart={Some(add_to_cart.clone())}
                />
            </div>
        }
    });

    let skeletons = if feed.loading {
        (0..SKELETON_BATCH)
            .map(|n| {
                html! {
                    <div class="col" key={format!("skeleton-{n}")}>
                        <SkeletonCard />
                    </div>
                }
            })
            .collect::<Html>()
    } else {
        html!()
    };

    let footer = if feed.exhausted() && total > 0 {
        html!(<p class="text-center text-muted mt-4">{"You have seen every artwork."}</p>)
    } else if feed.has_more {
        let label = if feed.loading { "Loading..." } else { "Load more" };
        html! {
            <div class="d-grid col-6 mx-auto mt-4">
                <button class="btn btn-outline-primary" disabled={feed.loading} onclick={load_more}>
                    {label}
                </button>
            </div>
        }
    } else {
        html!()
    };

    html! {
        <>
            <h2 class="mb-4">{"Art Gallery"}</h2>
            <CardGrid>
                { for cards }
                {skeletons}
            </CardGrid>
            {footer}
        </>
    }
}

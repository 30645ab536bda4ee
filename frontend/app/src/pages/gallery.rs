use yew::prelude::*;

use common::layout::Container;

use crate::components::gallery::ArtworkGallery;

#[function_component(GalleryPage)]
pub fn gallery_page() -> Html {
    html! {
        <Container>
            <ArtworkGallery />
        </Container>
    }
}

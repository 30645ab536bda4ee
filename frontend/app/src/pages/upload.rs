use yew::prelude::*;

use common::layout::{Container, VerticalStack};

use crate::components::image_uploader::ImageUploader;
use crate::components::protected::Protected;

#[function_component(UploadPage)]
pub fn upload_page() -> Html {
    html! {
        <Protected>
            <Container>
                <VerticalStack>
                    <h2>{"Upload artwork"}</h2>
                    <ImageUploader />
                </VerticalStack>
            </Container>
        </Protected>
    }
}

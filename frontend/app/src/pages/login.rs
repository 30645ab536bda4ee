use yew::prelude::*;

use common::layout::{Container, VerticalStack};

use crate::components::login_form::LoginForm;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    html! {
        <Container>
            <VerticalStack>
                <LoginForm />
            </VerticalStack>
        </Container>
    }
}

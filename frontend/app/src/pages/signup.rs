use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use common::layout::{Container, VerticalStack};

use crate::components::signup_form::SignupForm;

/// `?type=artist` / `?type=printshop` from the join links.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct SignupQuery {
    #[serde(rename = "type")]
    pub account_type: String,
}

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let account_type = use_location()
        .and_then(|location| location.query::<SignupQuery>().ok())
        .map(|query| AttrValue::from(query.account_type));

    html! {
        <Container>
            <VerticalStack>
                <SignupForm {account_type} />
            </VerticalStack>
        </Container>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use common::screens::fullscreen_message::FullscreenMsg;

use crate::session::{use_session, SessionState};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProtectedProps {
    #[prop_or_default]
    pub children: Children,
}

/// Gate for pages that need a session: spinner text while the cookie check
/// is unresolved, redirect to sign-in when there is none.
#[function_component]
pub fn Protected(props: &ProtectedProps) -> Html {
    match use_session().state {
        SessionState::Unknown => {
            html!(<FullscreenMsg message="Checking your session..." />)
        }
        SessionState::SignedOut => html!(<Redirect<Route> to={Route::SignIn} />),
        SessionState::SignedIn(_) => html!(<>{ for props.children.iter() }</>),
    }
}

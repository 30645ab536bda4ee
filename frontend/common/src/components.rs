use communication::Price;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PriceDisplayProps {
    pub price: Price,
}

/// Text span showing an artwork price, with a currency symbol.
#[function_component]
pub fn PriceDisplay(props: &PriceDisplayProps) -> Html {
    html! {
        <span style="color: #D4AF37"> // strong yellow / gold color
            {format!("{:.2}", props.price)}
            {"¤"}  // generic currency symbol; TODO change this for the project
        </span>
    }
}

/// Grey placeholder card shown while a page of artworks is still loading.
/// Not backed by any record; purely an in-progress indicator.
#[function_component]
pub fn SkeletonCard() -> Html {
    html! {
        <div class="card h-100" aria-hidden="true">
            <div class="bg-secondary bg-opacity-25" style="height: 12rem;"></div>
            <div class="card-body placeholder-glow">
                <h5 class="card-title"><span class="placeholder col-7"></span></h5>
                <p class="card-text">
                    <span class="placeholder col-9"></span>
                    <span class="placeholder col-5"></span>
                </p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RoleBadgeProps {
    pub role: AttrValue,
}

/// Small pill naming one of the account's roles (artist, printshop, ...).
#[function_component]
pub fn RoleBadge(props: &RoleBadgeProps) -> Html {
    html! {
        <span class="badge rounded-pill text-bg-secondary me-1">{&props.role}</span>
    }
}

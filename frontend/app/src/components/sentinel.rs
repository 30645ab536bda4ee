use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

/// Watch the node behind `node_ref` and emit `on_visible` whenever it enters
/// the viewport.
///
/// Exactly one observer is live at a time: the effect cleanup disconnects the
/// previous one before a new observer attaches, and on unmount. While
/// `active` is false (a fetch is in flight, or the feed is exhausted) the
/// hook attaches nothing, so redundant page advances cannot fire. Repeated
/// intersection events are not debounced here; the feed's loading guard is
/// the only gate.
#[hook]
pub fn use_visibility_sentinel(node_ref: NodeRef, active: bool, on_visible: Callback<()>) {
    use_effect_with_deps(
        move |(node_ref, active)| {
            let mut live: Option<(IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>)> = None;

            if *active {
                if let Some(element) = node_ref.cast::<Element>() {
                    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(
                        move |entries: js_sys::Array| {
                            let intersecting = entries.iter().any(|entry| {
                                entry
                                    .unchecked_into::<IntersectionObserverEntry>()
                                    .is_intersecting()
                            });
                            if intersecting {
                                on_visible.emit(());
                            }
                        },
                    );
                    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
                        .unwrap_throw();
                    observer.observe(&element);
                    // The closure must outlive the observer.
                    live = Some((observer, callback));
                }
            }

            move || {
                if let Some((observer, _callback)) = live {
                    observer.disconnect();
                }
            }
        },
        (node_ref, active),
    );
}

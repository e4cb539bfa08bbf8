use gloo::events::EventListener;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

use foodies_core::{near_bottom, FeedGuard};

use crate::api;

fn scroll_metrics() -> Option<(f64, f64, f64)> {
    let window = web_sys::window()?;
    let scroll_top = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = window.document()?.document_element()?.scroll_height() as f64;
    Some((scroll_top, viewport_height, document_height))
}

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let container_ref = use_node_ref();
    let guard = use_mut_ref(FeedGuard::new);

    {
        let container_ref = container_ref.clone();
        let guard = guard.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "scroll", move |_event| {
                    let Some((scroll_top, viewport_height, document_height)) = scroll_metrics()
                    else {
                        return;
                    };
                    if !near_bottom(scroll_top, viewport_height, document_height) {
                        return;
                    }
                    if !guard.borrow_mut().try_begin() {
                        return;
                    }
                    gloo::console::log!("meal feed: loading more");
                    let container_ref = container_ref.clone();
                    let guard = guard.clone();
                    spawn_local(async move {
                        match api::fetch_more_meals().await {
                            Ok(fragment) => match container_ref.cast::<Element>() {
                                Some(container) => {
                                    if let Err(error) =
                                        container.insert_adjacent_html("beforeend", &fragment)
                                    {
                                        gloo::console::warn!("meal feed: append failed", error);
                                    }
                                }
                                None => gloo::console::warn!("meal feed: container missing"),
                            },
                            Err(message) => {
                                gloo::console::warn!("meal feed: load failed", message);
                            }
                        }
                        guard.borrow_mut().settle();
                    });
                })
            });
            move || drop(listener)
        });
    }

    html! {
        <main class="home-page">
            <h1>{ "Winning meals" }</h1>
            <div id="meal-container" ref={container_ref}></div>
        </main>
    }
}

mod api;
mod app_router;
mod camera_page;
mod meal_feed;
mod meal_image;

use yew::prelude::*;

use crate::app_router::Page;
use crate::camera_page::CameraPage;
use crate::meal_feed::HomePage;

#[function_component(App)]
fn app() -> Html {
    let page = app_router::current_page();
    let body = match page {
        Page::Camera => html! { <CameraPage /> },
        Page::Home => html! { <HomePage /> },
    };
    html! {
        <>
            <header class="top-nav">
                <a href="/home">{ "Home" }</a>
                <a href="/camera">{ "Camera" }</a>
            </header>
            { body }
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, File, HtmlInputElement, MouseEvent};
use yew::prelude::*;

use foodies_core::validate_upload;

use crate::api;
use crate::meal_image;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SubmitStatus {
    Idle,
    Uploading,
    Done,
    Failed,
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn selected_file(input: &HtmlInputElement) -> Option<File> {
    let files = input.files()?;
    files.get(0)
}

#[function_component(CameraPage)]
pub(crate) fn camera_page() -> Html {
    let input_ref = use_node_ref();
    let preview_src = use_state(|| None::<String>);
    let status = use_state(|| SubmitStatus::Idle);
    let status_note = use_state(|| None::<String>);
    let food_items = use_state(Vec::<String>::new);

    let on_image_change = {
        let preview_src = preview_src.clone();
        let status_note = status_note.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let Some(file) = selected_file(&input) else {
                return;
            };
            let preview_src = preview_src.clone();
            let status_note = status_note.clone();
            spawn_local(async move {
                match meal_image::preview_data_url(file).await {
                    Ok(url) => {
                        preview_src.set(Some(url));
                        status_note.set(None);
                    }
                    Err(message) => {
                        gloo::console::warn!("photo preview failed", message.clone());
                        status_note.set(Some(message));
                    }
                }
            });
        })
    };

    let on_image_click = {
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            input.click();
        })
    };

    let on_submit = {
        let input_ref = input_ref.clone();
        let status = status.clone();
        let status_note = status_note.clone();
        let food_items = food_items.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if *status == SubmitStatus::Uploading {
                return;
            }
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = selected_file(&input) else {
                alert("Please select an image to upload");
                return;
            };
            if let Err(error) = validate_upload(&file.type_(), file.size() as u64) {
                gloo::console::warn!("photo rejected", error.to_string());
                status.set(SubmitStatus::Failed);
                status_note.set(Some(error.to_string()));
                return;
            }
            status.set(SubmitStatus::Uploading);
            status_note.set(None);
            let status = status.clone();
            let status_note = status_note.clone();
            let food_items = food_items.clone();
            spawn_local(async move {
                match api::submit_photo(file).await {
                    Ok(response) if response.success => {
                        status.set(SubmitStatus::Done);
                        food_items.set(response.food_items);
                        alert("Image uploaded successfully");
                    }
                    Ok(response) => {
                        gloo::console::warn!(
                            "photo submit rejected",
                            response.error.clone().unwrap_or_default()
                        );
                        status.set(SubmitStatus::Failed);
                        status_note.set(response.error);
                        alert("Error uploading image");
                    }
                    Err(message) => {
                        gloo::console::warn!("photo submit failed", message.clone());
                        status.set(SubmitStatus::Failed);
                        status_note.set(Some(message));
                        alert("Error uploading image");
                    }
                }
            });
        })
    };

    let uploading = *status == SubmitStatus::Uploading;
    let submit_label = if uploading { "Uploading..." } else { "Submit photo" };
    let note_line = match status_note.as_ref() {
        Some(note) => html! { <p class="status-note">{ note.clone() }</p> },
        None => html! {},
    };
    let detected = if food_items.is_empty() {
        html! {}
    } else {
        html! {
            <ul class="food-items">
                { for food_items.iter().map(|item| html! { <li>{ item.clone() }</li> }) }
            </ul>
        }
    };

    html! {
        <main class="camera-page">
            <input
                id="image-input"
                ref={input_ref}
                type="file"
                accept="image/*"
                hidden={true}
                onchange={on_image_change}
            />
            <img
                id="selected-image"
                class="photo-slot"
                alt="Tap to choose a meal photo"
                src={(*preview_src).clone()}
                onclick={on_image_click.clone()}
            />
            <img
                id="preview-image"
                class="photo-preview"
                alt="Selected meal"
                src={(*preview_src).clone()}
                onclick={on_image_click}
            />
            <button id="submit-photo" onclick={on_submit} disabled={uploading}>
                { submit_label }
            </button>
            { note_line }
            { detected }
        </main>
    }
}

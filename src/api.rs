use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};

use foodies_core::{
    decode_submit_response, SubmitResponse, FETCH_MORE_MEALS_PATH, SUBMIT_PHOTO_PATH, UPLOAD_FIELD,
};

use crate::app_router;

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}

async fn fetch_text(request: Request) -> Result<(bool, String), String> {
    let window = web_sys::window().ok_or_else(|| "missing window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "not a fetch response".to_string())?;
    let ok = response.ok();
    let body = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    Ok((ok, body.as_string().unwrap_or_default()))
}

/// POSTs the selected photo as a multipart form and decodes the JSON verdict.
/// The server reports rejection through `success`/`error` in the body, so a
/// non-2xx status with a decodable body still yields a response.
pub(crate) async fn submit_photo(file: File) -> Result<SubmitResponse, String> {
    let form = FormData::new().map_err(js_err)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &file, &file.name())
        .map_err(js_err)?;

    let options = RequestInit::new();
    options.set_method("POST");
    options.set_body(form.as_ref());

    let url = app_router::api_url(SUBMIT_PHOTO_PATH);
    let request = Request::new_with_str_and_init(&url, &options).map_err(js_err)?;
    let (_ok, body) = fetch_text(request).await?;
    decode_submit_response(&body)
        .ok_or_else(|| format!("undecodable response from {SUBMIT_PHOTO_PATH}"))
}

/// Fetches the next feed fragment. The body is a raw HTML snippet.
pub(crate) async fn fetch_more_meals() -> Result<String, String> {
    let url = app_router::api_url(FETCH_MORE_MEALS_PATH);
    let request = Request::new_with_str(&url).map_err(js_err)?;
    let (ok, body) = fetch_text(request).await?;
    if !ok {
        return Err(format!("{FETCH_MORE_MEALS_PATH} returned an error status"));
    }
    Ok(body)
}

use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use foodies_core::data_url;

/// Reads the selected file into memory. Browser file handles only expose an
/// asynchronous ArrayBuffer read.
pub(crate) async fn read_file_bytes(file: File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "failed to read file".to_string())?;
    let array = js_sys::Uint8Array::new(&buffer);
    Ok(array.to_vec())
}

/// Builds the inline preview source for a freshly selected photo.
pub(crate) async fn preview_data_url(file: File) -> Result<String, String> {
    let mime = file.type_();
    let bytes = read_file_bytes(file).await?;
    if bytes.is_empty() {
        return Err("selected file is empty".to_string());
    }
    Ok(data_url(&bytes, &mime))
}

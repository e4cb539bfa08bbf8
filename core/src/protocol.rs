use serde::{Deserialize, Serialize};

pub const SUBMIT_PHOTO_PATH: &str = "/submit_photo";
pub const FETCH_MORE_MEALS_PATH: &str = "/fetch_more_meals";

/// Multipart form field carrying the photo bytes.
pub const UPLOAD_FIELD: &str = "image";

/// JSON body of a `/submit_photo` response. The server answers either
/// `{"success": true, "food_items": [...]}` or `{"error": "..."}` with a
/// non-2xx status; missing fields default so both shapes decode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub food_items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn decode_submit_response(body: &str) -> Option<SubmitResponse> {
    serde_json::from_str(body).ok()
}

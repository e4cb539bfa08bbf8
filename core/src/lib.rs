pub mod data_url;
pub mod feed;
pub mod protocol;
pub mod upload;

pub use data_url::{data_url, is_data_url, FALLBACK_MIME};
pub use feed::{near_bottom, near_bottom_with, FeedGuard, FeedPhase, NEAR_BOTTOM_PX};
pub use protocol::{
    decode_submit_response, SubmitResponse, FETCH_MORE_MEALS_PATH, SUBMIT_PHOTO_PATH, UPLOAD_FIELD,
};
pub use upload::{validate_upload, UploadError, MEAL_UPLOAD_MAX_BYTES};

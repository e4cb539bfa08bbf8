use std::fmt;

/// Upper bound on a submitted photo.
pub const MEAL_UPLOAD_MAX_BYTES: u32 = 10 * 1024 * 1024;

/// Preflight check run before any bytes leave the browser.
pub fn validate_upload(mime: &str, size: u64) -> Result<(), UploadError> {
    if !mime.starts_with("image/") {
        return Err(UploadError::UnsupportedType {
            mime: mime.to_string(),
        });
    }
    if size == 0 {
        return Err(UploadError::Empty);
    }
    if size > MEAL_UPLOAD_MAX_BYTES as u64 {
        return Err(UploadError::TooLarge {
            size,
            max: MEAL_UPLOAD_MAX_BYTES as u64,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    UnsupportedType { mime: String },
    Empty,
    TooLarge { size: u64, max: u64 },
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::UnsupportedType { mime } => {
                if mime.trim().is_empty() {
                    write!(f, "file has no image type")
                } else {
                    write!(f, "unsupported file type '{mime}'")
                }
            }
            UploadError::Empty => write!(f, "selected file is empty"),
            UploadError::TooLarge { size, max } => {
                write!(f, "photo is {size} bytes, limit is {max}")
            }
        }
    }
}

impl std::error::Error for UploadError {}

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// MIME type used when the browser reports none for a selected file.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Builds a base64 data URL suitable for an `<img src>` attribute.
pub fn data_url(bytes: &[u8], mime: &str) -> String {
    let mime = mime.trim();
    let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

pub fn is_data_url(value: &str) -> bool {
    value.len() > "data:".len() && value.starts_with("data:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_carries_mime_and_payload() {
        let url = data_url(b"\x89PNG", "image/png");
        assert!(url.starts_with("data:image/png;base64,"));
        assert!(is_data_url(&url));
    }

    #[test]
    fn empty_mime_falls_back() {
        let url = data_url(b"abc", "  ");
        assert!(url.starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn bare_scheme_is_not_a_data_url() {
        assert!(!is_data_url("data:"));
        assert!(!is_data_url(""));
        assert!(!is_data_url("http://example.com/a.png"));
    }
}

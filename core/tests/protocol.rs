use foodies_core::{
    decode_submit_response, validate_upload, SubmitResponse, UploadError, MEAL_UPLOAD_MAX_BYTES,
};

#[test]
fn decodes_success_with_food_items() {
    let body = r#"{"success": true, "food_items": ["ramen", "gyoza"]}"#;
    let response = decode_submit_response(body).expect("decode");
    assert!(response.success);
    assert_eq!(response.food_items, vec!["ramen", "gyoza"]);
    assert_eq!(response.error, None);
}

#[test]
fn decodes_bare_success_flag() {
    let response = decode_submit_response(r#"{"success": false}"#).expect("decode");
    assert!(!response.success);
    assert!(response.food_items.is_empty());
}

#[test]
fn decodes_error_shape_as_failure() {
    let body = r#"{"error": "No image file found in request"}"#;
    let response = decode_submit_response(body).expect("decode");
    assert!(!response.success);
    assert_eq!(
        response.error.as_deref(),
        Some("No image file found in request")
    );
}

#[test]
fn rejects_non_json_bodies() {
    assert_eq!(decode_submit_response("<html>502</html>"), None);
    assert_eq!(decode_submit_response(""), None);
}

#[test]
fn unknown_fields_are_ignored() {
    let body = r#"{"success": true, "food_items": [], "request_id": "abc"}"#;
    assert_eq!(
        decode_submit_response(body),
        Some(SubmitResponse {
            success: true,
            food_items: Vec::new(),
            error: None,
        })
    );
}

#[test]
fn preflight_accepts_ordinary_photos() {
    assert!(validate_upload("image/jpeg", 120_000).is_ok());
    assert!(validate_upload("image/png", MEAL_UPLOAD_MAX_BYTES as u64).is_ok());
}

#[test]
fn preflight_rejects_non_image_types() {
    assert_eq!(
        validate_upload("application/pdf", 100),
        Err(UploadError::UnsupportedType {
            mime: "application/pdf".to_string()
        })
    );
    assert!(matches!(
        validate_upload("", 100),
        Err(UploadError::UnsupportedType { .. })
    ));
}

#[test]
fn preflight_rejects_empty_and_oversized_files() {
    assert_eq!(validate_upload("image/jpeg", 0), Err(UploadError::Empty));
    assert_eq!(
        validate_upload("image/jpeg", MEAL_UPLOAD_MAX_BYTES as u64 + 1),
        Err(UploadError::TooLarge {
            size: MEAL_UPLOAD_MAX_BYTES as u64 + 1,
            max: MEAL_UPLOAD_MAX_BYTES as u64,
        })
    );
}

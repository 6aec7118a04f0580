/// Every reported photo is stored as a JPEG under its case id.
pub const IMAGE_CONTENT_TYPE: &str = "image/jpeg";

/// Object key for a case's photo: "{case_id}.jpg"
pub fn image_key(case_id: &str) -> String {
    format!("{}.jpg", case_id)
}

//! Validation tests for uploads and object keys.

use crate::media::domain::{ImageFormat, ImageKey, ImageUpload, MediaDomainError};
use rstest::rstest;

#[rstest]
#[case("image/jpeg", ImageFormat::Jpeg)]
#[case("IMAGE/PNG", ImageFormat::Png)]
#[case("image/webp; charset=binary", ImageFormat::Webp)]
#[case("image/gif", ImageFormat::Gif)]
fn accepted_content_types_resolve(#[case] content_type: &str, #[case] expected: ImageFormat) {
    assert_eq!(ImageFormat::from_content_type(content_type), Ok(expected));
}

#[rstest]
#[case("image/svg+xml")]
#[case("application/pdf")]
#[case("")]
fn other_content_types_are_rejected(#[case] content_type: &str) {
    assert_eq!(
        ImageFormat::from_content_type(content_type),
        Err(MediaDomainError::UnsupportedContentType(
            content_type.to_owned()
        ))
    );
}

#[rstest]
fn empty_upload_is_rejected() {
    assert_eq!(
        ImageUpload::new("image/png", Vec::new(), 10),
        Err(MediaDomainError::EmptyUpload)
    );
}

#[rstest]
fn oversized_upload_is_rejected() {
    assert_eq!(
        ImageUpload::new("image/png", vec![0; 11], 10),
        Err(MediaDomainError::TooLarge {
            limit: 10,
            actual: 11
        })
    );
}

#[rstest]
fn upload_at_limit_is_accepted() {
    let upload = ImageUpload::new("image/png", vec![0; 10], 10).expect("upload within limit");
    assert_eq!(upload.format(), ImageFormat::Png);
    assert_eq!(upload.bytes().len(), 10);
}

#[rstest]
fn generated_key_round_trips_through_parse() {
    let key = ImageKey::generate(ImageFormat::Webp);
    let parsed = ImageKey::parse(key.as_str()).expect("generated key parses");
    assert_eq!(parsed, key);
    assert_eq!(parsed.format(), Some(ImageFormat::Webp));
}

#[rstest]
#[case("../etc/passwd")]
#[case("photo.jpg")]
#[case("2f1c1c1e6a3b4a8f9d7c4b2a1e0f9d8c")]
#[case("2f1c1c1e6a3b4a8f9d7c4b2a1e0f9d8c.exe")]
#[case("../2f1c1c1e6a3b4a8f9d7c4b2a1e0f9d8c.jpg")]
fn malformed_keys_are_rejected(#[case] raw: &str) {
    assert_eq!(
        ImageKey::parse(raw),
        Err(MediaDomainError::InvalidKey(raw.to_owned()))
    );
}

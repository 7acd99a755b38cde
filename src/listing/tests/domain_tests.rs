//! Tests for listing text fields, species, search terms and edit tokens.

use crate::listing::domain::{
    Description, EditToken, ImageUrl, ListingDomainError, ListingTitle, SearchTerm, Species,
    Zone,
};
use rstest::rstest;

#[rstest]
fn title_is_trimmed() {
    let title = ListingTitle::new("  Firulais perdido  ").expect("valid title");
    assert_eq!(title.as_str(), "Firulais perdido");
}

#[rstest]
fn blank_fields_are_rejected() {
    assert_eq!(
        ListingTitle::new("   "),
        Err(ListingDomainError::EmptyField { field: "title" })
    );
    assert_eq!(
        Description::new(""),
        Err(ListingDomainError::EmptyField {
            field: "description"
        })
    );
    assert_eq!(
        Zone::new("\t"),
        Err(ListingDomainError::EmptyField { field: "zone" })
    );
}

#[rstest]
fn overlong_title_is_rejected() {
    let raw = "ñ".repeat(101);
    assert_eq!(
        ListingTitle::new(&raw),
        Err(ListingDomainError::FieldTooLong {
            field: "title",
            max: 100,
            actual: 101,
        })
    );
}

#[rstest]
fn title_at_limit_counts_characters_not_bytes() {
    let raw = "ñ".repeat(100);
    assert!(ListingTitle::new(&raw).is_ok());
}

#[rstest]
#[case("dog", Species::Dog)]
#[case(" Cat ", Species::Cat)]
#[case("OTHER", Species::Other)]
fn species_parses_storage_values(#[case] raw: &str, #[case] expected: Species) {
    assert_eq!(Species::try_from(raw), Ok(expected));
}

#[rstest]
fn species_rejects_all_marker() {
    assert!(Species::try_from("all").is_err());
}

#[rstest]
fn blank_search_yields_no_term() {
    assert!(SearchTerm::parse("   ").is_none());
}

#[rstest]
#[case("Firulais", "Perro marrón", true)]
#[case("Perdido en plaza", "Responde a FIRULAIS", true)]
#[case("Gata blanca", "Collar rojo", false)]
fn search_matches_title_or_description_ignoring_case(
    #[case] title: &str,
    #[case] description: &str,
    #[case] expected: bool,
) {
    let term = SearchTerm::parse("firulais").expect("non-blank term");
    assert_eq!(term.matches(title, description), expected);
}

#[rstest]
fn search_pattern_escapes_wildcards() {
    let term = SearchTerm::parse(r"100%_a\b").expect("non-blank term");
    assert_eq!(term.ilike_pattern(), r"%100\%\_a\\b%");
}

#[rstest]
fn generated_tokens_are_unique_hex() {
    let first = EditToken::generate();
    let second = EditToken::generate();
    assert_ne!(first, second);
    assert_eq!(first.expose().len(), 32);
    assert!(first.expose().chars().all(|c| c.is_ascii_hexdigit()));
}

#[rstest]
fn token_matches_only_identical_value() {
    let token = EditToken::parse("abc123").expect("valid token");
    assert!(token.matches("abc123"));
    assert!(token.matches(" abc123 "));
    assert!(!token.matches("abc124"));
    assert!(!token.matches(""));
}

#[rstest]
fn token_debug_output_is_redacted() {
    let token = EditToken::parse("secret-value").expect("valid token");
    assert!(!format!("{token:?}").contains("secret-value"));
}

#[rstest]
fn blank_token_is_rejected() {
    assert_eq!(EditToken::parse("  "), Err(ListingDomainError::EmptyEditToken));
}

#[rstest]
#[case("https://cdn.example/fotos/firulais.jpg")]
#[case(" http://localhost:8080/media/a.png ")]
fn http_image_urls_are_accepted(#[case] raw: &str) {
    let url = ImageUrl::new(raw).expect("valid url");
    assert_eq!(url.as_str(), raw.trim());
}

#[rstest]
#[case("ftp://example.com/a.jpg")]
#[case("https://")]
#[case("javascript:alert(1)")]
#[case("https://example.com/a b.jpg")]
fn other_image_urls_are_rejected(#[case] raw: &str) {
    assert_eq!(
        ImageUrl::new(raw),
        Err(ListingDomainError::InvalidImageUrl(raw.to_owned()))
    );
}

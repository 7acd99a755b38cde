//! Server configuration read from the real process environment.

mod test_helpers;

use amigo_fiel::config::{
    AppConfig, BIND_VAR, ConfigError, DATABASE_URL_VAR, MAX_IMAGE_BYTES_VAR, MEDIA_DIR_VAR,
    PAGE_SIZE_VAR, PUBLIC_URL_VAR, REPORT_THRESHOLD_VAR,
};
use rstest::rstest;
use test_helpers::EnvVarGuard;

const ALL_VARS: [&str; 7] = [
    BIND_VAR,
    DATABASE_URL_VAR,
    MEDIA_DIR_VAR,
    PUBLIC_URL_VAR,
    PAGE_SIZE_VAR,
    REPORT_THRESHOLD_VAR,
    MAX_IMAGE_BYTES_VAR,
];

#[rstest]
fn environment_overrides_defaults() -> Result<(), eyre::Report> {
    let _guard = EnvVarGuard::apply(
        &[
            (BIND_VAR, Some("127.0.0.1:9000")),
            (DATABASE_URL_VAR, Some("postgres://localhost/amigo")),
            (MEDIA_DIR_VAR, Some("/var/lib/amigo/media")),
            (PUBLIC_URL_VAR, Some("https://amigofiel.example/")),
            (PAGE_SIZE_VAR, Some("20")),
            (REPORT_THRESHOLD_VAR, Some("5")),
        ],
        &[MAX_IMAGE_BYTES_VAR],
    );

    let config = AppConfig::from_env()?;

    eyre::ensure!(config.bind.port() == 9000, "bind address not applied");
    eyre::ensure!(
        config.database_url.as_deref() == Some("postgres://localhost/amigo"),
        "database URL not applied"
    );
    eyre::ensure!(
        config.media_dir.as_ref().map(|dir| dir.as_str()) == Some("/var/lib/amigo/media"),
        "media dir not applied"
    );
    eyre::ensure!(
        config.public_url == "https://amigofiel.example",
        "trailing slash should be trimmed, got {}",
        config.public_url
    );
    eyre::ensure!(config.page_size == 20, "page size not applied");
    eyre::ensure!(config.report_threshold == 5, "threshold not applied");
    Ok(())
}

#[rstest]
fn unset_environment_runs_in_memory() -> Result<(), eyre::Report> {
    let _guard = EnvVarGuard::apply(&[], &ALL_VARS);

    let config = AppConfig::from_env()?;

    eyre::ensure!(config.database_url.is_none(), "no database by default");
    eyre::ensure!(config.media_dir.is_none(), "no media dir by default");
    eyre::ensure!(config.report_threshold == 3, "default threshold is three");
    Ok(())
}

#[rstest]
#[case::page_size_zero(PAGE_SIZE_VAR, "0")]
#[case::page_size_text(PAGE_SIZE_VAR, "many")]
#[case::bad_bind(BIND_VAR, "localhost")]
fn invalid_values_are_reported(#[case] key: &'static str, #[case] value: &str) {
    let _guard = EnvVarGuard::apply(&[(key, Some(value))], &[]);

    let err = AppConfig::from_env().expect_err("invalid value must be rejected");

    let reported = match err {
        ConfigError::Invalid { key: bad, .. } | ConfigError::OutOfRange { key: bad, .. } => bad,
    };
    assert_eq!(reported, key);
}

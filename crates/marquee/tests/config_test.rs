//! Configuration loading tests.

use marquee::{DEFAULT_TEXT_MODEL, MarqueeConfig, ModelsConfig, ResearchConfig};
use std::io::Write;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_empty_config_uses_defaults() -> anyhow::Result<()> {
    let config = MarqueeConfig::from_toml("")?;

    assert_eq!(config, MarqueeConfig::default());
    assert_eq!(
        *config.server().bind(),
        SocketAddr::from(([127, 0, 0, 1], 8787))
    );
    assert_eq!(config.storage().poster_dir(), &PathBuf::from("./data/posters"));
    assert_eq!(config.models().text_model(), DEFAULT_TEXT_MODEL);
    assert_eq!(*config.models().gritty_max_tokens(), 300);
    assert!(config.research().gather_interval().is_none());
    Ok(())
}

#[test]
fn test_partial_sections_keep_other_defaults() -> anyhow::Result<()> {
    let config = MarqueeConfig::from_toml(
        r#"
        [server]
        bind = "0.0.0.0:9000"

        [models]
        cast_max_tokens = 512
        "#,
    )?;

    assert_eq!(*config.server().bind(), SocketAddr::from(([0, 0, 0, 0], 9000)));
    assert_eq!(*config.models().cast_max_tokens(), 512);
    assert_eq!(*config.models().description_max_tokens(), 10_000);
    assert_eq!(config.storage(), MarqueeConfig::default().storage());
    Ok(())
}

#[test]
fn test_from_file() -> anyhow::Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"
        [storage]
        poster_dir = "/tmp/marquee-posters"

        [research]
        source_url = "https://example.com/popular"
        gather_interval_hours = 6
        "#
    )?;

    let config = MarqueeConfig::from_file(file.path())?;

    assert_eq!(
        config.storage().poster_dir(),
        &PathBuf::from("/tmp/marquee-posters")
    );
    assert_eq!(config.research().source_url(), "https://example.com/popular");
    assert_eq!(
        config.research().gather_interval(),
        Some(Duration::from_secs(6 * 60 * 60))
    );
    Ok(())
}

#[test]
fn test_missing_file_is_config_error() {
    let err = MarqueeConfig::from_file("/nonexistent/marquee.toml")
        .expect_err("missing file should fail");
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_malformed_toml_is_config_error() {
    let err = MarqueeConfig::from_toml("[server]\nbind = 12").expect_err("bad bind should fail");
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_zero_interval_disables_schedule() -> anyhow::Result<()> {
    let config = MarqueeConfig::from_toml("[research]\ngather_interval_hours = 0")?;
    assert!(config.research().gather_interval().is_none());
    Ok(())
}

#[test]
fn test_huge_interval_saturates() -> anyhow::Result<()> {
    let config = MarqueeConfig::from_toml(&format!(
        "[research]\ngather_interval_hours = {}",
        i64::MAX
    ))?;
    assert_eq!(
        config.research().gather_interval(),
        Some(Duration::from_secs(u64::MAX))
    );
    Ok(())
}

#[test]
fn test_settings_follow_models_section() {
    let models = ModelsConfig::builder()
        .text_model("@cf/test/text")
        .gritty_max_tokens(42)
        .actors_max_tokens(7)
        .build()
        .expect("models config");

    let generation = models.generation_settings();
    assert_eq!(*generation.gritty_max_tokens(), 42);
    assert_eq!(*generation.cast_max_tokens(), 20_000);

    let research = ResearchConfig::default().research_settings(&models);
    assert_eq!(*research.actors_max_tokens(), 7);
    assert_eq!(research.actors_model().as_deref(), Some("@cf/test/text"));
}

//! Tests for the service-backed generation steps.

mod test_utils;

use marquee_agents::{GenerationSettings, MovieGenerator, StepGenerator};
use marquee_core::{CastMember, FieldUpdate, MovieState, Output, Role};
use marquee_storage::{InMemoryStore, ObjectStore};
use serde_json::json;
use std::sync::Arc;
use test_utils::{MockDriver, StubResearch};

fn generator(
    driver: MockDriver,
    research: StubResearch,
) -> (Arc<MockDriver>, Arc<InMemoryStore>, StepGenerator<MockDriver>) {
    let driver = Arc::new(driver);
    let store = Arc::new(InMemoryStore::new());
    let steps = StepGenerator::new(driver.clone(), Arc::new(research), store.clone());
    (driver, store, steps)
}

fn described() -> MovieState {
    let mut movie = MovieState::for_slug("heat");
    movie.apply(FieldUpdate::Title("Heat".to_string()));
    movie.apply(FieldUpdate::Description("A thief and a detective.".to_string()));
    movie
}

#[tokio::test]
async fn test_gritty_scale_parses_and_falls_back() -> anyhow::Result<()> {
    let driver = MockDriver::new()
        .with_text("7")
        .with_text("abc")
        .with_text("3")
        .with_text("4");
    let (driver, _, steps) = generator(driver, StubResearch::default());
    let movie = described();

    assert_eq!(steps.gritty_scale(&movie).await?, 3);
    assert_eq!(steps.gritty_scale(&movie).await?, 3);
    assert_eq!(steps.gritty_scale(&movie).await?, 3);
    assert_eq!(steps.gritty_scale(&movie).await?, 4);

    let request = &driver.requests()[0];
    assert_eq!(*request.max_tokens(), Some(300));
    assert!(request.messages()[1].content.contains("Heat"));
    Ok(())
}

#[tokio::test]
async fn test_gritty_scale_propagates_service_errors() {
    let (_, _, steps) = generator(MockDriver::new(), StubResearch::default());
    assert!(steps.gritty_scale(&described()).await.is_err());
}

#[tokio::test]
async fn test_description_uses_trends_when_present() -> anyhow::Result<()> {
    let research = StubResearch {
        trends: vec!["Heists with a conscience".to_string()],
        actors: Vec::new(),
    };
    let (driver, _, steps) = generator(MockDriver::new().with_text("  A pitch.\n"), research);

    let description = steps.description(&described()).await?;
    assert_eq!(description, "A pitch.");

    let request = &driver.requests()[0];
    assert_eq!(request.messages()[0].role, Role::System);
    assert!(request.messages()[0].content.contains("Heists with a conscience"));
    Ok(())
}

#[tokio::test]
async fn test_free_text_is_trimmed_not_rejected() -> anyhow::Result<()> {
    let driver = MockDriver::new()
        .with_text("  Everybody pays.\n")
        .with_text("   ");
    let (_, _, steps) = generator(driver, StubResearch::default());

    assert_eq!(steps.tagline(&described()).await?, "Everybody pays.");
    assert_eq!(steps.tagline(&described()).await?, "");
    Ok(())
}

#[tokio::test]
async fn test_gritty_scale_reads_json_numbers() -> anyhow::Result<()> {
    let driver = MockDriver::new()
        .with_output(Output::Json(json!(4)))
        .with_output(Output::Json(json!(9)));
    let (_, _, steps) = generator(driver, StubResearch::default());

    assert_eq!(steps.gritty_scale(&described()).await?, 4);
    assert_eq!(steps.gritty_scale(&described()).await?, 3);
    Ok(())
}

#[tokio::test]
async fn test_cast_reads_actors_and_validates() -> anyhow::Result<()> {
    let research = StubResearch {
        trends: Vec::new(),
        actors: vec!["Amy Adams".to_string()],
    };
    let driver = MockDriver::new()
        .with_json(json!([{"character": "Neil", "actor": "Amy Adams"}]))
        .with_json(json!([{"character": "Neil"}]));
    let (driver, _, steps) = generator(driver, research);

    let cast = steps.cast(&described()).await?;
    assert_eq!(
        cast,
        vec![CastMember {
            character: "Neil".to_string(),
            actor: "Amy Adams".to_string(),
        }]
    );
    assert!(driver.requests()[0].messages()[1].content.contains("Amy Adams"));
    assert_eq!(*driver.requests()[0].max_tokens(), Some(20_000));

    // missing actor does not match the schema
    assert!(steps.cast(&described()).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_poster_is_stored_under_slug() -> anyhow::Result<()> {
    let driver = MockDriver::new().with_text("A neon-lit freeway at night");
    let (driver, store, steps) = generator(driver, StubResearch::default());

    let path = steps.poster(&described()).await?;

    assert!(path.starts_with("/images/posters/heat/"));
    assert!(path.ends_with(".jpg"));
    assert_eq!(driver.image_prompts(), vec!["A neon-lit freeway at night".to_string()]);

    let key = path.trim_start_matches("/images/posters/");
    let stored = store.get(key).await?;
    assert_eq!(stored.as_deref(), Some(driver.image_bytes()));
    Ok(())
}

#[tokio::test]
async fn test_poster_keys_are_unique() -> anyhow::Result<()> {
    let driver = MockDriver::new().with_text("one").with_text("two");
    let (_, store, steps) = generator(driver, StubResearch::default());

    let first = steps.poster(&described()).await?;
    let second = steps.poster(&described()).await?;
    assert_ne!(first, second);
    assert_eq!(store.len().await, 2);
    Ok(())
}

#[tokio::test]
async fn test_reviews_accept_whole_ratings_only() -> anyhow::Result<()> {
    let driver = MockDriver::new()
        .with_json(json!([
            {"author": "Reel Rita", "text": "Relentless.", "rating": 5},
            {"author": "Grumpy Gus", "text": "Too long.", "rating": 2.0}
        ]))
        .with_json(json!([{"author": "Hyper Hal", "text": "Best ever!", "rating": 6}]));
    let settings = GenerationSettings::builder().reviews_max_tokens(500).build()?;
    let (driver, _, steps) = generator(driver, StubResearch::default());
    let steps = steps.with_settings(settings);

    let reviews = steps.reviews(&described()).await?;
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[1].rating, 2);
    assert_eq!(*driver.requests()[0].max_tokens(), Some(500));

    assert!(steps.reviews(&described()).await.is_err());
    Ok(())
}

//! Shared helpers for API integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use http_body_util::BodyExt;
use marquee_agents::{MovieGenerator, MovieRegistry, Observers, ResearchGatherer, ResearchHandle};
use marquee_core::{CastMember, MovieState, Review};
use marquee_error::{GenerationError, GenerationErrorKind, MarqueeResult};
use marquee_server::{AppState, create_router};
use marquee_storage::{InMemoryStore, ObjectStore};
use std::sync::Arc;
use tower::ServiceExt;

/// Generator with fixed answers; optionally fails the cast step.
pub struct FixedGenerator {
    pub fail_cast: bool,
}

#[async_trait]
impl MovieGenerator for FixedGenerator {
    async fn gritty_scale(&self, _movie: &MovieState) -> MarqueeResult<u8> {
        Ok(2)
    }

    async fn description(&self, movie: &MovieState) -> MarqueeResult<String> {
        Ok(format!("All about {}", movie.title()))
    }

    async fn tagline(&self, _movie: &MovieState) -> MarqueeResult<String> {
        Ok("Coming soon".to_string())
    }

    async fn cast(&self, _movie: &MovieState) -> MarqueeResult<Vec<CastMember>> {
        if self.fail_cast {
            return Err(GenerationError::new(GenerationErrorKind::HttpStatus {
                status_code: 500,
                message: "model overloaded".to_string(),
            })
            .into());
        }
        Ok(vec![CastMember {
            character: "Lead".to_string(),
            actor: "Amy Adams".to_string(),
        }])
    }

    async fn poster(&self, _movie: &MovieState) -> MarqueeResult<String> {
        Ok("/images/posters/test/poster.jpg".to_string())
    }

    async fn reviews(&self, _movie: &MovieState) -> MarqueeResult<Vec<Review>> {
        Ok(vec![Review {
            author: "Critic".to_string(),
            text: "Fine".to_string(),
            rating: 3,
        }])
    }
}

/// Gatherer with a fixed digest and lists.
pub struct FixedGatherer;

#[async_trait]
impl ResearchGatherer for FixedGatherer {
    async fn fetch_digest(&self) -> MarqueeResult<String> {
        Ok("# Popular".to_string())
    }

    async fn extract_trends(&self, _digest: &str) -> MarqueeResult<Vec<String>> {
        Ok(vec!["Space heists".to_string()])
    }

    async fn extract_actors(&self, _digest: &str) -> MarqueeResult<Vec<String>> {
        Ok(vec!["Tom Hanks".to_string(), "Amy Adams".to_string()])
    }
}

pub struct TestApp {
    pub router: Router,
    pub posters: Arc<InMemoryStore>,
}

pub async fn build_test_app(fail_cast: bool) -> TestApp {
    let posters = Arc::new(InMemoryStore::new());
    let registry = Arc::new(MovieRegistry::new(Arc::new(FixedGenerator { fail_cast })));
    let research = ResearchHandle::spawn(Arc::new(FixedGatherer), Observers::new())
        .await
        .expect("research actor spawns");
    let state = AppState::new(registry, research, posters.clone() as Arc<dyn ObjectStore>);
    TestApp {
        router: create_router(state),
        posters,
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

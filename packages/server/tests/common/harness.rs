//! Router-level harness: the real app wired to mock HipChat/Trello services.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;
use trello_hipchat::kernel::{MockBoardService, MockChatService, TestDependencies};
use trello_hipchat::server::{build_app, AppState};

use super::{sign, test_config};

pub struct TestHarness {
    pub app: Router,
    pub deps: TestDependencies,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_deps(TestDependencies::new())
    }

    pub fn with_chat(chat: MockChatService) -> Self {
        Self::with_deps(TestDependencies::new().mock_chat(chat))
    }

    pub fn with_board(board: MockBoardService) -> Self {
        Self::with_deps(TestDependencies::new().mock_board(board))
    }

    fn with_deps(deps: TestDependencies) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let app = build_app(AppState::new(test_config(), deps.server_deps()));
        Self { app, deps }
    }

    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        TestResponse {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    /// POST with a valid Trello signature
    pub async fn post_signed(&self, payload: &Value) -> TestResponse {
        let body = payload.to_string();
        let signature = sign(body.as_bytes());
        self.post_raw(body, Some(signature.as_str())).await
    }

    pub async fn post_raw(&self, body: String, signature: Option<&str>) -> TestResponse {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri("/board_modified")
            .header("content-type", "application/json");
        if let Some(signature) = signature {
            builder = builder.header("x-trello-webhook", signature);
        }
        self.request(builder.body(Body::from(body)).unwrap()).await
    }

    pub async fn head(&self) -> TestResponse {
        let request = Request::builder()
            .method(Method::HEAD)
            .uri("/board_modified")
            .body(Body::empty())
            .unwrap();
        self.request(request).await
    }

    pub fn sent_messages(&self) -> Vec<String> {
        self.deps
            .chat
            .sent_messages()
            .into_iter()
            .map(|m| m.message)
            .collect()
    }

    /// Wait for the background registration task to reach the board mock
    pub async fn wait_for_registrations(&self, expected: usize) -> usize {
        for _ in 0..100 {
            let seen = self.deps.board.calls().len();
            if seen >= expected {
                return seen;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        self.deps.board.calls().len()
    }
}

//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    middleware,
    routing::{get, post},
    Router,
};
use hipchat::{HipChatOptions, HipChatService};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use trello::TrelloClient;

use crate::config::{Config, REQUEST_TIMEOUT};
use crate::domains::notifications::NotificationDispatcher;
use crate::domains::registration::{RegistrationTrigger, WebhookRegistrar};
use crate::kernel::{HipChatAdapter, ServerDeps, TrelloAdapter};
use crate::server::middleware::register_on_first_request;
use crate::server::routes::{board_modified_handler, board_modified_probe, health_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dispatcher: NotificationDispatcher,
    pub registrar: WebhookRegistrar,
    pub registration: Arc<RegistrationTrigger>,
}

impl AppState {
    pub fn new(config: Config, deps: ServerDeps) -> Self {
        let dispatcher = NotificationDispatcher::new(
            deps.chat.clone(),
            config.chat_target(),
            config.http_timeout,
        );
        let registrar = WebhookRegistrar::new(deps.board.clone(), config.registration_request());
        Self {
            config: Arc::new(config),
            dispatcher,
            registrar,
            registration: Arc::new(RegistrationTrigger::new()),
        }
    }
}

/// Build ServerDeps backed by the real HipChat and Trello APIs
pub fn create_server_deps(config: &Config) -> Result<ServerDeps> {
    let hipchat = HipChatService::new(
        HipChatOptions::new(config.hipchat_token.clone())
            .with_base_url(config.hipchat_api_url.clone())
            .with_timeout(config.http_timeout),
    )
    .context("Failed to build HipChat client")?;

    let trello = TrelloClient::new(config.trello_api_url.clone(), config.http_timeout)
        .context("Failed to build Trello client")?;

    Ok(ServerDeps::new(
        Arc::new(HipChatAdapter::new(Arc::new(hipchat))),
        Arc::new(TrelloAdapter::new(Arc::new(trello))),
    ))
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route(
            "/board_modified",
            post(board_modified_handler).head(board_modified_probe),
        )
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(register_on_first_request))
        .layer(Extension(state)) // Must be after middlewares that need it
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
}

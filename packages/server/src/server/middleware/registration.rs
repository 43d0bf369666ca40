use axum::{
    extract::{Extension, Request},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::server::app::AppState;

/// Middleware that kicks off webhook registration on the first request.
///
/// Registration runs on its own task; this request continues immediately.
pub async fn register_on_first_request(
    Extension(state): Extension<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if state.registration.fire(&state.registrar) {
        debug!("First request received, registering webhook at Trello in the background");
    }

    next.run(request).await
}

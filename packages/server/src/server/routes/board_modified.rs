//! `/board_modified` - the callback Trello delivers board actions to.

use axum::{
    body::Bytes,
    extract::Extension,
    http::{HeaderMap, StatusCode},
};
use tracing::{debug, error, info, warn};

use crate::domains::webhooks::{interpret, parse_action, verify, SIGNATURE_HEADER};
use crate::server::app::AppState;

pub const ACCEPTED_BODY: &str = "Thanks, Trello...";
pub const PROBE_BODY: &str = "Welcome dear Trello...";

/// `HEAD /board_modified`
///
/// Trello probes the callback while creating the webhook. The probe carries
/// no signature, so it is answered without verification.
pub async fn board_modified_probe(body: Bytes) -> &'static str {
    debug!(body = %String::from_utf8_lossy(&body), "Trello is checking us out");
    PROBE_BODY
}

/// `POST /board_modified`
///
/// Only a bad signature yields a non-2xx answer. Irrelevant or malformed
/// actions and chat failures are acknowledged so Trello does not retry.
pub async fn board_modified_handler(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, &'static str) {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());

    if verify(
        &body,
        signature,
        &state.config.trello_secret,
        &state.config.callback_url,
    )
    .is_err()
    {
        warn!(
            headers = ?headers,
            body = %String::from_utf8_lossy(&body),
            "Request could not be authenticated. Possible attack event"
        );
        return (StatusCode::UNAUTHORIZED, "Unauthorized");
    }

    let Some(action) = parse_action(&body) else {
        return (StatusCode::OK, ACCEPTED_BODY);
    };

    if !action.is_card_event() {
        debug!(action_type = ?action.action_type(), "Ignoring Trello action");
        return (StatusCode::OK, ACCEPTED_BODY);
    }

    info!(
        "Handling card update: {}",
        serde_json::to_string_pretty(&action).unwrap_or_default()
    );

    if let Some(fact) = interpret(&action, &state.config.stages) {
        if let Err(e) = state.dispatcher.notify(&fact).await {
            error!(error = %e, "Failed to notify HipChat");
        }
    }

    (StatusCode::OK, ACCEPTED_BODY)
}

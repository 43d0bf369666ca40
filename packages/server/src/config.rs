use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use crate::domains::notifications::ChatTarget;
use crate::domains::registration::RegistrationRequest;
use crate::domains::webhooks::{ListKey, Stage, WorkflowStageMap};

/// Upper bound for a whole inbound request, including the chat call it may make.
/// Outbound calls must finish well inside it so Trello always gets an answer.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Shared secret Trello signs webhook deliveries with
    pub trello_secret: String,
    /// Public URL of `/board_modified`, exactly as registered at Trello
    pub callback_url: String,
    pub trello_board_id: String,
    pub trello_key: String,
    pub trello_token: String,
    pub trello_api_url: String,
    pub hipchat_token: String,
    pub hipchat_room: String,
    pub hipchat_sender: String,
    pub hipchat_api_url: String,
    pub stages: WorkflowStageMap,
    pub http_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|v| !v.is_empty())
                .with_context(|| format!("{} must be set", key))
        };
        let optional = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let key = match optional("LIST_MATCH_BY") {
            Some(v) => v.parse::<ListKey>().context("LIST_MATCH_BY must be 'name' or 'id'")?,
            None => ListKey::default(),
        };

        let stages = WorkflowStageMap {
            key,
            todo: optional("LIST_TODO"),
            in_progress: optional("LIST_PROGRESS"),
            review: optional("LIST_REVIEW"),
            done: optional("LIST_DONE"),
            bug_tracker: optional("LIST_BUGTRACKER"),
        };

        let http_timeout = Duration::from_secs(
            optional("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|| "10".to_string())
                .parse()
                .context("HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
        );
        if http_timeout.is_zero() || http_timeout >= REQUEST_TIMEOUT {
            anyhow::bail!(
                "HTTP_TIMEOUT_SECS must be between 1 and {} seconds",
                REQUEST_TIMEOUT.as_secs() - 1
            );
        }

        Ok(Self {
            port: optional("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            trello_secret: required("TRELLO_SECRET")?,
            callback_url: required("CALLBACK_URL")?,
            trello_board_id: required("TRELLO_BOARD_ID")?,
            trello_key: required("TRELLO_KEY")?,
            trello_token: required("TRELLO_TOKEN")?,
            trello_api_url: optional("TRELLO_API_URL")
                .unwrap_or_else(|| trello::DEFAULT_BASE_URL.to_string()),
            hipchat_token: required("HIPCHAT_TOKEN")?,
            hipchat_room: required("HIPCHAT_ROOM")?,
            hipchat_sender: optional("HIPCHAT_SENDER").unwrap_or_else(|| "Trello".to_string()),
            hipchat_api_url: optional("HIPCHAT_API_URL")
                .unwrap_or_else(|| hipchat::DEFAULT_BASE_URL.to_string()),
            stages,
            http_timeout,
        })
    }

    pub fn registration_request(&self) -> RegistrationRequest {
        RegistrationRequest {
            board_id: self.trello_board_id.clone(),
            callback_url: self.callback_url.clone(),
            api_key: self.trello_key.clone(),
            api_token: self.trello_token.clone(),
        }
    }

    pub fn chat_target(&self) -> ChatTarget {
        ChatTarget {
            room_id: self.hipchat_room.clone(),
            sender_name: self.hipchat_sender.clone(),
        }
    }

    /// Debug line listing the configured lists in workflow order
    pub fn log_stages(&self) {
        tracing::debug!(
            key = ?self.stages.key,
            "Configured lists: {}",
            self.stages.describe()
        );
        for stage in Stage::PRIORITY {
            if self.stages.list_for(stage).is_none() {
                tracing::debug!(stage = %stage, "No list configured for stage");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("TRELLO_SECRET", "secret"),
            ("CALLBACK_URL", "https://relay.example.org/board_modified"),
            ("TRELLO_BOARD_ID", "board42"),
            ("TRELLO_KEY", "key"),
            ("TRELLO_TOKEN", "token"),
            ("HIPCHAT_TOKEN", "hc-token"),
            ("HIPCHAT_ROOM", "dev"),
        ])
    }

    fn load(vars: &HashMap<&'static str, &'static str>) -> Result<Config> {
        Config::from_lookup(|k| vars.get(k).map(|v| v.to_string()))
    }

    #[test]
    fn test_defaults() {
        let config = load(&base_vars()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.hipchat_sender, "Trello");
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert_eq!(config.trello_api_url, trello::DEFAULT_BASE_URL);
        assert_eq!(config.stages, WorkflowStageMap::default());
    }

    #[test]
    fn test_stage_lists_and_key() {
        let mut vars = base_vars();
        vars.insert("LIST_MATCH_BY", "id");
        vars.insert("LIST_DONE", "d4");
        vars.insert("LIST_BUGTRACKER", "b5");
        vars.insert("LIST_TODO", "");
        let config = load(&vars).unwrap();
        assert_eq!(config.stages.key, ListKey::Id);
        assert_eq!(config.stages.list_for(Stage::Done), Some("d4"));
        assert_eq!(config.stages.list_for(Stage::BugTracker), Some("b5"));
        assert_eq!(config.stages.list_for(Stage::Todo), None);
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        let mut vars = base_vars();
        vars.remove("TRELLO_SECRET");
        let err = load(&vars).unwrap_err();
        assert!(err.to_string().contains("TRELLO_SECRET"));
    }

    #[test]
    fn test_invalid_port() {
        let mut vars = base_vars();
        vars.insert("PORT", "eighty");
        assert!(load(&vars).is_err());
    }

    #[test]
    fn test_http_timeout_must_fit_inside_request_timeout() {
        let mut vars = base_vars();
        vars.insert("HTTP_TIMEOUT_SECS", "30");
        assert!(load(&vars).is_err());
        vars.insert("HTTP_TIMEOUT_SECS", "0");
        assert!(load(&vars).is_err());
        vars.insert("HTTP_TIMEOUT_SECS", "29");
        assert_eq!(load(&vars).unwrap().http_timeout, Duration::from_secs(29));
    }

    #[test]
    fn test_registration_request_from_config() {
        let config = load(&base_vars()).unwrap();
        let request = config.registration_request();
        assert_eq!(request.board_id, "board42");
        assert_eq!(request.callback_url, "https://relay.example.org/board_modified");
        assert_eq!(request.api_key, "key");
        assert_eq!(request.api_token, "token");
    }
}

//! Webhooks domain - inbound Trello deliveries
//!
//! Responsibilities:
//! - Signature verification of `POST /board_modified` bodies
//! - Parsing the (untrusted) action payload
//! - Mapping card moves onto configured workflow stages

pub mod interpret;
pub mod models;
pub mod stages;
pub mod verify;

pub use interpret::interpret;
pub use models::{parse_action, NotificationFact, RawActionEvent};
pub use stages::{ListKey, Stage, WorkflowStageMap};
pub use verify::{verify, AuthError, SIGNATURE_HEADER};

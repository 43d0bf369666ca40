//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{HipChatAdapter, ServerDeps, TrelloAdapter};
pub use test_dependencies::{MockBoardService, MockChatService, SentMessage, TestDependencies};
pub use traits::*;

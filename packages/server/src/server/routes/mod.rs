// HTTP routes
pub mod board_modified;
pub mod health;

pub use board_modified::*;
pub use health::*;

// HTTP middleware
pub mod registration;

pub use registration::*;

// Trello -> HipChat relay - core library
//
// Receives Trello webhook deliveries, verifies their signature, turns card
// moves into one-line activity messages and posts them to a HipChat room.
// Also registers its own callback URL at Trello after the first request.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;

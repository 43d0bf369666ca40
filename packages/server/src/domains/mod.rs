pub mod notifications;
pub mod registration;
pub mod webhooks;

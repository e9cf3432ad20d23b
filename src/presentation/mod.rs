// Presentation layer - HTTP surface of the browsing site
pub mod app_state;
pub mod handlers;
pub mod router;

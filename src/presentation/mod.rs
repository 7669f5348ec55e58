// Presentation layer - HTTP routes, page and session socket
pub mod app_state;
pub mod handlers;
pub mod messages;
pub mod page;
pub mod router;
pub mod session_socket;

pub mod entity_browser;
pub mod latest_request;
pub mod login;
pub mod session;
pub mod session_context;
pub mod sync_state;

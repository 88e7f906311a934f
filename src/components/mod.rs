pub mod design_system;
pub mod entity_detail;
pub mod entity_list;
pub mod home;
pub mod login;
pub mod nav_bar;
pub mod route_guard;
pub mod session_watcher;
pub mod sync;

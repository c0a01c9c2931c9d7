pub mod home;
pub mod route_handler;

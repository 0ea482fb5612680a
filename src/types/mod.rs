pub mod app_config;
pub mod app_state;
pub mod session;

pub mod app_setup;
pub mod window_config;

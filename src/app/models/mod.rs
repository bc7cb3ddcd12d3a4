pub mod api_error;
pub mod app_error;
pub mod session;

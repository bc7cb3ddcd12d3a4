use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum InfoApiError {
    InfoNotFound,
}

impl InfoApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InfoNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Info not found.".to_string(),
            },
        }
    }
}

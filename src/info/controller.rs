use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{app::models::api_error::ApiError, AppState};

use super::{
    dtos::get_info_dto::GetInfoDto, enums::info_key::InfoKey, errors::InfoApiError,
    models::info_entry::InfoEntry, service,
};

pub async fn get_overlay(State(state): State<AppState>) -> Json<Option<InfoEntry>> {
    Json(service::get_overlay(&state).await)
}

pub async fn get_info_by_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(dto): Query<GetInfoDto>,
) -> Result<Json<InfoEntry>, ApiError> {
    let key = parse_request(&key, &dto)?;

    Ok(Json(service::get_info(key, dto.platform(), &state).await))
}

pub async fn open_info_by_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(dto): Query<GetInfoDto>,
) -> Result<Json<InfoEntry>, ApiError> {
    let key = parse_request(&key, &dto)?;

    Ok(Json(service::open_info(key, dto.platform(), &state).await))
}

pub async fn dismiss_overlay(State(state): State<AppState>) -> StatusCode {
    service::dismiss_overlay(&state).await;

    StatusCode::NO_CONTENT
}

fn parse_request(key: &str, dto: &GetInfoDto) -> Result<InfoKey, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    match InfoKey::from_value(key) {
        Some(key) => Ok(key),
        None => Err(InfoApiError::InfoNotFound.value()),
    }
}

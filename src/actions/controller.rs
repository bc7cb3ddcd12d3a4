use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::{prompts::dtos::lang_query_dto::LangQueryDto, AppState};

use super::service;

pub async fn copy_prompt(State(state): State<AppState>) -> StatusCode {
    service::copy_prompt(&state).await;

    StatusCode::NO_CONTENT
}

pub async fn save_prompt(State(state): State<AppState>) -> StatusCode {
    service::save_prompt(&state).await;

    StatusCode::NO_CONTENT
}

pub async fn download_prompt(
    State(state): State<AppState>,
    Query(dto): Query<LangQueryDto>,
) -> impl IntoResponse {
    let output = service::download_prompt(dto.lang, &state).await;

    (
        [
            (header::CONTENT_TYPE, mime::TEXT_PLAIN_UTF_8.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", output.filename),
            ),
        ],
        output.prompt,
    )
}

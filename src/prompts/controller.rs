use axum::{
    extract::{Query, State},
    Json,
};

use crate::{app::structs::json_from_request::JsonFromRequest, AppState};

use super::{
    builder,
    dtos::{edit_lang_dto::EditLangDto, form_update_dto::FormUpdate, lang_query_dto::LangQueryDto},
    models::{form_options::FormOptions, prompt_form::PromptForm, prompt_output::PromptOutput},
    service,
};

pub async fn get_form(State(state): State<AppState>) -> Json<PromptForm> {
    Json(service::get_form(&state).await)
}

pub async fn replace_form(
    State(state): State<AppState>,
    JsonFromRequest(form): JsonFromRequest<PromptForm>,
) -> Json<PromptOutput> {
    Json(service::replace_form(form, &state).await)
}

pub async fn edit_form(
    State(state): State<AppState>,
    JsonFromRequest(update): JsonFromRequest<FormUpdate>,
) -> Json<PromptOutput> {
    Json(service::edit_form(update, &state).await)
}

pub async fn edit_form_batch(
    State(state): State<AppState>,
    JsonFromRequest(updates): JsonFromRequest<Vec<FormUpdate>>,
) -> Json<PromptOutput> {
    Json(service::edit_form_batch(updates, &state).await)
}

pub async fn reset_form(State(state): State<AppState>) -> Json<PromptOutput> {
    Json(service::reset_form(&state).await)
}

pub async fn get_form_options() -> Json<FormOptions> {
    Json(FormOptions::new())
}

pub async fn get_prompt(
    State(state): State<AppState>,
    Query(dto): Query<LangQueryDto>,
) -> Json<PromptOutput> {
    Json(service::get_prompt(dto.lang, &state).await)
}

pub async fn build_prompt(
    Query(dto): Query<LangQueryDto>,
    JsonFromRequest(form): JsonFromRequest<PromptForm>,
) -> Json<PromptOutput> {
    Json(builder::render(&form, dto.lang.unwrap_or_default()))
}

pub async fn edit_lang(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<EditLangDto>,
) -> Json<PromptOutput> {
    Json(service::edit_lang(dto.lang, &state).await)
}

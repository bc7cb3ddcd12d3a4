use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{InvalidHeaderValue, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{actions, app, info, prompts, AppState};

const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(app::controller::get_root))
        // form
        .route("/form", get(prompts::controller::get_form))
        .route("/form", put(prompts::controller::replace_form))
        .route("/form", patch(prompts::controller::edit_form))
        .route("/form/batch", patch(prompts::controller::edit_form_batch))
        .route("/form/reset", post(prompts::controller::reset_form))
        .route("/form/options", get(prompts::controller::get_form_options))
        // prompt
        .route("/prompt", get(prompts::controller::get_prompt))
        .route("/prompt/build", post(prompts::controller::build_prompt))
        .route("/prompt/lang", put(prompts::controller::edit_lang))
        .route("/prompt/copy", post(actions::controller::copy_prompt))
        .route("/prompt/download", get(actions::controller::download_prompt))
        .route("/prompt/save", post(actions::controller::save_prompt))
        // info
        .route("/info", get(info::controller::get_overlay))
        .route("/info", delete(info::controller::dismiss_overlay))
        .route("/info/:key", get(info::controller::get_info_by_key))
        .route("/info/:key", post(info::controller::open_info_by_key))
        // layers
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Only the page this server hands out may call the API from a browser.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(origin)?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_headers([CONTENT_TYPE])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ]))
}

//! HTML pages: index, stored analysis and prompt generator.

use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, SignedCookieJar};
use rfpa_core::prompt::build_prompt;
use rfpa_core::validation::{FormData, FormErrors, validate_form_data};
use tracing::error;

use crate::error::WebError;
use crate::handlers::upload::FLASH_COOKIE;
use crate::render;
use crate::state::AppState;

/// GET /
pub async fn index(State(state): State<AppState>, jar: SignedCookieJar) -> (SignedCookieJar, Html<String>) {
    let flash = jar.get(FLASH_COOKIE).map(|c| c.value().to_string());
    let jar = if flash.is_some() {
        jar.remove(Cookie::build(FLASH_COOKIE).path("/"))
    } else {
        jar
    };

    let limit = state.config.storage.recent_limit;
    let (recent, total) = state
        .with_store(|store| Ok((store.recent_analyses(limit)?, store.count()?)))
        .unwrap_or_else(|e| {
            error!("Failed to load recent analyses: {}", e);
            (Vec::new(), 0)
        });

    (jar, Html(render::index_page(flash.as_deref(), &recent, total)))
}

/// GET /analyses/{id}
pub async fn show_analysis(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.with_store(|store| store.get_analysis(id)) {
        Ok(Some(stored)) => Html(render::analysis_page(
            Some(stored.id),
            &stored.filename,
            &stored.analysis,
            None,
        ))
        .into_response(),
        Ok(None) => error_response(WebError::NotFound),
        Err(e) => error_response(e),
    }
}

/// GET /generate_prompt, prefilled from the query string (analysis pages
/// link here with `analysisId`).
pub async fn prompt_form(Query(form): Query<FormData>) -> Html<String> {
    Html(render::prompt_page(&form, &FormErrors::new(), None))
}

/// POST /generate_prompt
pub async fn prompt_submit(State(state): State<AppState>, Form(form): Form<FormData>) -> Response {
    let errors = validate_form_data(&form);
    if !errors.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(render::prompt_page(&form, &errors, None)),
        )
            .into_response();
    }

    let analysis = match form.analysis_id() {
        Some(id) => match state.with_store(|store| store.get_analysis(id)) {
            Ok(stored) => stored.map(|s| s.analysis),
            Err(e) => return error_response(e),
        },
        None => None,
    };

    let prompt = build_prompt(&form, analysis.as_ref());
    Html(render::prompt_page(&form, &errors, Some(&prompt))).into_response()
}

/// HTML error page with the error's status.
fn error_response(e: WebError) -> Response {
    let status = e.status();
    if status.is_server_error() {
        error!("Request failed: {}", e);
    }
    (status, Html(render::error_page(status, &e.public_message()))).into_response()
}

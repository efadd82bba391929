//! Upload form submission and the processing shared with the JSON API.

use std::path::Path;

use axum::{
    body::Bytes,
    extract::{
        Multipart, State,
        multipart::MultipartRejection,
    },
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, SignedCookieJar};
use chrono::Local;
use rfpa_core::document::{DocumentKind, extract_text, extract_text_from_file};
use rfpa_core::util::{file_size_mb, sanitize_filename};
use rfpa_core::validation::{validate_file_upload_against, validate_text_content};
use rfpa_core::{AnalysisResult, DocumentInsights};
use tracing::{info, warn};

use crate::error::WebError;
use crate::render;
use crate::state::AppState;

/// Name of the cookie carrying a one-shot message to the index page.
pub const FLASH_COOKIE: &str = "flash";

/// The `file` part of a multipart upload.
#[derive(Debug)]
pub struct Upload {
    pub filename: Option<String>,
    pub data: Bytes,
}

/// A stored analysis of an uploaded document.
#[derive(Debug)]
pub struct ProcessedUpload {
    pub id: i64,
    pub filename: String,
    pub analysis: AnalysisResult,
    pub insights: DocumentInsights,
}

/// Pull the `file` field out of a multipart body; other fields are skipped.
pub async fn read_file_field(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Option<Upload>, WebError> {
    let Ok(mut multipart) = multipart else {
        return Ok(None);
    };

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().map(str::to_string);
        let data = field.bytes().await?;
        return Ok(Some(Upload { filename, data }));
    }
    Ok(None)
}

/// Validate the upload's file name, then save, extract, analyze and store it
/// on the blocking pool.
pub async fn process_upload(state: &AppState, upload: Option<Upload>) -> Result<ProcessedUpload, WebError> {
    let filename = upload.as_ref().and_then(|u| u.filename.as_deref());
    let check = validate_file_upload_against(filename, &state.config.upload.allowed_extensions);
    let Some(upload) = upload.filter(|_| check.is_valid()) else {
        return Err(WebError::Rejected(check.message));
    };

    let state = state.clone();
    tokio::task::spawn_blocking(move || analyze_upload(&state, upload)).await?
}

fn analyze_upload(state: &AppState, upload: Upload) -> Result<ProcessedUpload, WebError> {
    let original = upload.filename.unwrap_or_default();
    let filename = sanitize_filename(&original, Local::now().naive_local());
    let path = state.config.upload.upload_folder.join(&filename);
    std::fs::write(&path, &upload.data)?;
    info!("Saved upload {} ({:.2} MB)", path.display(), file_size_mb(&path)?);

    // The secured name can lose the extension, so dispatch on the original.
    let text = match DocumentKind::from_path(Path::new(&original)) {
        Some(kind) => extract_text(&path, kind),
        None => extract_text_from_file(&path),
    };

    let check = validate_text_content(&text);
    if !check.is_valid() {
        warn!("Rejecting {}: {}", filename, check.message);
        return Err(WebError::Rejected(check.message));
    }

    let analysis = state.analyzer.analyze(&text);
    let insights = state.analyzer.insights(&text);
    let id = state.with_store(|store| {
        store.save_analysis(&filename, &analysis.title, &analysis.organization, &analysis)
    })?;

    Ok(ProcessedUpload {
        id,
        filename,
        analysis,
        insights,
    })
}

/// Redirect to the index page with a flash message.
pub fn redirect_with_flash(jar: SignedCookieJar, message: impl Into<String>) -> Response {
    let cookie = Cookie::build((FLASH_COOKIE, message.into()))
        .path("/")
        .http_only(true);
    (jar.add(cookie), Redirect::to("/")).into_response()
}

/// POST /upload
pub async fn upload(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let result = match read_file_field(multipart).await {
        Ok(upload) => process_upload(&state, upload).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(processed) => Html(render::analysis_page(
            Some(processed.id),
            &processed.filename,
            &processed.analysis,
            Some(&processed.insights),
        ))
        .into_response(),
        Err(WebError::Rejected(message)) => redirect_with_flash(jar, message),
        Err(e) => {
            let message = e.public_message();
            warn!("Upload failed: {}", e);
            redirect_with_flash(jar, format!("Upload failed: {}", message))
        }
    }
}

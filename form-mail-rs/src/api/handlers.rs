//! API request handlers

use axum::{
    extract::{Path, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info};

use crate::editor::{EditorSession, Variant};
use crate::error::FormMailError;
use crate::render::{Element, EmailRenderer};
use crate::store::SessionStore;
use crate::template::{gallery, presets, Preset, TemplateConfig};

/// Shared application state
pub struct AppState {
    pub session: RwLock<EditorSession>,
    /// Where mutations are persisted; `None` keeps the session in memory
    pub store: Option<SessionStore>,
    /// Held from encoding to the end of the file write so saves land in
    /// mutation order
    write_lock: Mutex<()>,
}

impl AppState {
    pub fn new(session: EditorSession, store: Option<SessionStore>) -> Self {
        Self {
            session: RwLock::new(session),
            store,
            write_lock: Mutex::new(()),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: &str) -> Self {
        Self {
            error: msg.to_string(),
        }
    }
}

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

fn error_response(err: FormMailError) -> (StatusCode, Json<ApiError>) {
    let status = match &err {
        FormMailError::UnknownVariant(_)
        | FormMailError::UnknownPreset(_)
        | FormMailError::UnknownTemplate(_)
        | FormMailError::UnknownMetaField(_)
        | FormMailError::FieldNotFound(_) => StatusCode::NOT_FOUND,
        FormMailError::Json(_) => StatusCode::BAD_REQUEST,
        FormMailError::Io(_) | FormMailError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiError::new(&err.to_string())))
}

fn parse_variant(raw: &str) -> ApiResult<Variant> {
    raw.parse().map_err(error_response)
}

/// Apply a session mutation, persist it and return the handler's value
///
/// The session lock is released before the file is written. A failed write
/// is reported as a 500; the in-memory change is kept.
async fn mutate<T, F>(state: &AppState, edit: F) -> ApiResult<Json<T>>
where
    F: FnOnce(&mut EditorSession) -> crate::error::Result<T>,
{
    let mut session = state.session.write().await;
    let value = edit(&mut session).map_err(error_response)?;

    let Some(store) = &state.store else {
        return Ok(Json(value));
    };

    let document = SessionStore::encode(&session).map_err(error_response)?;
    let _write_guard = state.write_lock.lock().await;
    drop(session);

    if let Err(e) = store.write(&document).await {
        error!("Failed to save session to {}: {}", store.path().display(), e);
        return Err(error_response(e));
    }
    Ok(Json(value))
}

/// Request body for adding a field
#[derive(Debug, Deserialize)]
pub struct AddFieldRequest {
    pub label: String,
    #[serde(default)]
    pub shortcode: String,
}

/// Request body for reordering fields
#[derive(Debug, Deserialize)]
pub struct MoveFieldRequest {
    pub from: String,
    pub to: String,
}

/// Gallery entry as listed by the API
#[derive(Debug, Serialize)]
pub struct TemplateSummary {
    pub index: usize,
    pub name: String,
    pub thumbnail: String,
}

/// GET /api/health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api/presets
pub async fn list_presets() -> Json<Vec<Preset>> {
    Json(presets())
}

/// GET /api/templates
pub async fn list_templates() -> Json<Vec<TemplateSummary>> {
    let templates = gallery()
        .into_iter()
        .enumerate()
        .map(|(index, t)| TemplateSummary {
            index,
            name: t.name,
            thumbnail: t.thumbnail,
        })
        .collect();
    Json(templates)
}

/// GET /api/variants
pub async fn list_variants() -> Json<Vec<&'static str>> {
    Json(Variant::ALL.iter().map(Variant::as_str).collect())
}

/// POST /api/reset - restore both variants
pub async fn reset_all(State(state): State<Arc<AppState>>) -> ApiResult<Json<EditorSession>> {
    mutate(&state, |s| {
        s.reset_all();
        Ok(s.clone())
    })
    .await
}

/// GET /api/variants/:variant
pub async fn get_variant(
    State(state): State<Arc<AppState>>,
    Path(variant): Path<String>,
) -> ApiResult<Json<TemplateConfig>> {
    let variant = parse_variant(&variant)?;
    let session = state.session.read().await;
    Ok(Json(session.get(variant).clone()))
}

/// PUT /api/variants/:variant - body is merged onto the variant default
pub async fn put_variant(
    State(state): State<Arc<AppState>>,
    Path(variant): Path<String>,
    body: String,
) -> ApiResult<Json<TemplateConfig>> {
    let variant = parse_variant(&variant)?;
    mutate(&state, |s| s.import_json(variant, &body).cloned()).await
}

/// GET /api/variants/:variant/preview
pub async fn preview(
    State(state): State<Arc<AppState>>,
    Path(variant): Path<String>,
) -> ApiResult<Json<Element>> {
    let variant = parse_variant(&variant)?;
    let session = state.session.read().await;
    Ok(Json(EmailRenderer::render_preview(session.get(variant))))
}

/// GET /api/variants/:variant/export
pub async fn export(
    State(state): State<Arc<AppState>>,
    Path(variant): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let variant = parse_variant(&variant)?;
    let html = {
        let session = state.session.read().await;
        EmailRenderer::render_export_markup(session.get(variant))
    };
    info!("Exported {} ({} bytes)", variant, html.len());
    Ok(([(CONTENT_TYPE, "text/html; charset=utf-8")], html))
}

/// POST /api/variants/:variant/fields
pub async fn add_field(
    State(state): State<Arc<AppState>>,
    Path(variant): Path<String>,
    Json(request): Json<AddFieldRequest>,
) -> ApiResult<Json<TemplateConfig>> {
    let variant = parse_variant(&variant)?;
    mutate(&state, |s| {
        Ok(s.add_field(variant, &request.label, &request.shortcode).clone())
    })
    .await
}

/// POST /api/variants/:variant/fields/meta/:name
pub async fn add_meta_field(
    State(state): State<Arc<AppState>>,
    Path((variant, name)): Path<(String, String)>,
) -> ApiResult<Json<TemplateConfig>> {
    let variant = parse_variant(&variant)?;
    mutate(&state, |s| s.add_meta_field(variant, &name).cloned()).await
}

/// DELETE /api/variants/:variant/fields/:id
pub async fn delete_field(
    State(state): State<Arc<AppState>>,
    Path((variant, id)): Path<(String, String)>,
) -> ApiResult<Json<TemplateConfig>> {
    let variant = parse_variant(&variant)?;
    mutate(&state, |s| s.remove_field(variant, &id).cloned()).await
}

/// POST /api/variants/:variant/fields/move
pub async fn move_field(
    State(state): State<Arc<AppState>>,
    Path(variant): Path<String>,
    Json(request): Json<MoveFieldRequest>,
) -> ApiResult<Json<TemplateConfig>> {
    let variant = parse_variant(&variant)?;
    mutate(&state, |s| {
        s.move_field(variant, &request.from, &request.to).cloned()
    })
    .await
}

/// POST /api/variants/:variant/preset/:name
pub async fn apply_preset(
    State(state): State<Arc<AppState>>,
    Path((variant, name)): Path<(String, String)>,
) -> ApiResult<Json<TemplateConfig>> {
    let variant = parse_variant(&variant)?;
    mutate(&state, |s| s.apply_preset(variant, &name).cloned()).await
}

/// POST /api/variants/:variant/template/:index
pub async fn apply_template(
    State(state): State<Arc<AppState>>,
    Path((variant, index)): Path<(String, usize)>,
) -> ApiResult<Json<TemplateConfig>> {
    let variant = parse_variant(&variant)?;
    mutate(&state, |s| s.apply_template(variant, index).cloned()).await
}

/// POST /api/variants/:variant/reset
pub async fn reset(
    State(state): State<Arc<AppState>>,
    Path(variant): Path<String>,
) -> ApiResult<Json<TemplateConfig>> {
    let variant = parse_variant(&variant)?;
    mutate(&state, |s| Ok(s.reset(variant).clone())).await
}

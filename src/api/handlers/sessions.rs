// src/api/handlers/sessions.rs
use actix_web::{web, HttpResponse, Result};
use serde::Serialize;
use uuid::Uuid;
use crate::api::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: Uuid,
}

pub async fn open_session(state: web::Data<AppState>) -> Result<HttpResponse> {
    let session_id = state.sessions.open().await;
    Ok(HttpResponse::Created().json(SessionResponse { session_id }))
}

/// Called when the page is closed. Any outstanding analysis is cancelled.
pub async fn close_session(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    if state.sessions.close(&id).await {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Session not found"
        })))
    }
}

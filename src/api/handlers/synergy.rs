// src/api/handlers/synergy.rs
use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;
use crate::api::AppState;
use crate::session::SessionError;

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSynergyRequest {
    pub job_description: String,
}

fn session_error(e: SessionError) -> HttpResponse {
    let body = json!({ "error": e.to_string() });
    match e {
        SessionError::NotFound => HttpResponse::NotFound().json(body),
        SessionError::InFlight => HttpResponse::Conflict().json(body),
        SessionError::Closed => HttpResponse::Gone().json(body),
    }
}

pub async fn get_synergy(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match state.sessions.snapshot(&path.into_inner()).await {
        Some(snapshot) => Ok(HttpResponse::Ok().json(snapshot)),
        None => Ok(session_error(SessionError::NotFound)),
    }
}

/// Runs one synergy check and answers once its outcome has been applied.
pub async fn submit_synergy(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<SubmitSynergyRequest>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let req_body = req.into_inner();

    match state
        .sessions
        .submit(&id, &req_body.job_description, &*state.analyzer)
        .await
    {
        Ok(snapshot) => Ok(HttpResponse::Ok().json(snapshot)),
        Err(e) => {
            log::warn!("Synergy submission for session {} rejected: {}", id, e);
            Ok(session_error(e))
        }
    }
}

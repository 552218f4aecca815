// src/api/handlers/page.rs
use actix_files::NamedFile;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use chrono::Datelike;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use crate::api::AppState;
use crate::view::{PageContext, PORTFOLIO};

#[derive(RustEmbed)]
#[folder = "static/"]
struct StaticAssets;

pub async fn index(state: web::Data<AppState>) -> HttpResponse {
    let rendered = state.page.render(&PageContext {
        portfolio: &PORTFOLIO,
        motion: &state.motion,
        year: chrono::Utc::now().year(),
    });
    match rendered {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            log::error!("Failed to render page: {:#}", e);
            HttpResponse::InternalServerError().body("500 Internal Server Error")
        }
    }
}

pub async fn static_asset(path: web::Path<String>) -> impl Responder {
    let path = path.into_inner();
    match StaticAssets::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            HttpResponse::Ok().content_type(mime.as_ref()).body(Cow::into_owned(content.data))
        }
        None => HttpResponse::NotFound().body("404 Not Found"),
    }
}

/// Serves the resume document as an attachment.
pub async fn download_resume(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let resume_path = &state.config.server.resume_path;
    match NamedFile::open_async(resume_path).await {
        Ok(file) => file
            .set_content_disposition(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(
                    PORTFOLIO.resume.file_name.to_string(),
                )],
            })
            .into_response(&req),
        Err(e) => {
            log::warn!("Resume not available at {}: {}", resume_path.display(), e);
            HttpResponse::NotFound().body("404 Not Found")
        }
    }
}

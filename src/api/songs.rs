//! Add-song and export routes

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;
use tracing::error;

use super::{FrameResponse, SharedController};
use crate::error::KaraokeError;
use crate::models::SongForm;

/// Add-song form submission
#[post("/songs")]
pub async fn add_song(controller: SharedController, body: web::Json<SongForm>) -> impl Responder {
    let mut controller = controller.lock();
    match controller.add_song(body.into_inner()) {
        Ok(frame) => HttpResponse::Ok().json(FrameResponse::from(&frame)),
        Err(KaraokeError::Validation(message)) => {
            let frame = controller.render();
            HttpResponse::BadRequest().json(json!({
                "error": message,
                "frame": FrameResponse::from(&frame),
            }))
        }
        Err(e) => {
            error!("Failed to add song: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": format!("Failed to save song: {}", e)
            }))
        }
    }
}

/// Download the merged collection
#[get("/export")]
pub async fn export(controller: SharedController) -> impl Responder {
    let file = match controller.lock().export() {
        Ok(file) => file,
        Err(e) => {
            error!("Failed to export collection: {}", e);
            return HttpResponse::InternalServerError().json(json!({
                "error": format!("Failed to export collection: {}", e)
            }));
        }
    };

    HttpResponse::Ok()
        .content_type(file.content_type)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(file.file_name.to_string())],
        })
        .body(file.body)
}

/// Configure song routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(add_song).service(export);
}

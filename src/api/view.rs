//! Page, navigation, search and keyboard routes

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{FrameResponse, SharedController};
use crate::render::{collect_bindings, document, BoundHandler};

const STYLESHEET: &str = include_str!("../../assets/style.css");

#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    #[serde(default)]
    pub fragment: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct KeyBody {
    pub key: String,
}

/// Search results subtree
#[derive(Debug, Serialize)]
struct SearchResponse {
    html: String,
    bindings: Vec<BoundHandler>,
}

/// Full page for the current state
#[get("/")]
pub async fn index(controller: SharedController) -> impl Responder {
    let page = document(&controller.lock().render());
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page)
}

/// Fragment change
#[get("/view")]
pub async fn navigate(
    controller: SharedController,
    query: web::Query<ViewQuery>,
) -> impl Responder {
    let frame = controller.lock().navigate(&query.fragment);
    HttpResponse::Ok().json(FrameResponse::from(&frame))
}

/// Keystroke in the search field
#[get("/search")]
pub async fn search(
    controller: SharedController,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let node = controller.lock().search(&query.q);
    HttpResponse::Ok().json(SearchResponse {
        html: node.to_html(),
        bindings: collect_bindings(&node),
    })
}

/// Keyboard shortcut
#[post("/keys")]
pub async fn key(controller: SharedController, body: web::Json<KeyBody>) -> impl Responder {
    match controller.lock().handle_key(&body.key) {
        Some(frame) => HttpResponse::Ok().json(FrameResponse::from(&frame)),
        None => {
            debug!("Ignoring key {:?}", body.key);
            HttpResponse::NoContent().finish()
        }
    }
}

#[get("/static/style.css")]
pub async fn stylesheet() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(STYLESHEET)
}

/// Configure page routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(navigate)
        .service(search)
        .service(key)
        .service(stylesheet);
}

//! Display preference routes

use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;

use super::{FrameResponse, SharedController};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontDirection {
    Up,
    Down,
}

/// Either an explicit delta or a step direction
#[derive(Debug, Deserialize)]
pub struct FontBody {
    pub delta: Option<f64>,
    pub direction: Option<FontDirection>,
}

#[post("/font")]
pub async fn change_font(
    controller: SharedController,
    body: web::Json<FontBody>,
) -> impl Responder {
    let mut controller = controller.lock();
    let frame = match (body.delta, body.direction) {
        (Some(delta), _) if delta.is_finite() => controller.change_font(delta),
        (_, Some(FontDirection::Up)) => controller.font_up(),
        (_, Some(FontDirection::Down)) => controller.font_down(),
        _ => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Provide a finite delta or a direction"
            }));
        }
    };
    HttpResponse::Ok().json(FrameResponse::from(&frame))
}

#[post("/contrast")]
pub async fn toggle_contrast(controller: SharedController) -> impl Responder {
    let frame = controller.lock().toggle_contrast();
    HttpResponse::Ok().json(FrameResponse::from(&frame))
}

/// Configure preference routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(change_font).service(toggle_contrast);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::configure;
    use crate::core::{Controller, EngineOptions};
    use crate::db::{LocalPersistence, MemoryStore};
    use crate::models::{DEFAULT_FONT_SCALE, MAX_FONT_SCALE};
    use crate::stores::SongStore;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use parking_lot::Mutex;
    use serde_json::{json, Value};

    fn controller() -> web::Data<Mutex<Controller>> {
        web::Data::new(Mutex::new(Controller::new(
            vec![],
            LocalPersistence::new(MemoryStore::new()),
            SongStore::default(),
            EngineOptions::default(),
        )))
    }

    #[actix_web::test]
    async fn test_change_font() {
        let data = controller();
        let app = test::init_service(App::new().app_data(data.clone()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/prefs/font")
            .set_json(json!({"direction": "up"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["presentation"]["fontScale"], 1.23);

        let req = test::TestRequest::post()
            .uri("/prefs/font")
            .set_json(json!({"direction": "down"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["presentation"]["fontScale"], DEFAULT_FONT_SCALE);

        let req = test::TestRequest::post()
            .uri("/prefs/font")
            .set_json(json!({"delta": 5.0}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["presentation"]["fontScale"], MAX_FONT_SCALE);
        assert_eq!(data.lock().state().font_scale, MAX_FONT_SCALE);
    }

    #[actix_web::test]
    async fn test_change_font_requires_delta_or_direction() {
        let data = controller();
        let app = test::init_service(App::new().app_data(data.clone()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/prefs/font")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(data.lock().state().font_scale, DEFAULT_FONT_SCALE);
    }
}

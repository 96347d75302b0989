use actix_web::{HttpResponse, Responder};
use serde_json::json;

pub async fn process() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Rebranding Case Study API" }))
}

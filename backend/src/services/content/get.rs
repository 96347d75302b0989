//! # Collection Retrieval Service
//!
//! Backend logic for every `GET /api/{collection}` endpoint. The handler
//! looks the collection up in the shared `ContentStore` and returns it as
//! JSON. The content is fixed for the lifetime of the process, so there is no
//! failure path here: an empty collection is served as `[]`.

use crate::store::ContentStore;
use actix_web::{web, HttpResponse, Responder};
use common::content::Collection;
use log::debug;

/// Actix web handler for `GET /api/{collection}`.
///
/// # Returns
/// - `200 OK` with the collection's document as a JSON payload.
pub async fn process(collection: Collection, store: web::Data<ContentStore>) -> impl Responder {
    debug!("serving {}", collection);
    HttpResponse::Ok().json(store.document(collection))
}

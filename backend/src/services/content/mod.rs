//! # Content Service Module
//!
//! Read-only endpoints publishing the case study under `/api`. One `GET`
//! route is registered per `common::content::Collection`, so the table of
//! paths lives in a single place shared with the browser app.
//!
//! ## Sub-modules:
//! - `get`: Serves one collection from the shared `ContentStore`.
//! - `root`: Identifies the API.
//! - `unmatched`: Rejects every other request under `/api`.

mod get;
mod root;
mod unmatched;

use crate::store::ContentStore;
use actix_web::web::{self, get, scope, Data};
use actix_web::Scope;
use common::content::{Collection, API_PREFIX};

/// Configures and returns the Actix `Scope` for all content routes.
///
/// # Registered Routes:
///
/// *   **`GET /api`** and **`GET /api/`**: `root::process`, a short JSON greeting.
/// *   **`GET /{collection}`** for each `Collection`: `get::process`, the
///     collection's document exactly as stored, in stored order.
///
/// Other methods on those paths get `405`, unknown paths `404`.
pub fn configure_routes() -> Scope {
    let base = scope(API_PREFIX)
        .route("", get().to(root::process))
        .route("/", get().to(root::process))
        .default_service(web::to(unmatched::process));
    Collection::ALL.into_iter().fold(
        base,
        |scope, collection| {
            scope.route(
                &format!("/{}", collection.path()),
                get().to(move |store: Data<ContentStore>| get::process(collection, store)),
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App, HttpResponse};
    use common::model::{BrandOverview, ImpactMetric, ResearchInsight, TypographyEntry};
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    macro_rules! content_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(ContentStore::embedded().unwrap()))
                    .service(configure_routes()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn every_collection_is_served() {
        let app = content_app!();
        for collection in Collection::ALL {
            let req = test::TestRequest::get()
                .uri(&collection.endpoint())
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{collection}");
            let content_type = resp
                .headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            assert!(content_type.starts_with("application/json"), "{collection}");
        }
    }

    #[actix_web::test]
    async fn brand_overview_is_a_single_document() {
        let app = content_app!();
        let req = test::TestRequest::get()
            .uri("/api/brand-overview")
            .to_request();
        let overview: BrandOverview = test::call_and_read_body_json(&app, req).await;
        assert_eq!(overview.brand_name, "Vintage Brew");
        assert_eq!(overview.year, "2024");
        assert_eq!(overview.old_tagline, "Your Neighborhood Coffee Since 1983");
        assert_eq!(overview.new_tagline, "Crafted with Heritage, Brewed for Today");
    }

    #[actix_web::test]
    async fn impact_metrics_keep_their_order() {
        let app = content_app!();
        let req = test::TestRequest::get()
            .uri("/api/impact-metrics")
            .to_request();
        let metrics: Vec<ImpactMetric> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(metrics.len(), 6);
        assert_eq!(metrics[1].metric_name, "Under-35 Demographics");
        assert_eq!(metrics[1].before_value, "18%");
        assert_eq!(metrics[1].after_value, "41%");
        assert_eq!(metrics[1].improvement, "+128%");
    }

    #[actix_web::test]
    async fn research_categories_are_published() {
        let app = content_app!();
        let req = test::TestRequest::get()
            .uri("/api/research-insights")
            .to_request();
        let insights: Vec<ResearchInsight> = test::call_and_read_body_json(&app, req).await;
        let categories: Vec<&str> = insights.iter().map(|i| i.category.as_str()).collect();
        assert_eq!(
            categories,
            vec![
                "Demographics",
                "Brand Equity",
                "Perception",
                "Consumer Behavior",
                "Digital",
                "Values"
            ]
        );
    }

    #[actix_web::test]
    async fn typography_uses_the_type_key() {
        let app = content_app!();
        let req = test::TestRequest::get().uri("/api/typography").to_request();
        let raw: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(raw[0]["type"], "heading");

        let req = test::TestRequest::get().uri("/api/typography").to_request();
        let entries: Vec<TypographyEntry> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            entries[0].weights,
            vec!["Regular (400)", "SemiBold (600)", "Bold (700)"]
        );
    }

    #[actix_web::test]
    async fn root_identifies_the_api_with_or_without_slash() {
        let app = content_app!();
        for uri in ["/api/", "/api"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "Rebranding Case Study API", "{uri}");
        }
    }

    #[actix_web::test]
    async fn root_rejects_writes() {
        let app = content_app!();
        let req = test::TestRequest::post().uri("/api").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[actix_web::test]
    async fn content_is_read_only() {
        let app = content_app!();
        let req = test::TestRequest::post()
            .uri("/api/testimonials")
            .set_json(serde_json::json!({"name": "Mallory"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[actix_web::test]
    async fn unknown_collections_are_not_found() {
        let app = content_app!();
        let req = test::TestRequest::get().uri("/api/press-kit").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn api_misses_never_reach_the_site_fallback() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ContentStore::embedded().unwrap()))
                .service(configure_routes())
                .default_service(web::to(|| async { HttpResponse::Ok().body("site") })),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/press-kit").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri("/api/brand-colors").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

        let req = test::TestRequest::get().uri("/impact").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(&body[..], b"site");
    }
}

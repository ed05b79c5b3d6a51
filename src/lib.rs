use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tokio::sync::Mutex;

pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;
pub mod menu_store;

use menu_store::MenuStore;

/// Shared handler state. Every store operation runs under the one lock, so id
/// assignment and lookup-then-mutate never interleave.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<MenuStore>>,
}

impl AppState {
    pub fn new(store: MenuStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handlers::capabilities))
        .route("/health", get(http::handlers::health))
        .route(
            "/api/menu",
            get(http::handlers::list_items).post(http::handlers::create_item),
        )
        .route(
            "/api/menu/{id}",
            get(http::handlers::get_item)
                .put(http::handlers::update_item)
                .delete(http::handlers::delete_item),
        )
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    const ICED_TEA: &str = r#"{"name":"Iced Tea","description":"Cold brewed tea over ice","price":3.50,"category":"beverage","ingredients":["tea","ice"]}"#;
    const INVALID_ITEM: &str = r#"{"name":"ab","description":"short","price":-1,"category":"snack","ingredients":[]}"#;

    fn app() -> Router {
        build_app(AppState::new(MenuStore::seeded()))
    }

    fn request(method: &str, uri: &str, body: Option<&str>) -> Request<Body> {
        let builder = Request::builder().uri(uri).method(method);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        };
        request.expect("request build")
    }

    async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone()
            .oneshot(request)
            .await
            .expect("request execution")
    }

    async fn read_json(response: Response) -> Value {
        let body = response
            .into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes();
        serde_json::from_slice(&body).expect("valid json response")
    }

    #[tokio::test]
    async fn root_lists_capabilities() {
        let response = send(&app(), request("GET", "/", None)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body_json = read_json(response).await;
        assert_eq!(body_json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(body_json["endpoints"].as_array().map(Vec::len), Some(5));
        assert_eq!(body_json["endpoints"][0]["path"], "/api/menu");
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = send(&app(), request("GET", "/health", None)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = response
            .into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes();
        assert_eq!(body, "{\"status\":\"ok\"}");
    }

    #[tokio::test]
    async fn list_returns_seed_items_in_order() {
        let response = send(&app(), request("GET", "/api/menu", None)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body_json = read_json(response).await;
        let ids: Vec<u64> = body_json
            .as_array()
            .expect("array body")
            .iter()
            .filter_map(|item| item["id"].as_u64())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn get_returns_single_item() {
        let response = send(&app(), request("GET", "/api/menu/3", None)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body_json = read_json(response).await;
        assert_eq!(body_json["id"], 3);
        assert_eq!(body_json["category"], "entree");
    }

    #[tokio::test]
    async fn get_missing_and_non_numeric_ids_are_not_found() {
        let app = app();

        for uri in ["/api/menu/99", "/api/menu/abc", "/api/menu/-1"] {
            let response = send(&app, request("GET", uri, None)).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(
                read_json(response).await,
                json!({"message": "Menu item not found"})
            );
        }
    }

    #[tokio::test]
    async fn post_creates_item_with_next_id() {
        let app = app();

        let response = send(&app, request("POST", "/api/menu", Some(ICED_TEA))).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body_json = read_json(response).await;
        assert_eq!(body_json["id"], 7);
        assert_eq!(body_json["available"], true);
        assert_eq!(body_json["price"], 3.5);
        assert_eq!(body_json["ingredients"], json!(["tea", "ice"]));

        let response = send(&app, request("GET", "/api/menu/7", None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["name"], "Iced Tea");
    }

    #[tokio::test]
    async fn post_invalid_item_reports_every_violation() {
        let app = app();

        let response = send(&app, request("POST", "/api/menu", Some(INVALID_ITEM))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body_json = read_json(response).await;
        assert_eq!(body_json["message"], "Validation failed");
        let errors = body_json["errors"].as_array().expect("errors array");
        assert!(errors.len() >= 5);
        assert_eq!(errors[0]["field"], "name");
        assert!(errors[0]["message"].is_string());

        let response = send(&app, request("GET", "/api/menu", None)).await;
        assert_eq!(read_json(response).await.as_array().map(Vec::len), Some(6));
    }

    #[tokio::test]
    async fn post_malformed_body_is_a_validation_failure() {
        let response = send(&app(), request("POST", "/api/menu", Some("{not json"))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body_json = read_json(response).await;
        let fields: Vec<&str> = body_json["errors"]
            .as_array()
            .expect("errors array")
            .iter()
            .filter_map(|error| error["field"].as_str())
            .collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"ingredients"));
    }

    #[tokio::test]
    async fn put_replaces_item_in_place() {
        let app = app();

        let response = send(&app, request("PUT", "/api/menu/3", Some(ICED_TEA))).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body_json = read_json(response).await;
        assert_eq!(body_json["id"], 3);
        assert_eq!(body_json["name"], "Iced Tea");

        let response = send(&app, request("GET", "/api/menu", None)).await;
        let list = read_json(response).await;
        assert_eq!(list[2]["id"], 3);
        assert_eq!(list[2]["name"], "Iced Tea");
    }

    #[tokio::test]
    async fn put_missing_item_is_not_found() {
        let response = send(&app(), request("PUT", "/api/menu/42", Some(ICED_TEA))).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn put_invalid_item_leaves_record_unchanged() {
        let app = app();
        let before = read_json(send(&app, request("GET", "/api/menu/2", None)).await).await;

        let response = send(&app, request("PUT", "/api/menu/2", Some(INVALID_ITEM))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let after = read_json(send(&app, request("GET", "/api/menu/2", None)).await).await;
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn delete_returns_removed_item_then_not_found() {
        let app = app();

        let response = send(&app, request("DELETE", "/api/menu/6", None)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body_json = read_json(response).await;
        assert_eq!(body_json["message"], "Menu item deleted");
        assert_eq!(body_json["item"]["id"], 6);

        let response = send(&app, request("GET", "/api/menu/6", None)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&app, request("DELETE", "/api/menu/6", None)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn post_after_deleting_max_id_reuses_it() {
        let app = app();

        send(&app, request("DELETE", "/api/menu/6", None)).await;
        let response = send(&app, request("POST", "/api/menu", Some(ICED_TEA))).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(read_json(response).await["id"], 6);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = send(&app(), request("GET", "/menu", None)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

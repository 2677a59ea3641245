//! Endpoint-level tests for the chat query surface, with scripted
//! classifier and catalog doubles behind the real router.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use reelquery_core::{
    CatalogGateway, ChatQueryService, CoreError, IntentClassifier,
};
use reelquery_model::{
    CatalogItem, CatalogPage, CatalogRequest, Classification, Intent,
    MediaType, QueryKind,
};
use reelquery_server::{routes::create_api_router, AppState};

struct ScriptedClassifier(Result<Classification, &'static str>);

#[async_trait]
impl IntentClassifier for ScriptedClassifier {
    async fn classify(
        &self,
        _text: &str,
    ) -> Result<Classification, CoreError> {
        self.0
            .clone()
            .map_err(|msg| CoreError::ClassifierOutput(msg.to_owned()))
    }
}

struct ScriptedCatalog(Result<CatalogPage, u16>);

#[async_trait]
impl CatalogGateway for ScriptedCatalog {
    async fn fetch(
        &self,
        _request: &CatalogRequest,
    ) -> Result<CatalogPage, CoreError> {
        self.0
            .clone()
            .map_err(|status| CoreError::CatalogStatus { status })
    }
}

fn server(
    classifier: ScriptedClassifier,
    catalog: ScriptedCatalog,
) -> TestServer {
    let chat =
        ChatQueryService::new(Arc::new(classifier), Arc::new(catalog));
    TestServer::new(create_api_router(AppState::new(chat)))
        .expect("test server")
}

fn search_intent() -> Intent {
    Intent {
        media_type: MediaType::Both,
        kind: QueryKind::Search {
            query: "matrix".into(),
        },
        region: None,
        count: 10,
        message: Some("Here's what I found for 'matrix':".into()),
    }
}

fn item(kind: &str, display: &str, rating: f64) -> CatalogItem {
    CatalogItem {
        title: Some(display.to_owned()),
        name: Some(display.to_owned()),
        vote_average: Some(rating),
        media_type: Some(kind.to_owned()),
    }
}

#[tokio::test]
async fn classify_returns_the_rendered_envelope() {
    let page = CatalogPage {
        results: vec![
            item("movie", "The Matrix", 8.2),
            item("person", "Keanu Reeves", 0.0),
            item("tv", "The Matrix Show", 6.9),
        ],
    };
    let server = server(
        ScriptedClassifier(Ok(Classification::Intent(search_intent()))),
        ScriptedCatalog(Ok(page)),
    );

    let response = server
        .post("/api/query/classify")
        .json(&json!({ "query": "find the matrix" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Here's what I found for 'matrix':");
    assert_eq!(body["count"], 2);
    assert_eq!(
        body["results"],
        json!(["The Matrix (★ 8.2)", "The Matrix Show (★ 6.9)"])
    );
}

#[tokio::test]
async fn rejection_is_http_ok_without_results() {
    let server = server(
        ScriptedClassifier(Ok(Classification::Rejection {
            message: Some("Sorry, only movies and TV.".into()),
        })),
        ScriptedCatalog(Ok(CatalogPage::default())),
    );

    let response = server
        .post("/api/query/classify")
        .json(&json!({ "query": "what's the weather" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Sorry, only movies and TV.");
    let obj = body.as_object().unwrap();
    assert!(!obj.contains_key("results"));
    assert!(!obj.contains_key("count"));
}

#[tokio::test]
async fn empty_catalog_page_is_a_zero_result_success() {
    let server = server(
        ScriptedClassifier(Ok(Classification::Intent(search_intent()))),
        ScriptedCatalog(Ok(CatalogPage::default())),
    );

    let response = server
        .post("/api/query/classify")
        .json(&json!({ "query": "find the matrix" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["results"], json!([]));
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn classifier_fault_maps_to_internal_error() {
    let server = server(
        ScriptedClassifier(Err("content is not an intent record")),
        ScriptedCatalog(Ok(CatalogPage::default())),
    );

    let response = server
        .post("/api/query/classify")
        .json(&json!({ "query": "anything" }))
        .await;

    assert_eq!(
        response.status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    let body: Value = response.json();
    assert_eq!(body["error"]["status"], 500);
}

#[tokio::test]
async fn catalog_fault_maps_to_bad_gateway() {
    let server = server(
        ScriptedClassifier(Ok(Classification::Intent(search_intent()))),
        ScriptedCatalog(Err(503)),
    );

    let response = server
        .post("/api/query/classify")
        .json(&json!({ "query": "find the matrix" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["error"]["status"], 502);
}

#[tokio::test]
async fn health_reports_ok() {
    let server = server(
        ScriptedClassifier(Ok(Classification::Rejection { message: None })),
        ScriptedCatalog(Ok(CatalogPage::default())),
    );

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

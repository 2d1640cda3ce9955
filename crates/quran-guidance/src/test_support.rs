//! Mock guidance backend shared by the session and server tests.
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use guidance_common::client::{GuidanceClient, GuidanceClientConfig};

/// Queries starting with "slow" answer after 300ms, "broken" answers 500 with
/// a detail, everything else answers at once with one Quran and one Hadith
/// result whose citations echo the query.
pub async fn spawn_backend() -> String {
    let router = Router::new().route(
        "/api/v1/guidance",
        post(|Json(body): Json<Value>| async move {
            let query = body["emotion_query"].as_str().unwrap_or_default().to_string();
            if query.starts_with("slow") {
                tokio::time::sleep(Duration::from_millis(300)).await;
            }
            if query == "broken" {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"detail": "vector store unavailable"})),
                );
            }
            (
                StatusCode::OK,
                Json(json!({
                    "results": [
                        {"type": "Quran", "arabic_text": "", "translation": "", "citation": format!("quran:{query}"), "similarity_score": 0.9},
                        {"type": "Hadith", "arabic_text": "", "translation": "", "citation": format!("hadith:{query}"), "similarity_score": 0.8}
                    ],
                    "query": query,
                    "total_results": 2
                })),
            )
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub async fn backend_client() -> Arc<GuidanceClient> {
    let client = GuidanceClient::new(GuidanceClientConfig::new(spawn_backend().await)).unwrap();
    Arc::new(client)
}

//! HTTP 介面：`POST /get_vessel_info` 與 `GET /health`。

use crate::core::fetcher::VesselInfoFetcher;
use crate::core::validator::validate_request;
use crate::domain::model::ErrorResult;
use crate::utils::error::{ErrorCategory, VesselError};
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    fetcher: Arc<VesselInfoFetcher>,
}

impl AppState {
    pub fn new(fetcher: VesselInfoFetcher) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
        }
    }
}

pub fn router(fetcher: VesselInfoFetcher) -> Router {
    Router::new()
        .route("/get_vessel_info", post(get_vessel_info))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(fetcher))
}

/// 在指定的 listener 上提供服務，直到 `shutdown` 完成
pub async fn serve<F>(
    listener: TcpListener,
    fetcher: VesselInfoFetcher,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(fetcher))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn health() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn get_vessel_info(State(state): State<AppState>, body: Bytes) -> Response {
    // 非 JSON 的 body 當作沒有提供 MMSI
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let query = match validate_request(&payload, state.fetcher.settings().strict_identifier) {
        Ok(query) => query,
        Err(e) => return e.into_response(),
    };

    match state.fetcher.fetch(&query).await {
        Ok(record) => {
            tracing::info!("Found vessel {} for {}", record.name, query.identifier());
            Json(record).into_response()
        }
        Err(e) => e.into_response(),
    }
}

impl IntoResponse for VesselError {
    fn into_response(self) -> Response {
        match self.category() {
            ErrorCategory::Input => tracing::info!("Rejected request: {}", self),
            ErrorCategory::Upstream | ErrorCategory::Page => {
                tracing::warn!("Lookup failed: {}", self)
            }
            ErrorCategory::Transport | ErrorCategory::Config => {
                let cause = std::error::Error::source(&self)
                    .map(|s| s.to_string())
                    .unwrap_or_default();
                tracing::error!("Lookup failed: {} {}", self, cause)
            }
        }

        (self.status_code(), Json(ErrorResult::new(self.to_string()))).into_response()
    }
}

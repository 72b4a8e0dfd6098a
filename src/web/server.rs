use crate::error::{Error, Result};
use chrono::Utc;
use log::{error, info};
use prometheus::{Encoder, Registry, TextEncoder};
use std::net::SocketAddr;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

/// `GET /metrics` in the Prometheus text format and `GET /health`.
pub fn routes(
    registry: Registry,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let metrics = warp::path("metrics")
        .and(warp::path::end())
        .and(warp::get())
        .map(move || metrics_response(&registry));

    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| {
            warp::reply::json(&serde_json::json!({
                "status": "ok",
                "timestamp": Utc::now().to_rfc3339()
            }))
        });

    metrics.or(health)
}

pub async fn serve_metrics(registry: Registry, port: u16) {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("launching metrics endpoint {}/metrics", addr);
    warp::serve(routes(registry)).run(addr).await;
}

fn encode(registry: &Registry) -> Result<String> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| Error::MetricsError(e.to_string()))
}

fn metrics_response(registry: &Registry) -> warp::reply::Response {
    match encode(registry) {
        Ok(body) => {
            warp::reply::with_header(body, "content-type", TextEncoder::new().format_type())
                .into_response()
        }
        Err(e) => {
            error!("Failed to encode metrics: {}", e);
            warp::reply::with_status("failed to encode metrics".to_string(), StatusCode::INTERNAL_SERVER_ERROR)
                .into_response()
        }
    }
}

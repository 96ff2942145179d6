//! HTTP transport for the JWT service
//!
//! Routes:
//!
//! - `POST /api/decode` with `{"token"}`
//! - `POST /api/encode` with `{"header"?, "payload", "secret", "algorithm"?}`
//! - `POST /api/verify` with `{"token", "secret"}`
//! - `GET /health`
//!
//! A body that cannot be bound to the request type, or that leaves a
//! required string empty, is answered with `400 {"error":"Invalid request format"}`.
//! Problems with the token itself are answered with `200` and an embedded
//! `error`. Only an unusable verification key yields a `500`.

mod config;

pub use config::ServerConfig;

use crate::claims::{ClaimInfo, ClaimSet};
use crate::clock::Clock;
use crate::service::{DecodeRequest, DecodeResponse, EncodeRequest, JwtService, VerifyRequest};

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error, info};

type SharedService<C> = Arc<JwtService<C>>;

/// Build the application router around `service`
pub fn router<C: Clock + 'static>(service: JwtService<C>) -> Router {
    Router::new()
        .route("/api/decode", post(decode::<C>))
        .route("/api/encode", post(encode::<C>))
        .route("/api/verify", post(verify::<C>))
        .route("/health", get(health))
        .with_state(Arc::new(service))
}

/// Bind to the configured address and serve until Ctrl-C
pub async fn serve(config: &ServerConfig) -> std::io::Result<()> {
    let service = JwtService::new(config.verify_options());
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!(address = %listener.local_addr()?, leeway = config.leeway, "jwtview listening");

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("jwtview stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[derive(Serialize)]
struct DecodeBody {
    header: ClaimSet,
    payload: ClaimSet,
    signature: String,
    claim_info: ClaimInfo,
}

#[derive(Serialize)]
struct VerifyBody {
    valid: bool,
    message: String,
    claims: Option<ClaimSet>,
    claim_info: Option<ClaimInfo>,
    /// Always present; empty when the token was accepted
    error: String,
}

async fn decode<C: Clock + 'static>(
    State(service): State<SharedService<C>>,
    request: Result<Json<DecodeRequest>, JsonRejection>,
) -> Response {
    let Some(request) = bind(request, DecodeRequest::has_required_fields) else {
        return invalid_request();
    };

    let response = service.decode_token(&request.token);
    match (response.header, response.payload, response.error) {
        (Some(header), Some(payload), None) => {
            let claim_info = service.extract_claim_info(&payload);
            Json(DecodeBody {
                header,
                payload,
                signature: response.signature,
                claim_info,
            })
            .into_response()
        }
        (header, payload, error) => Json(DecodeResponse {
            header,
            payload,
            signature: response.signature,
            error,
        })
        .into_response(),
    }
}

async fn encode<C: Clock + 'static>(
    State(service): State<SharedService<C>>,
    request: Result<Json<EncodeRequest>, JsonRejection>,
) -> Response {
    let Some(request) = bind(request, EncodeRequest::has_required_fields) else {
        return invalid_request();
    };

    Json(service.encode_token(&request)).into_response()
}

async fn verify<C: Clock + 'static>(
    State(service): State<SharedService<C>>,
    request: Result<Json<VerifyRequest>, JsonRejection>,
) -> Response {
    let Some(request) = bind(request, VerifyRequest::has_required_fields) else {
        return invalid_request();
    };

    match service.verify_token(&request) {
        Ok(outcome) => {
            let claim_info = outcome
                .claims
                .as_ref()
                .map(|claims| service.extract_claim_info(claims));
            Json(VerifyBody {
                valid: outcome.valid,
                message: outcome.message,
                claims: outcome.claims,
                claim_info,
                error: outcome.error.unwrap_or_default(),
            })
            .into_response()
        }
        Err(e) => {
            error!(error = %e, "verification failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response()
        }
    }
}

async fn health() -> &'static str {
    "ok"
}

fn bind<T>(request: Result<Json<T>, JsonRejection>, complete: fn(&T) -> bool) -> Option<T> {
    match request {
        Ok(Json(request)) if complete(&request) => Some(request),
        Ok(_) => {
            debug!("request is missing a required field");
            None
        }
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "request rejected");
            None
        }
    }
}

fn invalid_request() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Invalid request format" })),
    )
        .into_response()
}

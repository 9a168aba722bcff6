//! HTTP endpoints.
//!
//! - `/query`   : dispatch a parsed request (JSON body)
//! - `/metrics` : Prometheus text format
//! - `/healthz` : liveness

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use osrmd_core::protocol::{ParsedRequest, Payload, QueryResult, Reply, Status};

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.monitoring().format();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}

pub async fn query(State(state): State<AppState>, Json(req): Json<ParsedRequest>) -> Response {
    let reply = state.dispatcher().dispatch(req).await;
    reply_into_response(reply)
}

fn reply_into_response(reply: Reply) -> Response {
    let code = match reply.status {
        Status::Ok => StatusCode::OK,
        Status::Error => StatusCode::BAD_REQUEST,
    };

    match reply.result {
        QueryResult::Payload(Payload::Json(v)) => (code, Json(v)).into_response(),
        QueryResult::Payload(Payload::Binary(b)) => {
            (code, [(header::CONTENT_TYPE, "application/x-protobuf")], b).into_response()
        }
        QueryResult::Error(e) => (code, Json(e)).into_response(),
    }
}

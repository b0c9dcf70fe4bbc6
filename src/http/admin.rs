// author: kodeholic (powered by Claude)
// 운영 REST API 핸들러 (context path 하위)
//
//   GET  /status         → 이벤트/엔드포인트/uptime 요약
//   POST /register       → 엔드포인트 해석 → 페이로드 조립 → 등록
//   GET  /registrations  → 설정된 이벤트의 등록 목록
//
// 등록 서비스 호출은 blocking 이므로 spawn_blocking 으로 격리

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::register_room;
use crate::utils::current_timestamp;

use super::dto::*;
use super::state::HttpState;

// ----------------------------------------------------------------------------
// [유틸]
// ----------------------------------------------------------------------------

fn internal_error(msg: &str) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::json!({ "error": msg }))).into_response()
}

// ----------------------------------------------------------------------------
// [핸들러]
// ----------------------------------------------------------------------------

/// GET /status
pub async fn room_status(State(state): State<HttpState>) -> impl IntoResponse {
    let endpoint    = state.resolver.resolve(&state.context);
    let uptime_secs = current_timestamp().saturating_sub(state.start_time_ms) / 1000;

    Json(RoomStatus {
        event_id:         state.identity.event_id.clone(),
        full_name:        state.identity.full_name.clone(),
        endpoint:         endpoint.url(),
        endpoint_source:  endpoint.source.to_string(),
        registration_url: state.config.registration_url.clone(),
        map_service_url:  state.config.map_service_url.clone(),
        uptime_secs,
    })
}

/// POST /register
/// Registered / AlreadyRegistered → 200, Failed → 502
pub async fn register(State(state): State<HttpState>) -> Response {
    let joined = tokio::task::spawn_blocking(move || {
        register_room(&state.client, &state.identity, &state.resolver, &state.context)
    }).await;

    let (endpoint, outcome) = match joined {
        Ok(r)  => r,
        Err(e) => {
            error!("[http] register task failed: {}", e);
            return internal_error("register task failed");
        }
    };

    let status = if outcome.is_success() { StatusCode::OK } else { StatusCode::BAD_GATEWAY };
    let body = RegisterResponse {
        endpoint: endpoint.url(),
        message:  outcome.message(),
        result:   outcome,
    };
    (status, Json(body)).into_response()
}

/// GET /registrations
/// 조회 실패 시에도 빈 배열 (목록은 참고용)
pub async fn list_registrations(State(state): State<HttpState>) -> Response {
    let event_id = state.identity.event_id.clone();
    let client   = state.client.clone();

    match tokio::task::spawn_blocking(move || client.list_for_event(&event_id)).await {
        Ok(list) => Json(list).into_response(),
        Err(e)   => {
            error!("[http] list task failed: {}", e);
            internal_error("list task failed")
        }
    }
}

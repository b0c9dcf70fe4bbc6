// author: kodeholic (powered by Claude)

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod http;
pub mod registration;
pub mod room;
pub mod utils;

use axum::{routing::{get, post}, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::RoomConfig;
use crate::core::{build_payload, DeploymentContext, Endpoint, EndpointResolver, RoomIdentity};
use crate::error::RoomResult;
use crate::http::HttpState;
use crate::registration::{RegisterOutcome, RegistrationServiceClient};
use crate::room::RoomState;

/// CLI에서 주입되는 룸 서버 실행 설정
/// - 기본값은 config.rs 상수
/// - 등록 관련 설정(자격 증명, URL)은 RoomConfig 로 별도 주입
pub struct RoomArgs {
    pub port:              u16,
    pub context_path:      String,
    pub register_on_start: bool,
}

/// 엔드포인트 해석 → 페이로드 조립 → 등록 (동기, 1회)
pub fn register_room(
    client:   &RegistrationServiceClient,
    identity: &RoomIdentity,
    resolver: &EndpointResolver,
    context:  &DeploymentContext,
) -> (Endpoint, RegisterOutcome) {
    let endpoint = resolver.resolve(context);
    let payload  = build_payload(identity, &endpoint);
    let outcome  = client.register(&payload);
    (endpoint, outcome)
}

/// 룸 WS + 운영 REST 라우터 (context path 하위에 마운트)
pub fn build_router(state: HttpState) -> Router {
    let room_state = RoomState { identity: Arc::clone(&state.identity) };
    let context_path = state.context.context_path.clone();

    let routes = Router::new()
        .route("/room", get(room::ws_handler))
        .with_state(room_state)
        .merge(
            Router::new()
                .route("/status",        get(http::room_status))
                .route("/register",      post(http::register))
                .route("/registrations", get(http::list_registrations))
                .with_state(state),
        );

    // CORS — 운영 대시보드 로컬 접속 허용
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = if context_path.is_empty() {
        routes
    } else {
        Router::new().nest(&context_path, routes)
    };
    app.layer(cors)
}

pub async fn run_room(args: RoomArgs, config: RoomConfig) -> RoomResult<()> {
    // 식별 정보 누락은 여기서 즉시 실패 — 등록 시도 없음
    let identity = Arc::new(config.identity()?);
    let context  = DeploymentContext::new(&args.context_path).with_port(args.port);
    let resolver = Arc::new(EndpointResolver::from_config(&config));

    let http_state = HttpState::new(
        Arc::new(config),
        Arc::clone(&identity),
        Arc::clone(&resolver),
        context.clone(),
    );

    // 시작 시 1회 등록 (blocking 호출이므로 별도 스레드)
    if args.register_on_start {
        let client = Arc::clone(&http_state.client);
        let identity = Arc::clone(&identity);
        let resolver = Arc::clone(&resolver);
        let context  = context.clone();
        tokio::task::spawn_blocking(move || {
            register_room(&client, &identity, &resolver, &context);
        });
    }

    let app = build_router(http_state);

    let addr     = format!("0.0.0.0:{}", args.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("[regroom] Room for event {} on http://{}{}", identity.event_id, addr, context.context_path);
    info!("[regroom] Room websocket at {}{}", context.context_path, crate::config::ROOM_ROUTE);

    axum::serve(listener, app).await?;
    Ok(())
}

// author: kodeholic (powered by Claude)

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use portpicker::pick_unused_port;
use regroom::config::RoomConfig;
use regroom::error::RoomError;
use regroom::{run_room, RoomArgs};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

const REG_PATH: &str = "/regsvc/v1/register";

// ----------------------------------------------------------------------------
// [테스트 헬퍼]
// ----------------------------------------------------------------------------

/// 모의 등록 서비스 — 요청 수와 마지막 본문 기록
#[derive(Clone, Default)]
struct Recorder {
    hits: Arc<AtomicUsize>,
    body: Arc<Mutex<Option<Value>>>,
}

async fn record(State(r): State<Recorder>, Json(body): Json<Value>) -> StatusCode {
    *r.body.lock().unwrap() = Some(body);
    r.hits.fetch_add(1, Ordering::SeqCst);
    StatusCode::OK
}

async fn spawn_registration_service(recorder: Recorder) -> String {
    let port = pick_unused_port().expect("사용 가능한 포트를 찾을 수 없습니다.");
    let addr = format!("127.0.0.1:{}", port);

    let app = Router::new().route(REG_PATH, post(record)).with_state(recorder);
    let listener = TcpListener::bind(&addr).await.unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    format!("http://{}{}", addr, REG_PATH)
}

fn room_config(registration_url: String) -> RoomConfig {
    RoomConfig {
        gameon_id:        Some("gid".to_string()),
        gameon_secret:    Some("sec".to_string()),
        event_id:         Some("E1".to_string()),
        event_desc:       Some("Sign in for E1 here".to_string()),
        local_endpoint:   Some("room.example:9080/regroom".to_string()),
        registration_url,
        request_timeout:  Duration::from_secs(5),
        ..RoomConfig::default()
    }
}

fn room_args(port: u16, register_on_start: bool) -> RoomArgs {
    RoomArgs { port, context_path: "/regroom".to_string(), register_on_start }
}

/// 조건이 참이 될 때까지 대기 (최대 3초)
async fn wait_until(cond: impl Fn() -> bool) -> bool {
    for _ in 0..60 {
        if cond() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    cond()
}

/// 룸 서버가 요청을 받을 때까지 /status 재시도
async fn wait_for_room(port: u16) {
    let url = format!("http://127.0.0.1:{}/regroom/status", port);
    for _ in 0..60 {
        if let Ok(resp) = reqwest::get(&url).await {
            if resp.status().is_success() {
                return;
            }
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("룸 서버가 시작되지 않음: {}", url);
}

// ----------------------------------------------------------------------------
// [시나리오 1] 비밀키 누락 → 즉시 실패, 등록 요청 없음
// ----------------------------------------------------------------------------

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_secret_fails_before_registration() {
    let recorder = Recorder::default();
    let reg_url  = spawn_registration_service(recorder.clone()).await;

    let config = RoomConfig { gameon_secret: None, ..room_config(reg_url) };
    let port   = pick_unused_port().expect("사용 가능한 포트를 찾을 수 없습니다.");

    let result = tokio::time::timeout(Duration::from_secs(3), run_room(room_args(port, true), config))
        .await
        .expect("run_room 이 반환되지 않음");

    assert!(matches!(result, Err(RoomError::ConfigurationInvalid(_))), "got {:?}", result.err());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(recorder.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_blank_event_id_fails_before_registration() {
    let recorder = Recorder::default();
    let reg_url  = spawn_registration_service(recorder.clone()).await;

    let config = RoomConfig { event_id: Some("  ".to_string()), ..room_config(reg_url) };
    let port   = pick_unused_port().expect("사용 가능한 포트를 찾을 수 없습니다.");

    let result = run_room(room_args(port, true), config).await;
    assert!(matches!(result, Err(RoomError::ConfigurationInvalid(_))));

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(recorder.hits.load(Ordering::SeqCst), 0);
}

// ----------------------------------------------------------------------------
// [시나리오 2] register_on_start → 시작 시 1회 등록
// ----------------------------------------------------------------------------

#[tokio::test(flavor = "multi_thread")]
async fn test_startup_registers_once() {
    let recorder = Recorder::default();
    let reg_url  = spawn_registration_service(recorder.clone()).await;
    let port     = pick_unused_port().expect("사용 가능한 포트를 찾을 수 없습니다.");

    let room = tokio::spawn(run_room(room_args(port, true), room_config(reg_url)));

    let hits = Arc::clone(&recorder.hits);
    assert!(wait_until(move || hits.load(Ordering::SeqCst) >= 1).await, "시작 시 등록 요청 없음");

    // 한 번만
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(recorder.hits.load(Ordering::SeqCst), 1);

    let body = recorder.body.lock().unwrap().clone().unwrap();
    assert_eq!(body["name"], "E1");
    assert_eq!(body["connectionDetails"]["target"], "ws://room.example:9080/regroom/room");

    room.abort();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_no_register_flag_skips_startup_registration() {
    let recorder = Recorder::default();
    let reg_url  = spawn_registration_service(recorder.clone()).await;
    let port     = pick_unused_port().expect("사용 가능한 포트를 찾을 수 없습니다.");

    let room = tokio::spawn(run_room(room_args(port, false), room_config(reg_url)));
    wait_for_room(port).await;

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(recorder.hits.load(Ordering::SeqCst), 0);

    room.abort();
}

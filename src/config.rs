// author: kodeholic (powered by Claude)
// 매직 넘버/문자열을 배제하고 룸 등록 동작을 제어하는 상수 + 런타임 설정 묶음입니다.

use std::time::Duration;

use crate::core::RoomIdentity;
use crate::error::RoomResult;

// ----------------------------------------------------------------------------
// 기본 접속 대상 (환경변수로 오버라이드)
// ----------------------------------------------------------------------------

/// 맵 서비스 기본 URL (라이브 사이트)
pub const DEFAULT_MAP_SERVICE_URL: &str = "https://game-on.org/map/v1/sites";

/// 등록 서비스 기본 URL — POST(등록) / GET(목록) 공용
pub const DEFAULT_REGISTRATION_SERVICE_URL: &str = "http://game-on.org:9009/regsvc/v1/register";

/// 등록 서비스 요청 타임아웃 (10초)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

// ----------------------------------------------------------------------------
// 룸 서버 / 엔드포인트
// ----------------------------------------------------------------------------

/// 룸 HTTP/WS 서버 포트
pub const ROOM_HTTP_PORT: u16 = 9080;

/// 룸이 서비스되는 기본 context path
pub const DEFAULT_CONTEXT_PATH: &str = "/regroom";

/// 엔드포인트 scheme (웹소켓 고정)
pub const ENDPOINT_SCHEME: &str = "ws";

/// 코디네이터 인바운드 연결 라우팅 경로 — 모든 엔드포인트 URL 끝에 붙는다
pub const ROOM_ROUTE: &str = "/room";

/// 로컬 IP 감지 실패 시 최종 폴백 주소
pub const FALLBACK_ENDPOINT: &str = "localhost:9080/regroom";

/// 등록 페이로드 connectionDetails.type
pub const CONNECTION_TYPE: &str = "websocket";

/// 룸 프로토콜 지원 버전 (ack 메시지)
pub const PROTOCOL_VERSIONS: &[u32] = &[1, 2];

// ----------------------------------------------------------------------------
// 문(door) 묘사 — 방 바깥에서 본 모습, 설정 불가 고정값
// (key, text)
// ----------------------------------------------------------------------------
pub const DOORS: &[(&str, &str)] = &[
    ("n", "A Large doorway to the south"),
    ("s", "A winding path leading off to the north"),
    ("e", "An overgrown road, covered in brambles"),
    ("w", "A shiny metal door, with a bright red handle"),
    ("u", "A tunnel, leading down into the earth"),
    ("d", "A spiral set of stairs, leading upward into the ceiling"),
];

// ----------------------------------------------------------------------------
// [RoomConfig] 시작 시 1회 조립, 이후 읽기 전용으로 주입
// ----------------------------------------------------------------------------

/// 외부(환경변수/CLI)에서 받은 원시 설정값
/// - 코어 로직은 환경을 직접 읽지 않고 이 구조체만 본다
#[derive(Debug, Clone)]
pub struct RoomConfig {
    pub gameon_id:            Option<String>,
    pub gameon_secret:        Option<String>,
    pub event_id:             Option<String>,
    pub event_desc:           Option<String>,
    pub map_service_url:      String,
    pub registration_url:     String,
    pub local_endpoint:       Option<String>, // LOCAL_ENDPOINT 오버라이드
    pub platform_descriptor:  Option<String>, // VCAP_APPLICATION 원문 JSON
    pub request_timeout:      Duration,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            gameon_id:           None,
            gameon_secret:       None,
            event_id:            None,
            event_desc:          None,
            map_service_url:     DEFAULT_MAP_SERVICE_URL.to_string(),
            registration_url:    DEFAULT_REGISTRATION_SERVICE_URL.to_string(),
            local_endpoint:      None,
            platform_descriptor: None,
            request_timeout:     Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}

impl RoomConfig {
    /// 식별 정보 검증 + RoomIdentity 생성
    /// 누락 시 ConfigurationInvalid — 호출 측은 등록을 시도하지 않고 종료해야 한다
    pub fn identity(&self) -> RoomResult<RoomIdentity> {
        RoomIdentity::from_parts(
            self.gameon_id.as_deref(),
            self.gameon_secret.as_deref(),
            self.event_id.as_deref(),
            self.event_desc.as_deref(),
        )
    }
}

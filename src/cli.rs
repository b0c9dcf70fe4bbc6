// author: kodeholic (powered by Claude)
// 바이너리 공용 설정 인자 — CLI 플래그가 우선, 없으면 환경변수, 그다음 config.rs 기본값
// 비밀값(GAMEON_SECRET, VCAP_APPLICATION)은 --help 출력에서 값 숨김
// global — 서브커맨드 뒤에 와도 인식

use std::time::Duration;

use clap::Args;

use crate::config::{self, RoomConfig};

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// GameOn! 사용자 id
    #[arg(long, global = true, env = "GAMEON_ID")]
    pub gameon_id: Option<String>,

    /// GameOn! 공유 비밀키
    #[arg(long, global = true, env = "GAMEON_SECRET", hide_env_values = true)]
    pub gameon_secret: Option<String>,

    /// 이벤트 id (룸 이름으로도 사용)
    #[arg(long, global = true, env = "EVENT_ID")]
    pub event_id: Option<String>,

    /// 이벤트 설명 (룸 description)
    #[arg(long, global = true, env = "EVENT_DESC")]
    pub event_desc: Option<String>,

    /// 맵 서비스 URL
    #[arg(long, global = true, env = "MAP_SERVICE_URL", default_value = config::DEFAULT_MAP_SERVICE_URL)]
    pub map_service_url: String,

    /// 등록 서비스 URL (POST 등록 / GET 목록)
    #[arg(long, global = true, env = "REGISTRATION_SERVICE_URL", default_value = config::DEFAULT_REGISTRATION_SERVICE_URL)]
    pub registration_url: String,

    /// 엔드포인트 주소 오버라이드 (host:port/path)
    #[arg(long, global = true, env = "LOCAL_ENDPOINT")]
    pub local_endpoint: Option<String>,

    /// 플랫폼 애플리케이션 디스크립터 (JSON, application_uris 포함)
    #[arg(long, global = true, env = "VCAP_APPLICATION", hide_env_values = true)]
    pub platform_descriptor: Option<String>,

    /// 등록 서비스 요청 타임아웃 (밀리초)
    #[arg(long, global = true, env = "REGISTRATION_TIMEOUT_MS", default_value_t = config::DEFAULT_REQUEST_TIMEOUT_MS)]
    pub request_timeout_ms: u64,
}

impl From<ConfigArgs> for RoomConfig {
    fn from(args: ConfigArgs) -> Self {
        RoomConfig {
            gameon_id:           args.gameon_id,
            gameon_secret:       args.gameon_secret,
            event_id:            args.event_id,
            event_desc:          args.event_desc,
            map_service_url:     args.map_service_url,
            registration_url:    args.registration_url,
            local_endpoint:      args.local_endpoint,
            platform_descriptor: args.platform_descriptor,
            request_timeout:     Duration::from_millis(args.request_timeout_ms),
        }
    }
}

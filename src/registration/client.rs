// author: kodeholic (powered by Claude)
// RegistrationServiceClient — 등록 서비스 동기 호출 (POST 등록 / GET 목록)
//
// - 호출 1회 = 왕복 1회, 재시도 없음 (재시도 정책은 호출자 몫)
// - 호출마다 클라이언트를 새로 만들고 idle 풀을 두지 않음
//   → 성공/실패/전송 에러 어느 경로든 연결은 호출 종료와 함께 해제
// - blocking 클라이언트이므로 async 컨텍스트에서는 spawn_blocking 안에서 호출할 것

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use tracing::{debug, info, trace, warn};

use crate::config::RoomConfig;
use crate::core::{RegistrationPayload, RoomIdentity};
use crate::error::{RoomError, RoomResult};
use crate::registration::model::{RegisterOutcome, Registration};

#[derive(Debug, Clone)]
pub struct RegistrationServiceClient {
    url:         String,
    credentials: Option<(String, String)>, // (gameon id, shared secret)
    timeout:     Duration,
}

impl RegistrationServiceClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self { url: url.into(), credentials: None, timeout }
    }

    /// 고정 자격 증명 쌍을 basic auth 로 전달
    pub fn with_credentials(mut self, user_id: &str, secret: &str) -> Self {
        self.credentials = Some((user_id.to_string(), secret.to_string()));
        self
    }

    pub fn from_config(cfg: &RoomConfig, identity: &RoomIdentity) -> Self {
        Self::new(cfg.registration_url.clone(), cfg.request_timeout)
            .with_credentials(&identity.user_id, &identity.shared_secret)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    // ------------------------------------------------------------------------
    // [register]
    // ------------------------------------------------------------------------

    /// 200 → Registered, 409 → AlreadyRegistered, 그 외/전송 실패 → Failed
    pub fn register(&self, payload: &RegistrationPayload) -> RegisterOutcome {
        match self.try_register(payload) {
            Ok(outcome) => {
                info!("[registration] {}: {}", payload.name, outcome.message());
                outcome
            }
            Err(e) => {
                warn!("[registration] failed to register room with {}: {}", self.url, e);
                RegisterOutcome::Failed(e.reason())
            }
        }
    }

    /// 인식하지 않는 상태 코드와 전송 실패를 Err 로 돌려주는 버전
    pub fn try_register(&self, payload: &RegistrationPayload) -> RoomResult<RegisterOutcome> {
        trace!("[registration] POST {}", self.url);
        let request = self.http()?.post(&self.url).json(payload);
        let resp = self.authorize(request).send().map_err(transport)?;

        match resp.status() {
            StatusCode::OK       => Ok(RegisterOutcome::Registered),
            StatusCode::CONFLICT => Ok(RegisterOutcome::AlreadyRegistered),
            other                => Err(RoomError::UnexpectedStatus(other.as_u16())),
        }
    }

    // ------------------------------------------------------------------------
    // [list]
    // ------------------------------------------------------------------------

    /// 이벤트에 등록된 룸 목록 (원격 순서 유지)
    /// 조회 실패는 "보고할 것 없음"으로 간주 — 에러 대신 빈 목록
    pub fn list_for_event(&self, event_id: &str) -> Vec<Registration> {
        self.try_list_for_event(event_id).unwrap_or_else(|e| {
            warn!("[registration] failed to get list of registered rooms from {}: {}", self.url, e);
            Vec::new()
        })
    }

    /// "등록 없음"과 "서비스 접근 불가"를 구분해야 하는 호출자용
    /// 원격은 이벤트 구분 없이 전체를 돌려준다고 가정 → 필터링은 여기서
    pub fn try_list_for_event(&self, event_id: &str) -> RoomResult<Vec<Registration>> {
        trace!("[registration] GET {}", self.url);
        let resp = self.authorize(self.http()?.get(&self.url)).send().map_err(transport)?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(RoomError::UnexpectedStatus(status.as_u16()));
        }

        let body = resp.text().map_err(transport)?;
        let all: Vec<Registration> = serde_json::from_str(&body)
            .map_err(|e| RoomError::MalformedResponse(e.to_string()))?;

        let total = all.len();
        let matched: Vec<Registration> = all.into_iter()
            .filter(|r| r.is_for_event(event_id))
            .collect();
        debug!("[registration] {} of {} registrations belong to event {}", matched.len(), total, event_id);

        Ok(matched)
    }

    // ------------------------------------------------------------------------
    // [내부]
    // ------------------------------------------------------------------------

    fn http(&self) -> RoomResult<Client> {
        Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(transport)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some((user, secret)) => request.basic_auth(user, Some(secret)),
            None                 => request,
        }
    }
}

fn transport(err: reqwest::Error) -> RoomError {
    RoomError::Transport(err.to_string())
}

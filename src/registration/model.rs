// author: kodeholic (powered by Claude)
// 등록 서비스 원격 엔티티 + register 결과 분류

use serde::{Deserialize, Serialize};

/// 등록 서비스가 보유한 (이벤트, 룸) 등록 1건
/// - 읽기: 모르는 필드는 무시
/// - 쓰기: 값이 없는 필드는 생략
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id:  Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gameon_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id:   Option<String>,
}

impl Registration {
    pub fn is_for_event(&self, event_id: &str) -> bool {
        self.event_id.as_deref() == Some(event_id)
    }
}

/// register() 결과 — 문자열 비교 없이 분기 가능
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum RegisterOutcome {
    Registered,
    /// 재등록은 정상 흐름 (에러 아님)
    AlreadyRegistered,
    Failed(String),
}

impl RegisterOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, RegisterOutcome::Failed(_))
    }

    pub fn message(&self) -> String {
        match self {
            RegisterOutcome::Registered        => "Room registered successfully".to_string(),
            RegisterOutcome::AlreadyRegistered => "This room has already been registered for this event".to_string(),
            RegisterOutcome::Failed(reason)    => reason.clone(),
        }
    }
}

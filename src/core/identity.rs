// author: kodeholic (powered by Claude)
// RoomIdentity — 프로세스 수명 동안 불변인 룸 식별 정보

use tracing::warn;

use crate::error::{RoomError, RoomResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomIdentity {
    pub name:          String,
    pub full_name:     String,
    pub description:   String,
    pub user_id:       String,
    pub shared_secret: String,
    pub event_id:      String,
}

impl RoomIdentity {
    /// 원시 설정값 → RoomIdentity
    /// user_id / secret / event_id / description 중 하나라도 없으면 ConfigurationInvalid
    /// 룸 이름은 event id 자체, full name은 "Registration room for <event id>"
    pub fn from_parts(
        user_id:       Option<&str>,
        shared_secret: Option<&str>,
        event_id:      Option<&str>,
        description:   Option<&str>,
    ) -> RoomResult<Self> {
        let (user_id, shared_secret) = match (non_empty(user_id), non_empty(shared_secret)) {
            (Some(id), Some(secret)) => (id, secret),
            _ => {
                warn!("[config] GameOn! user id or secret is missing (GAMEON_ID / GAMEON_SECRET)");
                return Err(RoomError::ConfigurationInvalid(
                    "GameOn! user id or secret is missing".to_string(),
                ));
            }
        };

        let (event_id, description) = match (non_empty(event_id), non_empty(description)) {
            (Some(id), Some(desc)) => (id, desc),
            _ => {
                warn!("[config] event id or description is missing (EVENT_ID / EVENT_DESC)");
                return Err(RoomError::ConfigurationInvalid(
                    "event id or description is missing".to_string(),
                ));
            }
        };

        Ok(Self {
            name:          event_id.to_string(),
            full_name:     format!("Registration room for {}", event_id),
            description:   description.to_string(),
            user_id:       user_id.to_string(),
            shared_secret: shared_secret.to_string(),
            event_id:      event_id.to_string(),
        })
    }
}

// 빈 문자열 환경변수(EVENT_ID=)도 누락으로 취급
fn non_empty(v: Option<&str>) -> Option<&str> {
    v.filter(|s| !s.trim().is_empty())
}

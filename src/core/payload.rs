// author: kodeholic (powered by Claude)
// RegistrationPayload — 등록 서비스로 보내는 룸 묘사 문서
// 필드명은 원격 서비스와 비트 단위로 일치해야 한다 (camelCase)

use serde::{Deserialize, Serialize};

use crate::config;
use crate::core::{Endpoint, RoomIdentity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub name:               String,
    pub full_name:          String,
    pub description:        String,
    pub doors:              Doors,
    pub connection_details: ConnectionDetails,
}

/// 방 바깥에서 본 각 방향 문의 묘사
/// (북쪽 문을 보는 여행자는 남쪽을 바라보고 있다)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doors {
    pub n: String,
    pub s: String,
    pub e: String,
    pub w: String,
    pub u: String,
    pub d: String,
}

impl Doors {
    /// config::DOORS 고정값
    pub fn fixed() -> Self {
        let text = |key: &str| {
            config::DOORS.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, t)| t.to_string())
                .unwrap_or_default()
        };
        Self {
            n: text("n"),
            s: text("s"),
            e: text("e"),
            w: text("w"),
            u: text("u"),
            d: text("d"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDetails {
    #[serde(rename = "type")]
    pub kind:   String,
    pub target: String,
}

/// 순수 함수 — 식별 정보 검증은 상위(RoomConfig::identity)에서 끝난 상태
pub fn build_payload(identity: &RoomIdentity, endpoint: &Endpoint) -> RegistrationPayload {
    RegistrationPayload {
        name:        identity.name.clone(),
        full_name:   identity.full_name.clone(),
        description: identity.description.clone(),
        doors:       Doors::fixed(),
        connection_details: ConnectionDetails {
            kind:   config::CONNECTION_TYPE.to_string(),
            target: endpoint.url(),
        },
    }
}

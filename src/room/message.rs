// author: kodeholic (powered by Claude)
// 룸 프로토콜 프레임 — "<type>,<target>,<json>" 텍스트 한 줄
//
// 수신 (코디네이터 → 룸)
//   roomHello,<roomId>,{"username":..,"userId":..}
//   roomJoin,<roomId>,{...}
//   room,<roomId>,{"username":..,"userId":..,"content":..}
//   roomGoodbye / roomPart  → 무시
//
// 송신 (룸 → 코디네이터)
//   ack,{"version":[1,2]}
//   player,<userId>,{"type":"location"|"event",...}
//   player,*,{"type":"chat",...}

use serde::Deserialize;
use serde_json::{json, Value};

use crate::config;
use crate::core::RoomIdentity;

pub const ROOM_HELLO: &str = "roomHello";
pub const ROOM_JOIN:  &str = "roomJoin";
pub const ROOM:       &str = "room";

const BROADCAST: &str = "*";

/// 수신 프레임 — target(roomId)은 룸이 하나뿐이라 보관하지 않는다
#[derive(Debug, Clone, PartialEq)]
pub struct RoomFrame {
    pub kind: String,
    pub body: Value,
}

/// 프레임 본문 중 룸이 참조하는 필드만
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerBody {
    #[serde(default)]
    user_id:  String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    content:  String,
}

/// type,target,json 분리 — JSON 안의 콤마는 보존 (앞 두 개만 분리)
pub fn parse_frame(text: &str) -> Option<RoomFrame> {
    let mut parts = text.splitn(3, ',');
    let kind = parts.next()?.trim();
    let _target = parts.next()?;
    let body = serde_json::from_str(parts.next()?).ok()?;
    if kind.is_empty() {
        return None;
    }
    Some(RoomFrame { kind: kind.to_string(), body })
}

pub fn ack_frame() -> String {
    format!("ack,{}", json!({ "version": config::PROTOCOL_VERSIONS }))
}

fn player_frame(target: &str, body: Value) -> String {
    format!("player,{},{}", target, body)
}

pub fn location_frame(user_id: &str, identity: &RoomIdentity) -> String {
    player_frame(user_id, json!({
        "type":        "location",
        "name":        identity.name,
        "fullName":    identity.full_name,
        "description": identity.description,
    }))
}

pub fn event_frame(user_id: &str, text: &str) -> String {
    player_frame(user_id, json!({
        "type":    "event",
        "content": { user_id: text },
    }))
}

pub fn chat_frame(username: &str, content: &str) -> String {
    player_frame(BROADCAST, json!({
        "type":     "chat",
        "username": username,
        "content":  content,
    }))
}

/// 수신 프레임 1개에 대한 응답 (없으면 None)
pub fn respond(frame: &RoomFrame, identity: &RoomIdentity) -> Option<String> {
    let player: PlayerBody = serde_json::from_value(frame.body.clone()).unwrap_or_default();
    if player.user_id.is_empty() {
        return None;
    }

    match frame.kind.as_str() {
        ROOM_HELLO | ROOM_JOIN => Some(location_frame(&player.user_id, identity)),
        ROOM => {
            let content = player.content.trim();
            if content.is_empty() {
                None
            } else if content.starts_with('/') {
                Some(event_frame(
                    &player.user_id,
                    "This room only handles event registration; there is nothing to do here.",
                ))
            } else {
                Some(chat_frame(&player.username, content))
            }
        }
        // roomGoodbye / roomPart 포함 — 응답 없음
        _ => None,
    }
}

// author: kodeholic (powered by Claude)
// HTTP 응답 DTO

use serde::Serialize;

use crate::registration::RegisterOutcome;

/// GET <ctx>/status
#[derive(Serialize)]
pub struct RoomStatus {
    pub event_id:         String,
    pub full_name:        String,
    pub endpoint:         String,
    pub endpoint_source:  String, // "platform" | "override" | "local-address" | "fallback"
    pub registration_url: String,
    pub map_service_url:  String,
    pub uptime_secs:      u64,
}

/// POST <ctx>/register
#[derive(Serialize)]
pub struct RegisterResponse {
    pub endpoint: String,
    pub result:   RegisterOutcome,
    pub message:  String,
}

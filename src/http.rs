// author: kodeholic (powered by Claude)
// HTTP 모듈 — 룸 운영 REST API

pub mod admin;
pub mod dto;
pub mod state;

pub use admin::{list_registrations, register, room_status};
pub use state::HttpState;

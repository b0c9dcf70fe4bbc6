// author: kodeholic (powered by Claude)

use std::fmt;

#[derive(Debug)]
pub enum RoomError {
    /// 필수 식별 정보 누락 — 등록 시도 자체를 막는다
    ConfigurationInvalid(String),
    /// 등록 서비스와의 연결/IO 실패
    Transport(String),
    /// 해당 동작에서 인식하지 않는 HTTP 상태 코드
    UnexpectedStatus(u16),
    /// 목록 응답 본문 디코딩 실패
    MalformedResponse(String),
    IoError(std::io::Error),
}

impl RoomError {
    /// 호출자에게 노출할 사유 문자열
    /// 전송 계층 내부 정보(소켓 에러 등)는 로그에만 남기고 여기엔 싣지 않는다
    pub fn reason(&self) -> String {
        match self {
            RoomError::ConfigurationInvalid(msg) => format!("Room configuration is invalid: {}", msg),
            RoomError::Transport(_)              => "Error communicating with registration service".to_string(),
            RoomError::UnexpectedStatus(code)    => format!("Unable to register room (status {})", code),
            RoomError::MalformedResponse(_)      => "Unreadable response from registration service".to_string(),
            RoomError::IoError(_)                => "Internal I/O error".to_string(),
        }
    }
}

impl fmt::Display for RoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomError::ConfigurationInvalid(msg) => write!(f, "Invalid room configuration: {}", msg),
            RoomError::Transport(msg)            => write!(f, "Registration service transport error: {}", msg),
            RoomError::UnexpectedStatus(code)    => write!(f, "Unexpected HTTP status from registration service: {}", code),
            RoomError::MalformedResponse(msg)    => write!(f, "Malformed registration service response: {}", msg),
            RoomError::IoError(err)              => write!(f, "Network I/O error: {}", err),
        }
    }
}

impl std::error::Error for RoomError {}

impl From<std::io::Error> for RoomError {
    fn from(err: std::io::Error) -> Self {
        RoomError::IoError(err)
    }
}

pub type RoomResult<T> = Result<T, RoomError>;

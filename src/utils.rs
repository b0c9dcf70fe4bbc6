// author: kodeholic (powered by Gemini)

use std::net::{IpAddr, UdpSocket};
use std::time::{SystemTime, UNIX_EPOCH};

/// 현재 시간을 밀리초 단위의 Unix Timestamp로 반환합니다.
/// 에러 발생 시 시스템 패닉 대신 0(기본값)을 반환하여 장애를 방어합니다.
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// 라우팅 테이블 기반 로컬 IP 감지
/// UDP 소켓으로 8.8.8.8:80 connect (실제 패킷 없음) → local_addr() 조회
/// 컨테이너 안에서도 외부 통신에 실제로 쓰이는 인터페이스 IP가 반환됨
/// 감지 실패 시 None — 폴백 판단은 호출 측 몫
pub fn detect_local_ip() -> Option<IpAddr> {
    UdpSocket::bind("0.0.0.0:0")
        .and_then(|s| { s.connect("8.8.8.8:80")?; s.local_addr() })
        .map(|addr| addr.ip())
        .ok()
}

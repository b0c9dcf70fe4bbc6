// author: kodeholic (powered by Claude)
// EndpointResolver — 코디네이터가 이 룸에 접속할 주소 결정
//
// 우선순위 (첫 성공에서 중단)
//   1. PlatformDescriptor  VCAP_APPLICATION.application_uris[0] + context path
//   2. LocalOverride       LOCAL_ENDPOINT 그대로
//   3. LocalAddress        라우팅 테이블 기반 로컬 IP + 서비스 포트 + context path
//   4. (fallback)          localhost:9080/regroom
//
// 결과는 항상 ws://<address>/room

use std::fmt;
use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::{self, RoomConfig};
use crate::utils::detect_local_ip;

// ----------------------------------------------------------------------------
// [DeploymentContext] 요청 단위 배포 신호
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentContext {
    /// 정규화된 context path ("" 또는 "/xxx", 끝 슬래시 없음)
    pub context_path: String,
    /// 룸 서버가 실제로 listen 하는 포트
    pub port:         u16,
}

impl DeploymentContext {
    pub fn new(context_path: &str) -> Self {
        let trimmed = context_path.trim().trim_end_matches('/');
        let context_path = if trimmed.is_empty() {
            String::new()
        } else if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        };
        Self { context_path, port: config::ROOM_HTTP_PORT }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

impl Default for DeploymentContext {
    fn default() -> Self {
        Self::new(config::DEFAULT_CONTEXT_PATH)
    }
}

// ----------------------------------------------------------------------------
// [Endpoint]
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointSource {
    Platform,
    Override,
    LocalAddress,
    Fallback,
}

impl fmt::Display for EndpointSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EndpointSource::Platform     => "platform",
            EndpointSource::Override     => "override",
            EndpointSource::LocalAddress => "local-address",
            EndpointSource::Fallback     => "fallback",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub scheme:  &'static str,
    /// host:port + path (routing 경로 제외)
    pub address: String,
    pub source:  EndpointSource,
}

impl Endpoint {
    fn new(address: String, source: EndpointSource) -> Self {
        Self { scheme: config::ENDPOINT_SCHEME, address, source }
    }

    /// ws://<address>/room
    pub fn url(&self) -> String {
        format!("{}://{}{}", self.scheme, self.address, config::ROOM_ROUTE)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

// ----------------------------------------------------------------------------
// [전략] 각 전략은 address 또는 None(해당 없음)을 돌려준다
// ----------------------------------------------------------------------------

pub trait EndpointStrategy: Send + Sync {
    fn source(&self) -> EndpointSource;
    fn resolve(&self, ctx: &DeploymentContext) -> Option<String>;
}

/// VCAP_APPLICATION 스타일 문서에서 필요한 필드만
#[derive(Deserialize)]
struct ApplicationDescriptor {
    #[serde(default)]
    application_uris: Vec<String>,
}

/// 관리형 플랫폼 라우팅 계층이 알려준 URI — 존재하면 다른 설정보다 항상 우선
pub struct PlatformDescriptor {
    raw: Option<String>,
}

impl PlatformDescriptor {
    pub fn new(raw: Option<String>) -> Self {
        Self { raw }
    }
}

impl EndpointStrategy for PlatformDescriptor {
    fn source(&self) -> EndpointSource { EndpointSource::Platform }

    fn resolve(&self, ctx: &DeploymentContext) -> Option<String> {
        let raw = self.raw.as_deref()?;
        let descriptor: ApplicationDescriptor = match serde_json::from_str(raw) {
            Ok(d)  => d,
            Err(e) => {
                warn!("[endpoint] platform descriptor is not valid JSON, ignoring: {}", e);
                return None;
            }
        };
        match descriptor.application_uris.first() {
            Some(uri) => Some(format!("{}{}", uri, ctx.context_path)),
            None => {
                debug!("[endpoint] platform descriptor has no application_uris");
                None
            }
        }
    }
}

pub struct LocalOverride {
    endpoint: Option<String>,
}

impl LocalOverride {
    pub fn new(endpoint: Option<String>) -> Self {
        Self { endpoint }
    }
}

impl EndpointStrategy for LocalOverride {
    fn source(&self) -> EndpointSource { EndpointSource::Override }

    fn resolve(&self, _ctx: &DeploymentContext) -> Option<String> {
        self.endpoint.clone().filter(|e| !e.trim().is_empty())
    }
}

/// 컨테이너 등에서 실행 중일 때 외부에서 보이는 IP 추정
/// 주소는 실제 서비스 중인 포트/context path 기준
pub struct LocalAddress {
    detect: fn() -> Option<IpAddr>,
}

impl LocalAddress {
    pub fn new() -> Self {
        Self { detect: detect_local_ip }
    }

    /// 감지 함수 주입 (테스트에서 실패 경로 재현용)
    pub fn with_detector(detect: fn() -> Option<IpAddr>) -> Self {
        Self { detect }
    }
}

impl Default for LocalAddress {
    fn default() -> Self {
        Self::new()
    }
}

impl EndpointStrategy for LocalAddress {
    fn source(&self) -> EndpointSource { EndpointSource::LocalAddress }

    fn resolve(&self, ctx: &DeploymentContext) -> Option<String> {
        let ip = (self.detect)()?;
        let addr = SocketAddr::new(ip, ctx.port);
        Some(format!("{}{}", addr, ctx.context_path))
    }
}

// ----------------------------------------------------------------------------
// [EndpointResolver]
// ----------------------------------------------------------------------------

pub struct EndpointResolver {
    strategies: Vec<Box<dyn EndpointStrategy>>,
}

impl EndpointResolver {
    pub fn new(strategies: Vec<Box<dyn EndpointStrategy>>) -> Self {
        Self { strategies }
    }

    /// 표준 체인: platform → override → local address
    pub fn from_config(cfg: &RoomConfig) -> Self {
        Self::new(vec![
            Box::new(PlatformDescriptor::new(cfg.platform_descriptor.clone())),
            Box::new(LocalOverride::new(cfg.local_endpoint.clone())),
            Box::new(LocalAddress::new()),
        ])
    }

    /// 실패하지 않는다 — 모든 전략이 해당 없음이면 localhost 폴백
    pub fn resolve(&self, ctx: &DeploymentContext) -> Endpoint {
        let endpoint = self.strategies.iter()
            .find_map(|s| s.resolve(ctx).map(|addr| Endpoint::new(addr, s.source())))
            .unwrap_or_else(|| {
                warn!("[endpoint] no deployment signal found, assuming {}", config::FALLBACK_ENDPOINT);
                Endpoint::new(config::FALLBACK_ENDPOINT.to_string(), EndpointSource::Fallback)
            });

        info!("[endpoint] resolved via {}: {}", endpoint.source, endpoint.url());
        endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    const VCAP: &str = r#"{"application_name":"regroom","application_uris":["regroom.mybluemix.net","alt.mybluemix.net"]}"#;

    fn no_ip() -> Option<IpAddr> { None }
    fn fixed_ip() -> Option<IpAddr> { Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 7))) }

    fn resolver(platform: Option<&str>, local: Option<&str>, detect: fn() -> Option<IpAddr>) -> EndpointResolver {
        EndpointResolver::new(vec![
            Box::new(PlatformDescriptor::new(platform.map(str::to_string))),
            Box::new(LocalOverride::new(local.map(str::to_string))),
            Box::new(LocalAddress::with_detector(detect)),
        ])
    }

    // ----- DeploymentContext -----

    #[test]
    fn context_path_is_normalized() {
        assert_eq!(DeploymentContext::new("regroom/").context_path, "/regroom");
        assert_eq!(DeploymentContext::new("/").context_path, "");
        assert_eq!(DeploymentContext::new("").context_path, "");
    }

    // ----- platform descriptor -----

    #[test]
    fn platform_descriptor_wins_over_override() {
        let r = resolver(Some(VCAP), Some("override:1234/x"), fixed_ip);
        let ep = r.resolve(&DeploymentContext::new("/regroom"));
        assert_eq!(ep.source, EndpointSource::Platform);
        assert_eq!(ep.url(), "ws://regroom.mybluemix.net/regroom/room");
    }

    #[test]
    fn empty_uri_list_falls_through() {
        let r = resolver(Some(r#"{"application_uris":[]}"#), Some("override:1234/x"), no_ip);
        let ep = r.resolve(&DeploymentContext::default());
        assert_eq!(ep.source, EndpointSource::Override);
    }

    #[test]
    fn malformed_descriptor_falls_through() {
        let r = resolver(Some("not json"), None, fixed_ip);
        let ep = r.resolve(&DeploymentContext::default());
        assert_eq!(ep.source, EndpointSource::LocalAddress);
    }

    // ----- override / local -----

    #[test]
    fn override_is_used_verbatim() {
        let r = resolver(None, Some("myhost:9999/custom"), fixed_ip);
        let ep = r.resolve(&DeploymentContext::new("/ignored"));
        assert_eq!(ep.address, "myhost:9999/custom");
        assert_eq!(ep.url(), "ws://myhost:9999/custom/room");
    }

    #[test]
    fn local_address_uses_default_port_and_path() {
        let r = resolver(None, None, fixed_ip);
        let ep = r.resolve(&DeploymentContext::default());
        assert_eq!(ep.url(), "ws://10.0.0.7:9080/regroom/room");
    }

    #[test]
    fn local_address_follows_served_port_and_context() {
        let r = resolver(None, None, fixed_ip);
        let ep = r.resolve(&DeploymentContext::new("/other").with_port(8080));
        assert_eq!(ep.source, EndpointSource::LocalAddress);
        assert_eq!(ep.url(), "ws://10.0.0.7:8080/other/room");
    }

    #[test]
    fn local_address_at_root_context() {
        let r = resolver(None, None, fixed_ip);
        let ep = r.resolve(&DeploymentContext::new("/").with_port(9090));
        assert_eq!(ep.url(), "ws://10.0.0.7:9090/room");
    }

    #[test]
    fn fallback_ignores_served_port_and_context() {
        let r = resolver(None, None, no_ip);
        let ep = r.resolve(&DeploymentContext::new("/other").with_port(8080));
        assert_eq!(ep.url(), "ws://localhost:9080/regroom/room");
    }

    #[test]
    fn failed_lookup_returns_localhost_fallback() {
        let r = resolver(None, None, no_ip);
        let ep = r.resolve(&DeploymentContext::default());
        assert_eq!(ep.source, EndpointSource::Fallback);
        assert_eq!(ep.url(), "ws://localhost:9080/regroom/room");
    }

    #[test]
    fn empty_chain_still_resolves() {
        let ep = EndpointResolver::new(Vec::new()).resolve(&DeploymentContext::default());
        assert_eq!(ep.scheme, "ws");
        assert_eq!(ep.source, EndpointSource::Fallback);
    }
}

// author: kodeholic (powered by Claude)
// 네트워크 I/O와 분리된 순수 로직 — 식별 정보, 엔드포인트 해석, 페이로드 조립

pub mod endpoint;
pub mod identity;
pub mod payload;

pub use endpoint::{
    DeploymentContext, Endpoint, EndpointResolver, EndpointSource, EndpointStrategy,
    LocalAddress, LocalOverride, PlatformDescriptor,
};
pub use identity::RoomIdentity;
pub use payload::{build_payload, ConnectionDetails, Doors, RegistrationPayload};

// author: kodeholic (powered by Claude)
// HttpState — 운영 REST 핸들러 공유 상태 (전부 읽기 전용)

use std::sync::Arc;

use crate::config::RoomConfig;
use crate::core::{DeploymentContext, EndpointResolver, RoomIdentity};
use crate::registration::RegistrationServiceClient;
use crate::utils::current_timestamp;

#[derive(Clone)]
pub struct HttpState {
    pub config:   Arc<RoomConfig>,
    pub identity: Arc<RoomIdentity>,
    pub resolver: Arc<EndpointResolver>,
    pub client:   Arc<RegistrationServiceClient>,
    pub context:  DeploymentContext,
    /// 서버 프로세스 시작 시각 (Unix millis) — uptime 계산용
    pub start_time_ms: u64,
}

impl HttpState {
    pub fn new(
        config:   Arc<RoomConfig>,
        identity: Arc<RoomIdentity>,
        resolver: Arc<EndpointResolver>,
        context:  DeploymentContext,
    ) -> Self {
        let client = Arc::new(RegistrationServiceClient::from_config(&config, &identity));
        Self { config, identity, resolver, client, context, start_time_ms: current_timestamp() }
    }
}

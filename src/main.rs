// author: kodeholic (powered by Gemini)

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use regroom::cli::ConfigArgs;
use regroom::config;
use regroom::{run_room, RoomArgs};

#[derive(Parser)]
#[command(
    name    = "regroom",
    about   = "이벤트 등록 룸 서버 — 시작 시 코디네이터에 자신을 등록",
    version,
)]
struct Cli {
    /// HTTP/WS 서버 포트
    #[arg(long, env = "PORT", default_value_t = config::ROOM_HTTP_PORT)]
    port: u16,

    /// 룸이 서비스되는 context path
    #[arg(long, default_value = config::DEFAULT_CONTEXT_PATH)]
    context_path: String,

    /// 시작 시 자동 등록 생략
    #[arg(long)]
    no_register: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

#[tokio::main]
async fn main() {
    // 환경 변수 기반 로깅 초기화 (기본값: info)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli  = Cli::parse();
    let args = RoomArgs {
        port:              cli.port,
        context_path:      cli.context_path,
        register_on_start: !cli.no_register,
    };

    if let Err(e) = run_room(args, cli.config.into()).await {
        error!("[regroom] {}", e);
        std::process::exit(1);
    }
}

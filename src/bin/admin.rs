// author: kodeholic (powered by Claude)
//
// regadmin — 룸 등록 운영 CLI (서버 없이 코어를 직접 구동)
//
// 사용법:
//   regadmin <COMMAND> [설정 플래그/환경변수]   (설정 플래그는 서브커맨드 앞뒤 어디든)
//
//   regadmin endpoint     해석된 룸 엔드포인트 + 출처
//   regadmin payload      등록 페이로드 JSON 미리보기
//   regadmin register     등록 1회 시도 (재시도 없음)
//   regadmin list [EVENT] 이벤트 등록 목록 (기본: EVENT_ID)

use clap::{Parser, Subcommand};
use colored::Colorize;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

use regroom::cli::ConfigArgs;
use regroom::config::{self, RoomConfig};
use regroom::core::{build_payload, DeploymentContext, EndpointResolver};
use regroom::registration::{RegisterOutcome, Registration, RegistrationServiceClient};
use regroom::register_room;

// ----------------------------------------------------------------------------
// [CLI 정의]
// ----------------------------------------------------------------------------

#[derive(Parser)]
#[command(
    name    = "regadmin",
    about   = "regroom 등록 운영 CLI",
    version,
)]
struct Cli {
    /// 룸이 서비스되는 context path (엔드포인트 해석용)
    #[arg(long, global = true, default_value = config::DEFAULT_CONTEXT_PATH)]
    context_path: String,

    /// 룸 서버 포트 (엔드포인트 해석용)
    #[arg(long, global = true, env = "PORT", default_value_t = config::ROOM_HTTP_PORT)]
    port: u16,

    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 해석된 엔드포인트 출력
    Endpoint,

    /// 등록 페이로드 JSON 출력
    Payload,

    /// 등록 서비스에 룸 등록
    Register,

    /// 이벤트별 등록 목록
    List {
        /// 이벤트 id (생략 시 --event-id / EVENT_ID)
        #[arg(value_name = "EVENT")]
        event: Option<String>,
    },
}

// ----------------------------------------------------------------------------
// [표시 타입]
// ----------------------------------------------------------------------------

#[derive(Tabled)]
struct RegistrationRow {
    #[tabled(rename = "EVENT")]
    event_id:  String,
    #[tabled(rename = "GAMEON ID")]
    gameon_id: String,
    #[tabled(rename = "SITE ID")]
    site_id:   String,
}

impl From<&Registration> for RegistrationRow {
    fn from(r: &Registration) -> Self {
        let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
        Self {
            event_id:  or_dash(&r.event_id),
            gameon_id: or_dash(&r.gameon_id),
            site_id:   or_dash(&r.site_id),
        }
    }
}

// ----------------------------------------------------------------------------
// [main]
// ----------------------------------------------------------------------------

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli     = Cli::parse();
    let context = DeploymentContext::new(&cli.context_path).with_port(cli.port);
    let cfg: RoomConfig = cli.config.into();

    let result = match &cli.command {
        Command::Endpoint            => cmd_endpoint(&cfg, &context),
        Command::Payload             => cmd_payload(&cfg, &context),
        Command::Register            => cmd_register(&cfg, &context),
        Command::List { event }      => cmd_list(&cfg, event.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "ERROR:".red().bold(), e);
        std::process::exit(1);
    }
}

// ----------------------------------------------------------------------------
// [커맨드 구현]
// ----------------------------------------------------------------------------

fn cmd_endpoint(cfg: &RoomConfig, context: &DeploymentContext) -> Result<(), Box<dyn std::error::Error>> {
    let endpoint = EndpointResolver::from_config(cfg).resolve(context);

    println!();
    println!("  {:12} {}", "Endpoint:".bold(), endpoint.url().green());
    println!("  {:12} {}", "Source:".bold(),   endpoint.source.to_string().yellow());
    println!();
    Ok(())
}

fn cmd_payload(cfg: &RoomConfig, context: &DeploymentContext) -> Result<(), Box<dyn std::error::Error>> {
    let identity = cfg.identity()?;
    let endpoint = EndpointResolver::from_config(cfg).resolve(context);
    let payload  = build_payload(&identity, &endpoint);

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn cmd_register(cfg: &RoomConfig, context: &DeploymentContext) -> Result<(), Box<dyn std::error::Error>> {
    // 식별 정보가 불완전하면 등록 시도 없이 종료
    let identity = cfg.identity()?;
    let resolver = EndpointResolver::from_config(cfg);
    let client   = RegistrationServiceClient::from_config(cfg, &identity);

    let (endpoint, outcome) = register_room(&client, &identity, &resolver, context);

    println!();
    println!("  {:12} {}", "Endpoint:".bold(), endpoint.url());
    println!("  {:12} {}", "Service:".bold(),  client.url().dimmed());
    match &outcome {
        RegisterOutcome::Registered        => println!("  {:12} {}", "Result:".bold(), outcome.message().green().bold()),
        RegisterOutcome::AlreadyRegistered => println!("  {:12} {}", "Result:".bold(), outcome.message().yellow()),
        RegisterOutcome::Failed(reason)    => return Err(reason.clone().into()),
    }
    println!();
    Ok(())
}

fn cmd_list(cfg: &RoomConfig, event_id: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let event_id = event_id
        .or(cfg.event_id.as_deref())
        .ok_or("event id required (argument or EVENT_ID)")?;

    let mut client = RegistrationServiceClient::new(cfg.registration_url.clone(), cfg.request_timeout);
    if let (Some(id), Some(secret)) = (&cfg.gameon_id, &cfg.gameon_secret) {
        client = client.with_credentials(id, secret);
    }

    // 운영 CLI는 "등록 없음"과 "조회 실패"를 구분해서 보여준다
    let registrations = client.try_list_for_event(event_id)?;

    if registrations.is_empty() {
        println!("{}", format!("  {} 이벤트에 등록된 룸 없음", event_id).dimmed());
        return Ok(());
    }

    let rows: Vec<RegistrationRow> = registrations.iter().map(RegistrationRow::from).collect();
    println!();
    println!("{}", Table::new(&rows).to_string());
    println!("  {} registration(s)", rows.len());
    println!();
    Ok(())
}

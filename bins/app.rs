use dotenvy::dotenv;
use service::directory::OrganizationFilter;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // 提前加载 .env，使得 RUST_LOG 等环境变量生效
    dotenv().ok();
    if std::env::var("LOG_FORMAT").map(|v| v == "json").unwrap_or(false) {
        common::utils::logging::init_logging_json();
    } else {
        common::utils::logging::init_logging_default();
    }
    info!(service = "donor-match", event = "logger_init", "tracing subscriber initialized");
}

async fn run(cfg: configs::AppConfig) -> anyhow::Result<()> {
    let services = service::runtime::build_services(&cfg).await?;
    let here = services.restore().await?;

    match services.session.current().await {
        Some(session) => info!(
            event = "session_active",
            user_id = %session.user.id,
            role = %session.role,
            "restored signed-in user"
        ),
        None => info!(event = "session_absent", "no signed-in user"),
    }

    let ranked = services.directory.filter(&OrganizationFilter::default());
    info!(
        event = "directory_ready",
        latitude = here.latitude,
        longitude = here.longitude,
        organizations = ranked.len(),
        "directory ready"
    );
    for (pos, org) in ranked.iter().enumerate() {
        info!(
            rank = pos + 1,
            id = %org.id,
            priority = org.priority_level.level(),
            distance_km = org.distance,
            name = %org.name,
            "organization"
        );
    }
    Ok(())
}

fn main() -> std::process::ExitCode {
    init_logging();

    let run_id = Uuid::new_v4();
    let version = env!("CARGO_PKG_VERSION");

    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "donor-match", event = "config_invalid", error = %e, "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "donor-match", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(service = "donor-match", event = "start", %run_id, version, "starting");

    rt.block_on(async move {
        tokio::select! {
            res = run(cfg) => match res {
                Ok(()) => {
                    info!(service = "donor-match", event = "stop", %run_id, "finished");
                    std::process::ExitCode::SUCCESS
                }
                Err(e) => {
                    error!(service = "donor-match", event = "run_failed", error = %e, "startup failed");
                    std::process::ExitCode::FAILURE
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!(service = "donor-match", event = "shutdown_signal", %run_id, "received Ctrl+C, shutting down");
                std::process::ExitCode::SUCCESS
            }
        }
    })
}

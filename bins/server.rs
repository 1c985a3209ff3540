use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // load .env first so RUST_LOG and LOG_FORMAT apply
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = "tenders", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    let instance_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "tenders",
            event = "panic",
            %instance_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    // config.toml first, then environment overrides
    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "tenders", event = "config_invalid", error = %e, "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    let worker_threads = cfg.server.worker_threads;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads.filter(|w| *w > 0) {
        builder.worker_threads(w);
    }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "tenders", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "tenders",
        event = "start",
        %instance_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "tenders server starting"
    );

    // server::run handles Ctrl+C itself and returns once connections drain
    match rt.block_on(server::run(cfg)) {
        Ok(()) => {
            info!(service = "tenders", event = "stop", %instance_id, pid, "server stopped normally");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "tenders", event = "run_failed", error = %e, "server::run returned error");
            std::process::ExitCode::FAILURE
        }
    }
}

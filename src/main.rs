use clap::Parser;
use std::process::ExitCode;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use memserve::config::{AppState, Cli, Config};
use memserve::{logger, server, ServerError};

fn main() -> ExitCode {
    // An invalid mode exits here with a usage message
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> memserve::Result<()> {
    let cfg = Config::load(cli)?;
    logger::init(&cfg).map_err(ServerError::Logger)?;

    // Tokio runtime, worker count from config when set
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> memserve::Result<()> {
    let addr = cfg.socket_addr()?;

    // The cache must be complete before the listener exists
    let state = Arc::new(AppState::from_config(cfg)?);

    let listener = server::create_listener(addr)?;
    logger::log_server_start(&addr, &state.config);

    server::start_server_loop(
        listener,
        state,
        Arc::new(AtomicUsize::new(0)),
        server::shutdown_signal(),
    )
    .await;

    Ok(())
}

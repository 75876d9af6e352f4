use std::sync::Arc;

use spadev::config::{AppState, Config};
use spadev::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    logger::log_server_start(&addr, &cfg);

    if cfg.server.open {
        server::open_browser(&cfg.browser_url());
    }

    let state = Arc::new(AppState::new(cfg));

    // LocalSet for spawn_local support in connection handling
    let local = tokio::task::LocalSet::new();
    local.run_until(server::run(listener, state)).await
}

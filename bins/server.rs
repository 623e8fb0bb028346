use tokio::runtime::Builder;

fn main() -> anyhow::Result<()> {
    // Runtime is sized from config before the async entry point runs.
    let worker_threads = configs::load_default()
        .ok()
        .and_then(|cfg| cfg.server.worker_threads)
        .filter(|&w| w > 0)
        .unwrap_or(4);

    Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?
        .block_on(server::run())
}

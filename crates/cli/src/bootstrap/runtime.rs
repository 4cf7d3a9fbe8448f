use anyhow::Context;
use massresolve_domain::config::ResolverConfig;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// Multi-thread runtime sized by `resolver.worker_threads`.
pub fn build_runtime(config: &ResolverConfig) -> anyhow::Result<Runtime> {
    let runtime = Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .thread_name("massresolve-worker")
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    debug!(worker_threads = config.worker_threads, "Runtime built");
    Ok(runtime)
}

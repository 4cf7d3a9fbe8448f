use massresolve_application::use_cases::{
    AnswerProcessor, InputFeed, Orchestrator, OrchestratorConfig,
};
use massresolve_domain::Config;
use massresolve_infrastructure::dns::{HickoryCodec, UdpResolverService};
use massresolve_infrastructure::io::{open_input, StdoutSink};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::info;

/// Wires the input feed, resolver service, codec and stdout sink into one
/// orchestrator.
pub fn build_orchestrator(
    config: &Config,
    handle: Handle,
) -> anyhow::Result<Arc<Orchestrator<HickoryCodec>>> {
    let reader = open_input(&config.input)?;
    let feed = InputFeed::new(reader, config.input.field);

    let resolver = UdpResolverService::from_config(handle, &config.resolver)?;
    info!(upstreams = ?resolver.upstreams(), "Resolver service ready");

    let processor = AnswerProcessor::new(
        HickoryCodec::new(),
        Arc::new(StdoutSink::stdout()),
        config.query.record_type,
    );

    Ok(Orchestrator::new(
        OrchestratorConfig {
            record_type: config.query.record_type,
            record_class: config.query.record_class,
            max_in_flight: config.query.max_in_flight,
            seed_name: config.query.seed_name.clone(),
        },
        Arc::new(resolver),
        processor,
        feed,
    ))
}

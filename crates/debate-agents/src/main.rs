use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use debate_agents::completion::{check_endpoint, OpenAiCompatService};
use debate_agents::config::GameConfig;
use debate_agents::driver::GameDriver;
use debate_agents::engine::RoundEngine;
use debate_agents::prompts::PROMPT_VERSION;
use protocol::DebateState;

/// Hard timeout for each completion call.
const COMPLETION_TIMEOUT_SECS: u64 = 120;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = GameConfig::default();
    info!(
        endpoint = %config.endpoint.url,
        model = %config.endpoint.model,
        relation_set = %config.relation_set,
        forbidden_patterns = %config.forbidden_patterns,
        rounds = config.max_rounds,
        prompt_version = PROMPT_VERSION,
        "Semantic debate starting"
    );

    if !check_endpoint(&config.endpoint.url).await {
        warn!(
            url = %config.endpoint.url,
            "completion endpoint not reachable — author turns will burn their retry budget"
        );
    }

    // The service is built once and injected; nothing else holds model state.
    let service = Arc::new(OpenAiCompatService::new(
        &config.endpoint,
        config.temperature,
        Duration::from_secs(COMPLETION_TIMEOUT_SECS),
    )?);

    let state = DebateState::new(config.relation_set.clone(), config.forbidden_patterns.clone());
    let engine = RoundEngine::new(service, state, config.author_retry, config.max_tokens);
    let outcome = GameDriver::new(engine, config.max_rounds).run().await;

    info!("Game over. {}", outcome.summary.summary_line());
    info!(history = ?outcome.summary.tau_history, "Evolution of τ");

    Ok(())
}

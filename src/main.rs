use std::sync::Arc;

use anyhow::Context;
use promptdeck::{
    catalog::load_catalog_file,
    cli::config_path_from_args,
    config::Config,
    logging::init_tracing,
    recommend::RecommendEngine,
    server,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = config_path_from_args()?;
    let config = Config::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    let logging_guard = init_tracing(&config.logging)?;
    tracing::info!(target: "main", run_id = logging_guard.run_id(), "starting");

    let catalog = load_catalog_file(&config.catalog.path)
        .with_context(|| format!("failed to load catalog {}", config.catalog.path.display()))?;
    if catalog.is_empty() {
        tracing::warn!(target: "main", "catalog is empty: every request will match nothing");
    }

    let engine = RecommendEngine::new(
        Arc::new(catalog),
        config.recommend.weights,
        config.recommend.synonym_table(),
        config.recommend.min_token_len,
    );

    server::run(config, engine).await
}

use std::sync::Arc;

use anyhow::{Context, anyhow};
use processing::{
    executable_utils::{initialize_executable, initialize_tracing, run_backend},
    importer::Importer,
    storage::{InMemoryScoreStorage, ScoreStorage},
};
use receipts::{Receipt, get_rule_based_scorer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("Starting backend...");
    let config = initialize_executable()
        .map_err(|e| anyhow!(e))
        .context("failed to load configuration")?;
    initialize_tracing(&config.backend.log_level);
    tracing::info!(project = %config.common.project_name, "Configuration loaded");

    let storage: Arc<dyn ScoreStorage<Receipt>> = Arc::new(InMemoryScoreStorage::new());
    let importer = Importer::new(Arc::new(get_rule_based_scorer()), storage);

    run_backend(config.backend, importer)
        .await
        .map_err(|e| anyhow!(e))
        .context("backend service failed")
}

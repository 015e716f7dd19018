// One-shot run lifecycle: load prior state, sample, delta, persist,
// forward or score. No retry loop and no scheduling; periodicity is the
// invoker's job. Two invocations racing on one store can lose prior-state
// updates (accepted limitation of the one-shot design).

use crate::config::{Families, RunConfig, ScoreConfig};
use crate::counter_repo::CounterRepo;
use crate::delta::build_delta_snapshot;
use crate::error::ProbeError;
use crate::forwarder;
use crate::models::DeltaSnapshot;
use crate::score;
use crate::state_repo::StateRepo;

/// Collect variant: the delta snapshot is persisted to the log, forwarded
/// to the collector and returned for printing.
pub async fn run_collect(config: &RunConfig) -> Result<DeltaSnapshot, ProbeError> {
    let repo = StateRepo::connect(&config.store_path).await?;
    repo.init().await?;
    let mut state = repo.load_state().await?;
    if state.is_empty() {
        tracing::info!("no prior counter state, first run against this store");
    }

    let counters = CounterRepo::new();
    let snapshot = counters.sample(config.families).await?;
    let delta = build_delta_snapshot(&snapshot, &mut state);

    repo.save_state(&state).await?;
    let payload = serde_json::to_string(&delta)?;
    repo.append_snapshot(&payload).await?;

    // Snapshot is durable by now; an unreachable collector only costs the
    // datagram.
    if let Err(e) =
        forwarder::send_once(&config.collector_host, config.collector_port, payload.as_bytes())
            .await
    {
        tracing::warn!(error = %e, operation = "forward_snapshot", "snapshot not forwarded");
    }

    Ok(delta)
}

/// Score variant: same sampling and baseline discipline as collect, but
/// nothing is appended to the log and nothing is forwarded.
pub async fn run_score(config: &ScoreConfig) -> Result<f64, ProbeError> {
    let repo = StateRepo::connect(&config.store_path).await?;
    repo.init().await?;
    let mut state = repo.load_state().await?;

    let counters = CounterRepo::new();
    let snapshot = counters.sample(Families::all()).await?;
    let delta = build_delta_snapshot(&snapshot, &mut state);
    repo.save_state(&state).await?;

    let stats = score::stats_from_delta(&delta);
    Ok(score::score(&stats, &config.profile.weights()))
}

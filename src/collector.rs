// One all-or-nothing collection pass over the provider.

use std::time::Duration;

use crate::error::CollectionError;
use crate::models::RawSnapshot;
use crate::provider::MetricsProvider;

/// Runs the five provider fetches concurrently and waits for all of them.
/// The first failure aborts the pass; nothing partial is returned. No retries.
pub async fn collect(
    provider: &dyn MetricsProvider,
    limit: Duration,
) -> Result<RawSnapshot, CollectionError> {
    let fetch = async {
        tokio::try_join!(
            provider.current_load(),
            provider.cpu(),
            provider.mem(),
            provider.network_stats(),
            provider.fs_size(),
        )
    };
    let (load, cpu, mem, interfaces, volumes) = tokio::time::timeout(limit, fetch)
        .await
        .map_err(|_| CollectionError::Timeout(limit))?
        .map_err(CollectionError::Provider)?;

    tracing::debug!(
        operation = "collect",
        cores = load.cpus.len(),
        interfaces = interfaces.len(),
        volumes = volumes.len(),
        "snapshot collected"
    );

    Ok(RawSnapshot {
        load,
        cpu,
        mem,
        interfaces,
        volumes,
    })
}

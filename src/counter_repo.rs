// Host counters via sysinfo

use crate::config::Families;
use crate::error::ProbeError;
use crate::models::{CounterSnapshot, DiskCounters, NetCounters};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use sysinfo::{Disks, Networks, System};
use tracing::instrument;

pub struct CounterRepo {
    disks: Arc<Mutex<Disks>>,
    networks: Arc<Mutex<Networks>>,
}

impl Default for CounterRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterRepo {
    pub fn new() -> Self {
        Self {
            disks: Arc::new(Mutex::new(Disks::new_with_refreshed_list())),
            networks: Arc::new(Mutex::new(Networks::new_with_refreshed_list())),
        }
    }

    #[instrument(skip(self), fields(repo = "counter", operation = "get_load"))]
    pub async fn get_load(&self) -> Result<f64, ProbeError> {
        tokio::task::spawn_blocking(|| System::load_average().one)
            .await
            .map_err(|e| ProbeError::Counter(format!("load task join: {e}")))
    }

    /// Cumulative read/write byte counters per disk device.
    #[instrument(skip(self), fields(repo = "counter", operation = "get_disk_counters"))]
    pub async fn get_disk_counters(&self) -> Result<BTreeMap<String, DiskCounters>, ProbeError> {
        let disks = self.disks.clone();
        tokio::task::spawn_blocking(move || {
            let mut disks = disks
                .lock()
                .map_err(|e| ProbeError::Counter(format!("disks lock poisoned: {e}")))?;
            disks.refresh(false);
            let mut out = BTreeMap::new();
            for d in disks.list() {
                let usage = d.usage();
                out.insert(
                    d.name().to_string_lossy().into_owned(),
                    DiskCounters {
                        read_count: usage.total_read_bytes as i64,
                        write_count: usage.total_written_bytes as i64,
                    },
                );
            }
            Ok(out)
        })
        .await
        .map_err(|e| ProbeError::Counter(format!("disks task join: {e}")))?
    }

    /// Cumulative sent/received byte counters per interface.
    #[instrument(skip(self), fields(repo = "counter", operation = "get_net_counters"))]
    pub async fn get_net_counters(&self) -> Result<BTreeMap<String, NetCounters>, ProbeError> {
        let networks = self.networks.clone();
        tokio::task::spawn_blocking(move || {
            let mut networks = networks
                .lock()
                .map_err(|e| ProbeError::Counter(format!("networks lock poisoned: {e}")))?;
            networks.refresh(true);
            let mut out = BTreeMap::new();
            for (name, data) in networks.list() {
                out.insert(
                    name.clone(),
                    NetCounters {
                        bytes_sent: data.total_transmitted() as i64,
                        bytes_recv: data.total_received() as i64,
                    },
                );
            }
            Ok(out)
        })
        .await
        .map_err(|e| ProbeError::Counter(format!("networks task join: {e}")))?
    }

    /// Samples the enabled families into one timestamped snapshot.
    /// Disabled families stay empty (load stays 0.0).
    #[instrument(skip(self), fields(repo = "counter", operation = "sample"))]
    pub async fn sample(&self, families: Families) -> Result<CounterSnapshot, ProbeError> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, operation = "get_timestamp", "system time error");
                0
            });

        let load = if families.load { self.get_load().await? } else { 0.0 };
        let disks = if families.io {
            self.get_disk_counters().await?
        } else {
            BTreeMap::new()
        };
        let interfaces = if families.net {
            self.get_net_counters().await?
        } else {
            BTreeMap::new()
        };

        Ok(CounterSnapshot {
            timestamp,
            load,
            disks,
            interfaces,
        })
    }
}

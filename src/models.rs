// Domain models. DeltaSnapshot is the wire format: the same JSON goes to
// the snapshot log and the collector datagram.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Absolute cumulative disk counters for one device, as read from the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskCounters {
    pub read_count: i64,
    pub write_count: i64,
}

/// Absolute cumulative byte counters for one network interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetCounters {
    pub bytes_sent: i64,
    pub bytes_recv: i64,
}

/// One run's raw readings. Disabled families leave their maps empty (and
/// load at 0.0); never mutated after sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    /// Epoch millis at sampling time.
    pub timestamp: u64,
    /// 1-minute load average.
    pub load: f64,
    pub disks: BTreeMap<String, DiskCounters>,
    pub interfaces: BTreeMap<String, NetCounters>,
}

/// Per-interval deltas for one run. Sources with no usable prior value are
/// omitted from the maps and contribute nothing to the family totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeltaSnapshot {
    #[serde(rename = "time")]
    pub timestamp: u64,
    pub load: f64,
    pub io_read: BTreeMap<String, i64>,
    pub io_read_total: i64,
    pub io_write: BTreeMap<String, i64>,
    pub io_write_total: i64,
    pub net_sent: BTreeMap<String, i64>,
    pub net_sent_total: i64,
    pub net_recv: BTreeMap<String, i64>,
    pub net_recv_total: i64,
}

/// Metric magnitudes fed to the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatSet {
    pub load: f64,
    pub io_read: f64,
    pub io_write: f64,
    pub net: f64,
}

/// Per-profile weights for the health sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsWeight {
    pub load: f64,
    pub io_read: f64,
    pub io_write: f64,
    pub net: f64,
}

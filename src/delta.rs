// Interval deltas against persisted absolute counters.

use crate::models::{CounterSnapshot, DeltaSnapshot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Last observed absolute counter values, keyed by source name (disk device
/// or network interface). Loaded from the store at startup, mutated in
/// place while the delta snapshot is built, written back at the end of the
/// run. Counters are assumed monotonically non-decreasing between runs;
/// a counter that went backwards produces a negative delta, left as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CounterState {
    pub io_read: BTreeMap<String, i64>,
    pub io_write: BTreeMap<String, i64>,
    pub net_sent: BTreeMap<String, i64>,
    pub net_recv: BTreeMap<String, i64>,
}

impl CounterState {
    pub fn is_empty(&self) -> bool {
        self.io_read.is_empty()
            && self.io_write.is_empty()
            && self.net_sent.is_empty()
            && self.net_recv.is_empty()
    }
}

/// Delta for one source in one counter family.
///
/// Returns `None` on the first observation of `source`, or when the stored
/// prior is exactly zero (a persisted zero is indistinguishable from
/// "never seen"). The prior entry is overwritten with `current` either
/// way, so the next run always diffs against the latest reading.
pub fn compute_delta(
    prior: &mut BTreeMap<String, i64>,
    source: &str,
    current: i64,
) -> Option<i64> {
    let delta = match prior.get(source) {
        Some(&p) if p > 0 => Some(current - p),
        _ => None,
    };
    prior.insert(source.to_string(), current);
    delta
}

/// One family: per-source deltas plus their sum. Sources with an absent
/// delta are omitted from the map and contribute zero to the total.
fn family_deltas<'a>(
    prior: &mut BTreeMap<String, i64>,
    current: impl IntoIterator<Item = (&'a String, i64)>,
) -> (BTreeMap<String, i64>, i64) {
    let mut deltas = BTreeMap::new();
    let mut total = 0i64;
    for (name, value) in current {
        if let Some(d) = compute_delta(prior, name, value) {
            total += d;
            deltas.insert(name.clone(), d);
        }
    }
    (deltas, total)
}

/// Builds the delta snapshot for one run and advances `state` to the
/// current absolute values. Families are independent; load passes through
/// without a delta. A family the run did not sample has an empty map in
/// `snapshot` and leaves its state map untouched.
pub fn build_delta_snapshot(
    snapshot: &CounterSnapshot,
    state: &mut CounterState,
) -> DeltaSnapshot {
    let (io_read, io_read_total) = family_deltas(
        &mut state.io_read,
        snapshot.disks.iter().map(|(n, c)| (n, c.read_count)),
    );
    let (io_write, io_write_total) = family_deltas(
        &mut state.io_write,
        snapshot.disks.iter().map(|(n, c)| (n, c.write_count)),
    );
    let (net_sent, net_sent_total) = family_deltas(
        &mut state.net_sent,
        snapshot.interfaces.iter().map(|(n, c)| (n, c.bytes_sent)),
    );
    let (net_recv, net_recv_total) = family_deltas(
        &mut state.net_recv,
        snapshot.interfaces.iter().map(|(n, c)| (n, c.bytes_recv)),
    );

    DeltaSnapshot {
        timestamp: snapshot.timestamp,
        load: snapshot.load,
        io_read,
        io_read_total,
        io_write,
        io_write_total,
        net_sent,
        net_sent_total,
        net_recv,
        net_recv_total,
    }
}

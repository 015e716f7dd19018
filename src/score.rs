// Weighted health scoring: one workload profile, one scalar out.

use crate::error::ProbeError;
use crate::models::{DeltaSnapshot, StatSet, StatsWeight};

/// Workload profile selecting which metric family dominates the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Cpu,
    Storage,
    Network,
}

impl Profile {
    /// Resolves the three mutually-exclusive CLI flags. Zero or more than
    /// one selection is a configuration error, raised before any sampling
    /// or store access happens.
    pub fn from_flags(cpu: bool, storage: bool, network: bool) -> Result<Self, ProbeError> {
        match (cpu, storage, network) {
            (true, false, false) => Ok(Profile::Cpu),
            (false, true, false) => Ok(Profile::Storage),
            (false, false, true) => Ok(Profile::Network),
            (false, false, false) => Err(ProbeError::Config(
                "select a profile: --cpu, --storage or --network".into(),
            )),
            _ => Err(ProbeError::Config(
                "profiles are mutually exclusive: pass exactly one of --cpu, --storage, --network"
                    .into(),
            )),
        }
    }

    pub fn weights(self) -> StatsWeight {
        match self {
            Profile::Cpu => StatsWeight {
                load: 1.0,
                io_read: 0.2,
                io_write: 0.2,
                net: 0.6,
            },
            Profile::Storage => StatsWeight {
                load: 0.6,
                io_read: 1.0,
                io_write: 1.0,
                net: 0.2,
            },
            Profile::Network => StatsWeight {
                load: 0.5,
                io_read: 0.2,
                io_write: 0.2,
                net: 1.0,
            },
        }
    }
}

/// Weighted sum over the four stat magnitudes. Output is unbounded and
/// caller-interpreted.
pub fn score(stats: &StatSet, weights: &StatsWeight) -> f64 {
    stats.load * weights.load
        + stats.io_read * weights.io_read
        + stats.io_write * weights.io_write
        + stats.net * weights.net
}

/// Stat magnitudes for scoring, taken from the same delta pipeline as the
/// collect variant. Both net directions fold into the single net stat.
pub fn stats_from_delta(delta: &DeltaSnapshot) -> StatSet {
    StatSet {
        load: delta.load,
        io_read: delta.io_read_total as f64,
        io_write: delta.io_write_total as f64,
        net: (delta.net_sent_total + delta.net_recv_total) as f64,
    }
}

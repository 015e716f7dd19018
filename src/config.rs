// Run configuration assembled from CLI flags.

use crate::cli::{CollectArgs, ScoreArgs};
use crate::error::ProbeError;
use crate::score::Profile;
use std::path::PathBuf;

/// Which counter families a run samples.
#[derive(Debug, Clone, Copy)]
pub struct Families {
    pub load: bool,
    pub io: bool,
    pub net: bool,
}

impl Families {
    pub fn all() -> Self {
        Self {
            load: true,
            io: true,
            net: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub families: Families,
    pub store_path: PathBuf,
    pub collector_host: String,
    pub collector_port: u16,
}

impl RunConfig {
    pub fn from_args(args: &CollectArgs) -> Result<Self, ProbeError> {
        let config = Self {
            families: Families {
                load: !args.disable_load,
                io: !args.disable_io,
                net: !args.disable_network,
            },
            store_path: args.store_path.clone(),
            collector_host: args.collector_host.clone(),
            collector_port: args.collector_port,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ProbeError> {
        if self.collector_host.is_empty() {
            return Err(ProbeError::Config("collector-host must be non-empty".into()));
        }
        if self.collector_port == 0 {
            return Err(ProbeError::Config(format!(
                "collector-port must be between 1 and 65535, got {}",
                self.collector_port
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub profile: Profile,
    pub store_path: PathBuf,
}

impl ScoreConfig {
    /// Profile validation happens here, before any sampling or store
    /// access.
    pub fn from_args(args: &ScoreArgs) -> Result<Self, ProbeError> {
        let profile = Profile::from_flags(args.cpu, args.storage, args.network)?;
        Ok(Self {
            profile,
            store_path: args.store_path.clone(),
        })
    }
}

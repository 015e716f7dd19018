// Health scorer tests: weight vectors, profile selection, stat wiring

use statprobe::error::ProbeError;
use statprobe::models::{DeltaSnapshot, StatSet};
use statprobe::score::{Profile, score, stats_from_delta};

#[test]
fn cpu_profile_scores_pure_load() {
    let stats = StatSet {
        load: 2.0,
        io_read: 0.0,
        io_write: 0.0,
        net: 0.0,
    };
    let health = score(&stats, &Profile::Cpu.weights());
    assert_eq!(health, 2.0);
}

#[test]
fn storage_profile_scores_io() {
    let stats = StatSet {
        load: 0.0,
        io_read: 3.0,
        io_write: 1.0,
        net: 0.0,
    };
    let health = score(&stats, &Profile::Storage.weights());
    assert_eq!(health, 4.0);
}

#[test]
fn network_profile_weights_net_most() {
    let w = Profile::Network.weights();
    assert_eq!(w.load, 0.5);
    assert_eq!(w.io_read, 0.2);
    assert_eq!(w.io_write, 0.2);
    assert_eq!(w.net, 1.0);

    let stats = StatSet {
        load: 1.0,
        io_read: 1.0,
        io_write: 1.0,
        net: 1.0,
    };
    let health = score(&stats, &w);
    assert!((health - 1.9).abs() < 1e-12);
}

#[test]
fn exactly_one_profile_flag_is_required() {
    assert_eq!(Profile::from_flags(true, false, false).unwrap(), Profile::Cpu);
    assert_eq!(
        Profile::from_flags(false, true, false).unwrap(),
        Profile::Storage
    );
    assert_eq!(
        Profile::from_flags(false, false, true).unwrap(),
        Profile::Network
    );
}

#[test]
fn no_profile_flag_is_a_config_error() {
    let err = Profile::from_flags(false, false, false).unwrap_err();
    assert!(matches!(err, ProbeError::Config(_)));
}

#[test]
fn multiple_profile_flags_are_a_config_error() {
    for (cpu, storage, network) in [
        (true, true, false),
        (true, false, true),
        (false, true, true),
        (true, true, true),
    ] {
        let err = Profile::from_flags(cpu, storage, network).unwrap_err();
        assert!(matches!(err, ProbeError::Config(_)));
    }
}

#[test]
fn stats_come_from_delta_totals() {
    let delta = DeltaSnapshot {
        load: 1.5,
        io_read_total: 10,
        io_write_total: 20,
        net_sent_total: 30,
        net_recv_total: 40,
        ..Default::default()
    };
    let stats = stats_from_delta(&delta);
    assert_eq!(stats.load, 1.5);
    assert_eq!(stats.io_read, 10.0);
    assert_eq!(stats.io_write, 20.0);
    assert_eq!(stats.net, 70.0);
}

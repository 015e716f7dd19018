// Model serialization tests (wire field names, JSON roundtrip)

use statprobe::models::*;
use std::collections::BTreeMap;

fn sample_delta() -> DeltaSnapshot {
    DeltaSnapshot {
        timestamp: 1700000000000,
        load: 0.42,
        io_read: BTreeMap::from([("sda".to_string(), 120i64), ("sdb".to_string(), -3i64)]),
        io_read_total: 117,
        io_write: BTreeMap::from([("sda".to_string(), 55i64)]),
        io_write_total: 55,
        net_sent: BTreeMap::from([("eth0".to_string(), 2048i64)]),
        net_sent_total: 2048,
        net_recv: BTreeMap::from([("eth0".to_string(), 4096i64)]),
        net_recv_total: 4096,
    }
}

#[test]
fn delta_snapshot_wire_field_names() {
    let json = serde_json::to_string(&sample_delta()).unwrap();
    assert!(json.contains("\"time\""));
    assert!(json.contains("\"load\""));
    assert!(json.contains("\"io_read\""));
    assert!(json.contains("\"io_read_total\""));
    assert!(json.contains("\"io_write_total\""));
    assert!(json.contains("\"net_sent\""));
    assert!(json.contains("\"net_recv_total\""));
    assert!(!json.contains("\"timestamp\""));
}

#[test]
fn delta_snapshot_json_roundtrip_is_identical() {
    let delta = sample_delta();
    let json = serde_json::to_string(&delta).unwrap();
    let back: DeltaSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, delta);
}

#[test]
fn delta_snapshot_serialization_is_deterministic() {
    let delta = sample_delta();
    let a = serde_json::to_string(&delta).unwrap();
    let b = serde_json::to_string(&delta.clone()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn counter_snapshot_roundtrip() {
    let snapshot = CounterSnapshot {
        timestamp: 123,
        load: 1.25,
        disks: BTreeMap::from([(
            "sda".to_string(),
            DiskCounters {
                read_count: 10,
                write_count: 20,
            },
        )]),
        interfaces: BTreeMap::from([(
            "eth0".to_string(),
            NetCounters {
                bytes_sent: 30,
                bytes_recv: 40,
            },
        )]),
    };
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"read_count\""));
    assert!(json.contains("\"bytes_recv\""));
    let back: CounterSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn negative_deltas_survive_roundtrip() {
    let delta = DeltaSnapshot {
        io_read: BTreeMap::from([("sda".to_string(), -500i64)]),
        io_read_total: -500,
        ..Default::default()
    };
    let json = serde_json::to_string(&delta).unwrap();
    let back: DeltaSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.io_read.get("sda"), Some(&-500));
    assert_eq!(back.io_read_total, -500);
}

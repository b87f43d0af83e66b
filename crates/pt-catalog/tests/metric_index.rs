use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use pt_catalog::{RunCatalog, available_channels, default_selection};
use pt_core::{MetricChannel, MetricKind, PumpId};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

fn write_run_with_files(root: &Path, name: &str, files: &[&str]) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).expect("failed to create run dir");
    for file in files {
        fs::write(dir.join(file), "time\theader\n").expect("failed to write metric file");
    }
}

#[test]
fn channels_come_from_file_names_sorted_by_pump_then_metric() {
    let root = unique_temp_dir("pt_index_sorted");
    fs::create_dir_all(&root).expect("failed to create data root");
    write_run_with_files(
        &root,
        "run",
        &[
            "Pump-HP_Actual-flow.txt",
            "Pump-HP_Pressure.txt",
            "Pump-A_Actual-flow.txt",
            "journal.txt",
            "notes.txt",
        ],
    );

    let catalog = RunCatalog::refresh(&root).expect("failed to refresh catalog");
    let run = catalog.get("run").expect("run missing from catalog");
    let channels = available_channels(run).expect("failed to list channels");
    assert_eq!(
        channels,
        [
            MetricChannel::new(PumpId::A, MetricKind::ActualFlow),
            MetricChannel::new(PumpId::Hp, MetricKind::Pressure),
            MetricChannel::new(PumpId::Hp, MetricKind::ActualFlow),
        ]
    );
}

#[test]
fn unknown_pump_or_metric_names_are_skipped() {
    let root = unique_temp_dir("pt_index_unknown");
    fs::create_dir_all(&root).expect("failed to create data root");
    write_run_with_files(
        &root,
        "run",
        &[
            "Pump-E_Pressure.txt",
            "Pump-HP_Voltage.txt",
            "Pump-HP_Pressure.csv",
            "Pump-B_Setpoint.txt",
        ],
    );

    let catalog = RunCatalog::refresh(&root).expect("failed to refresh catalog");
    let run = catalog.get("run").expect("run missing from catalog");
    let channels = available_channels(run).expect("failed to list channels");
    assert_eq!(
        channels,
        [MetricChannel::new(PumpId::B, MetricKind::Setpoint)]
    );
}

#[test]
fn empty_run_folder_has_no_channels() {
    let root = unique_temp_dir("pt_index_empty");
    fs::create_dir_all(&root).expect("failed to create data root");
    write_run_with_files(&root, "run", &[]);

    let catalog = RunCatalog::refresh(&root).expect("failed to refresh catalog");
    let run = catalog.get("run").expect("run missing from catalog");
    assert!(available_channels(run).expect("failed to list channels").is_empty());
}

#[test]
fn vanished_run_folder_yields_empty_listing() {
    let root = unique_temp_dir("pt_index_vanished");
    fs::create_dir_all(&root).expect("failed to create data root");
    write_run_with_files(&root, "run", &["Pump-HP_Pressure.txt"]);

    let catalog = RunCatalog::refresh(&root).expect("failed to refresh catalog");
    let run = catalog.get("run").expect("run missing from catalog").clone();
    fs::remove_dir_all(run.path()).expect("failed to remove run dir");

    assert!(available_channels(&run).expect("failed to list channels").is_empty());
}

#[test]
fn default_selection_is_hp_pressure_and_actual_flow() {
    let channels = [
        MetricChannel::new(PumpId::A, MetricKind::Pressure),
        MetricChannel::new(PumpId::Hp, MetricKind::Pressure),
        MetricChannel::new(PumpId::Hp, MetricKind::ActualFlow),
        MetricChannel::new(PumpId::Hp, MetricKind::Setpoint),
    ];
    assert_eq!(
        default_selection(&channels),
        [
            MetricChannel::new(PumpId::Hp, MetricKind::Pressure),
            MetricChannel::new(PumpId::Hp, MetricKind::ActualFlow),
        ]
    );
}

#[test]
fn default_selection_is_empty_without_hp_channels() {
    let channels = [
        MetricChannel::new(PumpId::A, MetricKind::Pressure),
        MetricChannel::new(PumpId::B, MetricKind::ActualFlow),
    ];
    assert!(default_selection(&channels).is_empty());
}

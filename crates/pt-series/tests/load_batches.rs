use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use pt_catalog::RunCatalog;
use pt_core::{MetricChannel, MetricKind, PumpId, SeriesKey};
use pt_series::load_series;

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

fn write_channel(root: &Path, run: &str, channel: MetricChannel, samples: &[(&str, f64)]) {
    let dir = root.join(run);
    fs::create_dir_all(&dir).expect("failed to create run dir");
    let mut content = format!("time\t{}\n", channel.header_label());
    for (time, value) in samples {
        content.push_str(&format!("{time}\t{value:.3}\n"));
    }
    fs::write(dir.join(channel.file_name()), content).expect("failed to write metric file");
}

fn hp_pressure() -> MetricChannel {
    MetricChannel::new(PumpId::Hp, MetricKind::Pressure)
}

fn hp_flow() -> MetricChannel {
    MetricChannel::new(PumpId::Hp, MetricKind::ActualFlow)
}

fn a_setpoint() -> MetricChannel {
    MetricChannel::new(PumpId::A, MetricKind::Setpoint)
}

#[test]
fn batch_tolerates_missing_channels() {
    let root = unique_temp_dir("pt_load_missing");
    fs::create_dir_all(&root).expect("failed to create data root");
    for channel in [hp_pressure(), hp_flow(), a_setpoint()] {
        write_channel(&root, "run-1", channel, &[("00:00:00.000", 1.0)]);
    }
    // run-2 never recorded the setpoint channel.
    write_channel(&root, "run-2", hp_pressure(), &[("00:00:00.000", 2.0)]);
    write_channel(&root, "run-2", hp_flow(), &[("00:00:00.000", 2.5)]);

    let catalog = RunCatalog::refresh(&root).expect("failed to refresh catalog");
    let run1 = catalog.get("run-1").unwrap();
    let run2 = catalog.get("run-2").unwrap();
    let selections = vec![
        (run1, hp_pressure()),
        (run1, hp_flow()),
        (run1, a_setpoint()),
        (run2, hp_pressure()),
        (run2, hp_flow()),
        (run2, a_setpoint()),
    ];

    let outcome = load_series(&selections);
    assert_eq!(outcome.series.len(), 5);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(
        outcome.failures[0].key,
        SeriesKey::new("run-2", a_setpoint())
    );
}

#[test]
fn outcome_preserves_selection_order() {
    let root = unique_temp_dir("pt_load_order");
    fs::create_dir_all(&root).expect("failed to create data root");
    for channel in [hp_pressure(), hp_flow(), a_setpoint()] {
        write_channel(&root, "run", channel, &[("00:00:00.000", 1.0)]);
    }

    let catalog = RunCatalog::refresh(&root).expect("failed to refresh catalog");
    let run = catalog.get("run").unwrap();
    // Deliberately not in sorted order.
    let selections = vec![(run, a_setpoint()), (run, hp_pressure()), (run, hp_flow())];

    let outcome = load_series(&selections);
    let keys: Vec<&SeriesKey> = outcome.series.iter().map(|series| &series.key).collect();
    assert_eq!(
        keys,
        [
            &SeriesKey::new("run", a_setpoint()),
            &SeriesKey::new("run", hp_pressure()),
            &SeriesKey::new("run", hp_flow()),
        ]
    );
}

#[test]
fn repeating_a_load_gives_identical_results() {
    let root = unique_temp_dir("pt_load_repeat");
    fs::create_dir_all(&root).expect("failed to create data root");
    write_channel(
        &root,
        "run",
        hp_pressure(),
        &[("00:00:00.072", 176.4), ("00:00:00.085", 176.8)],
    );

    let catalog = RunCatalog::refresh(&root).expect("failed to refresh catalog");
    let run = catalog.get("run").unwrap();
    let selections = vec![(run, hp_pressure()), (run, hp_flow())];

    let first = load_series(&selections);
    let second = load_series(&selections);

    assert_eq!(first.series, second.series);
    let first_failures: Vec<(SeriesKey, String)> = first
        .failures
        .iter()
        .map(|failure| (failure.key.clone(), failure.error.to_string()))
        .collect();
    let second_failures: Vec<(SeriesKey, String)> = second
        .failures
        .iter()
        .map(|failure| (failure.key.clone(), failure.error.to_string()))
        .collect();
    assert_eq!(first_failures, second_failures);
    assert_eq!(first_failures.len(), 1);
}

#[test]
fn empty_selection_loads_nothing() {
    let outcome = load_series(&[]);
    assert!(outcome.series.is_empty());
    assert!(outcome.failures.is_empty());
}

#[test]
fn outcome_lookup_by_key() {
    let root = unique_temp_dir("pt_load_lookup");
    fs::create_dir_all(&root).expect("failed to create data root");
    write_channel(&root, "run", hp_pressure(), &[("00:00:00.000", 42.0)]);

    let catalog = RunCatalog::refresh(&root).expect("failed to refresh catalog");
    let run = catalog.get("run").unwrap();
    let outcome = load_series(&[(run, hp_pressure())]);

    let key = SeriesKey::new("run", hp_pressure());
    let series = outcome.get(&key).expect("series missing from outcome");
    assert_eq!(series.points[0].value, 42.0);
    assert!(outcome.get(&SeriesKey::new("other", hp_pressure())).is_none());
}

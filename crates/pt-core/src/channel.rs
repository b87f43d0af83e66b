//! Channel identity: which pump, which metric, which file.
//!
//! The controller writes one text file per (pump, metric) pair into each run
//! folder, named `Pump-<PUMP>_<METRIC>.txt`. Everything downstream keys off
//! that pair, so it gets a proper type here instead of a pair of strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the pump channels recorded by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PumpId {
    A,
    B,
    C,
    D,
    /// The high-pressure pump.
    #[serde(rename = "HP")]
    Hp,
}

impl PumpId {
    pub const ALL: [PumpId; 5] = [PumpId::A, PumpId::B, PumpId::C, PumpId::D, PumpId::Hp];

    /// Token used in metric file names, `Pump-<token>_...`.
    pub fn token(self) -> &'static str {
        match self {
            PumpId::A => "A",
            PumpId::B => "B",
            PumpId::C => "C",
            PumpId::D => "D",
            PumpId::Hp => "HP",
        }
    }

    /// Inverse of [`PumpId::token`], tolerant of case.
    pub fn from_token(token: &str) -> Option<Self> {
        match normalize(token).as_str() {
            "a" => Some(PumpId::A),
            "b" => Some(PumpId::B),
            "c" => Some(PumpId::C),
            "d" => Some(PumpId::D),
            "hp" => Some(PumpId::Hp),
            _ => None,
        }
    }

    pub fn is_high_pressure(self) -> bool {
        matches!(self, PumpId::Hp)
    }
}

impl fmt::Display for PumpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Which Y axis family a metric belongs to when plotting in dual-axis mode.
///
/// Pressure runs hundreds of bar while the flow-family metrics stay in
/// single-digit microliters per minute, so sharing one axis flattens one of
/// them into the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisClass {
    Pressure,
    Flow,
}

/// A quantity the controller logs per pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetricKind {
    Pressure,
    ActualFlow,
    Setpoint,
    Displacement,
    PumpSpeed,
}

impl MetricKind {
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Pressure,
        MetricKind::ActualFlow,
        MetricKind::Setpoint,
        MetricKind::Displacement,
        MetricKind::PumpSpeed,
    ];

    /// Token used in metric file names, `Pump-X_<token>.txt`.
    pub fn token(self) -> &'static str {
        match self {
            MetricKind::Pressure => "Pressure",
            MetricKind::ActualFlow => "Actual-flow",
            MetricKind::Setpoint => "Setpoint",
            MetricKind::Displacement => "Displacement",
            MetricKind::PumpSpeed => "Pump-speed",
        }
    }

    /// Inverse of [`MetricKind::token`], tolerant of case and of `-`, `_`
    /// and space variations ("Actual-flow", "actual flow", "ActualFlow").
    pub fn from_token(token: &str) -> Option<Self> {
        match normalize(token).as_str() {
            "pressure" => Some(MetricKind::Pressure),
            "actualflow" => Some(MetricKind::ActualFlow),
            "setpoint" => Some(MetricKind::Setpoint),
            "displacement" => Some(MetricKind::Displacement),
            "pumpspeed" => Some(MetricKind::PumpSpeed),
            _ => None,
        }
    }

    /// Human-readable name, as shown in legends and channel listings.
    pub fn label(self) -> &'static str {
        match self {
            MetricKind::Pressure => "Pressure",
            MetricKind::ActualFlow => "Actual flow",
            MetricKind::Setpoint => "Setpoint",
            MetricKind::Displacement => "Displacement",
            MetricKind::PumpSpeed => "Pump speed",
        }
    }

    /// Engineering unit, when the metric has a fixed one.
    pub fn unit(self) -> Option<&'static str> {
        match self {
            MetricKind::Pressure => Some("bar"),
            MetricKind::ActualFlow => Some("µL/min"),
            MetricKind::Setpoint => None,
            MetricKind::Displacement => Some("µL"),
            MetricKind::PumpSpeed => Some("µL/min"),
        }
    }

    /// Label plus unit where one exists, e.g. `Pressure [bar]`.
    pub fn label_with_unit(self) -> String {
        match self.unit() {
            Some(unit) => format!("{} [{}]", self.label(), unit),
            None => self.label().to_string(),
        }
    }

    pub fn axis_class(self) -> AxisClass {
        match self {
            MetricKind::Pressure => AxisClass::Pressure,
            MetricKind::ActualFlow
            | MetricKind::Setpoint
            | MetricKind::Displacement
            | MetricKind::PumpSpeed => AxisClass::Flow,
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Strip `-`, `_` and spaces and lowercase, so that file tokens, labels and
/// user-typed names all compare equal.
fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// One selectable telemetry channel of a run: a (pump, metric) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MetricChannel {
    pub pump: PumpId,
    pub metric: MetricKind,
}

impl MetricChannel {
    pub fn new(pump: PumpId, metric: MetricKind) -> Self {
        Self { pump, metric }
    }

    /// File name this channel is recorded under, `Pump-<PUMP>_<METRIC>.txt`.
    pub fn file_name(&self) -> String {
        format!("Pump-{}_{}.txt", self.pump.token(), self.metric.token())
    }

    /// Decode a file name back into a channel. `None` for anything that does
    /// not follow the convention or names an unknown pump or metric.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(".txt")?;
        let rest = stem.strip_prefix("Pump-")?;
        let (pump, metric) = rest.split_once('_')?;
        Some(Self {
            pump: PumpId::from_token(pump)?,
            metric: MetricKind::from_token(metric)?,
        })
    }

    /// Legend-friendly name, e.g. `Pump HP: Pressure`.
    pub fn label(&self) -> String {
        format!("Pump {}: {}", self.pump.token(), self.metric.label())
    }

    /// Header text the controller writes into the file, e.g.
    /// `Pump HP:Pressure [bar]`.
    pub fn header_label(&self) -> String {
        format!("Pump {}:{}", self.pump.token(), self.metric.label_with_unit())
    }
}

impl fmt::Display for MetricChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pump-{}_{}", self.pump.token(), self.metric.token())
    }
}

impl FromStr for MetricChannel {
    type Err = String;

    /// Parse the `PUMP:METRIC` form used on command lines and in request
    /// files, e.g. `HP:Pressure` or `a:actual-flow`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (pump, metric) = s
            .split_once(':')
            .ok_or_else(|| format!("expected PUMP:METRIC, got `{s}`"))?;
        let pump = PumpId::from_token(pump.trim())
            .ok_or_else(|| format!("unknown pump `{}`", pump.trim()))?;
        let metric = MetricKind::from_token(metric.trim())
            .ok_or_else(|| format!("unknown metric `{}`", metric.trim()))?;
        Ok(Self { pump, metric })
    }
}

/// Identity of one loaded series: which run, which channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesKey {
    /// Run folder name.
    pub run: String,
    pub channel: MetricChannel,
}

impl SeriesKey {
    pub fn new(run: impl Into<String>, channel: MetricChannel) -> Self {
        Self {
            run: run.into(),
            channel,
        }
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.run, self.channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_round_trip_for_every_channel() {
        for pump in PumpId::ALL {
            for metric in MetricKind::ALL {
                let channel = MetricChannel::new(pump, metric);
                let name = channel.file_name();
                assert_eq!(MetricChannel::from_file_name(&name), Some(channel), "{name}");
            }
        }
    }

    #[test]
    fn known_file_names_decode() {
        let channel = MetricChannel::from_file_name("Pump-HP_Pressure.txt").unwrap();
        assert_eq!(channel.pump, PumpId::Hp);
        assert_eq!(channel.metric, MetricKind::Pressure);

        let channel = MetricChannel::from_file_name("Pump-A_Actual-flow.txt").unwrap();
        assert_eq!(channel.pump, PumpId::A);
        assert_eq!(channel.metric, MetricKind::ActualFlow);
    }

    #[test]
    fn unknown_file_names_are_rejected() {
        assert_eq!(MetricChannel::from_file_name("Pump-E_Pressure.txt"), None);
        assert_eq!(MetricChannel::from_file_name("Pump-HP_Voltage.txt"), None);
        assert_eq!(MetricChannel::from_file_name("Pump-HP_Pressure.csv"), None);
        assert_eq!(MetricChannel::from_file_name("Pump-HPPressure.txt"), None);
        assert_eq!(MetricChannel::from_file_name("journal.txt"), None);
        assert_eq!(MetricChannel::from_file_name("notes.txt"), None);
    }

    #[test]
    fn metric_tokens_match_loosely() {
        assert_eq!(MetricKind::from_token("Actual-flow"), Some(MetricKind::ActualFlow));
        assert_eq!(MetricKind::from_token("actual flow"), Some(MetricKind::ActualFlow));
        assert_eq!(MetricKind::from_token("ACTUAL_FLOW"), Some(MetricKind::ActualFlow));
        assert_eq!(MetricKind::from_token("Pump-speed"), Some(MetricKind::PumpSpeed));
        assert_eq!(MetricKind::from_token("flow"), None);
    }

    #[test]
    fn axis_classes_split_pressure_from_flow_family() {
        assert_eq!(MetricKind::Pressure.axis_class(), AxisClass::Pressure);
        for metric in [
            MetricKind::ActualFlow,
            MetricKind::Setpoint,
            MetricKind::Displacement,
            MetricKind::PumpSpeed,
        ] {
            assert_eq!(metric.axis_class(), AxisClass::Flow, "{metric}");
        }
    }

    #[test]
    fn channel_parses_from_cli_form() {
        let channel: MetricChannel = "HP:Pressure".parse().unwrap();
        assert_eq!(channel, MetricChannel::new(PumpId::Hp, MetricKind::Pressure));

        let channel: MetricChannel = " b : pump speed ".parse().unwrap();
        assert_eq!(channel, MetricChannel::new(PumpId::B, MetricKind::PumpSpeed));

        assert!("HP".parse::<MetricChannel>().is_err());
        assert!("HP:Voltage".parse::<MetricChannel>().is_err());
        assert!("E:Pressure".parse::<MetricChannel>().is_err());
    }

    #[test]
    fn labels_and_headers() {
        let channel = MetricChannel::new(PumpId::Hp, MetricKind::ActualFlow);
        assert_eq!(channel.label(), "Pump HP: Actual flow");
        assert_eq!(channel.header_label(), "Pump HP:Actual flow [µL/min]");
        assert_eq!(MetricKind::Setpoint.label_with_unit(), "Setpoint");
        assert_eq!(channel.to_string(), "Pump-HP_Actual-flow");
    }

    #[test]
    fn series_key_display_names_run_and_file_stem() {
        let key = SeriesKey::new(
            "200-SPD_2025-12-11_12-27-48",
            MetricChannel::new(PumpId::Hp, MetricKind::Pressure),
        );
        assert_eq!(key.to_string(), "200-SPD_2025-12-11_12-27-48/Pump-HP_Pressure");
    }
}

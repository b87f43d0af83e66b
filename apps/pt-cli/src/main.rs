use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use pt_app::{
    AppError, AppResult, PlotRequestDef, PlotResponse, compose_plot, load_request, parse_channels,
};
use pt_catalog::{RunCatalog, available_channels, default_selection};
use pt_chart::{ColorAllocator, ComposeOptions};
use pt_core::{MetricChannel, PumpId, SeriesKey};
use pt_series::parse_metric_file;

#[derive(Parser)]
#[command(name = "pt-cli")]
#[command(about = "pumptrace CLI - browse pump runs and compose chart specs", long_about = None)]
struct Cli {
    /// Data root holding one folder per run (defaults to $PUMPTRACE_DATA_ROOT)
    #[arg(long, global = true)]
    data_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List run folders under the data root
    Runs,
    /// List recorded channels for one run
    Channels {
        /// Run folder name
        run: String,
    },
    /// Compose a chart spec from runs and channels and write it as JSON
    Plot {
        /// Run folder name, repeatable; defaults to the first run
        #[arg(long = "run")]
        runs: Vec<String>,
        /// Channel as PUMP:METRIC (e.g. HP:Pressure), repeatable; defaults
        /// to pressure and actual flow on the HP pump
        #[arg(long = "channel")]
        channels: Vec<String>,
        /// Plot everything on one Y axis instead of the pressure/flow split
        #[arg(long)]
        single_axis: bool,
        /// Upper bound for the pressure axis
        #[arg(long)]
        pressure_max: Option<f64>,
        /// Upper bound for the flow axis
        #[arg(long)]
        flow_max: Option<f64>,
        /// Keep wall-clock offsets between series instead of starting each
        /// series at zero
        #[arg(long)]
        common_origin: bool,
        /// Chart title
        #[arg(long)]
        title: Option<String>,
        /// Read runs, channels and options from a YAML request file instead
        /// of the flags above
        #[arg(long, conflicts_with_all = [
            "runs", "channels", "single_axis", "pressure_max",
            "flow_max", "common_origin", "title",
        ])]
        request: Option<PathBuf>,
        /// Output JSON file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Re-export one channel of a run as tab-separated text
    Export {
        /// Run folder name
        run: String,
        /// Channel as PUMP:METRIC (e.g. HP:Pressure)
        channel: String,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let data_root = resolve_data_root(cli.data_root)?;

    match cli.command {
        Commands::Runs => cmd_runs(&data_root),
        Commands::Channels { run } => cmd_channels(&data_root, &run),
        Commands::Plot {
            runs,
            channels,
            single_axis,
            pressure_max,
            flow_max,
            common_origin,
            title,
            request,
            output,
        } => {
            let def = match request {
                Some(path) => load_request(&path)?,
                None => PlotRequestDef {
                    runs,
                    channels,
                    options: ComposeOptions {
                        dual_axis: !single_axis,
                        pressure_axis_max: pressure_max,
                        flow_axis_max: flow_max,
                        align_to_common_origin: common_origin,
                        title,
                    },
                },
            };
            cmd_plot(&data_root, &def, output.as_deref())
        }
        Commands::Export {
            run,
            channel,
            output,
        } => cmd_export(&data_root, &run, &channel, output.as_deref()),
    }
}

/// Data root from the flag, falling back to the environment the hosting
/// shell provides.
fn resolve_data_root(arg: Option<PathBuf>) -> AppResult<PathBuf> {
    if let Some(root) = arg {
        return Ok(root);
    }
    std::env::var_os("PUMPTRACE_DATA_ROOT")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| {
            AppError::InvalidInput(
                "no data root: pass --data-root or set PUMPTRACE_DATA_ROOT".to_string(),
            )
        })
}

fn cmd_runs(data_root: &Path) -> AppResult<()> {
    let catalog = RunCatalog::refresh(data_root)?;

    if catalog.is_empty() {
        println!("No runs found under {}", data_root.display());
        return Ok(());
    }
    println!("Runs under {}:", data_root.display());
    for run in catalog.runs() {
        let meta = run.metadata();
        let mut line = format!("  {}", run.name());
        if let Some(date_time) = &meta.date_time {
            line.push_str(&format!("  [{}]", date_time));
        }
        if let Some(procedure) = &meta.procedure {
            line.push_str(&format!("  procedure={}", procedure));
        }
        if let Some(sample) = &meta.sample {
            line.push_str(&format!("  sample={}", sample));
        }
        if let Some(vial) = &meta.vial {
            line.push_str(&format!("  vial={}", vial));
        }
        println!("{}", line);
    }
    Ok(())
}

fn cmd_channels(data_root: &Path, run_name: &str) -> AppResult<()> {
    let catalog = RunCatalog::refresh(data_root)?;
    let run = catalog
        .get(run_name)
        .ok_or_else(|| AppError::RunNotFound(run_name.to_string()))?;

    let channels = available_channels(run)?;
    if channels.is_empty() {
        println!("No metric files found for run: {}", run_name);
        return Ok(());
    }

    let defaults = default_selection(&channels);
    println!("Channels for {}:", run.display_name());
    let mut current_pump: Option<PumpId> = None;
    for channel in &channels {
        if current_pump != Some(channel.pump) {
            println!("  Pump {}:", channel.pump.token());
            current_pump = Some(channel.pump);
        }
        let marker = if defaults.contains(channel) {
            "  [default]"
        } else {
            ""
        };
        println!(
            "    {} ({}:{}){}",
            channel.metric.label(),
            channel.pump.token(),
            channel.metric.token(),
            marker
        );
    }
    Ok(())
}

fn cmd_plot(data_root: &Path, def: &PlotRequestDef, output: Option<&Path>) -> AppResult<()> {
    let catalog = RunCatalog::refresh(data_root)?;

    let mut runs = def.runs.clone();
    if runs.is_empty() {
        let Some(first) = catalog.runs().first() else {
            return Err(AppError::InvalidInput(format!(
                "no runs under {}",
                data_root.display()
            )));
        };
        eprintln!("No runs selected; defaulting to {}", first.name());
        runs.push(first.name().to_string());
    }

    let channels = if def.channels.is_empty() {
        let run = catalog
            .get(&runs[0])
            .ok_or_else(|| AppError::RunNotFound(runs[0].clone()))?;
        let defaults = default_selection(&available_channels(run)?);
        if defaults.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "run {} has no HP pressure/flow channels; pass --channel",
                runs[0]
            )));
        }
        let names: Vec<String> = defaults.iter().map(MetricChannel::label).collect();
        eprintln!("No channels selected; defaulting to {}", names.join(", "));
        defaults
    } else {
        parse_channels(&def.channels)?
    };

    let mut colors = ColorAllocator::new();
    let response = compose_plot(&catalog, &runs, &channels, &def.options, &mut colors);
    report_failures(&response);

    let json = serde_json::to_string_pretty(&response.chart)?;
    if let Some(path) = output {
        std::fs::write(path, &json)?;
        println!(
            "✓ Composed {} trace(s) to {}",
            response.chart.traces.len(),
            path.display()
        );
    } else {
        println!("{}", json);
    }
    Ok(())
}

fn report_failures(response: &PlotResponse) {
    for failure in &response.failures {
        eprintln!("! {}: {}", failure.key, failure.error);
    }
}

fn cmd_export(
    data_root: &Path,
    run_name: &str,
    channel: &str,
    output: Option<&Path>,
) -> AppResult<()> {
    let catalog = RunCatalog::refresh(data_root)?;
    let run = catalog
        .get(run_name)
        .ok_or_else(|| AppError::RunNotFound(run_name.to_string()))?;
    let channel: MetricChannel = channel.parse().map_err(AppError::InvalidInput)?;

    let key = SeriesKey::new(run.name(), channel);
    let series = parse_metric_file(&run.channel_path(channel), key)?;

    let tsv = series.to_tsv();
    if let Some(path) = output {
        std::fs::write(path, tsv)?;
        println!("✓ Exported {} sample(s) to {}", series.len(), path.display());
    } else {
        print!("{}", tsv);
    }
    Ok(())
}

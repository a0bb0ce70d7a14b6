mod input;

use clap::{Parser, Subcommand};
use pkg_constants::paths::DEFAULT_UPGRADE_CONFIG;
use pkg_types::{apiv1, apiv3};
use pkg_types::config::{OutputFormat, UpgradeConfigFile, load_config_file};
use pkg_types::validate::validate_name;
use pkg_upgrade::names::parse_name;
use pkg_upgrade::{Converter, WorkloadEndpointConverter};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(
    name = "calico-upgrade",
    about = "Convert legacy workload endpoints to the v3 data model"
)]
struct Cli {
    /// Path to YAML config file
    #[arg(long, short, default_value = DEFAULT_UPGRADE_CONFIG)]
    config: String,

    /// Log level (overridden by RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert legacy v1 workload endpoints to v3 resources
    Convert {
        /// YAML file holding one or more v1 workload endpoints
        #[arg(long, short)]
        input: String,

        /// Output format: yaml or json
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Skip endpoints that cannot be converted instead of aborting
        #[arg(long)]
        continue_on_error: bool,
    },
    /// Show the v1 backend key/value form of legacy workload endpoints
    Backend {
        /// YAML file holding one or more v1 workload endpoints
        #[arg(long, short)]
        input: String,
    },
    /// Decode a v3 workload endpoint name back into its identity
    ParseName {
        name: String,

        /// Namespace of the endpoint (required for k8s endpoints)
        #[arg(long, default_value = "")]
        namespace: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config file (returns defaults if file not found)
    let file_cfg: UpgradeConfigFile = load_config_file(&cli.config)?;

    // Merge: CLI args > config file > defaults
    let log_level = cli
        .log_level
        .clone()
        .or(file_cfg.log_level.clone())
        .unwrap_or_else(|| "info".to_string());
    init_tracing(&log_level);
    info!("Config file: {}", cli.config);

    let converter = WorkloadEndpointConverter::new();

    match cli.command {
        Command::Convert {
            input,
            format,
            continue_on_error,
        } => {
            let format = format.or(file_cfg.output_format).unwrap_or_default();
            let continue_on_error = continue_on_error || file_cfg.continue_on_error.unwrap_or(false);
            cmd_convert(&converter, &input, format, continue_on_error)
        }
        Command::Backend { input } => cmd_backend(&converter, &input),
        Command::ParseName { name, namespace } => cmd_parse_name(&name, &namespace),
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();
}

// ── Convert command ─────────────────────────────────────────────────────

fn cmd_convert(
    converter: &WorkloadEndpointConverter,
    input: &str,
    format: OutputFormat,
    continue_on_error: bool,
) -> anyhow::Result<()> {
    let endpoints = input::read_endpoints(input)?;
    info!("Converting {} workload endpoints from {}", endpoints.len(), input);

    let report = convert_endpoints(converter, &endpoints, continue_on_error)?;

    match format {
        OutputFormat::Yaml => {
            for v3 in &report.converted {
                print!("---\n{}", serde_yaml::to_string(v3)?);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report.converted)?),
    }

    info!(
        "Converted {} of {} workload endpoints ({} skipped, {} invalid names)",
        report.converted.len(),
        endpoints.len(),
        report.failed,
        report.invalid_names
    );
    report.check()
}

/// Outcome of converting a batch of legacy endpoints.
#[derive(Debug, Default)]
struct ConvertReport {
    converted: Vec<apiv3::WorkloadEndpoint>,
    /// Endpoints skipped because they could not be converted.
    failed: usize,
    /// Converted endpoints whose generated name is not a valid resource name.
    invalid_names: usize,
}

impl ConvertReport {
    /// Fails when any endpoint was skipped.
    fn check(&self) -> anyhow::Result<()> {
        if self.failed > 0 {
            anyhow::bail!("{} workload endpoints could not be converted", self.failed);
        }
        Ok(())
    }
}

fn convert_endpoints(
    converter: &WorkloadEndpointConverter,
    endpoints: &[apiv1::WorkloadEndpoint],
    continue_on_error: bool,
) -> anyhow::Result<ConvertReport> {
    let mut report = ConvertReport {
        converted: Vec::with_capacity(endpoints.len()),
        ..Default::default()
    };
    for wep in endpoints {
        match converter.api_v1_to_api_v3(wep) {
            Ok(v3) => {
                if let Err(e) = validate_name(&v3.metadata.name) {
                    warn!("Generated name is not a valid resource name: {}", e);
                    report.invalid_names += 1;
                }
                report.converted.push(v3);
            }
            Err(e) if continue_on_error => {
                warn!(
                    "Skipping workload endpoint {}/{}: {}",
                    wep.metadata.node, wep.metadata.name, e
                );
                report.failed += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(report)
}

// ── Backend command ─────────────────────────────────────────────────────

fn cmd_backend(converter: &WorkloadEndpointConverter, input: &str) -> anyhow::Result<()> {
    let endpoints = input::read_endpoints(input)?;
    for wep in &endpoints {
        let kvp = converter.api_v1_to_backend_v1(wep)?;
        println!("{}", kvp.key.path());
        println!("{}", serde_json::to_string(&kvp.value)?);
    }
    Ok(())
}

// ── Parse-name command ──────────────────────────────────────────────────

fn cmd_parse_name(name: &str, namespace: &str) -> anyhow::Result<()> {
    let ids = parse_name(name, namespace)?;
    println!("Node:          {}", ids.node);
    println!("Orchestrator:  {}", ids.orchestrator);
    println!("Workload ID:   {}", ids.workload_id());
    println!("Endpoint:      {}", ids.endpoint);
    Ok(())
}

//! eni-limits CLI binary: look up network interface limits for instance types.
//!
//! Subcommands: `get` (one or more instance types), `list` (every known type),
//! `watch` (periodic API refresh, re-printing the given types).

mod logging;

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cli::{
    api_source, build_refresher, ensure_all_found, format_table, lookup_all, prepare_registry,
    RegistryOptions,
};
use eni_limits::InstanceLimits;

const APP_NAME: &str = "eni-limits";

#[derive(Parser, Debug)]
#[command(name = "eni-limits")]
#[command(about = "Network interface limits per compute instance type")]
struct Args {
    #[command(subcommand)]
    cmd: Command,

    /// Config file (default: $XDG_CONFIG_HOME/eni-limits/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override limits for an instance type; repeatable
    #[arg(long = "instance-limit", value_name = "TYPE=ADAPTERS,IPV4,IPV6")]
    instance_limits: Vec<String>,

    /// Instance-type catalog URL for --refresh
    #[arg(long, value_name = "URL", env = "ENI_LIMITS_API_URL")]
    api_url: Option<String>,

    /// Refresh from the provider API before answering
    #[arg(long)]
    refresh: bool,

    /// Output JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Verbose: debug logging unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show limits for the given instance types
    Get {
        #[arg(required = true, value_name = "INSTANCE_TYPE")]
        instance_types: Vec<String>,
    },
    /// Show every known instance type
    List,
    /// Refresh from the provider API every configured interval and re-print the given types
    Watch {
        #[arg(required = true, value_name = "INSTANCE_TYPE")]
        instance_types: Vec<String>,
    },
}

fn print_entries(found: &[(String, InstanceLimits)], json: bool) -> serde_json::Result<()> {
    if json {
        let map: BTreeMap<&str, &InstanceLimits> =
            found.iter().map(|(k, v)| (k.as_str(), v)).collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else if !found.is_empty() {
        print!(
            "{}",
            format_table(found.iter().map(|(k, v)| (k.as_str(), v)))
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::load_and_apply(APP_NAME, None)?;
    let args = Args::parse();
    let _log_guard = logging::init(args.verbose, args.log_file.as_deref())?;

    let limits_config = config::load_limits_config(APP_NAME, args.config.as_deref())?;
    let options = RegistryOptions {
        instance_limits: args.instance_limits,
        api_url: args.api_url,
        refresh: args.refresh,
    };
    let registry = prepare_registry(&limits_config, &options).await?;

    match args.cmd {
        Command::Get { instance_types } => {
            let (found, missing) = lookup_all(&registry, &instance_types);
            print_entries(&found, args.json)?;
            for instance_type in &missing {
                eprintln!("{}: not found", instance_type);
            }
            ensure_all_found(missing)?;
        }
        Command::List => {
            let snapshot = registry.snapshot();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                print!(
                    "{}",
                    format_table(snapshot.iter().map(|(k, v)| (k.as_str(), v)))
                );
            }
        }
        Command::Watch { instance_types } => {
            let source = api_source(&limits_config, &options)?;
            let refresher = build_refresher(registry.clone(), source, &limits_config);
            let mut ticker = tokio::time::interval(refresher.interval());
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            let handle = refresher.spawn();
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let (found, missing) = lookup_all(&registry, &instance_types);
                        print_entries(&found, args.json)?;
                        for instance_type in &missing {
                            eprintln!("{}: not found", instance_type);
                        }
                    }
                    _ = tokio::signal::ctrl_c() => break,
                }
            }
            handle.abort();
        }
    }
    Ok(())
}

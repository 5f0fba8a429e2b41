use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use std::collections::HashMap;
use std::io::IsTerminal;
use std::time::Duration;

mod agent;
mod client;
mod constants;
mod domain;
mod report;
mod state;

#[cfg(test)]
mod test_utils;

use crate::{
    agent::{DryRunAgent, run_operation},
    client::{HttpConfig, IndexerClient, ReqwestTransport, http::DEFAULT_TIMEOUT_SECS},
    domain::{CustomNetwork, NetworkConfig, Operation},
    report::{SummaryView, load_summary},
    state::AppConfig,
};

// fuel-palette version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// fuel-palette - Fuel wallet operations and account balances from the terminal
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Network to use: testnet, mainnet or a custom network name
    #[arg(short, long, global = true)]
    network: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Ignore proxy settings from the environment
    #[arg(long, global = true)]
    no_proxy: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the balances held by an address
    Balance {
        /// Account address (0x...)
        address: Option<String>,
    },
    /// List or edit known networks
    Networks {
        #[command(subcommand)]
        action: Option<NetworkAction>,
    },
    /// List wallet operations, or show the fields of one
    Operations {
        /// Operation key (e.g. transfer, swap)
        key: Option<String>,
    },
    /// Dry-run a wallet operation with the given field values
    Run {
        /// Operation key (e.g. transfer, swap)
        key: String,
        /// Form value as id=value, repeatable
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Display version information
    Version,
}

#[derive(Subcommand)]
enum NetworkAction {
    /// Add a custom network
    Add {
        /// Unique network name
        name: String,
        /// GraphQL endpoint URL
        url: String,
    },
    /// Remove a custom network
    Remove {
        /// Network name
        name: String,
    },
    /// Make a network the default
    Use {
        /// Network name
        name: String,
    },
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(id, value)| (id.trim().to_string(), value.to_string()))
        .filter(|(id, _)| !id.is_empty())
        .ok_or_else(|| format!("expected id=value, got '{raw}'"))
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load();

    match cli.command {
        Commands::Balance { address } => {
            let network = match &cli.network {
                Some(name) => config.resolve_network(name)?,
                None => config.network.clone(),
            };
            let mut http = HttpConfig::with_timeout(Duration::from_secs(cli.timeout));
            if cli.no_proxy {
                http = http.without_proxy();
            }
            let client = IndexerClient::new(ReqwestTransport::new(&http)?);
            let address = address.unwrap_or_default();

            if !address.trim().is_empty() && std::io::stderr().is_terminal() {
                eprint!("{}", SummaryView::Loading(address.trim().to_string()).render());
            }

            let view = load_summary(&client, &address, &network).await;
            print!("{}", view.render());
            if let Some(error) = view.error() {
                eprintln!("[x] {error}");
            }
        }
        Commands::Networks { action } => match action {
            None => print_networks(&config),
            Some(NetworkAction::Add { name, url }) => {
                config.add_custom_network(CustomNetwork::new(name.trim(), url.trim()))?;
                println!("[+] Added network '{}'", name.trim());
            }
            Some(NetworkAction::Remove { name }) => {
                config.delete_custom_network(&name)?;
                println!("[+] Removed network '{name}'");
            }
            Some(NetworkAction::Use { name }) => {
                config.network = config.resolve_network(&name)?;
                config.save()?;
                println!("[+] Default network is now '{}'", config.network.name());
            }
        },
        Commands::Operations { key } => match key {
            None => print_operations(),
            Some(key) => print_operation(key.parse()?),
        },
        Commands::Run { key, fields } => {
            let operation: Operation = key.parse()?;
            let values: HashMap<String, String> = fields.into_iter().collect();

            let (toast, response) = run_operation(&DryRunAgent, operation, &values).await;
            println!("{toast}");
            if let Some(response) = response {
                println!("{}", response.output);
            }
            if !toast.is_success() {
                std::process::exit(1);
            }
        }
        Commands::Version => {
            println!("fuel-palette v{VERSION}");
            println!("Fuel wallet operations and account balances from the terminal");
        }
    }

    Ok(())
}

fn print_networks(config: &AppConfig) {
    for network in config.get_all_networks() {
        let marker = if network == config.network { "*" } else { " " };
        let kind = match network {
            NetworkConfig::BuiltIn(_) => "built-in",
            NetworkConfig::Custom(_) => "custom",
        };
        println!(
            "{marker} {:<12} {:<9} {}",
            network.name(),
            kind,
            network.graphql_url()
        );
    }
}

fn print_operations() {
    for op in Operation::ALL {
        println!("{:<16} {:<34} {}", op.key(), op.title(), op.description());
    }
}

fn print_operation(op: Operation) {
    println!("{op}");
    println!("{}", op.description());
    println!();
    for field in op.fields() {
        let kind = if field.multiline { " (multi-line)" } else { "" };
        println!(
            "  --field {}=<{}>{kind}    e.g. {}",
            field.id, field.title, field.placeholder
        );
    }
}

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jsonrpc_relay::{server, Client, Network};

#[derive(Parser, Debug)]
#[command(
    name = "jsonrpc-relay",
    version,
    about = "JSON-RPC relay with seed-node failover and peer discovery"
)]
struct Args {
    /// Address to listen on for inbound JSON-RPC requests.
    #[arg(long, default_value = "127.0.0.1:8545")]
    address: String,

    /// Seed endpoint (host:port); may be repeated. When omitted, the
    /// selected network's bundled seeds are used.
    #[arg(long = "seed", value_name = "HOST:PORT")]
    seeds: Vec<String>,

    /// Network whose bundled seeds bootstrap the registry.
    #[arg(long, value_enum, default_value = "mainnet")]
    network: Network,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let seeds = if args.seeds.is_empty() {
        args.network.default_seeds()
    } else {
        args.seeds
    };
    tracing::info!(
        "jsonrpc-relay {} relaying for {} via {} seed endpoint(s): {:?}",
        env!("CARGO_PKG_VERSION"),
        args.network,
        seeds.len(),
        seeds
    );

    let client = Client::new(seeds).context("build outbound client")?;
    tokio::spawn(client.clone().run_discovery());

    server::serve(&args.address, client)
        .await
        .with_context(|| format!("serve on {}", args.address))
}

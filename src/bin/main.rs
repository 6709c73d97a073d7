use boost_mux::{Config, Error, Network, Service};
use clap::Parser;
use std::path::PathBuf;
use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_ADDR: &str = "0.0.0.0:18550";

#[derive(Parser, Debug)]
#[clap(version, about = "multiplexer connecting a block proposer to the external builder network", long_about = None)]
struct Args {
    /// address to listen on for builder API requests
    #[clap(long, default_value = DEFAULT_ADDR)]
    addr: String,

    /// relay endpoint of the form `URL#0xPUBLIC_KEY`; repeat for multiple relays
    #[clap(long = "relay")]
    relays: Vec<String>,

    /// require at least one reachable relay at startup
    #[clap(long)]
    relay_check: bool,

    /// deadline in milliseconds for each relay request
    #[clap(long, default_value_t = 2000)]
    relay_timeout_ms: u64,

    /// genesis fork version for builder domain signatures, e.g. `0x00000000`
    #[clap(long, env = "GENESIS_FORK_VERSION")]
    genesis_fork_version: Option<String>,

    /// network whose fork schedule to use
    #[clap(long, default_value_t = Network::Mainnet)]
    network: Network,

    /// path to a JSON file mapping proposer public keys to relay sets
    #[clap(long)]
    proposer_config: Option<PathBuf>,
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn exit_code(err: &Error) -> i32 {
    match err {
        Error::Bind(..) | Error::Listen(..) => 2,
        _ => 1,
    }
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let config = Config {
        addr: args.addr,
        relays: args.relays,
        relay_check: args.relay_check,
        relay_timeout_ms: args.relay_timeout_ms,
        genesis_fork_version: args.genesis_fork_version,
        network: args.network,
        proposer_config: args.proposer_config,
    };

    if config.relays.is_empty() && config.proposer_config.is_none() {
        tracing::error!("no relays provided, please restart with at least one relay");
        std::process::exit(1);
    }

    let service = Service::from(config);
    tokio::select! {
        result = service.run() => {
            if let Err(err) = result {
                tracing::error!(%err, "service failed");
                std::process::exit(exit_code(&err));
            }
        }
        _ = signal::ctrl_c() => {
            tracing::info!("shutting down...");
        }
    }
}

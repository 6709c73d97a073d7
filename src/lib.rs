mod blinded_block_provider;
mod config;
mod error;
mod metrics;
mod network;
mod proposer_config;
mod relay;
mod relay_mux;
pub(crate) mod serde;
mod service;
pub mod signing;
pub mod types;

pub use blinded_block_provider::{BlindedBlockProvider, Client, ClientError, Server};
pub use config::Config;
pub use error::{ApiError, Error};
pub use network::Network;
pub use proposer_config::{ProposerConfig, ProposerConfigStore};
pub use relay::{Relay, RelayEndpoint};
pub use relay_mux::RelayMux;
pub use service::Service;

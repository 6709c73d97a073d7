use crate::blinded_block_provider::Server;
use crate::config::Config;
use crate::error::Error;
use crate::proposer_config::ProposerConfigStore;
use crate::relay::{Relay, RelayEndpoint};
use crate::relay_mux::RelayMux;
use crate::serde::try_bytes_from_hex_str;
use ethereum_consensus::primitives::Version;
use ethereum_consensus::state_transition::Context;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

pub struct Service {
    config: Config,
}

impl Service {
    pub fn from(config: Config) -> Self {
        Self { config }
    }

    /// Runs until the server stops. Configuration errors surface before the
    /// listener is bound.
    pub async fn run(&self) -> Result<(), Error> {
        let config = &self.config;

        let mut context = Context::from(&config.network);
        if let Some(version) = &config.genesis_fork_version {
            context.genesis_fork_version = parse_fork_version(version)?;
        }

        let mut relays = vec![];
        for endpoint in &config.relays {
            relays.push(Relay::from(RelayEndpoint::from_str(endpoint)?));
        }
        for relay in &relays {
            tracing::info!(%relay, "configured relay");
        }

        let pcs = match &config.proposer_config {
            Some(path) => ProposerConfigStore::from_file(path, relays)?,
            None => ProposerConfigStore::from_relays(relays)?,
        };

        let timeout = Duration::from_millis(config.relay_timeout_ms);
        let relay_mux = RelayMux::new(pcs, Arc::new(context), timeout);

        if config.relay_check {
            if relay_mux.check_relays().await {
                tracing::info!("relay check successful");
            } else {
                return Err(Error::NoRelaysAvailable);
            }
        }

        let server = Server::new(config.addr.clone(), relay_mux);
        let server = server.serve()?;
        tracing::info!("listening at {}...", server.local_addr());
        server.await.map_err(Error::Bind)
    }
}

fn parse_fork_version(version: &str) -> Result<Version, Error> {
    let bytes = try_bytes_from_hex_str(version)
        .map_err(|_| Error::InvalidForkVersion(version.to_string()))?;
    Version::try_from(bytes.as_ref()).map_err(|_| Error::InvalidForkVersion(version.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fork_version() {
        assert!(parse_fork_version("0x00000000").is_ok());
        assert!(parse_fork_version("0x00000101").is_ok());
        assert!(parse_fork_version("0x00").is_err());
        assert!(parse_fork_version("0x0000000000").is_err());
        assert!(parse_fork_version("xyz").is_err());
    }
}

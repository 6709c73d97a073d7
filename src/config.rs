use crate::network::Network;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address to listen on for builder API requests.
    pub addr: String,
    /// Relay endpoints of the form `URL#0xPUBLIC_KEY`, seeding the default
    /// relay set.
    pub relays: Vec<String>,
    /// Require at least one reachable relay at startup.
    pub relay_check: bool,
    /// Deadline in milliseconds for each relay request.
    pub relay_timeout_ms: u64,
    /// Genesis fork version override for builder domain signatures.
    pub genesis_fork_version: Option<String>,
    /// Network whose fork schedule to use.
    pub network: Network,
    /// Path to a JSON file mapping proposer public keys to relay sets.
    pub proposer_config: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:18550".to_string(),
            relays: vec![],
            relay_check: false,
            relay_timeout_ms: 2000,
            genesis_fork_version: None,
            network: Network::default(),
            proposer_config: None,
        }
    }
}

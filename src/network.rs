use crate::error::Error;
use ethereum_consensus::state_transition::Context;
use std::str::FromStr;

#[derive(Default, Debug, Clone, serde::Deserialize)]
pub enum Network {
    #[default]
    Mainnet,
    Sepolia,
    Goerli,
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mainnet => write!(f, "mainnet"),
            Self::Sepolia => write!(f, "sepolia"),
            Self::Goerli => write!(f, "goerli"),
        }
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Self::Mainnet),
            "sepolia" => Ok(Self::Sepolia),
            "goerli" => Ok(Self::Goerli),
            s => Err(Error::UnknownNetwork(s.to_string())),
        }
    }
}

impl From<&Network> for Context {
    fn from(network: &Network) -> Self {
        match network {
            Network::Mainnet => Context::for_mainnet(),
            Network::Sepolia => Context::for_sepolia(),
            Network::Goerli => Context::for_goerli(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_network() {
        for name in ["mainnet", "sepolia", "goerli"] {
            let network = Network::from_str(name).unwrap();
            assert_eq!(network.to_string(), name);
        }
        assert!(Network::from_str("testnet").is_err());
    }
}

mod bid_request;
mod builder_bid;

pub use bid_request::*;
pub use builder_bid::*;

pub use ethereum_consensus::bellatrix::mainnet::{
    BlindedBeaconBlock, BlindedBeaconBlockBody, ExecutionPayload, ExecutionPayloadHeader,
    SignedBlindedBeaconBlock,
};
pub use ethereum_consensus::builder::{SignedValidatorRegistration, ValidatorRegistration};

/// Consensus fork a builder API payload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsensusVersion {
    Phase0,
    Altair,
    Bellatrix,
}

/// Envelope attaching a consensus version to a builder API payload.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct VersionedValue<T> {
    pub version: ConsensusVersion,
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consensus_version_serde() {
        let version = serde_json::to_string(&ConsensusVersion::Bellatrix).unwrap();
        assert_eq!(version, "\"bellatrix\"");
        let roundtrip: ConsensusVersion = serde_json::from_str(&version).unwrap();
        assert_eq!(roundtrip, ConsensusVersion::Bellatrix);
    }
}

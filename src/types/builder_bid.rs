use crate::types::ExecutionPayloadHeader;
use ethereum_consensus::primitives::{BlsPublicKey, BlsSignature};
use ssz_rs::prelude::*;

#[derive(Debug, Default, Clone, SimpleSerialize, serde::Serialize, serde::Deserialize)]
pub struct BuilderBid {
    pub header: ExecutionPayloadHeader,
    pub value: U256,
    #[serde(rename = "pubkey")]
    pub public_key: BlsPublicKey,
}

#[derive(Debug, Default, Clone, SimpleSerialize, serde::Serialize, serde::Deserialize)]
pub struct SignedBuilderBid {
    pub message: BuilderBid,
    pub signature: BlsSignature,
}

impl std::fmt::Display for SignedBuilderBid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let block_hash = &self.message.header.block_hash;
        let value = &self.message.value;
        write!(f, "block hash {block_hash} and value {value:?}")
    }
}

mod api;

pub use api::{
    client::{Client, Error as ClientError},
    server::Server,
};

use crate::error::Error;
use crate::types::{
    BidRequest, ExecutionPayload, SignedBlindedBeaconBlock, SignedBuilderBid,
    SignedValidatorRegistration,
};
use async_trait::async_trait;

#[async_trait]
pub trait BlindedBlockProvider {
    async fn check_status(&self) -> Result<(), Error>;

    async fn register_validators(
        &self,
        registrations: &mut [SignedValidatorRegistration],
    ) -> Result<(), Error>;

    async fn fetch_best_bid(&self, bid_request: &BidRequest) -> Result<SignedBuilderBid, Error>;

    async fn open_bid(
        &self,
        signed_block: &mut SignedBlindedBeaconBlock,
    ) -> Result<ExecutionPayload, Error>;
}

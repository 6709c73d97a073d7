use crate::blinded_block_provider::{BlindedBlockProvider, ClientError};
use crate::error::Error;
use crate::metrics::{self, ApiMethod};
use crate::proposer_config::ProposerConfigStore;
use crate::relay::Relay;
use crate::signing::verify_signed_builder_message;
use crate::types::{
    BidRequest, ExecutionPayload, SignedBlindedBeaconBlock, SignedBuilderBid,
    SignedValidatorRegistration,
};
use async_trait::async_trait;
use ethereum_consensus::primitives::{BlsPublicKey, Hash32, Slot};
use ethereum_consensus::state_transition::Context;
use futures::future::join_all;
use futures::stream::{FuturesUnordered, StreamExt};
use std::collections::HashMap;
use std::ops::Deref;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

// winning relay sets are remembered this many slots past their auction
const OUTSTANDING_BID_SLOTS: u64 = 4;

fn validate_bid(
    bid: &mut SignedBuilderBid,
    relay_public_key: &BlsPublicKey,
    context: &Context,
) -> Result<(), Error> {
    let message = &mut bid.message;
    if message.header.block_hash == Hash32::default() {
        return Err(Error::EmptyBlockHash);
    }
    if &message.public_key != relay_public_key {
        return Err(Error::InvalidBidPublicKey);
    }
    verify_signed_builder_message(message, &bid.signature, relay_public_key, context)?;
    Ok(())
}

fn bid_key_from(signed_block: &SignedBlindedBeaconBlock) -> BidRequest {
    let block = &signed_block.message;

    BidRequest {
        slot: block.slot,
        parent_hash: block.body.execution_payload_header.parent_hash.clone(),
        // the submission does not carry the proposer's public key
        public_key: Default::default(),
    }
}

fn prune_stale_bids(outstanding_bids: &mut HashMap<BidRequest, Vec<Relay>>, slot: Slot) {
    outstanding_bids
        .retain(|request, _| request.slot.saturating_add(OUTSTANDING_BID_SLOTS) > slot);
}

fn on_relay_error(relay: &Relay, method: ApiMethod, err: &ClientError) {
    if matches!(err, ClientError::Timeout) {
        metrics::count_timeout(method, relay.public_key());
    }
    tracing::warn!(%relay, method = method.as_str(), %err, "relay request failed");
}

/// Fans each builder API request out to a set of relays and aggregates the
/// responses: best valid bid for headers, first matching payload for
/// unblinding, at least one success for registrations and status.
#[derive(Clone)]
pub struct RelayMux(Arc<RelayMuxInner>);

impl Deref for RelayMux {
    type Target = RelayMuxInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub struct RelayMuxInner {
    pcs: ProposerConfigStore,
    context: Arc<Context>,
    timeout: Duration,
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    // auctions we returned a header for, and the relays that can unblind them
    outstanding_bids: HashMap<BidRequest, Vec<Relay>>,
}

impl RelayMux {
    pub fn new(pcs: ProposerConfigStore, context: Arc<Context>, timeout: Duration) -> Self {
        let inner = RelayMuxInner { pcs, context, timeout, state: Default::default() };
        Self(Arc::new(inner))
    }

    /// `true` iff at least one relay in the default set answers the status
    /// probe within the deadline. Redirects count as failures.
    pub async fn check_relays(&self) -> bool {
        let relays = self.pcs.default_relays();
        let mut checks = relays
            .into_iter()
            .map(|relay| {
                let timeout = self.timeout;
                async move {
                    metrics::count_request(ApiMethod::Status, relay.public_key());
                    let start = Instant::now();
                    let result = relay.check_status(timeout).await;
                    metrics::observe_request_duration(
                        ApiMethod::Status,
                        relay.public_key(),
                        start.elapsed(),
                    );
                    (relay, result)
                }
            })
            .collect::<FuturesUnordered<_>>();

        while let Some((relay, result)) = checks.next().await {
            match result {
                Ok(()) => return true,
                Err(err) => on_relay_error(&relay, ApiMethod::Status, &err),
            }
        }
        false
    }
}

#[async_trait]
impl BlindedBlockProvider for RelayMux {
    async fn check_status(&self) -> Result<(), Error> {
        if self.check_relays().await {
            Ok(())
        } else {
            Err(Error::NoRelaysAvailable)
        }
    }

    async fn register_validators(
        &self,
        registrations: &mut [SignedValidatorRegistration],
    ) -> Result<(), Error> {
        let relays = self.pcs.all_relays();
        let registrations = &*registrations;
        let responses = join_all(relays.iter().map(|relay| {
            let timeout = self.timeout;
            async move {
                metrics::count_request(ApiMethod::Register, relay.public_key());
                let start = Instant::now();
                let result = relay.register_validators(registrations, timeout).await;
                metrics::observe_request_duration(
                    ApiMethod::Register,
                    relay.public_key(),
                    start.elapsed(),
                );
                (relay, result)
            }
        }))
        .await;

        let mut num_success = 0;
        for (relay, result) in responses {
            match result {
                Ok(()) => num_success += 1,
                Err(err) => on_relay_error(relay, ApiMethod::Register, &err),
            }
        }

        if num_success > 0 {
            Ok(())
        } else {
            Err(Error::NoSuccessfulResponse)
        }
    }

    async fn fetch_best_bid(&self, bid_request: &BidRequest) -> Result<SignedBuilderBid, Error> {
        // the sentinel parent hash opens no auction
        if bid_request.parent_hash == Hash32::default() {
            return Err(Error::NoBids);
        }

        // pin one configuration snapshot for the whole fan-out
        let config = self.pcs.resolve(&bid_request.public_key);
        let mut responses = config
            .relays
            .into_iter()
            .map(|relay| {
                let timeout = self.timeout;
                async move {
                    metrics::count_request(ApiMethod::GetHeader, relay.public_key());
                    let start = Instant::now();
                    let result = relay.fetch_best_bid(bid_request, timeout).await;
                    metrics::observe_request_duration(
                        ApiMethod::GetHeader,
                        relay.public_key(),
                        start.elapsed(),
                    );
                    (relay, result)
                }
            })
            .collect::<FuturesUnordered<_>>();

        let mut best_bid: Option<SignedBuilderBid> = None;
        let mut best_relays: Vec<Relay> = vec![];
        while let Some((relay, response)) = responses.next().await {
            match response {
                Ok(Some(mut bid)) => {
                    if let Err(err) = validate_bid(&mut bid, relay.public_key(), &self.context) {
                        metrics::count_invalid_bid(relay.public_key());
                        tracing::warn!(%relay, %err, "invalid signed builder bid: {bid}");
                        continue;
                    }
                    match &best_bid {
                        Some(current) if bid.message.value < current.message.value => {}
                        Some(current) if bid.message.value == current.message.value => {
                            // ties go to the first arrival; a relay offering
                            // the same header can still serve the payload
                            if bid.message.header.block_hash == current.message.header.block_hash {
                                best_relays.push(relay);
                            }
                        }
                        _ => {
                            best_bid = Some(bid);
                            best_relays = vec![relay];
                        }
                    }
                }
                Ok(None) => {
                    tracing::debug!(%relay, %bid_request, "no bid for auction");
                }
                Err(err) => on_relay_error(&relay, ApiMethod::GetHeader, &err),
            }
        }

        let best_bid = best_bid.ok_or(Error::NoBids)?;

        let mut state = self.state.lock().expect("can lock");
        prune_stale_bids(&mut state.outstanding_bids, bid_request.slot);
        let key = BidRequest { public_key: Default::default(), ..bid_request.clone() };
        state.outstanding_bids.insert(key, best_relays);

        Ok(best_bid)
    }

    async fn open_bid(
        &self,
        signed_block: &mut SignedBlindedBeaconBlock,
    ) -> Result<ExecutionPayload, Error> {
        let relays = {
            let mut state = self.state.lock().expect("can lock");
            let key = bid_key_from(signed_block);
            state.outstanding_bids.remove(&key).ok_or(Error::MissingOpenBid)?
        };

        let expected_block_hash =
            signed_block.message.body.execution_payload_header.block_hash.clone();

        // Detached tasks racing over a channel: the first payload matching
        // the blinded header wins and the rest are left to run out their
        // deadline, so a short-circuit never cuts a sibling off early.
        let (response_tx, mut response_rx) = mpsc::unbounded_channel();
        for relay in relays {
            let response_tx = response_tx.clone();
            let block = signed_block.clone();
            let timeout = self.timeout;
            tokio::spawn(async move {
                metrics::count_request(ApiMethod::GetPayload, relay.public_key());
                let start = Instant::now();
                let result = relay.open_bid(&block, timeout).await;
                metrics::observe_request_duration(
                    ApiMethod::GetPayload,
                    relay.public_key(),
                    start.elapsed(),
                );
                // the winner may already have been returned
                let _ = response_tx.send((relay, result));
            });
        }
        drop(response_tx);

        while let Some((relay, response)) = response_rx.recv().await {
            match response {
                Ok(payload) => {
                    if payload.block_hash == expected_block_hash {
                        return Ok(payload);
                    }
                    tracing::warn!(
                        %relay,
                        returned = %payload.block_hash,
                        expected = %expected_block_hash,
                        "returned payload does not match the expected block hash"
                    );
                }
                Err(err) => on_relay_error(&relay, ApiMethod::GetPayload, &err),
            }
        }

        Err(Error::MissingPayload(expected_block_hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::RelayEndpoint;
    use crate::signing::sign_builder_message;
    use crate::types::{BlindedBeaconBlock, BlindedBeaconBlockBody, BuilderBid};
    use ethereum_consensus::crypto::SecretKey;
    use ethereum_consensus::primitives::BlsSignature;
    use std::str::FromStr;

    fn signed_bid(signing_key: &SecretKey, context: &Context) -> SignedBuilderBid {
        let mut bid = BuilderBid {
            public_key: signing_key.public_key(),
            ..Default::default()
        };
        bid.header.block_hash = Hash32::try_from_bytes(&[42u8; 32]).unwrap();
        let signature = sign_builder_message(&mut bid, signing_key, context).unwrap();
        SignedBuilderBid { message: bid, signature }
    }

    #[test]
    fn test_validate_bid() {
        let context = Context::for_mainnet();
        let signing_key = SecretKey::from_bytes(&[7u8; 32]).unwrap();
        let relay_public_key = signing_key.public_key();

        let mut bid = signed_bid(&signing_key, &context);
        assert!(validate_bid(&mut bid, &relay_public_key, &context).is_ok());

        // the sentinel block hash means "no bid"
        let mut bid = signed_bid(&signing_key, &context);
        bid.message.header.block_hash = Hash32::default();
        assert!(matches!(
            validate_bid(&mut bid, &relay_public_key, &context),
            Err(Error::EmptyBlockHash)
        ));

        // signed with a key other than the whitelisted one
        let other_key = SecretKey::from_bytes(&[8u8; 32]).unwrap();
        let mut bid = signed_bid(&other_key, &context);
        assert!(matches!(
            validate_bid(&mut bid, &relay_public_key, &context),
            Err(Error::InvalidBidPublicKey)
        ));

        // scrambled signature
        let mut bid = signed_bid(&signing_key, &context);
        bid.signature = BlsSignature::default();
        assert!(validate_bid(&mut bid, &relay_public_key, &context).is_err());
    }

    #[test]
    fn test_bid_key_ignores_proposer() {
        let parent_hash = Hash32::try_from_bytes(&[3u8; 32]).unwrap();
        let mut body = BlindedBeaconBlockBody::default();
        body.execution_payload_header.parent_hash = parent_hash.clone();
        let block = BlindedBeaconBlock { slot: 11, body, ..Default::default() };
        let signed_block =
            SignedBlindedBeaconBlock { message: block, signature: Default::default() };

        let key = bid_key_from(&signed_block);
        assert_eq!(key.slot, 11);
        assert_eq!(key.parent_hash, parent_hash);
        assert_eq!(key.public_key, Default::default());
    }

    #[test]
    fn test_prune_stale_bids() {
        let signing_key = SecretKey::from_bytes(&[9u8; 32]).unwrap();
        let endpoint = RelayEndpoint::from_str(&format!(
            "http://relay.example.com#{}",
            signing_key.public_key()
        ))
        .unwrap();
        let relay = Relay::from(endpoint);

        let mut outstanding_bids = HashMap::new();
        for slot in 1..=10 {
            let request = BidRequest { slot, ..Default::default() };
            outstanding_bids.insert(request, vec![relay.clone()]);
        }

        prune_stale_bids(&mut outstanding_bids, 8);
        let mut slots = outstanding_bids.keys().map(|request| request.slot).collect::<Vec<_>>();
        slots.sort_unstable();
        assert_eq!(slots, vec![5, 6, 7, 8, 9, 10]);
    }
}

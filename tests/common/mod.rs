use axum::extract::{Json, OriginalUri, Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use boost_mux::signing::sign_builder_message;
use boost_mux::types::{
    BuilderBid, ConsensusVersion, ExecutionPayload, ExecutionPayloadHeader,
    SignedBlindedBeaconBlock, SignedBuilderBid, SignedValidatorRegistration, VersionedValue,
};
use ethereum_consensus::crypto::SecretKey;
use ethereum_consensus::primitives::{BlsPublicKey, Hash32};
use ethereum_consensus::state_transition::Context;
use ssz_rs::prelude::U256;
use std::collections::HashMap;
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn u256(value: u64) -> U256 {
    let mut bytes = [0u8; 32];
    bytes[..8].copy_from_slice(&value.to_le_bytes());
    U256::from_bytes_le(bytes)
}

/// Allocates a port that is free at the time of the call.
pub fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port()
}

/// A relay endpoint that refuses connections.
pub fn closed_relay_endpoint(seed: u8) -> String {
    let secret_key = SecretKey::from_bytes(&[seed; 32]).unwrap();
    format!("http://127.0.0.1:{}#{}", free_port(), secret_key.public_key())
}

struct MockRelayState {
    context: Context,
    secret_key: SecretKey,
    public_key: BlsPublicKey,
    request_counts: Mutex<HashMap<String, usize>>,
    get_header_response: Mutex<Option<SignedBuilderBid>>,
    register_response_status: Mutex<Option<u16>>,
    response_delay: Mutex<Option<Duration>>,
}

impl MockRelayState {
    async fn on_request(&self, path: &str) {
        {
            let mut counts = self.request_counts.lock().unwrap();
            *counts.entry(path.to_string()).or_default() += 1;
        }
        let delay = *self.response_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn make_signed_bid(&self, value: u64, parent_hash: &Hash32) -> SignedBuilderBid {
        let mut bid = BuilderBid {
            header: ExecutionPayloadHeader {
                parent_hash: parent_hash.clone(),
                block_hash: Hash32::try_from_bytes(&[0xab; 32]).unwrap(),
                ..Default::default()
            },
            value: u256(value),
            public_key: self.public_key.clone(),
        };
        let signature = sign_builder_message(&mut bid, &self.secret_key, &self.context).unwrap();
        SignedBuilderBid { message: bid, signature }
    }
}

async fn handle_status(State(state): State<Arc<MockRelayState>>, OriginalUri(uri): OriginalUri) -> StatusCode {
    state.on_request(uri.path()).await;
    StatusCode::OK
}

async fn handle_register(
    State(state): State<Arc<MockRelayState>>,
    OriginalUri(uri): OriginalUri,
    Json(_registrations): Json<Vec<SignedValidatorRegistration>>,
) -> StatusCode {
    state.on_request(uri.path()).await;
    let status = *state.register_response_status.lock().unwrap();
    match status {
        Some(status) => StatusCode::from_u16(status).unwrap(),
        None => StatusCode::OK,
    }
}

async fn handle_get_header(
    State(state): State<Arc<MockRelayState>>,
    OriginalUri(uri): OriginalUri,
    Path((_slot, parent_hash, _public_key)): Path<(String, String, String)>,
) -> Json<VersionedValue<SignedBuilderBid>> {
    state.on_request(uri.path()).await;
    let bid = state.get_header_response.lock().unwrap().clone();
    let bid = bid.unwrap_or_else(|| {
        let bytes = hex::decode(parent_hash.trim_start_matches("0x")).unwrap();
        let parent_hash = Hash32::try_from_bytes(&bytes).unwrap();
        state.make_signed_bid(1337, &parent_hash)
    });
    Json(VersionedValue { version: ConsensusVersion::Bellatrix, data: bid })
}

async fn handle_open_bid(
    State(state): State<Arc<MockRelayState>>,
    OriginalUri(uri): OriginalUri,
    Json(block): Json<SignedBlindedBeaconBlock>,
) -> Json<VersionedValue<ExecutionPayload>> {
    state.on_request(uri.path()).await;
    let header = &block.message.body.execution_payload_header;
    let payload = ExecutionPayload {
        parent_hash: header.parent_hash.clone(),
        fee_recipient: header.fee_recipient.clone(),
        block_hash: header.block_hash.clone(),
        ..Default::default()
    };
    Json(VersionedValue { version: ConsensusVersion::Bellatrix, data: payload })
}

/// An in-process relay speaking just enough of the builder API for the
/// scenarios in this suite: it signs bids with its own key, counts requests
/// per path, and can be told to delay or misbehave.
pub struct MockRelay {
    pub public_key: BlsPublicKey,
    pub addr: SocketAddr,
    state: Arc<MockRelayState>,
}

impl MockRelay {
    pub async fn spawn(seed: u8) -> Self {
        let secret_key = SecretKey::from_bytes(&[seed; 32]).unwrap();
        let public_key = secret_key.public_key();
        let state = Arc::new(MockRelayState {
            context: Context::for_mainnet(),
            secret_key,
            public_key: public_key.clone(),
            request_counts: Default::default(),
            get_header_response: Default::default(),
            register_response_status: Default::default(),
            response_delay: Default::default(),
        });

        let router = Router::new()
            .route("/eth/v1/builder/status", get(handle_status))
            .route("/eth/v1/builder/validators", post(handle_register))
            .route("/eth/v1/builder/header/:slot/:parent_hash/:public_key", get(handle_get_header))
            .route("/eth/v1/builder/blinded_blocks", post(handle_open_bid))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = axum::Server::from_tcp(listener).unwrap().serve(router.into_make_service());
        tokio::spawn(async move { server.await.unwrap() });

        Self { public_key, addr, state }
    }

    /// The configuration string for this relay.
    pub fn endpoint(&self) -> String {
        format!("http://{}#{}", self.addr, self.public_key)
    }

    /// The configuration string for this relay, whitelisting a key other
    /// than the one it actually signs with.
    pub fn endpoint_with_key(&self, public_key: &BlsPublicKey) -> String {
        format!("http://{}#{}", self.addr, public_key)
    }

    pub fn request_count(&self, path: &str) -> usize {
        self.state.request_counts.lock().unwrap().get(path).copied().unwrap_or_default()
    }

    pub fn make_signed_bid(&self, value: u64, parent_hash: &Hash32) -> SignedBuilderBid {
        self.state.make_signed_bid(value, parent_hash)
    }

    pub fn set_get_header_response(&self, bid: SignedBuilderBid) {
        *self.state.get_header_response.lock().unwrap() = Some(bid);
    }

    pub fn set_register_response_status(&self, status: u16) {
        *self.state.register_response_status.lock().unwrap() = Some(status);
    }

    pub fn set_response_delay(&self, delay: Duration) {
        *self.state.response_delay.lock().unwrap() = Some(delay);
    }
}

/// A relay that answers every request with a temporary redirect.
pub struct RedirectRelay {
    pub public_key: BlsPublicKey,
    pub addr: SocketAddr,
}

impl RedirectRelay {
    pub async fn spawn(seed: u8, target: String) -> Self {
        let secret_key = SecretKey::from_bytes(&[seed; 32]).unwrap();
        let public_key = secret_key.public_key();

        let router = Router::new().fallback(move || {
            let target = target.clone();
            async move {
                (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, target)]).into_response()
            }
        });

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = axum::Server::from_tcp(listener).unwrap().serve(router.into_make_service());
        tokio::spawn(async move { server.await.unwrap() });

        Self { public_key, addr }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}#{}", self.addr, self.public_key)
    }
}

use ethereum_consensus::primitives::Hash32;
use ethereum_consensus::state_transition::Error as ConsensusError;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid slot")]
    InvalidSlot,
    #[error("invalid hash")]
    InvalidHash,
    #[error("invalid pubkey")]
    InvalidPublicKey,
    #[error("invalid payload")]
    InvalidPayload,
    #[error("no valid bids returned for proposal")]
    NoBids,
    #[error("could not find relay with outstanding bid to accept")]
    MissingOpenBid,
    #[error("no payload returned for opened bid with block hash {0}")]
    MissingPayload(Hash32),
    #[error("no successful relay response")]
    NoSuccessfulResponse,
    #[error("all relays are unavailable")]
    NoRelaysAvailable,
    #[error("bid has an empty block hash")]
    EmptyBlockHash,
    #[error("bid public key does not match relay public key")]
    InvalidBidPublicKey,
    #[error("{0}")]
    Consensus(#[from] ConsensusError),
    #[error("no relays provided, provide at least one relay")]
    EmptyRelays,
    #[error("unable to parse relay URL {0}: {1}")]
    RelayUrl(String, #[source] url::ParseError),
    #[error("unable to parse relay public key from URL {0}: {1}")]
    RelayPublicKey(Url, String),
    #[error("invalid genesis fork version: {0}")]
    InvalidForkVersion(String),
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    #[error("server already running")]
    ServerAlreadyRunning,
    #[error("unable to bind server: {0}")]
    Bind(#[from] hyper::Error),
    #[error("unable to resolve listen address {0}")]
    Listen(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Error body served to builder API clients, `{"code":N,"message":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

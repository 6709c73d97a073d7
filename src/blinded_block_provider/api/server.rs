use crate::blinded_block_provider::BlindedBlockProvider;
use crate::error::{ApiError, Error};
use crate::serde::try_bytes_from_hex_str;
use crate::types::{
    BidRequest, ConsensusVersion, ExecutionPayload, SignedBlindedBeaconBlock, SignedBuilderBid,
    SignedValidatorRegistration, VersionedValue,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, IntoMakeService};
use axum::Router;
use ethereum_consensus::primitives::{BlsPublicKey, Hash32, Slot};
use hyper::server::conn::AddrIncoming;
use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::task::JoinHandle;

// hyper's HTTP/1 read buffer floor; header blocks beyond this yield 431
const MAX_HEADER_BYTES: usize = 8192;

/// Type alias for the configured axum server
pub type BlockProviderServer = axum::Server<AddrIncoming, IntoMakeService<Router>>;

/// Response body in the builder API shape: JSON plus a trailing newline.
struct JsonResponse<T>(T);

impl<T: serde::Serialize> IntoResponse for JsonResponse<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(mut body) => {
                body.push(b'\n');
                ([(header::CONTENT_TYPE, "application/json")], body).into_response()
            }
            Err(err) => {
                tracing::error!(%err, "unable to serialize response body");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let code = match &self {
            Error::InvalidSlot
            | Error::InvalidHash
            | Error::InvalidPublicKey
            | Error::InvalidPayload => StatusCode::BAD_REQUEST,
            // an empty auction is a response, not an error
            Error::NoBids => return StatusCode::NO_CONTENT.into_response(),
            Error::MissingOpenBid | Error::MissingPayload(..) | Error::NoSuccessfulResponse => {
                let error = ApiError::new(
                    StatusCode::BAD_GATEWAY.as_u16(),
                    Error::NoSuccessfulResponse.to_string(),
                );
                return (StatusCode::BAD_GATEWAY, JsonResponse(error)).into_response();
            }
            Error::NoRelaysAvailable => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = if code == StatusCode::INTERNAL_SERVER_ERROR {
            "internal server error".to_string()
        } else {
            self.to_string()
        };
        (code, JsonResponse(ApiError::new(code.as_u16(), message))).into_response()
    }
}

fn parse_bid_request(slot: &str, parent_hash: &str, public_key: &str) -> Result<BidRequest, Error> {
    let slot = slot.parse::<Slot>().map_err(|_| Error::InvalidSlot)?;

    if !parent_hash.starts_with("0x") {
        return Err(Error::InvalidHash);
    }
    let bytes = try_bytes_from_hex_str(parent_hash).map_err(|_| Error::InvalidHash)?;
    let parent_hash = Hash32::try_from_bytes(&bytes).map_err(|_| Error::InvalidHash)?;

    if !public_key.starts_with("0x") {
        return Err(Error::InvalidPublicKey);
    }
    let bytes = try_bytes_from_hex_str(public_key).map_err(|_| Error::InvalidPublicKey)?;
    let public_key =
        BlsPublicKey::try_from(bytes.as_ref()).map_err(|_| Error::InvalidPublicKey)?;

    Ok(BidRequest { slot, parent_hash, public_key })
}

pub(crate) async fn handle_root() -> impl IntoResponse {
    JsonResponse(serde_json::json!({}))
}

pub(crate) async fn handle_status_check<B: BlindedBlockProvider>(
    State(builder): State<B>,
) -> Result<StatusCode, Error> {
    builder.check_status().await?;
    Ok(StatusCode::OK)
}

pub(crate) async fn handle_validator_registration<B: BlindedBlockProvider>(
    State(builder): State<B>,
    registrations: Result<Json<Vec<SignedValidatorRegistration>>, JsonRejection>,
) -> Result<JsonResponse<serde_json::Value>, Error> {
    let Json(mut registrations) = registrations.map_err(|_| Error::InvalidPayload)?;
    tracing::debug!(count = registrations.len(), "processing validator registrations");
    builder.register_validators(&mut registrations).await?;
    Ok(JsonResponse(serde_json::json!({})))
}

pub(crate) async fn handle_fetch_bid<B: BlindedBlockProvider>(
    State(builder): State<B>,
    Path((slot, parent_hash, public_key)): Path<(String, String, String)>,
) -> Result<JsonResponse<VersionedValue<SignedBuilderBid>>, Error> {
    let bid_request = parse_bid_request(&slot, &parent_hash, &public_key)?;
    let signed_bid = builder.fetch_best_bid(&bid_request).await?;
    tracing::debug!(%bid_request, %signed_bid, "returning best bid");
    Ok(JsonResponse(VersionedValue { version: ConsensusVersion::Bellatrix, data: signed_bid }))
}

pub(crate) async fn handle_open_bid<B: BlindedBlockProvider>(
    State(builder): State<B>,
    block: Result<Json<SignedBlindedBeaconBlock>, JsonRejection>,
) -> Result<JsonResponse<VersionedValue<ExecutionPayload>>, Error> {
    let Json(mut block) = block.map_err(|_| Error::InvalidPayload)?;
    let payload = builder.open_bid(&mut block).await?;
    let slot = block.message.slot;
    tracing::debug!(%slot, block_hash = %payload.block_hash, "returning unblinded payload");
    Ok(JsonResponse(VersionedValue { version: ConsensusVersion::Bellatrix, data: payload }))
}

pub struct Server<B: BlindedBlockProvider> {
    addr: String,
    builder: B,
    is_running: AtomicBool,
}

impl<B: BlindedBlockProvider + Clone + Send + Sync + 'static> Server<B> {
    pub fn new(addr: impl Into<String>, builder: B) -> Self {
        Self { addr: addr.into(), builder, is_running: AtomicBool::new(false) }
    }

    /// Configures and returns the axum server. Starting a server that is
    /// already running is an error.
    pub fn serve(&self) -> Result<BlockProviderServer, Error> {
        if self.is_running.swap(true, Ordering::SeqCst) {
            return Err(Error::ServerAlreadyRunning);
        }

        let router = Router::new()
            .route("/", get(handle_root))
            .route("/eth/v1/builder/status", get(handle_status_check::<B>))
            .route("/eth/v1/builder/validators", post(handle_validator_registration::<B>))
            .route(
                "/eth/v1/builder/header/:slot/:parent_hash/:public_key",
                get(handle_fetch_bid::<B>),
            )
            .route("/eth/v1/builder/blinded_blocks", post(handle_open_bid::<B>))
            .with_state(self.builder.clone());

        let addr = resolve_listen_addr(&self.addr)?;
        let incoming = AddrIncoming::bind(&addr)?;
        let server = axum::Server::builder(incoming)
            .http1_max_buf_size(MAX_HEADER_BYTES)
            .serve(router.into_make_service());
        Ok(server)
    }

    /// Spawns the server on a new task returning the handle for it
    pub fn spawn(&self) -> Result<JoinHandle<Result<(), Error>>, Error> {
        let server = self.serve()?;
        let address = server.local_addr();
        Ok(tokio::spawn(async move {
            tracing::info!("listening at {address}...");
            let result = server.await;
            if let Err(ref err) = result {
                tracing::error!(%err, "error while listening for incoming");
            }
            result.map_err(Error::Bind)
        }))
    }
}

fn resolve_listen_addr(addr: &str) -> Result<SocketAddr, Error> {
    addr.to_socket_addrs()
        .map_err(|_| Error::Listen(addr.to_string()))?
        .next()
        .ok_or_else(|| Error::Listen(addr.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "0xe28385e7bd68df656cd0042b74b69c3104b5356ed1f20eb69f1f925df47a3ab7";
    const PUBLIC_KEY: &str = "0x8a1d7b8dd64e0aafe7ea7b6c95065c9364cf99d38470c12ee807d55f7de1529ad29ce2c422e0b65e3d5a05c02caca249";

    #[test]
    fn test_parse_bid_request() {
        let bid_request = parse_bid_request("1", HASH, PUBLIC_KEY).unwrap();
        assert_eq!(bid_request.slot, 1);
        assert_eq!(bid_request.parent_hash.to_string(), HASH);
        assert_eq!(bid_request.public_key.to_string(), PUBLIC_KEY);
    }

    #[test]
    fn test_parse_bid_request_errors() {
        // one digit past u64::MAX
        let overflowing_slot = format!("{}0", u64::MAX);
        assert!(matches!(
            parse_bid_request(&overflowing_slot, HASH, PUBLIC_KEY),
            Err(Error::InvalidSlot)
        ));
        assert!(matches!(parse_bid_request("slot", HASH, PUBLIC_KEY), Err(Error::InvalidSlot)));

        assert!(matches!(parse_bid_request("1", "0x1", PUBLIC_KEY), Err(Error::InvalidHash)));
        assert!(matches!(
            parse_bid_request("1", &HASH[2..], PUBLIC_KEY),
            Err(Error::InvalidHash)
        ));

        assert!(matches!(parse_bid_request("1", HASH, "0x1"), Err(Error::InvalidPublicKey)));
        assert!(matches!(
            parse_bid_request("1", HASH, &PUBLIC_KEY[2..]),
            Err(Error::InvalidPublicKey)
        ));
    }

    #[test]
    fn test_error_bodies_are_byte_exact() {
        let body = serde_json::to_string(&ApiError::new(400, Error::InvalidSlot.to_string()))
            .unwrap();
        assert_eq!(body, r#"{"code":400,"message":"invalid slot"}"#);

        let body =
            serde_json::to_string(&ApiError::new(502, Error::NoSuccessfulResponse.to_string()))
                .unwrap();
        assert_eq!(body, r#"{"code":502,"message":"no successful relay response"}"#);
    }
}

mod common;

use boost_mux::signing::sign_builder_message;
use boost_mux::types::{
    BlindedBeaconBlock, BlindedBeaconBlockBody, ExecutionPayload, SignedBlindedBeaconBlock,
    SignedBuilderBid, SignedValidatorRegistration, ValidatorRegistration, VersionedValue,
};
use boost_mux::{Config, Service};
use common::{closed_relay_endpoint, free_port, u256, MockRelay, RedirectRelay};
use ethereum_consensus::crypto::SecretKey;
use ethereum_consensus::primitives::{ExecutionAddress, Hash32};
use ethereum_consensus::state_transition::Context;
use reqwest::StatusCode;
use std::path::PathBuf;
use std::time::Duration;

const PARENT_HASH: &str = "0xe28385e7bd68df656cd0042b74b69c3104b5356ed1f20eb69f1f925df47a3ab7";
const PROPOSER_KEY: &str = "0x8a1d7b8dd64e0aafe7ea7b6c95065c9364cf99d38470c12ee807d55f7de1529ad29ce2c422e0b65e3d5a05c02caca249";

fn setup_logging() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "error".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();
}

fn parent_hash() -> Hash32 {
    let bytes = hex::decode(PARENT_HASH.trim_start_matches("0x")).unwrap();
    Hash32::try_from_bytes(&bytes).unwrap()
}

fn get_header_path(slot: u64, parent_hash: &str, public_key: &str) -> String {
    format!("/eth/v1/builder/header/{slot}/{parent_hash}/{public_key}")
}

async fn start_service(
    relays: Vec<String>,
    relay_timeout_ms: u64,
    proposer_config: Option<PathBuf>,
) -> String {
    setup_logging();

    let config = Config {
        addr: format!("127.0.0.1:{}", free_port()),
        relays,
        relay_timeout_ms,
        proposer_config,
        ..Default::default()
    };
    let addr = config.addr.clone();

    let service = Service::from(config);
    tokio::spawn(async move {
        if let Err(err) = service.run().await {
            panic!("service failed: {err}");
        }
    });

    // poll the root handler until the listener is up
    let client = reqwest::Client::new();
    for _ in 0..100 {
        if let Ok(response) = client.get(format!("http://{addr}/")).send().await {
            if response.status() == StatusCode::OK {
                return addr;
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("service at {addr} did not come up");
}

fn sample_registration(context: &Context) -> SignedValidatorRegistration {
    let mut rng = rand::thread_rng();
    let signing_key = SecretKey::random(&mut rng).unwrap();
    let mut message = ValidatorRegistration {
        fee_recipient: ExecutionAddress::try_from_bytes(&[0xdb; 20]).unwrap(),
        gas_limit: 30_000_000,
        timestamp: 1_234_356,
        public_key: signing_key.public_key(),
    };
    let signature = sign_builder_message(&mut message, &signing_key, context).unwrap();
    SignedValidatorRegistration { message, signature }
}

#[tokio::test]
async fn test_root_handler() {
    let relay = MockRelay::spawn(1).await;
    let addr = start_service(vec![relay.endpoint()], 1000, None).await;

    let response = reqwest::get(format!("http://{addr}/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "{}\n");
}

#[tokio::test]
async fn test_status_with_one_relay_down() {
    let relay = MockRelay::spawn(1).await;
    let addr =
        start_service(vec![relay.endpoint(), closed_relay_endpoint(2)], 1000, None).await;

    let path = "/eth/v1/builder/status";
    let response = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(relay.request_count(path), 1);
}

#[tokio::test]
async fn test_status_with_all_relays_down() {
    let addr = start_service(vec![closed_relay_endpoint(1)], 1000, None).await;

    let response =
        reqwest::get(format!("http://{addr}/eth/v1/builder/status")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.text().await.unwrap(),
        "{\"code\":503,\"message\":\"all relays are unavailable\"}\n"
    );
}

#[tokio::test]
async fn test_register_validators() {
    let relay = MockRelay::spawn(1).await;
    let addr = start_service(vec![relay.endpoint()], 1000, None).await;

    let context = Context::for_mainnet();
    let registrations = vec![sample_registration(&context)];

    let path = "/eth/v1/builder/validators";
    let client = reqwest::Client::new();
    let response =
        client.post(format!("http://{addr}{path}")).json(&registrations).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(relay.request_count(path), 1);
}

#[tokio::test]
async fn test_register_validators_all_relays_fail() {
    let relays = [MockRelay::spawn(1).await, MockRelay::spawn(2).await];
    relays[0].set_register_response_status(400);
    relays[1].set_register_response_status(400);
    let addr =
        start_service(relays.iter().map(|relay| relay.endpoint()).collect(), 1000, None).await;

    let context = Context::for_mainnet();
    let registrations = vec![sample_registration(&context)];

    let path = "/eth/v1/builder/validators";
    let client = reqwest::Client::new();
    let response =
        client.post(format!("http://{addr}{path}")).json(&registrations).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.text().await.unwrap(),
        "{\"code\":502,\"message\":\"no successful relay response\"}\n"
    );
    assert_eq!(relays[0].request_count(path), 1);
    assert_eq!(relays[1].request_count(path), 1);
}

#[tokio::test]
async fn test_register_validators_with_slow_relay() {
    let relay = MockRelay::spawn(1).await;
    let addr = start_service(vec![relay.endpoint()], 50, None).await;

    let context = Context::for_mainnet();
    let registrations = vec![sample_registration(&context)];
    let client = reqwest::Client::new();
    let path = "/eth/v1/builder/validators";

    let response =
        client.post(format!("http://{addr}{path}")).json(&registrations).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // now the relay answers past the deadline
    relay.set_response_delay(Duration::from_millis(500));
    let response =
        client.post(format!("http://{addr}{path}")).json(&registrations).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.text().await.unwrap(),
        "{\"code\":502,\"message\":\"no successful relay response\"}\n"
    );
    assert_eq!(relay.request_count(path), 2);
}

#[tokio::test]
async fn test_get_header_uses_highest_value() {
    let relays =
        [MockRelay::spawn(1).await, MockRelay::spawn(2).await, MockRelay::spawn(3).await];
    relays[0].set_get_header_response(relays[0].make_signed_bid(12345, &parent_hash()));
    relays[1].set_get_header_response(relays[1].make_signed_bid(12347, &parent_hash()));
    relays[2].set_get_header_response(relays[2].make_signed_bid(12346, &parent_hash()));
    let addr =
        start_service(relays.iter().map(|relay| relay.endpoint()).collect(), 1000, None).await;

    let path = get_header_path(1, PARENT_HASH, PROPOSER_KEY);
    let response = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    for relay in &relays {
        assert_eq!(relay.request_count(&path), 1);
    }

    let bid: VersionedValue<SignedBuilderBid> = response.json().await.unwrap();
    assert_eq!(bid.data.message.value, u256(12347));
}

#[tokio::test]
async fn test_get_header_with_empty_block_hash() {
    let relay = MockRelay::spawn(1).await;
    let mut bid = relay.make_signed_bid(12345, &parent_hash());
    bid.message.header.block_hash = Hash32::default();
    relay.set_get_header_response(bid);
    let addr = start_service(vec![relay.endpoint()], 1000, None).await;

    let path = get_header_path(1, PARENT_HASH, PROPOSER_KEY);
    let response = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(relay.request_count(&path), 1);
}

#[tokio::test]
async fn test_get_header_with_unexpected_relay_public_key() {
    // the relay signs with its own key, but the operator whitelisted another
    let relay = MockRelay::spawn(1).await;
    let other_key = SecretKey::from_bytes(&[2u8; 32]).unwrap().public_key();
    let addr = start_service(vec![relay.endpoint_with_key(&other_key)], 1000, None).await;

    let path = get_header_path(1, PARENT_HASH, PROPOSER_KEY);
    let response = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(relay.request_count(&path), 1);
}

#[tokio::test]
async fn test_get_header_with_invalid_signature() {
    let relay = MockRelay::spawn(1).await;
    let mut bid = relay.make_signed_bid(12345, &parent_hash());
    bid.signature = Default::default();
    relay.set_get_header_response(bid);
    let addr = start_service(vec![relay.endpoint()], 1000, None).await;

    let path = get_header_path(1, PARENT_HASH, PROPOSER_KEY);
    let response = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(relay.request_count(&path), 1);
}

#[tokio::test]
async fn test_get_header_argument_parsing() {
    let relay = MockRelay::spawn(1).await;
    let addr = start_service(vec![relay.endpoint()], 1000, None).await;

    // one digit past u64::MAX
    let path = format!("/eth/v1/builder/header/{}0/{PARENT_HASH}/{PROPOSER_KEY}", u64::MAX);
    let response = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap(), "{\"code\":400,\"message\":\"invalid slot\"}\n");

    let path = get_header_path(1, "0x1", PROPOSER_KEY);
    let response = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap(), "{\"code\":400,\"message\":\"invalid hash\"}\n");

    let path = get_header_path(1, PARENT_HASH, "0x1");
    let response = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap(), "{\"code\":400,\"message\":\"invalid pubkey\"}\n");

    // no fan-out happened for any of these
    assert_eq!(relay.request_count(&get_header_path(1, PARENT_HASH, PROPOSER_KEY)), 0);
}

#[tokio::test]
async fn test_get_header_with_zero_parent_hash() {
    let relay = MockRelay::spawn(1).await;
    let addr = start_service(vec![relay.endpoint()], 1000, None).await;

    let zero_hash = format!("0x{}", "00".repeat(32));
    let path = get_header_path(1, &zero_hash, PROPOSER_KEY);
    let response = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(relay.request_count(&path), 0);
}

#[tokio::test]
async fn test_proposer_routing() {
    let mut rng = rand::thread_rng();
    let proposer_1 = SecretKey::random(&mut rng).unwrap().public_key();
    let proposer_2 = SecretKey::random(&mut rng).unwrap().public_key();
    let proposer_3 = SecretKey::random(&mut rng).unwrap().public_key();

    let relays = [MockRelay::spawn(1).await, MockRelay::spawn(2).await];

    let config_data = format!(
        r#"{{
            "proposer_config": {{
                "{proposer_1}": {{ "relays": ["{r0}"] }},
                "{proposer_2}": {{ "relays": ["{r1}"] }}
            }},
            "default_config": {{ "relays": ["{r0}", "{r1}"] }}
        }}"#,
        r0 = relays[0].endpoint(),
        r1 = relays[1].endpoint(),
    );
    let config_path =
        std::env::temp_dir().join(format!("proposer-config-{}.json", std::process::id()));
    std::fs::write(&config_path, config_data).unwrap();

    let addr = start_service(vec![], 1000, Some(config_path.clone())).await;

    let path_proposer_1 = get_header_path(1, PARENT_HASH, &proposer_1.to_string());
    let response = reqwest::get(format!("http://{addr}{path_proposer_1}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let path_proposer_2 = get_header_path(1, PARENT_HASH, &proposer_2.to_string());
    let response = reqwest::get(format!("http://{addr}{path_proposer_2}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let path_proposer_3 = get_header_path(1, PARENT_HASH, &proposer_3.to_string());
    let response = reqwest::get(format!("http://{addr}{path_proposer_3}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(relays[0].request_count(&path_proposer_1), 1);
    assert_eq!(relays[0].request_count(&path_proposer_2), 0);
    assert_eq!(relays[0].request_count(&path_proposer_3), 1);
    assert_eq!(relays[1].request_count(&path_proposer_1), 0);
    assert_eq!(relays[1].request_count(&path_proposer_2), 1);
    assert_eq!(relays[1].request_count(&path_proposer_3), 1);

    std::fs::remove_file(config_path).ok();
}

#[tokio::test]
async fn test_get_payload_round_trip() {
    let relay = MockRelay::spawn(1).await;
    let addr = start_service(vec![relay.endpoint()], 1000, None).await;
    let client = reqwest::Client::new();

    let slot = 1;
    let path = get_header_path(slot, PARENT_HASH, PROPOSER_KEY);
    let response = client.get(format!("http://{addr}{path}")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bid: VersionedValue<SignedBuilderBid> = response.json().await.unwrap();
    assert_eq!(bid.data.message.header.parent_hash, parent_hash());

    let context = Context::for_mainnet();
    let mut rng = rand::thread_rng();
    let proposer_key = SecretKey::random(&mut rng).unwrap();
    let body = BlindedBeaconBlockBody {
        execution_payload_header: bid.data.message.header.clone(),
        ..Default::default()
    };
    let mut block = BlindedBeaconBlock { slot, proposer_index: 1, body, ..Default::default() };
    let signature = sign_builder_message(&mut block, &proposer_key, &context).unwrap();
    let signed_block = SignedBlindedBeaconBlock { message: block, signature };

    let payload_path = "/eth/v1/builder/blinded_blocks";
    let response = client
        .post(format!("http://{addr}{payload_path}"))
        .json(&signed_block)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(relay.request_count(payload_path), 1);

    let payload: VersionedValue<ExecutionPayload> = response.json().await.unwrap();
    assert_eq!(payload.data.block_hash, bid.data.message.header.block_hash);
    assert_eq!(payload.data.parent_hash, parent_hash());
}

#[tokio::test]
async fn test_get_payload_without_open_bid() {
    let relay = MockRelay::spawn(1).await;
    let addr = start_service(vec![relay.endpoint()], 1000, None).await;

    let context = Context::for_mainnet();
    let mut rng = rand::thread_rng();
    let proposer_key = SecretKey::random(&mut rng).unwrap();
    let mut block = BlindedBeaconBlock { slot: 1, proposer_index: 1, ..Default::default() };
    block.body.execution_payload_header.parent_hash = parent_hash();
    let signature = sign_builder_message(&mut block, &proposer_key, &context).unwrap();
    let signed_block = SignedBlindedBeaconBlock { message: block, signature };

    let payload_path = "/eth/v1/builder/blinded_blocks";
    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{addr}{payload_path}"))
        .json(&signed_block)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.text().await.unwrap(),
        "{\"code\":502,\"message\":\"no successful relay response\"}\n"
    );
    assert_eq!(relay.request_count(payload_path), 0);
}

#[tokio::test]
async fn test_relays_answering_with_redirects_are_ignored() {
    // a compromised relay redirecting to a healthy one must never succeed
    let healthy = MockRelay::spawn(1).await;
    let redirect =
        RedirectRelay::spawn(2, format!("http://{}/eth/v1/builder/status", healthy.addr)).await;
    let addr = start_service(vec![redirect.endpoint()], 1000, None).await;

    let response =
        reqwest::get(format!("http://{addr}/eth/v1/builder/status")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let path = get_header_path(1, PARENT_HASH, PROPOSER_KEY);
    let response = reqwest::get(format!("http://{addr}{path}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_register_validators_with_invalid_payload() {
    let relay = MockRelay::spawn(1).await;
    let addr = start_service(vec![relay.endpoint()], 1000, None).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{addr}/eth/v1/builder/validators"))
        .header("content-type", "application/json")
        .body("[{\"message\":")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.text().await.unwrap(),
        "{\"code\":400,\"message\":\"invalid payload\"}\n"
    );
    assert_eq!(relay.request_count("/eth/v1/builder/validators"), 0);
}

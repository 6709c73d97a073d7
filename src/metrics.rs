use ethereum_consensus::primitives::BlsPublicKey;
use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, HistogramOpts, HistogramVec, IntCounterVec,
    Opts, DEFAULT_BUCKETS,
};
use std::time::Duration;

const NAMESPACE: &str = "boost_mux";
const SUBSYSTEM: &str = "relay";

const API_METHOD_LABEL: &str = "method";
const RELAY_LABEL: &str = "relay";

lazy_static! {
    static ref API_REQUESTS_COUNTER: IntCounterVec = register_int_counter_vec!(
        Opts::new("api_requests_total", "total number of builder API requests sent to relays")
            .namespace(NAMESPACE)
            .subsystem(SUBSYSTEM),
        &[API_METHOD_LABEL, RELAY_LABEL]
    )
    .unwrap();
    static ref API_TIMEOUT_COUNTER: IntCounterVec = register_int_counter_vec!(
        Opts::new("api_timeouts_total", "total number of builder API requests hitting the deadline")
            .namespace(NAMESPACE)
            .subsystem(SUBSYSTEM),
        &[API_METHOD_LABEL, RELAY_LABEL]
    )
    .unwrap();
    static ref API_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        HistogramOpts {
            common_opts: Opts::new(
                "api_request_duration_seconds",
                "duration (in seconds) of builder API requests to relays"
            )
            .namespace(NAMESPACE)
            .subsystem(SUBSYSTEM),
            buckets: DEFAULT_BUCKETS.to_vec(),
        },
        &[API_METHOD_LABEL, RELAY_LABEL]
    )
    .unwrap();
    static ref INVALID_BIDS_COUNTER: IntCounterVec = register_int_counter_vec!(
        Opts::new("invalid_bids_total", "total number of relay bids rejected by validation")
            .namespace(NAMESPACE)
            .subsystem(SUBSYSTEM),
        &[RELAY_LABEL]
    )
    .unwrap();
}

#[derive(Copy, Clone, Debug)]
pub enum ApiMethod {
    Status,
    Register,
    GetHeader,
    GetPayload,
}

impl ApiMethod {
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Status => "status",
            Self::Register => "register",
            Self::GetHeader => "get_header",
            Self::GetPayload => "get_payload",
        }
    }
}

pub fn count_request(method: ApiMethod, relay: &BlsPublicKey) {
    API_REQUESTS_COUNTER.with_label_values(&[method.as_str(), &relay.to_string()]).inc();
}

pub fn count_timeout(method: ApiMethod, relay: &BlsPublicKey) {
    API_TIMEOUT_COUNTER.with_label_values(&[method.as_str(), &relay.to_string()]).inc();
}

pub fn count_invalid_bid(relay: &BlsPublicKey) {
    INVALID_BIDS_COUNTER.with_label_values(&[&relay.to_string()]).inc();
}

pub fn observe_request_duration(method: ApiMethod, relay: &BlsPublicKey, duration: Duration) {
    API_REQUEST_DURATION_SECONDS
        .with_label_values(&[method.as_str(), &relay.to_string()])
        .observe(duration.as_secs_f64());
}

use crate::types::{
    BidRequest, ExecutionPayload, SignedBlindedBeaconBlock, SignedBuilderBid,
    SignedValidatorRegistration, VersionedValue,
};
use reqwest::{redirect, StatusCode};
use std::time::Duration;
use url::Url;

// longest outgoing request URL tolerated before the dispatch is abandoned
const MAX_URL_LENGTH: usize = 10_240;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("timed out waiting for relay response")]
    Timeout,
    #[error("unable to reach relay: {0}")]
    Unreachable(#[source] reqwest::Error),
    #[error("relay returned unexpected HTTP status {0}")]
    BadRelay(StatusCode),
    #[error("unable to parse relay response: {0}")]
    InvalidSchema(#[source] reqwest::Error),
    #[error("request URL exceeds {MAX_URL_LENGTH} bytes")]
    UrlTooLong,
    #[error("{0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    fn from_request(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::InvalidSchema(err)
        } else {
            Self::Unreachable(err)
        }
    }
}

/// A `Client` for a service implementing the Builder APIs.
///
/// Redirects are never followed: a relay answering with a 3xx is treated as
/// a failed relay, so a compromised relay cannot steer a request elsewhere.
/// Every call takes the deadline for this one attempt.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    endpoint: Url,
}

impl Client {
    pub fn new(endpoint: Url) -> Self {
        let http = reqwest::Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .expect("can build HTTP client");
        Self { http, endpoint }
    }

    fn target(&self, path: &str) -> Result<Url, Error> {
        let target = self.endpoint.join(path)?;
        if target.as_str().len() > MAX_URL_LENGTH {
            return Err(Error::UrlTooLong);
        }
        Ok(target)
    }

    pub async fn check_status(&self, timeout: Duration) -> Result<(), Error> {
        let target = self.target("/eth/v1/builder/status")?;
        let response =
            self.http.get(target).timeout(timeout).send().await.map_err(Error::from_request)?;
        match response.status() {
            StatusCode::OK => Ok(()),
            status => Err(Error::BadRelay(status)),
        }
    }

    pub async fn register_validators(
        &self,
        registrations: &[SignedValidatorRegistration],
        timeout: Duration,
    ) -> Result<(), Error> {
        let target = self.target("/eth/v1/builder/validators")?;
        let response = self
            .http
            .post(target)
            .timeout(timeout)
            .json(&registrations)
            .send()
            .await
            .map_err(Error::from_request)?;
        match response.status() {
            StatusCode::OK => Ok(()),
            status => Err(Error::BadRelay(status)),
        }
    }

    pub async fn fetch_best_bid(
        &self,
        bid_request: &BidRequest,
        timeout: Duration,
    ) -> Result<Option<SignedBuilderBid>, Error> {
        let target = self.target(&format!(
            "/eth/v1/builder/header/{}/{}/{}",
            bid_request.slot, bid_request.parent_hash, bid_request.public_key
        ))?;
        let response =
            self.http.get(target).timeout(timeout).send().await.map_err(Error::from_request)?;
        match response.status() {
            StatusCode::OK => {
                let bid: VersionedValue<SignedBuilderBid> =
                    response.json().await.map_err(Error::from_request)?;
                Ok(Some(bid.data))
            }
            // a relay with no bid for this slot
            StatusCode::NO_CONTENT => Ok(None),
            status => Err(Error::BadRelay(status)),
        }
    }

    pub async fn open_bid(
        &self,
        signed_block: &SignedBlindedBeaconBlock,
        timeout: Duration,
    ) -> Result<ExecutionPayload, Error> {
        let target = self.target("/eth/v1/builder/blinded_blocks")?;
        let response = self
            .http
            .post(target)
            .timeout(timeout)
            .json(signed_block)
            .send()
            .await
            .map_err(Error::from_request)?;
        match response.status() {
            StatusCode::OK => {
                let payload: VersionedValue<ExecutionPayload> =
                    response.json().await.map_err(Error::from_request)?;
                Ok(payload.data)
            }
            status => Err(Error::BadRelay(status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_oversized_target() {
        let client = Client::new(Url::parse("http://127.0.0.1:5555").unwrap());
        let path = format!("/eth/v1/builder/header/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(matches!(client.target(&path), Err(Error::UrlTooLong)));
        assert!(client.target("/eth/v1/builder/status").is_ok());
    }
}

use crate::blinded_block_provider::Client;
use crate::error::Error;
use crate::serde::try_bytes_from_hex_str;
use ethereum_consensus::primitives::BlsPublicKey;
use std::{fmt, ops::Deref, str::FromStr};
use url::Url;

// a compressed BLS public key rendered as `0x` + 96 hex characters
const PUBLIC_KEY_HEX_LENGTH: usize = 98;

/// Where to find a relay, and the key its bids must be signed with.
///
/// Parsed from the configuration syntax `URL#0xPUBLIC_KEY`.
#[derive(Clone, Debug)]
pub struct RelayEndpoint {
    pub url: Url,
    pub public_key: BlsPublicKey,
}

impl PartialEq for RelayEndpoint {
    fn eq(&self, other: &Self) -> bool {
        self.public_key == other.public_key
    }
}

impl Eq for RelayEndpoint {}

impl TryFrom<Url> for RelayEndpoint {
    type Error = Error;

    fn try_from(url: Url) -> Result<Self, Self::Error> {
        let fragment = url.fragment().unwrap_or_default();
        if fragment.len() != PUBLIC_KEY_HEX_LENGTH || !fragment.starts_with("0x") {
            return Err(Error::RelayPublicKey(
                url.clone(),
                "public key fragment of relay URL is incorrectly formed: expected `0x` followed by 96 hex characters".to_string(),
            ));
        }

        let bytes = try_bytes_from_hex_str(fragment)
            .map_err(|err| Error::RelayPublicKey(url.clone(), format!("unable to decode public key hex data: {err}")))?;
        let public_key = BlsPublicKey::try_from(bytes.as_ref())
            .map_err(|err| Error::RelayPublicKey(url.clone(), format!("unable to parse hex data as public key: {err}")))?;

        let mut url = url;
        url.set_fragment(None);
        Ok(Self { url, public_key })
    }
}

impl FromStr for RelayEndpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Url::parse(s) {
            Ok(url) => RelayEndpoint::try_from(url),
            Err(err) => Err(Error::RelayUrl(s.to_string(), err)),
        }
    }
}

impl fmt::Display for RelayEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// A relay with a constructed API client.
#[derive(Clone, Debug)]
pub struct Relay {
    api: Client,
    pub endpoint: RelayEndpoint,
}

impl Deref for Relay {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.api
    }
}

impl PartialEq for Relay {
    fn eq(&self, other: &Self) -> bool {
        self.endpoint == other.endpoint
    }
}

impl Eq for Relay {}

impl fmt::Display for Relay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.endpoint)
    }
}

impl Relay {
    pub fn public_key(&self) -> &BlsPublicKey {
        &self.endpoint.public_key
    }
}

impl From<RelayEndpoint> for Relay {
    fn from(endpoint: RelayEndpoint) -> Self {
        Self { api: Client::new(endpoint.url.clone()), endpoint }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethereum_consensus::crypto::SecretKey;

    const URL: &str = "https://relay.com";

    #[test]
    fn test_parse_relay_endpoint() {
        let mut rng = rand::thread_rng();
        let sk = SecretKey::random(&mut rng).unwrap();
        let public_key = sk.public_key();

        let input = format!("{URL}/#{public_key}");
        let endpoint = RelayEndpoint::from_str(&input).unwrap();
        assert_eq!(endpoint.public_key, public_key);
        assert_eq!(endpoint.url.as_str(), "https://relay.com/");
        assert!(endpoint.url.fragment().is_none());
    }

    #[test]
    fn test_parse_relay_endpoint_default_key() {
        let input = format!("http://127.0.0.1:5555/#{}", BlsPublicKey::default());
        let endpoint = RelayEndpoint::from_str(&input).unwrap();
        assert_eq!(endpoint.public_key, BlsPublicKey::default());
    }

    #[test]
    fn test_parse_errors() {
        let public_key = BlsPublicKey::default().to_string();
        let long_public_key = format!("{public_key}1");
        let short_public_key = &public_key[..PUBLIC_KEY_HEX_LENGTH - 1];
        let unprefixed_public_key = &public_key[2..];

        let test_cases = [
            String::new(),
            "http://127.0.0.1:5555".to_string(),
            format!("#{public_key}"),
            format!("http://127.0.0.1:5555#{long_public_key}"),
            format!("http://127.0.0.1:5555#{short_public_key}"),
            format!("http://127.0.0.1:5555#{unprefixed_public_key}"),
            format!("127.0.0.1:5555#{public_key}"),
        ];

        for input in test_cases {
            assert!(RelayEndpoint::from_str(&input).is_err(), "accepted `{input}`");
        }
    }

    #[test]
    fn test_equality_is_by_public_key() {
        let key = BlsPublicKey::default().to_string();
        let a = RelayEndpoint::from_str(&format!("http://one.example.com#{key}")).unwrap();
        let b = RelayEndpoint::from_str(&format!("http://two.example.com#{key}")).unwrap();
        assert_eq!(a, b);
    }
}

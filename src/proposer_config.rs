use crate::error::Error;
use crate::relay::{Relay, RelayEndpoint};
use crate::serde::try_bytes_from_hex_str;
use ethereum_consensus::primitives::BlsPublicKey;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, RwLock};

/// The set of relays to contact on behalf of one proposer.
#[derive(Clone, Default)]
pub struct ProposerConfig {
    pub relays: Vec<Relay>,
}

impl ProposerConfig {
    fn from_endpoints(endpoints: &[String]) -> Result<Self, Error> {
        let mut relays = vec![];
        for endpoint in endpoints {
            let relay = Relay::from(RelayEndpoint::from_str(endpoint)?);
            push_relay(&mut relays, relay);
        }
        Ok(Self { relays })
    }
}

fn push_relay(relays: &mut Vec<Relay>, relay: Relay) {
    if relays.iter().any(|existing| existing.public_key() == relay.public_key()) {
        tracing::warn!(%relay, "skipping relay with duplicate public key");
    } else {
        relays.push(relay);
    }
}

// on-disk layout of the proposer configuration file
#[derive(Debug, Deserialize)]
struct ProposerConfigFile {
    #[serde(default)]
    proposer_config: HashMap<String, RelaySet>,
    default_config: Option<RelaySet>,
}

#[derive(Debug, Deserialize)]
struct RelaySet {
    relays: Vec<String>,
}

struct Inner {
    by_public_key: HashMap<BlsPublicKey, ProposerConfig>,
    default_config: ProposerConfig,
}

/// Maps proposers to the relays allowed to serve them.
///
/// The store is replaced atomically on reload; `resolve` hands out one
/// consistent snapshot, so a fan-out in flight never straddles two
/// configurations.
pub struct ProposerConfigStore {
    inner: RwLock<Arc<Inner>>,
}

impl ProposerConfigStore {
    /// A store with only a default configuration, seeded from CLI relays.
    pub fn from_relays(relays: Vec<Relay>) -> Result<Self, Error> {
        Self::from_parts(HashMap::new(), ProposerConfig { relays })
    }

    /// Loads the JSON configuration file at `path`. A `default_config`
    /// entry in the file replaces `default_relays`.
    pub fn from_file(path: &Path, default_relays: Vec<Relay>) -> Result<Self, Error> {
        let inner = load_file(path, default_relays)?;
        Self::from_inner(inner)
    }

    fn from_parts(
        by_public_key: HashMap<BlsPublicKey, ProposerConfig>,
        default_config: ProposerConfig,
    ) -> Result<Self, Error> {
        Self::from_inner(Inner { by_public_key, default_config })
    }

    fn from_inner(inner: Inner) -> Result<Self, Error> {
        validate(&inner)?;
        Ok(Self { inner: RwLock::new(Arc::new(inner)) })
    }

    /// Atomically replaces the store contents from the configuration file.
    pub fn reload_from_file(&self, path: &Path, default_relays: Vec<Relay>) -> Result<(), Error> {
        let inner = load_file(path, default_relays)?;
        validate(&inner)?;
        let mut guard = self.inner.write().expect("can lock");
        *guard = Arc::new(inner);
        Ok(())
    }

    /// The relay set for `public_key`, or the default set when the proposer
    /// has no entry of its own.
    pub fn resolve(&self, public_key: &BlsPublicKey) -> ProposerConfig {
        let inner = self.snapshot();
        inner.by_public_key.get(public_key).cloned().unwrap_or_else(|| inner.default_config.clone())
    }

    /// The default relay set, used where no proposer context exists.
    pub fn default_relays(&self) -> Vec<Relay> {
        self.snapshot().default_config.relays.clone()
    }

    /// Every configured relay, default set first, deduplicated by public key.
    pub fn all_relays(&self) -> Vec<Relay> {
        let inner = self.snapshot();
        let mut relays = inner.default_config.relays.clone();
        for config in inner.by_public_key.values() {
            for relay in &config.relays {
                if !relays.contains(relay) {
                    relays.push(relay.clone());
                }
            }
        }
        relays
    }

    fn snapshot(&self) -> Arc<Inner> {
        self.inner.read().expect("can lock").clone()
    }
}

fn validate(inner: &Inner) -> Result<(), Error> {
    let no_relays = inner.default_config.relays.is_empty()
        && inner.by_public_key.values().all(|config| config.relays.is_empty());
    if no_relays {
        Err(Error::EmptyRelays)
    } else {
        Ok(())
    }
}

fn load_file(path: &Path, default_relays: Vec<Relay>) -> Result<Inner, Error> {
    let config_data = std::fs::read_to_string(path)?;
    let file: ProposerConfigFile = serde_json::from_str(&config_data)?;
    build(file, default_relays)
}

fn build(file: ProposerConfigFile, default_relays: Vec<Relay>) -> Result<Inner, Error> {
    let mut by_public_key = HashMap::new();
    for (public_key, relay_set) in &file.proposer_config {
        let public_key = try_public_key_from_str(public_key)?;
        let config = ProposerConfig::from_endpoints(&relay_set.relays)?;
        by_public_key.insert(public_key, config);
    }

    let default_config = match &file.default_config {
        Some(relay_set) => ProposerConfig::from_endpoints(&relay_set.relays)?,
        None => ProposerConfig { relays: default_relays },
    };

    Ok(Inner { by_public_key, default_config })
}

fn try_public_key_from_str(s: &str) -> Result<BlsPublicKey, Error> {
    let bytes = try_bytes_from_hex_str(s).map_err(|_| Error::InvalidPublicKey)?;
    BlsPublicKey::try_from(bytes.as_ref()).map_err(|_| Error::InvalidPublicKey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethereum_consensus::crypto::SecretKey;

    fn test_relay(seed: u8) -> (BlsPublicKey, Relay) {
        let secret_key = SecretKey::from_bytes(&[seed; 32]).unwrap();
        let public_key = secret_key.public_key();
        let endpoint =
            RelayEndpoint::from_str(&format!("http://relay-{seed}.example.com#{public_key}"))
                .unwrap();
        (public_key, Relay::from(endpoint))
    }

    #[test]
    fn test_requires_at_least_one_relay() {
        assert!(matches!(ProposerConfigStore::from_relays(vec![]), Err(Error::EmptyRelays)));
        let (_, relay) = test_relay(1);
        assert!(ProposerConfigStore::from_relays(vec![relay]).is_ok());
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let (proposer, _) = test_relay(10);
        let (_, r0) = test_relay(1);
        let (_, r1) = test_relay(2);

        let mut by_public_key = HashMap::new();
        by_public_key.insert(proposer.clone(), ProposerConfig { relays: vec![r1.clone()] });
        let store = ProposerConfigStore::from_parts(
            by_public_key,
            ProposerConfig { relays: vec![r0.clone()] },
        )
        .unwrap();

        let resolved = store.resolve(&proposer);
        assert_eq!(resolved.relays, vec![r1.clone()]);

        let (other, _) = test_relay(11);
        let resolved = store.resolve(&other);
        assert_eq!(resolved.relays, vec![r0.clone()]);

        let all = store.all_relays();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], r0);
    }

    #[test]
    fn test_build_from_file_contents() {
        let (proposer, _) = test_relay(10);
        let (_, r0) = test_relay(1);
        let relay_public_key = r0.public_key().clone();

        let data = format!(
            r#"{{
                "proposer_config": {{
                    "{proposer}": {{ "relays": ["http://relay-1.example.com#{relay_public_key}"] }}
                }},
                "default_config": {{ "relays": ["http://relay-1.example.com#{relay_public_key}"] }}
            }}"#
        );
        let file: ProposerConfigFile = serde_json::from_str(&data).unwrap();
        let inner = build(file, vec![]).unwrap();
        assert_eq!(inner.by_public_key.len(), 1);
        assert_eq!(inner.by_public_key[&proposer].relays, vec![r0.clone()]);
        assert_eq!(inner.default_config.relays, vec![r0]);
    }

    #[test]
    fn test_reload_replaces_contents() {
        let (_, r0) = test_relay(1);
        let (_, r1) = test_relay(2);
        let store = ProposerConfigStore::from_relays(vec![r0]).unwrap();

        let relay_public_key = r1.public_key().clone();
        let data = format!(
            r#"{{ "default_config": {{ "relays": ["http://relay-2.example.com#{relay_public_key}"] }} }}"#
        );
        let path = std::env::temp_dir().join(format!("relay-config-{}.json", std::process::id()));
        std::fs::write(&path, data).unwrap();

        store.reload_from_file(&path, vec![]).unwrap();
        assert_eq!(store.default_relays(), vec![r1]);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_duplicate_relays_are_dropped() {
        let (_, r0) = test_relay(1);
        let relay_public_key = r0.public_key().clone();
        let endpoints = vec![
            format!("http://relay-1.example.com#{relay_public_key}"),
            format!("http://relay-other.example.com#{relay_public_key}"),
        ];
        let config = ProposerConfig::from_endpoints(&endpoints).unwrap();
        assert_eq!(config.relays.len(), 1);
    }
}

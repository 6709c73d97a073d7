use ethereum_consensus::builder::compute_builder_domain;
use ethereum_consensus::crypto::SecretKey;
use ethereum_consensus::phase0::{sign_with_domain, verify_signed_data};
use ethereum_consensus::primitives::{BlsPublicKey, BlsSignature};
use ethereum_consensus::state_transition::{Context, Error};
use ssz_rs::prelude::SimpleSerialize;

pub fn sign_builder_message<T: SimpleSerialize>(
    message: &mut T,
    signing_key: &SecretKey,
    context: &Context,
) -> Result<BlsSignature, Error> {
    let domain = compute_builder_domain(context)?;
    let signature = sign_with_domain(message, signing_key, domain)?;
    Ok(signature)
}

pub fn verify_signed_builder_message<T: SimpleSerialize>(
    message: &mut T,
    signature: &BlsSignature,
    public_key: &BlsPublicKey,
    context: &Context,
) -> Result<(), Error> {
    let domain = compute_builder_domain(context)?;
    verify_signed_data(message, signature, public_key, domain)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BuilderBid;

    #[test]
    fn test_builder_message_roundtrip() {
        let mut rng = rand::thread_rng();
        let signing_key = SecretKey::random(&mut rng).unwrap();
        let public_key = signing_key.public_key();
        let context = Context::for_mainnet();

        let mut bid = BuilderBid { public_key: public_key.clone(), ..Default::default() };
        let signature = sign_builder_message(&mut bid, &signing_key, &context).unwrap();

        assert!(verify_signed_builder_message(&mut bid, &signature, &public_key, &context).is_ok());

        let other_key = SecretKey::random(&mut rng).unwrap().public_key();
        assert!(verify_signed_builder_message(&mut bid, &signature, &other_key, &context).is_err());
    }
}

use crate::error::ContractError;
use crate::event::SignersRotatedEvent;
use crate::storage_types::DataKey;
use crate::types::{Proof, ProofSignature, ProofSigner, WeightedSigner, WeightedSigners};
use amb_std::ensure;
use amb_std::events::Event;
use amb_std::ttl::extend_persistent_ttl;
use soroban_sdk::{Bytes, BytesN, Env, Vec};

pub fn initialize_auth(
    env: Env,
    domain_separator: BytesN<32>,
    minimum_rotation_delay: u64,
    previous_signers_retention: u64,
    initial_signers: Vec<WeightedSigners>,
) -> Result<(), ContractError> {
    env.storage().instance().set(&DataKey::Epoch, &0_u64);

    env.storage().instance().set(
        &DataKey::PreviousSignersRetention,
        &previous_signers_retention,
    );

    env.storage()
        .instance()
        .set(&DataKey::DomainSeparator, &domain_separator);

    env.storage()
        .instance()
        .set(&DataKey::MinimumRotationDelay, &minimum_rotation_delay);

    ensure!(!initial_signers.is_empty(), ContractError::InvalidSigners);

    for signers in initial_signers.into_iter() {
        rotate_signers(&env, &signers, false)?;
    }

    Ok(())
}

/// Validates the proof against a registered signer set and returns whether that set is the latest one.
pub fn validate_proof(
    env: &Env,
    data_hash: &BytesN<32>,
    proof: Proof,
) -> Result<bool, ContractError> {
    let signers_hash = proof.weighted_signers().hash(env);

    let signers_epoch = epoch_by_signers_hash(env, signers_hash.clone())?;

    let current_epoch = epoch(env);

    let is_latest_signers = signers_epoch == current_epoch;

    let previous_signers_retention: u64 = env
        .storage()
        .instance()
        .get(&DataKey::PreviousSignersRetention)
        .unwrap_or_default();

    ensure!(
        current_epoch - signers_epoch <= previous_signers_retention,
        ContractError::InvalidSignersHash
    );

    let msg_hash = message_hash_to_sign(env, signers_hash, data_hash);

    ensure!(
        validate_signatures(env, msg_hash, proof)?,
        ContractError::InvalidSignatures
    );

    Ok(is_latest_signers)
}

pub fn rotate_signers(
    env: &Env,
    new_signers: &WeightedSigners,
    enforce_rotation_delay: bool,
) -> Result<(), ContractError> {
    validate_signers(env, new_signers)?;

    update_rotation_timestamp(env, enforce_rotation_delay)?;

    let new_signers_hash = new_signers.hash(env);
    let new_epoch: u64 = epoch(env) + 1;

    let epoch_key = DataKey::EpochBySignersHash(new_signers_hash.clone());

    ensure!(
        !env.storage().persistent().has(&epoch_key),
        ContractError::DuplicateSigners
    );

    env.storage().instance().set(&DataKey::Epoch, &new_epoch);

    let signers_hash_key = DataKey::SignersHashByEpoch(new_epoch);
    env.storage()
        .persistent()
        .set(&signers_hash_key, &new_signers_hash);
    extend_persistent_ttl(env, &signers_hash_key);

    env.storage().persistent().set(&epoch_key, &new_epoch);
    extend_persistent_ttl(env, &epoch_key);

    SignersRotatedEvent {
        epoch: new_epoch,
        signers_hash: new_signers_hash,
    }
    .emit(env);

    Ok(())
}

pub fn epoch(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::Epoch)
        .unwrap_or_default()
}

pub fn epoch_by_signers_hash(env: &Env, signers_hash: BytesN<32>) -> Result<u64, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::EpochBySignersHash(signers_hash))
        .ok_or(ContractError::InvalidSignersHash)
}

pub fn signers_hash_by_epoch(env: &Env, epoch: u64) -> Result<BytesN<32>, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::SignersHashByEpoch(epoch))
        .ok_or(ContractError::InvalidEpoch)
}

fn message_hash_to_sign(env: &Env, signers_hash: BytesN<32>, data_hash: &BytesN<32>) -> Bytes {
    let domain_separator: BytesN<32> = env
        .storage()
        .instance()
        .get(&DataKey::DomainSeparator)
        .expect("domain separator must be set during contract construction");

    let mut msg: Bytes = domain_separator.into();
    msg.extend_from_array(&signers_hash.to_array());
    msg.extend_from_array(&data_hash.to_array());

    env.crypto().keccak256(&msg).to_bytes().into()
}

fn update_rotation_timestamp(env: &Env, enforce_rotation_delay: bool) -> Result<(), ContractError> {
    let minimum_rotation_delay: u64 = env
        .storage()
        .instance()
        .get(&DataKey::MinimumRotationDelay)
        .unwrap_or_default();

    let last_rotation_timestamp: u64 = env
        .storage()
        .instance()
        .get(&DataKey::LastRotationTimestamp)
        .unwrap_or(0);

    let current_timestamp = env.ledger().timestamp();

    ensure!(
        !enforce_rotation_delay
            || (current_timestamp.saturating_sub(last_rotation_timestamp)
                >= minimum_rotation_delay),
        ContractError::InsufficientRotationDelay
    );

    env.storage()
        .instance()
        .set(&DataKey::LastRotationTimestamp, &current_timestamp);

    Ok(())
}

fn validate_signatures(env: &Env, msg_hash: Bytes, proof: Proof) -> Result<bool, ContractError> {
    let mut total_weight = 0u128;

    for ProofSigner {
        signer: WeightedSigner {
            signer: public_key,
            weight,
        },
        signature,
    } in proof.signers.iter()
    {
        if let ProofSignature::Signed(signature) = signature {
            env.crypto()
                .ed25519_verify(&public_key, &msg_hash, &signature);

            total_weight = total_weight
                .checked_add(weight)
                .ok_or(ContractError::WeightOverflow)?;

            if total_weight >= proof.threshold {
                return Ok(true);
            }
        }
    }

    Ok(false)
}

/// Check if signer set is valid, i.e signer/pub key hash are in sorted order,
/// weights are non-zero and sum to at least threshold
fn validate_signers(env: &Env, weighted_signers: &WeightedSigners) -> Result<(), ContractError> {
    ensure!(
        !weighted_signers.signers.is_empty(),
        ContractError::InvalidSigners
    );

    let mut previous_signer = BytesN::<32>::from_array(env, &[0; 32]);
    let mut total_weight = 0u128;

    for signer in weighted_signers.signers.iter() {
        ensure!(previous_signer < signer.signer, ContractError::InvalidSigners);

        ensure!(signer.weight != 0, ContractError::InvalidWeight);

        previous_signer = signer.signer;
        total_weight = total_weight
            .checked_add(signer.weight)
            .ok_or(ContractError::WeightOverflow)?;
    }

    let threshold = weighted_signers.threshold;
    ensure!(
        threshold != 0 && total_weight >= threshold,
        ContractError::InvalidThreshold
    );

    Ok(())
}

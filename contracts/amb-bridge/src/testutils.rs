#![cfg(any(test, feature = "testutils"))]
extern crate std;

use crate::contract::{AmbBridge, AmbBridgeClient};
use crate::executable::AmbExecutableInterface;
use crate::types::{
    Message, MessageContext, Proof, ProofSignature, ProofSigner, WeightedSigner, WeightedSigners,
};
use amb_std::find_last_event;
use amb_std::traits::IntoVec;
use ed25519_dalek::{Signature, Signer, SigningKey};
use rand::Rng;
use soroban_sdk::testutils::{Address as _, BytesN as _};
use soroban_sdk::{
    contract, contractimpl, contracttype, vec, Address, Bytes, BytesN, Env, String, TryFromVal,
};

pub const HOME_CHAIN: &str = "home";
pub const FOREIGN_CHAIN: &str = "foreign";
pub const MAX_GAS_PER_TX: u64 = 2_000_000;

/// Payload that makes [`TestExecutor`] fail after it has written its state.
pub const FAILING_PAYLOAD: &[u8] = b"fail";

#[derive(Clone, Debug)]
pub struct TestSignerSet {
    pub signer_keys: std::vec::Vec<SigningKey>,
    pub signers: WeightedSigners,
    pub domain_separator: BytesN<32>,
}

pub fn randint(a: u32, b: u32) -> u32 {
    rand::thread_rng().gen_range(a..b)
}

pub fn generate_signers_set(
    env: &Env,
    num_signers: u32,
    domain_separator: BytesN<32>,
) -> TestSignerSet {
    let mut rng = rand::thread_rng();

    let mut signer_keypair: std::vec::Vec<_> = (0..num_signers)
        .map(|_| {
            let signing_key = SigningKey::from_bytes(&rng.gen());
            let weight = rng.gen_range(1..10) as u128;

            (signing_key, weight)
        })
        .collect();

    // Sort signers by public key
    signer_keypair.sort_by(|(key1, _), (key2, _)| {
        key1.verifying_key()
            .to_bytes()
            .cmp(&key2.verifying_key().to_bytes())
    });

    let total_weight = signer_keypair.iter().map(|(_, w)| w).sum::<u128>();

    let signer_vec: std::vec::Vec<WeightedSigner> = signer_keypair
        .iter()
        .map(|(key, weight)| WeightedSigner {
            signer: BytesN::<32>::from_array(env, &key.verifying_key().to_bytes()),
            weight: *weight,
        })
        .collect();

    let threshold = rng.gen_range(1..=total_weight);

    let signers = WeightedSigners {
        signers: signer_vec.into_vec(env),
        threshold,
        nonce: BytesN::<32>::random(env),
    };

    TestSignerSet {
        signer_keys: signer_keypair.into_iter().map(|(key, _)| key).collect(),
        signers,
        domain_separator,
    }
}

/// Signs `data_hash` with just enough signers of the set to reach its threshold.
pub fn generate_proof(env: &Env, data_hash: BytesN<32>, signers: &TestSignerSet) -> Proof {
    let mut msg: Bytes = signers.domain_separator.clone().into();
    msg.extend_from_array(&signers.signers.hash(env).to_array());
    msg.extend_from_array(&data_hash.to_array());
    let msg_hash: BytesN<32> = env.crypto().keccak256(&msg).into();

    let threshold = signers.signers.threshold;
    let mut total_weight = 0u128;

    let proof_signers: std::vec::Vec<ProofSigner> = signers
        .signer_keys
        .iter()
        .zip(signers.signers.signers.iter())
        .map(|(signing_key, signer)| {
            let signature = if total_weight < threshold {
                total_weight += signer.weight;

                let signature: Signature = signing_key.sign(&msg_hash.to_array());
                ProofSignature::Signed(BytesN::<64>::from_array(env, &signature.to_bytes()))
            } else {
                ProofSignature::Unsigned
            };

            ProofSigner { signer, signature }
        })
        .collect();

    Proof {
        signers: proof_signers.into_vec(env),
        threshold,
        nonce: signers.signers.nonce.clone(),
    }
}

pub fn setup_bridge<'a>(
    env: &Env,
    source_chain: &str,
    destination_chain: &str,
    previous_signers_retention: u32,
    num_signers: u32,
) -> (TestSignerSet, AmbBridgeClient<'a>) {
    let owner = Address::generate(env);
    let operator = Address::generate(env);
    let signers = generate_signers_set(env, num_signers, BytesN::random(env));
    let initial_signers = vec![env, signers.signers.clone()];
    let minimum_rotation_delay: u64 = 0;

    let contract_id = env.register(
        AmbBridge,
        (
            owner,
            operator,
            String::from_str(env, source_chain),
            String::from_str(env, destination_chain),
            MAX_GAS_PER_TX,
            signers.domain_separator.clone(),
            minimum_rotation_delay,
            previous_signers_retention as u64,
            initial_signers,
        ),
    );

    (signers, AmbBridgeClient::new(env, &contract_id))
}

/// Builds a message from the foreign chain to a bridge deployed as the home chain.
pub fn generate_test_message(
    env: &Env,
    executor: &Address,
    data: Bytes,
    gas_limit: u64,
) -> Message {
    Message {
        message_id: BytesN::<32>::random(env),
        source_chain: String::from_str(env, FOREIGN_CHAIN),
        destination_chain: String::from_str(env, HOME_CHAIN),
        sender: Address::generate(env),
        executor: executor.clone(),
        gas_limit,
        data,
    }
}

/// Returns the message carried by the last `user_request_for_signature` event of `bridge`.
/// Call it right after the dispatching invocation.
pub fn last_outbound_message(env: &Env, bridge: &Address) -> Message {
    let (_, data) = find_last_event(env, bridge, "user_request_for_signature")
        .expect("no outbound message was emitted");

    let (message,) = <(Message,)>::try_from_val(env, &data).expect("malformed outbound message");

    message
}

/// Plays the validator set: signs the message and submits it to the destination bridge.
pub fn relay(
    env: &Env,
    signers: &TestSignerSet,
    destination: &AmbBridgeClient,
    message: &Message,
) -> bool {
    let proof = generate_proof(env, message.execution_hash(env), signers);

    destination.execute_signatures(message, &proof)
}

#[contracttype]
enum TestExecutorDataKey {
    Bridge,
    LastContext,
    ExecutedCount,
}

/// Minimal message receiver recording the context of every executed message.
#[contract]
pub struct TestExecutor;

#[contractimpl]
impl TestExecutor {
    pub fn __constructor(env: Env, bridge: Address) {
        env.storage()
            .instance()
            .set(&TestExecutorDataKey::Bridge, &bridge);
    }

    pub fn last_context(env: Env) -> Option<MessageContext> {
        env.storage()
            .instance()
            .get(&TestExecutorDataKey::LastContext)
    }

    pub fn executed_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&TestExecutorDataKey::ExecutedCount)
            .unwrap_or(0)
    }
}

#[contractimpl]
impl AmbExecutableInterface for TestExecutor {
    fn bridge(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&TestExecutorDataKey::Bridge)
            .unwrap()
    }

    fn execute_message(env: Env, context: MessageContext, data: Bytes) {
        Self::validate(&env);

        env.storage()
            .instance()
            .set(&TestExecutorDataKey::LastContext, &context);
        env.storage().instance().set(
            &TestExecutorDataKey::ExecutedCount,
            &(Self::executed_count(env.clone()) + 1),
        );

        if data == Bytes::from_slice(&env, FAILING_PAYLOAD) {
            panic!("execution failed on request");
        }
    }
}

pub fn setup_executor(env: &Env, bridge: &Address) -> TestExecutorClient<'static> {
    let contract_id = env.register(TestExecutor, (bridge.clone(),));

    TestExecutorClient::new(env, &contract_id)
}

use amb_bridge::error::ContractError;
use amb_bridge::event::RelayedMessageEvent;
use amb_bridge::testutils::{
    generate_proof, generate_test_message, relay, setup_executor, FAILING_PAYLOAD, FOREIGN_CHAIN,
    HOME_CHAIN,
};
use amb_bridge::types::{MessageContext, MessageRecord};
use amb_bridge::MIN_GAS_PER_CALL;
use amb_std::{assert_contract_err, assert_invoke_auth_err, assert_last_event};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{bytes, Address, Bytes, Env, String};

mod utils;
use utils::setup_env;

#[test]
fn execute_signatures_calls_executor() {
    let (env, signers, client) = setup_env(1, 5);
    let executor = setup_executor(&env, &client.address);

    let message = generate_test_message(&env, &executor.address, bytes!(&env, 0x1234), 50_000);

    assert!(relay(&env, &signers, &client, &message));

    assert_last_event(
        &env,
        &client.address,
        RelayedMessageEvent {
            message_id: message.message_id.clone(),
            sender: message.sender.clone(),
            executor: executor.address.clone(),
            status: true,
        },
    );

    assert_eq!(
        executor.last_context(),
        Some(MessageContext {
            message_id: message.message_id.clone(),
            source_chain: String::from_str(&env, FOREIGN_CHAIN),
            sender: message.sender.clone(),
        })
    );
    assert_eq!(executor.executed_count(), 1);

    assert!(client.message_call_status(&message.message_id));
    assert_eq!(
        client.message_record(&message.message_id),
        Some(MessageRecord {
            executed: true,
            call_status: true,
            sender: message.sender.clone(),
            receiver: executor.address.clone(),
            data_hash: message.data_hash(&env),
        })
    );
    assert_eq!(client.failed_message_receiver(&message.message_id), None);
    assert_eq!(client.failed_message_sender(&message.message_id), None);
    assert_eq!(client.failed_message_data_hash(&message.message_id), None);
}

#[test]
fn failed_call_is_recorded_and_rolled_back() {
    let (env, signers, client) = setup_env(1, 5);
    let executor = setup_executor(&env, &client.address);

    let data = Bytes::from_slice(&env, FAILING_PAYLOAD);
    let message = generate_test_message(&env, &executor.address, data, 50_000);

    assert!(!relay(&env, &signers, &client, &message));

    assert_last_event(
        &env,
        &client.address,
        RelayedMessageEvent {
            message_id: message.message_id.clone(),
            sender: message.sender.clone(),
            executor: executor.address.clone(),
            status: false,
        },
    );

    assert_eq!(executor.executed_count(), 0);
    assert_eq!(executor.last_context(), None);

    assert!(client.is_message_relayed(&message.message_id));
    assert!(!client.message_call_status(&message.message_id));
    assert_eq!(
        client.failed_message_receiver(&message.message_id),
        Some(executor.address.clone())
    );
    assert_eq!(
        client.failed_message_sender(&message.message_id),
        Some(message.sender.clone())
    );
    assert_eq!(
        client.failed_message_data_hash(&message.message_id),
        Some(message.data_hash(&env))
    );
}

#[test]
fn call_below_minimum_gas_is_not_attempted() {
    let (env, signers, client) = setup_env(1, 5);
    let executor = setup_executor(&env, &client.address);

    let message = generate_test_message(
        &env,
        &executor.address,
        bytes!(&env, 0x1234),
        MIN_GAS_PER_CALL - 1,
    );

    assert!(!relay(&env, &signers, &client, &message));

    assert_eq!(executor.executed_count(), 0);
    assert!(!client.message_call_status(&message.message_id));
    assert_eq!(
        client.failed_message_receiver(&message.message_id),
        Some(executor.address.clone())
    );
}

#[test]
fn call_with_minimum_gas_is_attempted() {
    let (env, signers, client) = setup_env(1, 5);
    let executor = setup_executor(&env, &client.address);

    let message = generate_test_message(
        &env,
        &executor.address,
        bytes!(&env, 0x1234),
        MIN_GAS_PER_CALL,
    );

    assert!(relay(&env, &signers, &client, &message));
    assert_eq!(executor.executed_count(), 1);
}

#[test]
fn successful_message_cannot_be_relayed_twice() {
    let (env, signers, client) = setup_env(1, 5);
    let executor = setup_executor(&env, &client.address);

    let message = generate_test_message(&env, &executor.address, bytes!(&env, 0x1234), 50_000);
    assert!(relay(&env, &signers, &client, &message));

    let proof = generate_proof(&env, message.execution_hash(&env), &signers);
    assert_contract_err!(
        client.try_execute_signatures(&message, &proof),
        ContractError::MessageAlreadyProcessed
    );

    assert_eq!(executor.executed_count(), 1);
}

#[test]
fn failed_message_cannot_be_relayed_twice() {
    let (env, signers, client) = setup_env(1, 5);
    let executor = setup_executor(&env, &client.address);

    let data = Bytes::from_slice(&env, FAILING_PAYLOAD);
    let message = generate_test_message(&env, &executor.address, data, 50_000);
    assert!(!relay(&env, &signers, &client, &message));

    let proof = generate_proof(&env, message.execution_hash(&env), &signers);
    assert_contract_err!(
        client.try_execute_signatures(&message, &proof),
        ContractError::MessageAlreadyProcessed
    );

    assert!(!client.message_call_status(&message.message_id));
}

#[test]
fn execute_signatures_fails_for_wrong_destination_chain() {
    let (env, signers, client) = setup_env(1, 5);
    let executor = setup_executor(&env, &client.address);

    let mut message =
        generate_test_message(&env, &executor.address, bytes!(&env, 0x1234), 50_000);
    message.destination_chain = String::from_str(&env, FOREIGN_CHAIN);

    let proof = generate_proof(&env, message.execution_hash(&env), &signers);
    assert_contract_err!(
        client.try_execute_signatures(&message, &proof),
        ContractError::InvalidDestinationChain
    );
    assert!(!client.is_message_relayed(&message.message_id));
}

#[test]
fn execute_signatures_fails_for_wrong_source_chain() {
    let (env, signers, client) = setup_env(1, 5);
    let executor = setup_executor(&env, &client.address);

    let mut message =
        generate_test_message(&env, &executor.address, bytes!(&env, 0x1234), 50_000);
    message.source_chain = String::from_str(&env, HOME_CHAIN);

    let proof = generate_proof(&env, message.execution_hash(&env), &signers);
    assert_contract_err!(
        client.try_execute_signatures(&message, &proof),
        ContractError::InvalidSourceChain
    );
}

#[test]
fn execute_signatures_fails_for_tampered_message() {
    let (env, signers, client) = setup_env(1, 5);
    let executor = setup_executor(&env, &client.address);

    let message = generate_test_message(&env, &executor.address, bytes!(&env, 0x1234), 50_000);
    let proof = generate_proof(&env, message.execution_hash(&env), &signers);

    let mut tampered = message.clone();
    tampered.data = bytes!(&env, 0x5678);

    // the signatures don't cover the tampered payload
    assert!(client.try_execute_signatures(&tampered, &proof).is_err());
    assert!(!client.is_message_relayed(&message.message_id));
    assert_eq!(executor.executed_count(), 0);
}

#[test]
fn executor_rejects_direct_call() {
    let env = Env::default();
    let bridge = Address::generate(&env);
    let executor = setup_executor(&env, &bridge);

    let message = generate_test_message(&env, &executor.address, bytes!(&env, 0x1234), 50_000);
    let context = MessageContext {
        message_id: message.message_id,
        source_chain: message.source_chain,
        sender: message.sender,
    };
    let data = message.data;

    assert_invoke_auth_err!(
        Address::generate(&env),
        executor.try_execute_message(&context, &data)
    );
    assert_eq!(executor.executed_count(), 0);
}

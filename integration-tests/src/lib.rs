//! Two chains sharing one test environment.
//!
//! The home chain locks the bridged asset, the foreign chain mints and burns its counterpart.
//! Each chain has its own bridge, validator set and token mediator.

use amb_bridge::testutils::{
    last_outbound_message, relay, setup_bridge, TestSignerSet, FOREIGN_CHAIN, HOME_CHAIN,
};
use amb_bridge::types::Message;
use amb_bridge::AmbBridgeClient;
use amb_token_mediator::testutils::{setup_mediator, setup_token};
use amb_token_mediator::types::TokenManagerType;
use amb_token_mediator::AmbTokenMediatorClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

pub struct TestChain<'a> {
    pub bridge: AmbBridgeClient<'a>,
    /// Validators approving the messages that arrive on this chain.
    pub signers: TestSignerSet,
    pub mediator: AmbTokenMediatorClient<'a>,
    pub token: TokenClient<'a>,
}

impl TestChain<'_> {
    fn new(
        env: &Env,
        source_chain: &str,
        destination_chain: &str,
        token_manager_type: TokenManagerType,
    ) -> Self {
        let (signers, bridge) = setup_bridge(env, source_chain, destination_chain, 0, 5);
        let token = setup_token(env, &Address::generate(env));
        let mediator = setup_mediator(env, &bridge.address, &token, token_manager_type);

        if token_manager_type == TokenManagerType::MintBurn {
            StellarAssetClient::new(env, &token).set_admin(&mediator.address);
        }

        Self {
            bridge,
            signers,
            mediator,
            token: TokenClient::new(env, &token),
        }
    }
}

/// Deploys and links both chains. Authorization must be mocked on `env`.
pub fn setup_chains<'a>(env: &Env) -> (TestChain<'a>, TestChain<'a>) {
    let home = TestChain::new(env, HOME_CHAIN, FOREIGN_CHAIN, TokenManagerType::LockUnlock);
    let foreign = TestChain::new(env, FOREIGN_CHAIN, HOME_CHAIN, TokenManagerType::MintBurn);

    home.mediator.set_mediator_on_other_side(&foreign.mediator.address);
    foreign.mediator.set_mediator_on_other_side(&home.mediator.address);

    (home, foreign)
}

/// Mints home chain tokens to `to`.
pub fn fund(env: &Env, home: &TestChain, to: &Address, amount: i128) {
    StellarAssetClient::new(env, &home.token.address).mint(to, &amount);
}

/// Signs the last message dispatched on `from` with the validators of `to` and relays it there.
/// Returns the message and whether its call succeeded.
pub fn relay_last_message(env: &Env, from: &TestChain, to: &TestChain) -> (Message, bool) {
    let message = last_outbound_message(env, &from.bridge.address);
    let call_status = relay(env, &to.signers, &to.bridge, &message);

    (message, call_status)
}

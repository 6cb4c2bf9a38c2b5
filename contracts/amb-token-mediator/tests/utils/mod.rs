use amb_bridge::testutils::{setup_bridge, TestSignerSet, FOREIGN_CHAIN, HOME_CHAIN};
use amb_bridge::AmbBridgeClient;
use amb_token_mediator::testutils::{setup_mediator, setup_token};
use amb_token_mediator::types::TokenManagerType;
use amb_token_mediator::AmbTokenMediatorClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

pub const INITIAL_BALANCE: i128 = 1_000;

pub struct TestSetup<'a> {
    pub env: Env,
    pub signers: TestSignerSet,
    pub bridge: AmbBridgeClient<'a>,
    pub mediator: AmbTokenMediatorClient<'a>,
    pub token: TokenClient<'a>,
    /// Stands in for the mediator on the foreign chain.
    pub counterpart: Address,
    pub user: Address,
}

/// A home chain mediator whose counterpart is set and whose user holds [`INITIAL_BALANCE`] tokens.
pub fn setup_env<'a>(token_manager_type: TokenManagerType) -> TestSetup<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let (signers, bridge) = setup_bridge(&env, HOME_CHAIN, FOREIGN_CHAIN, 0, 5);
    let token = setup_token(&env, &Address::generate(&env));
    let mediator = setup_mediator(&env, &bridge.address, &token, token_manager_type);

    let user = Address::generate(&env);
    StellarAssetClient::new(&env, &token).mint(&user, &INITIAL_BALANCE);

    if token_manager_type == TokenManagerType::MintBurn {
        StellarAssetClient::new(&env, &token).set_admin(&mediator.address);
    }

    let counterpart = Address::generate(&env);
    mediator.set_mediator_on_other_side(&counterpart);

    TestSetup {
        token: TokenClient::new(&env, &token),
        env,
        signers,
        bridge,
        mediator,
        counterpart,
        user,
    }
}

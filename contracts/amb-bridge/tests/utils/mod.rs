use amb_bridge::testutils::{setup_bridge, TestSignerSet, FOREIGN_CHAIN, HOME_CHAIN};
use amb_bridge::AmbBridgeClient;
use soroban_sdk::Env;

pub fn setup_env<'a>(
    previous_signers_retention: u32,
    num_signers: u32,
) -> (Env, TestSignerSet, AmbBridgeClient<'a>) {
    let env = Env::default();
    env.mock_all_auths();
    let (signers, client) = setup_bridge(
        &env,
        HOME_CHAIN,
        FOREIGN_CHAIN,
        previous_signers_retention,
        num_signers,
    );

    (env, signers, client)
}

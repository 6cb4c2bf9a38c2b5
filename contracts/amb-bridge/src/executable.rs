//! Interface for contracts that receive messages relayed by the bridge.
//!
//! The bridge calls [`AmbExecutableInterface::execute_message`] directly, so the executor
//! authenticates it with `require_auth` on the trusted bridge address.

use crate::types::MessageContext;
use soroban_sdk::{contractclient, Address, Bytes, Env};

#[contractclient(name = "AmbExecutableClient")]
pub trait AmbExecutableInterface {
    /// Return the trusted bridge contract id.
    fn bridge(env: &Env) -> Address;

    /// Execute a relayed message.
    ///
    /// Implementations must call [`AmbExecutableInterface::validate`] first. Panicking or
    /// returning an error makes the bridge record the message as failed and roll back the call.
    fn execute_message(env: Env, context: MessageContext, data: Bytes);

    /// Ensure the call originates from the trusted bridge.
    /// This method doesn't get exposed from the contract, as Soroban SDK's contractimpl macro ignores default trait methods.
    fn validate(env: &Env) {
        Self::bridge(env).require_auth();
    }
}

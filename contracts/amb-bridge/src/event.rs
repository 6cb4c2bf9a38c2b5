use crate::types::Message;
use amb_std::events::Event;
use core::fmt::Debug;
use soroban_sdk::{Address, BytesN, Env, IntoVal, Symbol, Topics, Val};

/// Emitted for every outbound message. Validators sign the message carried in the data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRequestForSignatureEvent {
    pub message_id: BytesN<32>,
    pub message: Message,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayedMessageEvent {
    pub message_id: BytesN<32>,
    pub sender: Address,
    pub executor: Address,
    pub status: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignersRotatedEvent {
    pub epoch: u64,
    pub signers_hash: BytesN<32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaxGasPerTxSetEvent {
    pub max_gas_per_tx: u64,
}

impl Event for UserRequestForSignatureEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "user_request_for_signature"),
            self.message_id.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.message.clone(),)
    }
}

impl Event for RelayedMessageEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "relayed_message"),
            self.message_id.clone(),
            self.sender.clone(),
            self.executor.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.status,)
    }
}

impl Event for SignersRotatedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "signers_rotated"),
            self.epoch,
            self.signers_hash.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {}
}

impl Event for MaxGasPerTxSetEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (Symbol::new(env, "max_gas_per_tx_set"),)
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.max_gas_per_tx,)
    }
}

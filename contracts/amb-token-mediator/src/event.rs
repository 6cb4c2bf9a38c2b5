use amb_std::events::Event;
use core::fmt::Debug;
use soroban_sdk::{Address, BytesN, Env, IntoVal, Symbol, Topics, Val};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokensBridgingInitiatedEvent {
    pub message_id: BytesN<32>,
    pub sender: Address,
    pub receiver: Address,
    pub value: i128,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokensBridgedEvent {
    pub message_id: BytesN<32>,
    pub recipient: Address,
    pub value: i128,
}

/// Emitted on the side where the message failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailedMessageFixRequestedEvent {
    pub message_id: BytesN<32>,
    pub fix_message_id: BytesN<32>,
    pub data_hash: BytesN<32>,
}

/// Emitted on the origin side once the tokens of a failed transfer are given back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailedMessageFixedEvent {
    pub data_hash: BytesN<32>,
    pub recipient: Address,
    pub value: i128,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediatorContractSetEvent {
    pub mediator: Address,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestGasLimitSetEvent {
    pub request_gas_limit: u64,
}

impl Event for TokensBridgingInitiatedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "tokens_bridging_initiated"),
            self.message_id.clone(),
            self.sender.clone(),
            self.receiver.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.value,)
    }
}

impl Event for TokensBridgedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "tokens_bridged"),
            self.message_id.clone(),
            self.recipient.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.value,)
    }
}

impl Event for FailedMessageFixRequestedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "failed_message_fix_requested"),
            self.message_id.clone(),
            self.fix_message_id.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.data_hash.clone(),)
    }
}

impl Event for FailedMessageFixedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "failed_message_fixed"),
            self.data_hash.clone(),
            self.recipient.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.value,)
    }
}

impl Event for MediatorContractSetEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "mediator_contract_set"),
            self.mediator.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {}
}

impl Event for RequestGasLimitSetEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (Symbol::new(env, "request_gas_limit_set"),)
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.request_gas_limit,)
    }
}

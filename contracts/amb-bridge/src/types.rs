use soroban_sdk::{contracttype, xdr::ToXdr, Address, Bytes, BytesN, Env, String, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CommandType {
    ExecuteMessage,
    RotateSigners,
}

/// A cross-chain call requested through `require_to_pass_message`.
///
/// `message_id` identifies the originating request and keys the record on the destination chain.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message {
    pub message_id: BytesN<32>,
    pub source_chain: String,
    pub destination_chain: String,
    pub sender: Address,
    pub executor: Address,
    pub gas_limit: u64,
    pub data: Bytes,
}

impl Message {
    /// Hash of the message payload, used to identify the message in fix requests.
    pub fn data_hash(&self, env: &Env) -> BytesN<32> {
        env.crypto().keccak256(&self.data).into()
    }

    /// Hash the validator set signs to approve the execution of this message.
    pub fn execution_hash(&self, env: &Env) -> BytesN<32> {
        env.crypto()
            .keccak256(&(CommandType::ExecuteMessage, self.clone()).to_xdr(env))
            .into()
    }
}

/// The bridge's ledger entry for a message relayed into this chain.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessageRecord {
    pub executed: bool,
    pub call_status: bool,
    pub sender: Address,
    pub receiver: Address,
    pub data_hash: BytesN<32>,
}

/// Passed to the executor of a relayed message.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessageContext {
    pub message_id: BytesN<32>,
    pub source_chain: String,
    pub sender: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightedSigner {
    pub signer: BytesN<32>, // Ed25519 public key
    pub weight: u128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightedSigners {
    pub signers: Vec<WeightedSigner>,
    pub threshold: u128,
    pub nonce: BytesN<32>,
}

impl WeightedSigners {
    pub fn hash(&self, env: &Env) -> BytesN<32> {
        env.crypto().keccak256(&self.clone().to_xdr(env)).into()
    }

    pub fn signers_rotation_hash(&self, env: &Env) -> BytesN<32> {
        env.crypto()
            .keccak256(&(CommandType::RotateSigners, self.clone()).to_xdr(env))
            .into()
    }
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProofSignature {
    Signed(BytesN<64>), // Ed25519 signature
    Unsigned,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofSigner {
    pub signer: WeightedSigner,
    pub signature: ProofSignature,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proof {
    pub signers: Vec<ProofSigner>,
    pub threshold: u128,
    pub nonce: BytesN<32>,
}

impl Proof {
    /// Get the weighted signers from the proof.
    pub fn weighted_signers(&self) -> WeightedSigners {
        let mut signers = Vec::new(self.signers.env());

        for ProofSigner { signer, .. } in self.signers.iter() {
            signers.push_back(signer);
        }

        WeightedSigners {
            signers,
            threshold: self.threshold,
            nonce: self.nonce.clone(),
        }
    }
}

use std::fmt::Display;

use cosmos_sdk_proto::cosmos::tx::v1beta1::TxBody;

use crate::{
    error::RegistryError,
    msgs::{
        bank::MsgSend,
        gov::{MsgVote, VoteOption},
        staking::MsgDelegate,
        wasm::{ContractMsg, MsgExecuteContract},
    },
    Codec, Coin, HasAddress, JsonEnvelope, Msg,
};

/// Collects messages for a single transaction.
///
/// Signing and broadcasting live elsewhere. This produces the body to be
/// signed, in either protobuf or amino JSON form.
#[derive(Default, Clone, Debug)]
pub struct TxBuilder {
    messages: Vec<Msg>,
    memo: Option<String>,
    timeout_height: Option<u64>,
}

impl TxBuilder {
    /// Add a message to this transaction.
    pub fn add_message(&mut self, msg: impl Into<Msg>) -> &mut Self {
        self.messages.push(msg.into());
        self
    }

    pub fn add_send(
        &mut self,
        from: impl HasAddress,
        to: impl HasAddress,
        amount: Vec<Coin>,
    ) -> &mut Self {
        self.add_message(MsgSend {
            from_address: from.get_address_string(),
            to_address: to.get_address_string(),
            amount,
        })
    }

    pub fn add_delegate(
        &mut self,
        delegator: impl HasAddress,
        validator: impl HasAddress,
        amount: Coin,
    ) -> &mut Self {
        self.add_message(MsgDelegate {
            delegator_address: delegator.get_address_string(),
            validator_address: validator.get_address_string(),
            amount,
        })
    }

    /// Add a contract execution. Fails only if `msg` cannot be rendered as JSON.
    pub fn add_execute_contract(
        &mut self,
        contract: impl HasAddress,
        sender: impl HasAddress,
        funds: Vec<Coin>,
        msg: impl serde::Serialize,
    ) -> anyhow::Result<&mut Self> {
        Ok(self.add_message(MsgExecuteContract {
            sender: sender.get_address_string(),
            contract: contract.get_address_string(),
            msg: ContractMsg::new(&msg)?,
            funds,
        }))
    }

    pub fn add_vote(
        &mut self,
        voter: impl HasAddress,
        proposal_id: u64,
        option: VoteOption,
    ) -> &mut Self {
        self.add_message(MsgVote {
            proposal_id,
            voter: voter.get_address_string(),
            option,
        })
    }

    /// Set the memo field.
    pub fn set_memo(&mut self, memo: impl Into<String>) -> &mut Self {
        self.memo = Some(memo.into());
        self
    }

    /// Clear the memo field
    pub fn clear_memo(&mut self) -> &mut Self {
        self.memo = None;
        self
    }

    /// Block height after which the transaction is no longer valid.
    pub fn set_timeout_height(&mut self, height: u64) -> &mut Self {
        self.timeout_height = Some(height);
        self
    }

    pub fn messages(&self) -> &[Msg] {
        &self.messages
    }

    /// The protobuf body, with each message packed under its registered type URL.
    pub fn to_tx_body(&self, codec: &Codec) -> Result<TxBody, RegistryError> {
        Ok(TxBody {
            messages: self
                .messages
                .iter()
                .map(|msg| codec.pack_msg(msg))
                .collect::<Result<_, _>>()?,
            memo: self.memo.clone().unwrap_or_default(),
            timeout_height: self.timeout_height.unwrap_or_default(),
            extension_options: vec![],
            non_critical_extension_options: vec![],
        })
    }

    /// The messages as amino JSON envelopes, as they appear in a legacy sign doc.
    pub fn amino_msgs(&self, codec: &Codec) -> Result<Vec<JsonEnvelope>, RegistryError> {
        self.messages
            .iter()
            .map(|msg| codec.encode_msg(msg))
            .collect()
    }
}

impl Display for TxBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Transaction with {} message(s)", self.messages.len())?;
        if let Some(memo) = &self.memo {
            write!(f, ", memo {memo:?}")?;
        }
        for (idx, msg) in self.messages.iter().enumerate() {
            write!(f, "\n{idx}: {msg}")?;
        }
        Ok(())
    }
}

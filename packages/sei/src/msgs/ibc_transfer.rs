use serde::{Deserialize, Serialize};

use crate::{coin::coin_from_proto, wire, wire::Height, Coin};

/// Send tokens to another chain over an ICS-20 channel.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgTransfer {
    pub source_port: String,
    pub source_channel: String,
    pub token: Coin,
    pub sender: String,
    /// Recipient on the destination chain, so not necessarily a Sei address
    pub receiver: String,
    /// All zeroes disables the height timeout
    #[serde(default)]
    pub timeout_height: Height,
    /// Nanoseconds since the Unix epoch, zero disables the timestamp timeout
    #[serde(default, with = "crate::json::string_u64")]
    pub timeout_timestamp: u64,
    #[serde(default)]
    pub memo: String,
}

impl From<&MsgTransfer> for wire::MsgTransfer {
    fn from(msg: &MsgTransfer) -> Self {
        wire::MsgTransfer {
            source_port: msg.source_port.clone(),
            source_channel: msg.source_channel.clone(),
            token: Some((&msg.token).into()),
            sender: msg.sender.clone(),
            receiver: msg.receiver.clone(),
            timeout_height: Some(msg.timeout_height.clone()),
            timeout_timestamp: msg.timeout_timestamp,
            memo: msg.memo.clone(),
        }
    }
}

impl TryFrom<wire::MsgTransfer> for MsgTransfer {
    type Error = anyhow::Error;

    fn try_from(msg: wire::MsgTransfer) -> anyhow::Result<Self> {
        Ok(MsgTransfer {
            source_port: msg.source_port,
            source_channel: msg.source_channel,
            token: coin_from_proto(msg.token)?,
            sender: msg.sender,
            receiver: msg.receiver,
            timeout_height: msg.timeout_height.unwrap_or_default(),
            timeout_timestamp: msg.timeout_timestamp,
            memo: msg.memo,
        })
    }
}

impl_variant!(
    MsgTransfer,
    "cosmos-sdk/MsgTransfer",
    "/ibc.applications.transfer.v1.MsgTransfer",
    wire::MsgTransfer
);

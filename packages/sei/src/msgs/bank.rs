//! Token transfers.

use cosmos_sdk_proto::cosmos::bank::v1beta1 as proto;
use serde::{Deserialize, Serialize};

use crate::{
    coin::{coins_from_proto, coins_to_proto},
    Coin,
};

/// Send coins from one account to another.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgSend {
    pub from_address: String,
    pub to_address: String,
    pub amount: Vec<Coin>,
}

impl From<&MsgSend> for proto::MsgSend {
    fn from(msg: &MsgSend) -> Self {
        proto::MsgSend {
            from_address: msg.from_address.clone(),
            to_address: msg.to_address.clone(),
            amount: coins_to_proto(&msg.amount),
        }
    }
}

impl TryFrom<proto::MsgSend> for MsgSend {
    type Error = anyhow::Error;

    fn try_from(
        proto::MsgSend {
            from_address,
            to_address,
            amount,
        }: proto::MsgSend,
    ) -> anyhow::Result<Self> {
        Ok(MsgSend {
            from_address,
            to_address,
            amount: coins_from_proto(amount)?,
        })
    }
}

impl_variant!(
    MsgSend,
    "cosmos-sdk/MsgSend",
    "/cosmos.bank.v1beta1.MsgSend",
    proto::MsgSend
);

/// One side of a [MsgMultiSend].
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MultiSendIo {
    pub address: String,
    pub coins: Vec<Coin>,
}

/// Send coins from several inputs to several outputs in one message.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgMultiSend {
    pub inputs: Vec<MultiSendIo>,
    pub outputs: Vec<MultiSendIo>,
}

impl From<&MsgMultiSend> for proto::MsgMultiSend {
    fn from(msg: &MsgMultiSend) -> Self {
        proto::MsgMultiSend {
            inputs: msg
                .inputs
                .iter()
                .map(|io| proto::Input {
                    address: io.address.clone(),
                    coins: coins_to_proto(&io.coins),
                })
                .collect(),
            outputs: msg
                .outputs
                .iter()
                .map(|io| proto::Output {
                    address: io.address.clone(),
                    coins: coins_to_proto(&io.coins),
                })
                .collect(),
        }
    }
}

impl TryFrom<proto::MsgMultiSend> for MsgMultiSend {
    type Error = anyhow::Error;

    fn try_from(msg: proto::MsgMultiSend) -> anyhow::Result<Self> {
        Ok(MsgMultiSend {
            inputs: msg
                .inputs
                .into_iter()
                .map(|input| {
                    Ok(MultiSendIo {
                        address: input.address,
                        coins: coins_from_proto(input.coins)?,
                    })
                })
                .collect::<anyhow::Result<_>>()?,
            outputs: msg
                .outputs
                .into_iter()
                .map(|output| {
                    Ok(MultiSendIo {
                        address: output.address,
                        coins: coins_from_proto(output.coins)?,
                    })
                })
                .collect::<anyhow::Result<_>>()?,
        })
    }
}

impl_variant!(
    MsgMultiSend,
    "cosmos-sdk/MsgMultiSend",
    "/cosmos.bank.v1beta1.MsgMultiSend",
    proto::MsgMultiSend
);

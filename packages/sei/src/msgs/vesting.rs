//! Vesting accounts.

use cosmos_sdk_proto::cosmos::vesting::v1beta1 as proto;
use serde::{Deserialize, Serialize};

use crate::{
    coin::{coins_from_proto, coins_to_proto},
    wire, Coin,
};

/// Create a continuous or delayed vesting account funded by the sender.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgCreateVestingAccount {
    pub from_address: String,
    pub to_address: String,
    pub amount: Vec<Coin>,
    /// Unix timestamp, in seconds, at which vesting completes
    #[serde(with = "crate::json::string_i64")]
    pub end_time: i64,
    #[serde(default)]
    pub delayed: bool,
}

impl From<&MsgCreateVestingAccount> for proto::MsgCreateVestingAccount {
    fn from(msg: &MsgCreateVestingAccount) -> Self {
        proto::MsgCreateVestingAccount {
            from_address: msg.from_address.clone(),
            to_address: msg.to_address.clone(),
            amount: coins_to_proto(&msg.amount),
            end_time: msg.end_time,
            delayed: msg.delayed,
        }
    }
}

impl TryFrom<proto::MsgCreateVestingAccount> for MsgCreateVestingAccount {
    type Error = anyhow::Error;

    fn try_from(msg: proto::MsgCreateVestingAccount) -> anyhow::Result<Self> {
        Ok(MsgCreateVestingAccount {
            from_address: msg.from_address,
            to_address: msg.to_address,
            amount: coins_from_proto(msg.amount)?,
            end_time: msg.end_time,
            delayed: msg.delayed,
        })
    }
}

impl_variant!(
    MsgCreateVestingAccount,
    "cosmos-sdk/MsgCreateVestingAccount",
    "/cosmos.vesting.v1beta1.MsgCreateVestingAccount",
    proto::MsgCreateVestingAccount
);

/// One step of a periodic vesting schedule.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Period {
    /// Duration of this period in seconds
    #[serde(with = "crate::json::string_i64")]
    pub length: i64,
    pub amount: Vec<Coin>,
}

/// Create a vesting account that unlocks in discrete periods.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgCreatePeriodicVestingAccount {
    pub from_address: String,
    pub to_address: String,
    #[serde(with = "crate::json::string_i64")]
    pub start_time: i64,
    pub vesting_periods: Vec<Period>,
}

impl From<&MsgCreatePeriodicVestingAccount> for proto::MsgCreatePeriodicVestingAccount {
    fn from(msg: &MsgCreatePeriodicVestingAccount) -> Self {
        proto::MsgCreatePeriodicVestingAccount {
            from_address: msg.from_address.clone(),
            to_address: msg.to_address.clone(),
            start_time: msg.start_time,
            vesting_periods: msg
                .vesting_periods
                .iter()
                .map(|period| proto::Period {
                    length: period.length,
                    amount: coins_to_proto(&period.amount),
                })
                .collect(),
        }
    }
}

impl TryFrom<proto::MsgCreatePeriodicVestingAccount> for MsgCreatePeriodicVestingAccount {
    type Error = anyhow::Error;

    fn try_from(msg: proto::MsgCreatePeriodicVestingAccount) -> anyhow::Result<Self> {
        Ok(MsgCreatePeriodicVestingAccount {
            from_address: msg.from_address,
            to_address: msg.to_address,
            start_time: msg.start_time,
            vesting_periods: msg
                .vesting_periods
                .into_iter()
                .map(|period| {
                    Ok(Period {
                        length: period.length,
                        amount: coins_from_proto(period.amount)?,
                    })
                })
                .collect::<anyhow::Result<_>>()?,
        })
    }
}

impl_variant!(
    MsgCreatePeriodicVestingAccount,
    "cosmos-sdk/MsgCreatePeriodicVestingAccount",
    "/cosmos.vesting.v1beta1.MsgCreatePeriodicVestingAccount",
    proto::MsgCreatePeriodicVestingAccount
);

/// Give every still-vesting token of the sender to the community pool.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgDonateAllVestingTokens {
    pub from_address: String,
}

impl From<&MsgDonateAllVestingTokens> for wire::MsgDonateAllVestingTokens {
    fn from(msg: &MsgDonateAllVestingTokens) -> Self {
        wire::MsgDonateAllVestingTokens {
            from_address: msg.from_address.clone(),
        }
    }
}

impl From<wire::MsgDonateAllVestingTokens> for MsgDonateAllVestingTokens {
    fn from(msg: wire::MsgDonateAllVestingTokens) -> Self {
        MsgDonateAllVestingTokens {
            from_address: msg.from_address,
        }
    }
}

impl_variant!(
    MsgDonateAllVestingTokens,
    "cosmos-sdk/MsgDonateAllVestingTokens",
    "/cosmos.vesting.v1beta1.MsgDonateAllVestingTokens",
    wire::MsgDonateAllVestingTokens
);

//! Staking rewards and the community pool.

use cosmos_sdk_proto::cosmos::distribution::v1beta1 as proto;
use serde::{Deserialize, Serialize};

use crate::{
    coin::{coins_from_proto, coins_to_proto},
    Coin,
};

/// Change the address that receives a delegator's rewards.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgSetWithdrawAddress {
    pub delegator_address: String,
    pub withdraw_address: String,
}

impl From<&MsgSetWithdrawAddress> for proto::MsgSetWithdrawAddress {
    fn from(msg: &MsgSetWithdrawAddress) -> Self {
        proto::MsgSetWithdrawAddress {
            delegator_address: msg.delegator_address.clone(),
            withdraw_address: msg.withdraw_address.clone(),
        }
    }
}

impl From<proto::MsgSetWithdrawAddress> for MsgSetWithdrawAddress {
    fn from(msg: proto::MsgSetWithdrawAddress) -> Self {
        MsgSetWithdrawAddress {
            delegator_address: msg.delegator_address,
            withdraw_address: msg.withdraw_address,
        }
    }
}

// The amino name predates the protobuf rename.
impl_variant!(
    MsgSetWithdrawAddress,
    "cosmos-sdk/MsgModifyWithdrawAddress",
    "/cosmos.distribution.v1beta1.MsgSetWithdrawAddress",
    proto::MsgSetWithdrawAddress
);

/// Withdraw rewards from a single validator.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgWithdrawDelegatorReward {
    pub delegator_address: String,
    pub validator_address: String,
}

impl From<&MsgWithdrawDelegatorReward> for proto::MsgWithdrawDelegatorReward {
    fn from(msg: &MsgWithdrawDelegatorReward) -> Self {
        proto::MsgWithdrawDelegatorReward {
            delegator_address: msg.delegator_address.clone(),
            validator_address: msg.validator_address.clone(),
        }
    }
}

impl From<proto::MsgWithdrawDelegatorReward> for MsgWithdrawDelegatorReward {
    fn from(msg: proto::MsgWithdrawDelegatorReward) -> Self {
        MsgWithdrawDelegatorReward {
            delegator_address: msg.delegator_address,
            validator_address: msg.validator_address,
        }
    }
}

impl_variant!(
    MsgWithdrawDelegatorReward,
    "cosmos-sdk/MsgWithdrawDelegationReward",
    "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward",
    proto::MsgWithdrawDelegatorReward
);

/// Withdraw a validator's accumulated commission.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgWithdrawValidatorCommission {
    pub validator_address: String,
}

impl From<&MsgWithdrawValidatorCommission> for proto::MsgWithdrawValidatorCommission {
    fn from(msg: &MsgWithdrawValidatorCommission) -> Self {
        proto::MsgWithdrawValidatorCommission {
            validator_address: msg.validator_address.clone(),
        }
    }
}

impl From<proto::MsgWithdrawValidatorCommission> for MsgWithdrawValidatorCommission {
    fn from(msg: proto::MsgWithdrawValidatorCommission) -> Self {
        MsgWithdrawValidatorCommission {
            validator_address: msg.validator_address,
        }
    }
}

impl_variant!(
    MsgWithdrawValidatorCommission,
    "cosmos-sdk/MsgWithdrawValidatorCommission",
    "/cosmos.distribution.v1beta1.MsgWithdrawValidatorCommission",
    proto::MsgWithdrawValidatorCommission
);

/// Donate coins to the community pool.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgFundCommunityPool {
    pub amount: Vec<Coin>,
    pub depositor: String,
}

impl From<&MsgFundCommunityPool> for proto::MsgFundCommunityPool {
    fn from(msg: &MsgFundCommunityPool) -> Self {
        proto::MsgFundCommunityPool {
            amount: coins_to_proto(&msg.amount),
            depositor: msg.depositor.clone(),
        }
    }
}

impl TryFrom<proto::MsgFundCommunityPool> for MsgFundCommunityPool {
    type Error = anyhow::Error;

    fn try_from(msg: proto::MsgFundCommunityPool) -> anyhow::Result<Self> {
        Ok(MsgFundCommunityPool {
            amount: coins_from_proto(msg.amount)?,
            depositor: msg.depositor,
        })
    }
}

impl_variant!(
    MsgFundCommunityPool,
    "cosmos-sdk/MsgFundCommunityPool",
    "/cosmos.distribution.v1beta1.MsgFundCommunityPool",
    proto::MsgFundCommunityPool
);

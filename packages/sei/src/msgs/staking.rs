//! Validators and delegations.

use anyhow::Context;
use cosmos_sdk_proto::cosmos::staking::v1beta1 as proto;
use serde::{Deserialize, Serialize};

use crate::{coin::coin_from_proto, json::RawAny, Coin};

/// Delegate tokens to a validator.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgDelegate {
    pub delegator_address: String,
    pub validator_address: String,
    pub amount: Coin,
}

impl From<&MsgDelegate> for proto::MsgDelegate {
    fn from(msg: &MsgDelegate) -> Self {
        proto::MsgDelegate {
            delegator_address: msg.delegator_address.clone(),
            validator_address: msg.validator_address.clone(),
            amount: Some((&msg.amount).into()),
        }
    }
}

impl TryFrom<proto::MsgDelegate> for MsgDelegate {
    type Error = anyhow::Error;

    fn try_from(msg: proto::MsgDelegate) -> anyhow::Result<Self> {
        Ok(MsgDelegate {
            delegator_address: msg.delegator_address,
            validator_address: msg.validator_address,
            amount: coin_from_proto(msg.amount)?,
        })
    }
}

impl_variant!(
    MsgDelegate,
    "cosmos-sdk/MsgDelegate",
    "/cosmos.staking.v1beta1.MsgDelegate",
    proto::MsgDelegate
);

/// Begin unbonding tokens from a validator.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgUndelegate {
    pub delegator_address: String,
    pub validator_address: String,
    pub amount: Coin,
}

impl From<&MsgUndelegate> for proto::MsgUndelegate {
    fn from(msg: &MsgUndelegate) -> Self {
        proto::MsgUndelegate {
            delegator_address: msg.delegator_address.clone(),
            validator_address: msg.validator_address.clone(),
            amount: Some((&msg.amount).into()),
        }
    }
}

impl TryFrom<proto::MsgUndelegate> for MsgUndelegate {
    type Error = anyhow::Error;

    fn try_from(msg: proto::MsgUndelegate) -> anyhow::Result<Self> {
        Ok(MsgUndelegate {
            delegator_address: msg.delegator_address,
            validator_address: msg.validator_address,
            amount: coin_from_proto(msg.amount)?,
        })
    }
}

impl_variant!(
    MsgUndelegate,
    "cosmos-sdk/MsgUndelegate",
    "/cosmos.staking.v1beta1.MsgUndelegate",
    proto::MsgUndelegate
);

/// Move a delegation from one validator to another without unbonding.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgBeginRedelegate {
    pub delegator_address: String,
    pub validator_src_address: String,
    pub validator_dst_address: String,
    pub amount: Coin,
}

impl From<&MsgBeginRedelegate> for proto::MsgBeginRedelegate {
    fn from(msg: &MsgBeginRedelegate) -> Self {
        proto::MsgBeginRedelegate {
            delegator_address: msg.delegator_address.clone(),
            validator_src_address: msg.validator_src_address.clone(),
            validator_dst_address: msg.validator_dst_address.clone(),
            amount: Some((&msg.amount).into()),
        }
    }
}

impl TryFrom<proto::MsgBeginRedelegate> for MsgBeginRedelegate {
    type Error = anyhow::Error;

    fn try_from(msg: proto::MsgBeginRedelegate) -> anyhow::Result<Self> {
        Ok(MsgBeginRedelegate {
            delegator_address: msg.delegator_address,
            validator_src_address: msg.validator_src_address,
            validator_dst_address: msg.validator_dst_address,
            amount: coin_from_proto(msg.amount)?,
        })
    }
}

impl_variant!(
    MsgBeginRedelegate,
    "cosmos-sdk/MsgBeginRedelegate",
    "/cosmos.staking.v1beta1.MsgBeginRedelegate",
    proto::MsgBeginRedelegate
);

/// Public metadata of a validator.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Description {
    pub moniker: String,
    pub identity: String,
    pub website: String,
    pub security_contact: String,
    pub details: String,
}

impl From<&Description> for proto::Description {
    fn from(desc: &Description) -> Self {
        proto::Description {
            moniker: desc.moniker.clone(),
            identity: desc.identity.clone(),
            website: desc.website.clone(),
            security_contact: desc.security_contact.clone(),
            details: desc.details.clone(),
        }
    }
}

impl From<proto::Description> for Description {
    fn from(desc: proto::Description) -> Self {
        Description {
            moniker: desc.moniker,
            identity: desc.identity,
            website: desc.website,
            security_contact: desc.security_contact,
            details: desc.details,
        }
    }
}

/// Commission parameters, as decimal strings such as `"0.100000000000000000"`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CommissionRates {
    pub rate: String,
    pub max_rate: String,
    pub max_change_rate: String,
}

/// Register a new validator.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgCreateValidator {
    pub description: Description,
    pub commission: CommissionRates,
    pub min_self_delegation: String,
    pub delegator_address: String,
    pub validator_address: String,
    /// Consensus public key, kept in whichever form it arrived
    pub pubkey: RawAny,
    pub value: Coin,
}

impl TryFrom<&MsgCreateValidator> for proto::MsgCreateValidator {
    type Error = anyhow::Error;

    fn try_from(msg: &MsgCreateValidator) -> anyhow::Result<Self> {
        Ok(proto::MsgCreateValidator {
            description: Some((&msg.description).into()),
            commission: Some(proto::CommissionRates {
                rate: msg.commission.rate.clone(),
                max_rate: msg.commission.max_rate.clone(),
                max_change_rate: msg.commission.max_change_rate.clone(),
            }),
            min_self_delegation: msg.min_self_delegation.clone(),
            delegator_address: msg.delegator_address.clone(),
            validator_address: msg.validator_address.clone(),
            pubkey: Some(msg.pubkey.to_any()?),
            value: Some((&msg.value).into()),
        })
    }
}

impl TryFrom<proto::MsgCreateValidator> for MsgCreateValidator {
    type Error = anyhow::Error;

    fn try_from(msg: proto::MsgCreateValidator) -> anyhow::Result<Self> {
        let commission = msg.commission.context("Missing commission rates")?;
        Ok(MsgCreateValidator {
            description: msg.description.map(Description::from).unwrap_or_default(),
            commission: CommissionRates {
                rate: commission.rate,
                max_rate: commission.max_rate,
                max_change_rate: commission.max_change_rate,
            },
            min_self_delegation: msg.min_self_delegation,
            delegator_address: msg.delegator_address,
            validator_address: msg.validator_address,
            pubkey: msg.pubkey.context("Missing validator pubkey")?.into(),
            value: coin_from_proto(msg.value)?,
        })
    }
}

impl_variant!(
    MsgCreateValidator,
    "cosmos-sdk/MsgCreateValidator",
    "/cosmos.staking.v1beta1.MsgCreateValidator",
    proto::MsgCreateValidator
);

/// Update a validator's metadata or commission.
///
/// Empty strings mean "leave unchanged", matching the chain's encoding.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgEditValidator {
    pub description: Description,
    pub validator_address: String,
    #[serde(default)]
    pub commission_rate: String,
    #[serde(default)]
    pub min_self_delegation: String,
}

impl From<&MsgEditValidator> for proto::MsgEditValidator {
    fn from(msg: &MsgEditValidator) -> Self {
        proto::MsgEditValidator {
            description: Some((&msg.description).into()),
            validator_address: msg.validator_address.clone(),
            commission_rate: msg.commission_rate.clone(),
            min_self_delegation: msg.min_self_delegation.clone(),
        }
    }
}

impl TryFrom<proto::MsgEditValidator> for MsgEditValidator {
    type Error = anyhow::Error;

    fn try_from(msg: proto::MsgEditValidator) -> anyhow::Result<Self> {
        Ok(MsgEditValidator {
            description: msg.description.map(Description::from).unwrap_or_default(),
            validator_address: msg.validator_address,
            commission_rate: msg.commission_rate,
            min_self_delegation: msg.min_self_delegation,
        })
    }
}

impl_variant!(
    MsgEditValidator,
    "cosmos-sdk/MsgEditValidator",
    "/cosmos.staking.v1beta1.MsgEditValidator",
    proto::MsgEditValidator
);

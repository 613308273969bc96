//! Fee allowances paid by one account on behalf of another.

use anyhow::Context;
use cosmos_sdk_proto::cosmos::feegrant::v1beta1 as proto;
use serde::{Deserialize, Serialize};

use crate::json::RawAny;

/// Grant a fee allowance. The allowance itself is carried undecoded.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgGrantAllowance {
    pub granter: String,
    pub grantee: String,
    pub allowance: RawAny,
}

impl TryFrom<&MsgGrantAllowance> for proto::MsgGrantAllowance {
    type Error = anyhow::Error;

    fn try_from(msg: &MsgGrantAllowance) -> anyhow::Result<Self> {
        Ok(proto::MsgGrantAllowance {
            granter: msg.granter.clone(),
            grantee: msg.grantee.clone(),
            allowance: Some(msg.allowance.to_any()?),
        })
    }
}

impl TryFrom<proto::MsgGrantAllowance> for MsgGrantAllowance {
    type Error = anyhow::Error;

    fn try_from(msg: proto::MsgGrantAllowance) -> anyhow::Result<Self> {
        Ok(MsgGrantAllowance {
            granter: msg.granter,
            grantee: msg.grantee,
            allowance: msg.allowance.context("Missing fee allowance")?.into(),
        })
    }
}

impl_variant!(
    MsgGrantAllowance,
    "cosmos-sdk/MsgGrantAllowance",
    "/cosmos.feegrant.v1beta1.MsgGrantAllowance",
    proto::MsgGrantAllowance
);

/// Revoke a previously granted fee allowance.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgRevokeAllowance {
    pub granter: String,
    pub grantee: String,
}

impl From<&MsgRevokeAllowance> for proto::MsgRevokeAllowance {
    fn from(msg: &MsgRevokeAllowance) -> Self {
        proto::MsgRevokeAllowance {
            granter: msg.granter.clone(),
            grantee: msg.grantee.clone(),
        }
    }
}

impl From<proto::MsgRevokeAllowance> for MsgRevokeAllowance {
    fn from(msg: proto::MsgRevokeAllowance) -> Self {
        MsgRevokeAllowance {
            granter: msg.granter,
            grantee: msg.grantee,
        }
    }
}

impl_variant!(
    MsgRevokeAllowance,
    "cosmos-sdk/MsgRevokeAllowance",
    "/cosmos.feegrant.v1beta1.MsgRevokeAllowance",
    proto::MsgRevokeAllowance
);

//! CosmWasm smart contracts.
//!
//! Contract messages are JSON documents. On the wire they are the UTF-8
//! bytes of that JSON, so a payload that is not valid JSON fails to decode.

use anyhow::Context;
use cosmos_sdk_proto::cosmwasm::wasm::v1 as proto;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{
    coin::{coins_from_proto, coins_to_proto},
    Coin,
};

/// A contract message, parsed for inspection but encoded from its original bytes.
///
/// A message decoded from protobuf keeps the exact bytes it arrived with, so
/// re-encoding reproduces them even where parsing would reorder keys or
/// round large numbers. Equality compares the parsed JSON.
#[derive(Clone, Debug)]
pub struct ContractMsg {
    json: Value,
    bytes: Vec<u8>,
}

impl ContractMsg {
    /// Render any serializable message.
    pub fn new(msg: &impl Serialize) -> serde_json::Result<Self> {
        serde_json::to_value(msg).map(ContractMsg::from)
    }

    /// Parse wire bytes, keeping them for re-encoding.
    pub fn from_bytes(bytes: Vec<u8>) -> anyhow::Result<Self> {
        let json = serde_json::from_slice(&bytes).context("Contract message is not valid JSON")?;
        Ok(ContractMsg { json, bytes })
    }

    pub fn json(&self) -> &Value {
        &self.json
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Value> for ContractMsg {
    fn from(json: Value) -> Self {
        ContractMsg {
            bytes: json.to_string().into_bytes(),
            json,
        }
    }
}

impl PartialEq for ContractMsg {
    fn eq(&self, other: &Self) -> bool {
        self.json == other.json
    }
}

impl Eq for ContractMsg {}

impl Serialize for ContractMsg {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.json.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContractMsg {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(ContractMsg::from)
    }
}

/// Upload contract code.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgStoreCode {
    pub sender: String,
    #[serde(with = "crate::json::base64_bytes")]
    pub wasm_byte_code: Vec<u8>,
}

impl From<&MsgStoreCode> for proto::MsgStoreCode {
    fn from(msg: &MsgStoreCode) -> Self {
        proto::MsgStoreCode {
            sender: msg.sender.clone(),
            wasm_byte_code: msg.wasm_byte_code.clone(),
            instantiate_permission: None,
        }
    }
}

impl From<proto::MsgStoreCode> for MsgStoreCode {
    fn from(msg: proto::MsgStoreCode) -> Self {
        MsgStoreCode {
            sender: msg.sender,
            wasm_byte_code: msg.wasm_byte_code,
        }
    }
}

impl_variant!(
    MsgStoreCode,
    "wasm/MsgStoreCode",
    "/cosmwasm.wasm.v1.MsgStoreCode",
    proto::MsgStoreCode
);

/// Create a contract instance from uploaded code.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgInstantiateContract {
    pub sender: String,
    /// Empty when the contract has no admin
    #[serde(default)]
    pub admin: String,
    #[serde(with = "crate::json::string_u64")]
    pub code_id: u64,
    pub label: String,
    pub msg: ContractMsg,
    #[serde(default)]
    pub funds: Vec<Coin>,
}

impl From<&MsgInstantiateContract> for proto::MsgInstantiateContract {
    fn from(msg: &MsgInstantiateContract) -> Self {
        proto::MsgInstantiateContract {
            sender: msg.sender.clone(),
            admin: msg.admin.clone(),
            code_id: msg.code_id,
            label: msg.label.clone(),
            msg: msg.msg.as_bytes().to_vec(),
            funds: coins_to_proto(&msg.funds),
        }
    }
}

impl TryFrom<proto::MsgInstantiateContract> for MsgInstantiateContract {
    type Error = anyhow::Error;

    fn try_from(msg: proto::MsgInstantiateContract) -> anyhow::Result<Self> {
        Ok(MsgInstantiateContract {
            sender: msg.sender,
            admin: msg.admin,
            code_id: msg.code_id,
            label: msg.label,
            msg: ContractMsg::from_bytes(msg.msg)?,
            funds: coins_from_proto(msg.funds)?,
        })
    }
}

impl_variant!(
    MsgInstantiateContract,
    "wasm/MsgInstantiateContract",
    "/cosmwasm.wasm.v1.MsgInstantiateContract",
    proto::MsgInstantiateContract
);

/// Call a contract's execute entry point.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgExecuteContract {
    pub sender: String,
    pub contract: String,
    pub msg: ContractMsg,
    #[serde(default)]
    pub funds: Vec<Coin>,
}

impl From<&MsgExecuteContract> for proto::MsgExecuteContract {
    fn from(msg: &MsgExecuteContract) -> Self {
        proto::MsgExecuteContract {
            sender: msg.sender.clone(),
            contract: msg.contract.clone(),
            msg: msg.msg.as_bytes().to_vec(),
            funds: coins_to_proto(&msg.funds),
        }
    }
}

impl TryFrom<proto::MsgExecuteContract> for MsgExecuteContract {
    type Error = anyhow::Error;

    fn try_from(msg: proto::MsgExecuteContract) -> anyhow::Result<Self> {
        Ok(MsgExecuteContract {
            sender: msg.sender,
            contract: msg.contract,
            msg: ContractMsg::from_bytes(msg.msg)?,
            funds: coins_from_proto(msg.funds)?,
        })
    }
}

impl_variant!(
    MsgExecuteContract,
    "wasm/MsgExecuteContract",
    "/cosmwasm.wasm.v1.MsgExecuteContract",
    proto::MsgExecuteContract
);

/// Move a contract to new code.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgMigrateContract {
    pub sender: String,
    pub contract: String,
    #[serde(with = "crate::json::string_u64")]
    pub code_id: u64,
    pub msg: ContractMsg,
}

impl From<&MsgMigrateContract> for proto::MsgMigrateContract {
    fn from(msg: &MsgMigrateContract) -> Self {
        proto::MsgMigrateContract {
            sender: msg.sender.clone(),
            contract: msg.contract.clone(),
            code_id: msg.code_id,
            msg: msg.msg.as_bytes().to_vec(),
        }
    }
}

impl TryFrom<proto::MsgMigrateContract> for MsgMigrateContract {
    type Error = anyhow::Error;

    fn try_from(msg: proto::MsgMigrateContract) -> anyhow::Result<Self> {
        Ok(MsgMigrateContract {
            sender: msg.sender,
            contract: msg.contract,
            code_id: msg.code_id,
            msg: ContractMsg::from_bytes(msg.msg)?,
        })
    }
}

impl_variant!(
    MsgMigrateContract,
    "wasm/MsgMigrateContract",
    "/cosmwasm.wasm.v1.MsgMigrateContract",
    proto::MsgMigrateContract
);

/// Hand the admin role of a contract to another account.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgUpdateAdmin {
    pub sender: String,
    pub new_admin: String,
    pub contract: String,
}

impl From<&MsgUpdateAdmin> for proto::MsgUpdateAdmin {
    fn from(msg: &MsgUpdateAdmin) -> Self {
        proto::MsgUpdateAdmin {
            sender: msg.sender.clone(),
            new_admin: msg.new_admin.clone(),
            contract: msg.contract.clone(),
        }
    }
}

impl From<proto::MsgUpdateAdmin> for MsgUpdateAdmin {
    fn from(msg: proto::MsgUpdateAdmin) -> Self {
        MsgUpdateAdmin {
            sender: msg.sender,
            new_admin: msg.new_admin,
            contract: msg.contract,
        }
    }
}

impl_variant!(
    MsgUpdateAdmin,
    "wasm/MsgUpdateAdmin",
    "/cosmwasm.wasm.v1.MsgUpdateAdmin",
    proto::MsgUpdateAdmin
);

/// Remove the admin of a contract, making it immutable.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgClearAdmin {
    pub sender: String,
    pub contract: String,
}

impl From<&MsgClearAdmin> for proto::MsgClearAdmin {
    fn from(msg: &MsgClearAdmin) -> Self {
        proto::MsgClearAdmin {
            sender: msg.sender.clone(),
            contract: msg.contract.clone(),
        }
    }
}

impl From<proto::MsgClearAdmin> for MsgClearAdmin {
    fn from(msg: proto::MsgClearAdmin) -> Self {
        MsgClearAdmin {
            sender: msg.sender,
            contract: msg.contract,
        }
    }
}

impl_variant!(
    MsgClearAdmin,
    "wasm/MsgClearAdmin",
    "/cosmwasm.wasm.v1.MsgClearAdmin",
    proto::MsgClearAdmin
);

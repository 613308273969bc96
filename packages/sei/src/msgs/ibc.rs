//! IBC core: light clients, connection and channel handshakes, and packet relay.
//!
//! These messages are relayer plumbing with no further interpretation in
//! this crate, so most structs are both their protobuf wire type and their
//! JSON shape. Messages carrying light client states, headers or
//! misbehaviour evidence keep those as [RawAny] values in whichever form
//! they arrived, with a separate wire type in [crate::wire].

use serde::{Deserialize, Serialize};

pub use crate::wire::Height;
use crate::{json::RawAny, wire};

fn any_to_proto(any: &Option<RawAny>) -> anyhow::Result<Option<prost_types::Any>> {
    any.as_ref().map(RawAny::to_any).transpose()
}

/// Create an IBC light client.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgCreateClient {
    #[serde(default)]
    pub client_state: Option<RawAny>,
    #[serde(default)]
    pub consensus_state: Option<RawAny>,
    pub signer: String,
}

impl TryFrom<&MsgCreateClient> for wire::MsgCreateClient {
    type Error = anyhow::Error;

    fn try_from(msg: &MsgCreateClient) -> anyhow::Result<Self> {
        Ok(wire::MsgCreateClient {
            client_state: any_to_proto(&msg.client_state)?,
            consensus_state: any_to_proto(&msg.consensus_state)?,
            signer: msg.signer.clone(),
        })
    }
}

impl From<wire::MsgCreateClient> for MsgCreateClient {
    fn from(msg: wire::MsgCreateClient) -> Self {
        MsgCreateClient {
            client_state: msg.client_state.map(RawAny::from),
            consensus_state: msg.consensus_state.map(RawAny::from),
            signer: msg.signer,
        }
    }
}

/// Update a light client with a new header.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgUpdateClient {
    pub client_id: String,
    #[serde(default)]
    pub client_message: Option<RawAny>,
    pub signer: String,
}

impl TryFrom<&MsgUpdateClient> for wire::MsgUpdateClient {
    type Error = anyhow::Error;

    fn try_from(msg: &MsgUpdateClient) -> anyhow::Result<Self> {
        Ok(wire::MsgUpdateClient {
            client_id: msg.client_id.clone(),
            client_message: any_to_proto(&msg.client_message)?,
            signer: msg.signer.clone(),
        })
    }
}

impl From<wire::MsgUpdateClient> for MsgUpdateClient {
    fn from(msg: wire::MsgUpdateClient) -> Self {
        MsgUpdateClient {
            client_id: msg.client_id,
            client_message: msg.client_message.map(RawAny::from),
            signer: msg.signer,
        }
    }
}

/// Upgrade a light client after a counterparty chain upgrade.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgUpgradeClient {
    pub client_id: String,
    #[serde(default)]
    pub client_state: Option<RawAny>,
    #[serde(default)]
    pub consensus_state: Option<RawAny>,
    #[serde(default, with = "crate::json::base64_bytes")]
    pub proof_upgrade_client: Vec<u8>,
    #[serde(default, with = "crate::json::base64_bytes")]
    pub proof_upgrade_consensus_state: Vec<u8>,
    pub signer: String,
}

impl TryFrom<&MsgUpgradeClient> for wire::MsgUpgradeClient {
    type Error = anyhow::Error;

    fn try_from(msg: &MsgUpgradeClient) -> anyhow::Result<Self> {
        Ok(wire::MsgUpgradeClient {
            client_id: msg.client_id.clone(),
            client_state: any_to_proto(&msg.client_state)?,
            consensus_state: any_to_proto(&msg.consensus_state)?,
            proof_upgrade_client: msg.proof_upgrade_client.clone(),
            proof_upgrade_consensus_state: msg.proof_upgrade_consensus_state.clone(),
            signer: msg.signer.clone(),
        })
    }
}

impl From<wire::MsgUpgradeClient> for MsgUpgradeClient {
    fn from(msg: wire::MsgUpgradeClient) -> Self {
        MsgUpgradeClient {
            client_id: msg.client_id,
            client_state: msg.client_state.map(RawAny::from),
            consensus_state: msg.consensus_state.map(RawAny::from),
            proof_upgrade_client: msg.proof_upgrade_client,
            proof_upgrade_consensus_state: msg.proof_upgrade_consensus_state,
            signer: msg.signer,
        }
    }
}

/// Submit evidence of light client misbehaviour, freezing the client.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgSubmitMisbehaviour {
    pub client_id: String,
    #[serde(default)]
    pub misbehaviour: Option<RawAny>,
    pub signer: String,
}

impl TryFrom<&MsgSubmitMisbehaviour> for wire::MsgSubmitMisbehaviour {
    type Error = anyhow::Error;

    fn try_from(msg: &MsgSubmitMisbehaviour) -> anyhow::Result<Self> {
        Ok(wire::MsgSubmitMisbehaviour {
            client_id: msg.client_id.clone(),
            misbehaviour: any_to_proto(&msg.misbehaviour)?,
            signer: msg.signer.clone(),
        })
    }
}

impl From<wire::MsgSubmitMisbehaviour> for MsgSubmitMisbehaviour {
    fn from(msg: wire::MsgSubmitMisbehaviour) -> Self {
        MsgSubmitMisbehaviour {
            client_id: msg.client_id,
            misbehaviour: msg.misbehaviour.map(RawAny::from),
            signer: msg.signer,
        }
    }
}

/// Second step of the connection handshake, sent to chain B.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct MsgConnectionOpenTry {
    pub client_id: String,
    #[serde(default)]
    pub previous_connection_id: String,
    #[serde(default)]
    pub client_state: Option<RawAny>,
    #[serde(default)]
    pub counterparty: Option<ConnectionCounterparty>,
    #[serde(default, with = "crate::json::string_u64")]
    pub delay_period: u64,
    #[serde(default)]
    pub counterparty_versions: Vec<ConnectionVersion>,
    #[serde(default)]
    pub proof_height: Option<Height>,
    #[serde(default, with = "crate::json::base64_bytes")]
    pub proof_init: Vec<u8>,
    #[serde(default, with = "crate::json::base64_bytes")]
    pub proof_client: Vec<u8>,
    #[serde(default, with = "crate::json::base64_bytes")]
    pub proof_consensus: Vec<u8>,
    #[serde(default)]
    pub consensus_height: Option<Height>,
    pub signer: String,
    #[serde(default, with = "crate::json::base64_bytes")]
    pub host_consensus_state_proof: Vec<u8>,
}

impl TryFrom<&MsgConnectionOpenTry> for wire::MsgConnectionOpenTry {
    type Error = anyhow::Error;

    fn try_from(msg: &MsgConnectionOpenTry) -> anyhow::Result<Self> {
        Ok(wire::MsgConnectionOpenTry {
            client_id: msg.client_id.clone(),
            previous_connection_id: msg.previous_connection_id.clone(),
            client_state: any_to_proto(&msg.client_state)?,
            counterparty: msg.counterparty.clone(),
            delay_period: msg.delay_period,
            counterparty_versions: msg.counterparty_versions.clone(),
            proof_height: msg.proof_height.clone(),
            proof_init: msg.proof_init.clone(),
            proof_client: msg.proof_client.clone(),
            proof_consensus: msg.proof_consensus.clone(),
            consensus_height: msg.consensus_height.clone(),
            signer: msg.signer.clone(),
            host_consensus_state_proof: msg.host_consensus_state_proof.clone(),
        })
    }
}

impl From<wire::MsgConnectionOpenTry> for MsgConnectionOpenTry {
    fn from(msg: wire::MsgConnectionOpenTry) -> Self {
        MsgConnectionOpenTry {
            client_id: msg.client_id,
            previous_connection_id: msg.previous_connection_id,
            client_state: msg.client_state.map(RawAny::from),
            counterparty: msg.counterparty,
            delay_period: msg.delay_period,
            counterparty_versions: msg.counterparty_versions,
            proof_height: msg.proof_height,
            proof_init: msg.proof_init,
            proof_client: msg.proof_client,
            proof_consensus: msg.proof_consensus,
            consensus_height: msg.consensus_height,
            signer: msg.signer,
            host_consensus_state_proof: msg.host_consensus_state_proof,
        }
    }
}

/// Third step of the connection handshake, sent to chain A.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct MsgConnectionOpenAck {
    pub connection_id: String,
    pub counterparty_connection_id: String,
    #[serde(default)]
    pub version: Option<ConnectionVersion>,
    #[serde(default)]
    pub client_state: Option<RawAny>,
    #[serde(default)]
    pub proof_height: Option<Height>,
    #[serde(default, with = "crate::json::base64_bytes")]
    pub proof_try: Vec<u8>,
    #[serde(default, with = "crate::json::base64_bytes")]
    pub proof_client: Vec<u8>,
    #[serde(default, with = "crate::json::base64_bytes")]
    pub proof_consensus: Vec<u8>,
    #[serde(default)]
    pub consensus_height: Option<Height>,
    pub signer: String,
    #[serde(default, with = "crate::json::base64_bytes")]
    pub host_consensus_state_proof: Vec<u8>,
}

impl TryFrom<&MsgConnectionOpenAck> for wire::MsgConnectionOpenAck {
    type Error = anyhow::Error;

    fn try_from(msg: &MsgConnectionOpenAck) -> anyhow::Result<Self> {
        Ok(wire::MsgConnectionOpenAck {
            connection_id: msg.connection_id.clone(),
            counterparty_connection_id: msg.counterparty_connection_id.clone(),
            version: msg.version.clone(),
            client_state: any_to_proto(&msg.client_state)?,
            proof_height: msg.proof_height.clone(),
            proof_try: msg.proof_try.clone(),
            proof_client: msg.proof_client.clone(),
            proof_consensus: msg.proof_consensus.clone(),
            consensus_height: msg.consensus_height.clone(),
            signer: msg.signer.clone(),
            host_consensus_state_proof: msg.host_consensus_state_proof.clone(),
        })
    }
}

impl From<wire::MsgConnectionOpenAck> for MsgConnectionOpenAck {
    fn from(msg: wire::MsgConnectionOpenAck) -> Self {
        MsgConnectionOpenAck {
            connection_id: msg.connection_id,
            counterparty_connection_id: msg.counterparty_connection_id,
            version: msg.version,
            client_state: msg.client_state.map(RawAny::from),
            proof_height: msg.proof_height,
            proof_try: msg.proof_try,
            proof_client: msg.proof_client,
            proof_consensus: msg.proof_consensus,
            consensus_height: msg.consensus_height,
            signer: msg.signer,
            host_consensus_state_proof: msg.host_consensus_state_proof,
        }
    }
}

//////////// GENERATED, COPY/PASTED, AND PATCHED FROM PROST-BUILD ////////////////
// Patched to add serde derives matching the amino JSON shape.

/// MerklePrefix is merkle path prefixed to the key.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MerklePrefix {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(default, with = "crate::json::base64_bytes")]
    pub key_prefix: ::prost::alloc::vec::Vec<u8>,
}
/// Counterparty defines the counterparty chain associated with a connection end.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct ConnectionCounterparty {
    /// identifies the client on the counterparty chain associated with a given
    /// connection.
    #[prost(string, tag = "1")]
    pub client_id: ::prost::alloc::string::String,
    /// identifies the connection end on the counterparty chain associated with a
    /// given connection.
    #[prost(string, tag = "2")]
    #[serde(default)]
    pub connection_id: ::prost::alloc::string::String,
    /// commitment merkle prefix of the counterparty chain.
    #[prost(message, optional, tag = "3")]
    #[serde(default)]
    pub prefix: ::core::option::Option<MerklePrefix>,
}
/// Version defines the versioning scheme used to negotiate the IBC verison in
/// the connection handshake.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct ConnectionVersion {
    /// unique version identifier
    #[prost(string, tag = "1")]
    pub identifier: ::prost::alloc::string::String,
    /// list of features compatible with the specified identifier
    #[prost(string, repeated, tag = "2")]
    #[serde(default)]
    pub features: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
/// MsgConnectionOpenInit defines the msg sent by an account on Chain A to
/// initialize a connection with Chain B.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgConnectionOpenInit {
    #[prost(string, tag = "1")]
    pub client_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    #[serde(default)]
    pub counterparty: ::core::option::Option<ConnectionCounterparty>,
    #[prost(message, optional, tag = "3")]
    #[serde(default)]
    pub version: ::core::option::Option<ConnectionVersion>,
    #[prost(uint64, tag = "4")]
    #[serde(default, with = "crate::json::string_u64")]
    pub delay_period: u64,
    #[prost(string, tag = "5")]
    pub signer: ::prost::alloc::string::String,
}
/// MsgConnectionOpenConfirm defines a msg sent by a Relayer to Chain B to
/// acknowledge the change of connection state to OPEN on Chain A.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgConnectionOpenConfirm {
    #[prost(string, tag = "1")]
    pub connection_id: ::prost::alloc::string::String,
    /// proof for the change of the connection state on Chain A: `INIT -> OPEN`
    #[prost(bytes = "vec", tag = "2")]
    #[serde(default, with = "crate::json::base64_bytes")]
    pub proof_ack: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "3")]
    #[serde(default)]
    pub proof_height: ::core::option::Option<Height>,
    #[prost(string, tag = "4")]
    pub signer: ::prost::alloc::string::String,
}

/// Counterparty defines a channel end counterparty
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct ChannelCounterparty {
    /// port on the counterparty chain which owns the other end of the channel.
    #[prost(string, tag = "1")]
    pub port_id: ::prost::alloc::string::String,
    /// channel end on the counterparty chain
    #[prost(string, tag = "2")]
    #[serde(default)]
    pub channel_id: ::prost::alloc::string::String,
}
/// Channel defines pipeline for exactly-once packet delivery between specific
/// modules on separate blockchains, which has at least one end capable of
/// sending packets and one end capable of receiving packets.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct Channel {
    /// current state of the channel end, as the protobuf enum value
    #[prost(int32, tag = "1")]
    #[serde(default)]
    pub state: i32,
    /// whether the channel is ordered or unordered, as the protobuf enum value
    #[prost(int32, tag = "2")]
    #[serde(default)]
    pub ordering: i32,
    /// counterparty channel end
    #[prost(message, optional, tag = "3")]
    #[serde(default)]
    pub counterparty: ::core::option::Option<ChannelCounterparty>,
    /// list of connection identifiers, in order, along which packets sent on
    /// this channel will travel
    #[prost(string, repeated, tag = "4")]
    #[serde(default)]
    pub connection_hops: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// opaque channel version, which is agreed upon during the handshake
    #[prost(string, tag = "5")]
    #[serde(default)]
    pub version: ::prost::alloc::string::String,
}
/// Packet defines a type that carries data across different chains through IBC
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct Packet {
    /// number corresponds to the order of sends and receives, where a Packet
    /// with an earlier sequence number must be sent and received before a Packet
    /// with a later sequence number.
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::json::string_u64")]
    pub sequence: u64,
    /// identifies the port on the sending chain.
    #[prost(string, tag = "2")]
    pub source_port: ::prost::alloc::string::String,
    /// identifies the channel end on the sending chain.
    #[prost(string, tag = "3")]
    pub source_channel: ::prost::alloc::string::String,
    /// identifies the port on the receiving chain.
    #[prost(string, tag = "4")]
    pub destination_port: ::prost::alloc::string::String,
    /// identifies the channel end on the receiving chain.
    #[prost(string, tag = "5")]
    pub destination_channel: ::prost::alloc::string::String,
    /// actual opaque bytes transferred directly to the application module
    #[prost(bytes = "vec", tag = "6")]
    #[serde(default, with = "crate::json::base64_bytes")]
    pub data: ::prost::alloc::vec::Vec<u8>,
    /// block height after which the packet times out
    #[prost(message, optional, tag = "7")]
    #[serde(default)]
    pub timeout_height: ::core::option::Option<Height>,
    /// block timestamp (in nanoseconds) after which the packet times out
    #[prost(uint64, tag = "8")]
    #[serde(default, with = "crate::json::string_u64")]
    pub timeout_timestamp: u64,
}
/// MsgChannelOpenInit defines an sdk.Msg to initialize a channel handshake. It
/// is called by a relayer on Chain A.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgChannelOpenInit {
    #[prost(string, tag = "1")]
    pub port_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    #[serde(default)]
    pub channel: ::core::option::Option<Channel>,
    #[prost(string, tag = "3")]
    pub signer: ::prost::alloc::string::String,
}
/// MsgChannelOpenTry defines a msg sent by a Relayer to try to open a channel
/// on Chain B. The version field within the Channel field has been deprecated. Its
/// value will be ignored by core IBC.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgChannelOpenTry {
    #[prost(string, tag = "1")]
    pub port_id: ::prost::alloc::string::String,
    /// Deprecated: this field is unused. Crossing hello's are no longer supported in core IBC.
    #[prost(string, tag = "2")]
    #[serde(default)]
    pub previous_channel_id: ::prost::alloc::string::String,
    /// NOTE: the version field within the channel has been deprecated. Its value will be ignored by core IBC.
    #[prost(message, optional, tag = "3")]
    #[serde(default)]
    pub channel: ::core::option::Option<Channel>,
    #[prost(string, tag = "4")]
    pub counterparty_version: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "5")]
    #[serde(default, with = "crate::json::base64_bytes")]
    pub proof_init: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "6")]
    #[serde(default)]
    pub proof_height: ::core::option::Option<Height>,
    #[prost(string, tag = "7")]
    pub signer: ::prost::alloc::string::String,
}
/// MsgChannelOpenAck defines a msg sent by a Relayer to Chain A to acknowledge
/// the change of channel state to TRYOPEN on Chain B.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgChannelOpenAck {
    #[prost(string, tag = "1")]
    pub port_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub channel_id: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub counterparty_channel_id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub counterparty_version: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "5")]
    #[serde(default, with = "crate::json::base64_bytes")]
    pub proof_try: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "6")]
    #[serde(default)]
    pub proof_height: ::core::option::Option<Height>,
    #[prost(string, tag = "7")]
    pub signer: ::prost::alloc::string::String,
}
/// MsgChannelOpenConfirm defines a msg sent by a Relayer to Chain B to
/// acknowledge the change of channel state to OPEN on Chain A.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgChannelOpenConfirm {
    #[prost(string, tag = "1")]
    pub port_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub channel_id: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "3")]
    #[serde(default, with = "crate::json::base64_bytes")]
    pub proof_ack: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "4")]
    #[serde(default)]
    pub proof_height: ::core::option::Option<Height>,
    #[prost(string, tag = "5")]
    pub signer: ::prost::alloc::string::String,
}
/// MsgChannelCloseInit defines a msg sent by a Relayer to Chain A
/// to close a channel with Chain B.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgChannelCloseInit {
    #[prost(string, tag = "1")]
    pub port_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub channel_id: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub signer: ::prost::alloc::string::String,
}
/// MsgChannelCloseConfirm defines a msg sent by a Relayer to Chain B
/// to acknowledge the change of channel state to CLOSED on Chain A.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgChannelCloseConfirm {
    #[prost(string, tag = "1")]
    pub port_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub channel_id: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "3")]
    #[serde(default, with = "crate::json::base64_bytes")]
    pub proof_init: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "4")]
    #[serde(default)]
    pub proof_height: ::core::option::Option<Height>,
    #[prost(string, tag = "5")]
    pub signer: ::prost::alloc::string::String,
}
/// MsgRecvPacket receives incoming IBC packet
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgRecvPacket {
    #[prost(message, optional, tag = "1")]
    #[serde(default)]
    pub packet: ::core::option::Option<Packet>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(default, with = "crate::json::base64_bytes")]
    pub proof_commitment: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "3")]
    #[serde(default)]
    pub proof_height: ::core::option::Option<Height>,
    #[prost(string, tag = "4")]
    pub signer: ::prost::alloc::string::String,
}
/// MsgTimeout receives timed-out packet
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgTimeout {
    #[prost(message, optional, tag = "1")]
    #[serde(default)]
    pub packet: ::core::option::Option<Packet>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(default, with = "crate::json::base64_bytes")]
    pub proof_unreceived: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "3")]
    #[serde(default)]
    pub proof_height: ::core::option::Option<Height>,
    #[prost(uint64, tag = "4")]
    #[serde(with = "crate::json::string_u64")]
    pub next_sequence_recv: u64,
    #[prost(string, tag = "5")]
    pub signer: ::prost::alloc::string::String,
}
/// MsgAcknowledgement receives incoming IBC acknowledgement
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgAcknowledgement {
    #[prost(message, optional, tag = "1")]
    #[serde(default)]
    pub packet: ::core::option::Option<Packet>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(default, with = "crate::json::base64_bytes")]
    pub acknowledgement: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "3")]
    #[serde(default, with = "crate::json::base64_bytes")]
    pub proof_acked: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "4")]
    #[serde(default)]
    pub proof_height: ::core::option::Option<Height>,
    #[prost(string, tag = "5")]
    pub signer: ::prost::alloc::string::String,
}

impl_variant!(
    MsgCreateClient,
    "cosmos-sdk/MsgCreateClient",
    "/ibc.core.client.v1.MsgCreateClient",
    wire::MsgCreateClient
);
impl_variant!(
    MsgUpdateClient,
    "cosmos-sdk/MsgUpdateClient",
    "/ibc.core.client.v1.MsgUpdateClient",
    wire::MsgUpdateClient
);
impl_variant!(
    MsgUpgradeClient,
    "cosmos-sdk/MsgUpgradeClient",
    "/ibc.core.client.v1.MsgUpgradeClient",
    wire::MsgUpgradeClient
);
impl_variant!(
    MsgSubmitMisbehaviour,
    "cosmos-sdk/MsgSubmitMisbehaviour",
    "/ibc.core.client.v1.MsgSubmitMisbehaviour",
    wire::MsgSubmitMisbehaviour
);
impl_variant!(
    MsgConnectionOpenInit,
    "cosmos-sdk/MsgConnectionOpenInit",
    "/ibc.core.connection.v1.MsgConnectionOpenInit"
);
impl_variant!(
    MsgConnectionOpenTry,
    "cosmos-sdk/MsgConnectionOpenTry",
    "/ibc.core.connection.v1.MsgConnectionOpenTry",
    wire::MsgConnectionOpenTry
);
impl_variant!(
    MsgConnectionOpenAck,
    "cosmos-sdk/MsgConnectionOpenAck",
    "/ibc.core.connection.v1.MsgConnectionOpenAck",
    wire::MsgConnectionOpenAck
);
impl_variant!(
    MsgConnectionOpenConfirm,
    "cosmos-sdk/MsgConnectionOpenConfirm",
    "/ibc.core.connection.v1.MsgConnectionOpenConfirm"
);
impl_variant!(
    MsgChannelOpenInit,
    "cosmos-sdk/MsgChannelOpenInit",
    "/ibc.core.channel.v1.MsgChannelOpenInit"
);
impl_variant!(
    MsgChannelOpenTry,
    "cosmos-sdk/MsgChannelOpenTry",
    "/ibc.core.channel.v1.MsgChannelOpenTry"
);
impl_variant!(
    MsgChannelOpenAck,
    "cosmos-sdk/MsgChannelOpenAck",
    "/ibc.core.channel.v1.MsgChannelOpenAck"
);
impl_variant!(
    MsgChannelOpenConfirm,
    "cosmos-sdk/MsgChannelOpenConfirm",
    "/ibc.core.channel.v1.MsgChannelOpenConfirm"
);
impl_variant!(
    MsgChannelCloseInit,
    "cosmos-sdk/MsgChannelCloseInit",
    "/ibc.core.channel.v1.MsgChannelCloseInit"
);
impl_variant!(
    MsgChannelCloseConfirm,
    "cosmos-sdk/MsgChannelCloseConfirm",
    "/ibc.core.channel.v1.MsgChannelCloseConfirm"
);
impl_variant!(
    MsgRecvPacket,
    "cosmos-sdk/MsgRecvPacket",
    "/ibc.core.channel.v1.MsgRecvPacket"
);
impl_variant!(
    MsgTimeout,
    "cosmos-sdk/MsgTimeout",
    "/ibc.core.channel.v1.MsgTimeout"
);
impl_variant!(
    MsgAcknowledgement,
    "cosmos-sdk/MsgAcknowledgement",
    "/ibc.core.channel.v1.MsgAcknowledgement"
);

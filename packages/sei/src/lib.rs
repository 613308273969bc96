//! Client library for the Sei blockchain.
//!
//! The heart of the crate is the variant [Registry]: a table-driven
//! dispatcher that turns type-tagged payloads (amino JSON envelopes,
//! protobuf `Any` values, and the LCD's `@type` objects) into strongly
//! typed [Msg] and [Content] values, and back again. A [Codec] bundles
//! the message and proposal-content registries and is the value you pass
//! around to anything that needs decoding.
pub use address::{parse_raw_address, Address, AddressHrp, HasAddress, RawAddress};
pub use codec::Codec;
pub use coin::{Coin, Coins};
pub use content::Content;
pub use cosmos_sdk_proto as proto;
pub use error::{DiscriminatorTable, LcdError, RegistryError};
pub use json::RawAny;
pub use lcd::{LcdClient, PaginationOptions, TxInfo, TxSearchResult};
pub use msgs::Msg;
pub use network::{LcdBuilder, SeiNetwork};
pub use registry::{Descriptor, Family, JsonEnvelope, Registry, Variant};
pub use txbuilder::TxBuilder;

#[macro_use]
mod macros;

mod address;
mod codec;
mod coin;
mod lcd;
mod network;
mod registry;
mod txbuilder;

#[cfg(feature = "clap")]
pub mod clap;

pub mod content;
pub mod error;
pub mod json;
pub mod msgs;
pub mod wire;

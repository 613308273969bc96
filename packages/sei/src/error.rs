//! Error types exposed by this package.

use std::fmt::Display;

/// Which lookup table of a [crate::Registry] a discriminator belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiscriminatorTable {
    /// Amino JSON `type` names, e.g. `cosmos-sdk/MsgSend`
    Json,
    /// Protobuf `Any` type URLs, e.g. `/cosmos.bank.v1beta1.MsgSend`
    Binary,
}

impl Display for DiscriminatorTable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(match self {
            DiscriminatorTable::Json => "JSON",
            DiscriminatorTable::Binary => "binary",
        })
    }
}

/// Errors raised while building a [crate::Registry] or dispatching through it.
#[derive(thiserror::Error, Debug)]
pub enum RegistryError {
    /// Two descriptors were registered under the same discriminator.
    #[error("Duplicate {table} discriminator {discriminator:?} in the {family} registry (descriptors #{first} and #{second})")]
    DuplicateDiscriminator {
        family: &'static str,
        table: DiscriminatorTable,
        discriminator: String,
        first: usize,
        second: usize,
    },
    /// The same Rust type was registered twice, making the reverse lookup ambiguous.
    #[error("Variant {variant} is registered more than once in the {family} registry")]
    DuplicateVariant {
        family: &'static str,
        variant: &'static str,
    },
    /// No variant is registered under the requested discriminator.
    #[error("Unknown {family} discriminator {discriminator:?}")]
    UnknownVariant {
        family: &'static str,
        discriminator: String,
    },
    /// The discriminator resolved, but the payload could not be decoded as that variant.
    #[error("Malformed {family} payload for {discriminator:?}: {source:?}")]
    MalformedPayload {
        family: &'static str,
        discriminator: String,
        source: anyhow::Error,
    },
    /// The input was not a type-tagged envelope at all.
    #[error("Invalid {family} envelope: {source}")]
    InvalidEnvelope {
        family: &'static str,
        source: serde_json::Error,
    },
    /// A value could not be encoded because its variant is absent from the registry.
    #[error("Variant {variant} is not registered in the {family} registry")]
    UnregisteredVariant {
        family: &'static str,
        variant: &'static str,
    },
}

impl RegistryError {
    /// The offending discriminator, if this error carries one.
    pub fn discriminator(&self) -> Option<&str> {
        match self {
            RegistryError::DuplicateDiscriminator { discriminator, .. }
            | RegistryError::UnknownVariant { discriminator, .. }
            | RegistryError::MalformedPayload { discriminator, .. } => Some(discriminator),
            RegistryError::DuplicateVariant { .. }
            | RegistryError::InvalidEnvelope { .. }
            | RegistryError::UnregisteredVariant { .. } => None,
        }
    }
}

/// Errors returned by [crate::LcdClient].
#[derive(thiserror::Error, Debug)]
pub enum LcdError {
    #[error("Error sending request to {url}: {source}")]
    Request { url: String, source: reqwest::Error },
    #[error("LCD endpoint {url} returned status {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Unable to parse LCD response from {url}: {source:?}")]
    Response { url: String, source: anyhow::Error },
    #[error("Unable to decode message #{index} of transaction {txhash}: {source}")]
    MessageDecode {
        txhash: String,
        index: usize,
        source: RegistryError,
    },
    #[error("Invalid LCD configuration: {0}")]
    Config(String),
    #[error("Invalid event filter {key}={value:?}: {reason}")]
    InvalidEvent {
        key: String,
        value: String,
        reason: &'static str,
    },
}

use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use anyhow::{Context, Result};
use bech32::{FromBase32, ToBase32};
use serde::de::Visitor;

/// A raw address value not connected to a specific prefix. You usually want [Address].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum RawAddress {
    Twenty { raw_address: [u8; 20] },
    ThirtyTwo { raw_address: [u8; 32] },
}

/// Parse a raw address and its HRP from a string. Supports any Cosmos-compatible prefix.
pub fn parse_raw_address(s: &str) -> Result<(String, RawAddress)> {
    let (hrp, data, variant) = bech32::decode(s).context("Invalid bech32 data")?;
    match variant {
        bech32::Variant::Bech32 => (),
        bech32::Variant::Bech32m => anyhow::bail!("Must use Bech32 variant"),
    }
    let data = Vec::<u8>::from_base32(&data)?;
    let raw_address = data
        .as_slice()
        .try_into()
        .with_context(|| format!("Total bytes found: {}", data.len()))?;
    Ok((hrp, raw_address))
}

/// Note that using this instance throws away the Human Readable Part (HRP) of the address!
impl FromStr for RawAddress {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_raw_address(s).map(|x| x.1)
    }
}

impl AsRef<[u8]> for RawAddress {
    fn as_ref(&self) -> &[u8] {
        match self {
            RawAddress::Twenty { raw_address } => raw_address,
            RawAddress::ThirtyTwo { raw_address } => raw_address,
        }
    }
}

impl From<[u8; 20]> for RawAddress {
    fn from(raw_address: [u8; 20]) -> Self {
        RawAddress::Twenty { raw_address }
    }
}

impl From<[u8; 32]> for RawAddress {
    fn from(raw_address: [u8; 32]) -> Self {
        RawAddress::ThirtyTwo { raw_address }
    }
}

impl TryFrom<&[u8]> for RawAddress {
    type Error = anyhow::Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        match value.try_into().ok() {
            Some(raw_address) => Ok(RawAddress::Twenty { raw_address }),
            None => value
                .try_into()
                .map(|raw_address| RawAddress::ThirtyTwo { raw_address })
                .context("Invalid data size for a RawAddress, need either 20 or 32 bytes"),
        }
    }
}

impl RawAddress {
    /// Attach a Sei prefix to this raw address.
    pub fn with_hrp(self, hrp: AddressHrp) -> Address {
        Address {
            raw_address: self,
            hrp,
        }
    }
}

/// The role an address plays on Sei, which determines its bech32 prefix.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum AddressHrp {
    /// Regular accounts and contracts, `sei1...`
    Account,
    /// Validator operators, `seivaloper1...`
    Validator,
    /// Validator consensus keys, `seivalcons1...`
    Consensus,
}

impl AddressHrp {
    pub fn all() -> [AddressHrp; 3] {
        [
            AddressHrp::Account,
            AddressHrp::Validator,
            AddressHrp::Consensus,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AddressHrp::Account => "sei",
            AddressHrp::Validator => "seivaloper",
            AddressHrp::Consensus => "seivalcons",
        }
    }
}

impl FromStr for AddressHrp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sei" => Ok(AddressHrp::Account),
            "seivaloper" => Ok(AddressHrp::Validator),
            "seivalcons" => Ok(AddressHrp::Consensus),
            _ => Err(anyhow::anyhow!("Invalid Sei address prefix {s:?}")),
        }
    }
}

impl Display for AddressHrp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An address on the Sei blockchain
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    raw_address: RawAddress,
    hrp: AddressHrp,
}

impl Address {
    pub fn raw(&self) -> &RawAddress {
        &self.raw_address
    }

    pub fn hrp(&self) -> AddressHrp {
        self.hrp
    }

    /// The same raw bytes under a different prefix, e.g. a validator's account address.
    pub fn with_hrp(&self, hrp: AddressHrp) -> Self {
        Address {
            raw_address: self.raw_address,
            hrp,
        }
    }
}

impl Display for Address {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        bech32::encode_to_fmt(
            fmt,
            self.hrp.as_str(),
            self.raw_address.to_base32(),
            bech32::Variant::Bech32,
        )
        .expect("Invalid HRP")
    }
}

impl Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_string()
    }
}

impl FromStr for Address {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        (|| {
            let (hrp, raw_address) = parse_raw_address(s)?;
            hrp.parse().map(|hrp| Address { raw_address, hrp })
        })()
        .with_context(|| format!("Unable to parse Sei address {s}"))
    }
}

/// Anything which has a Sei address, used by the message builders.
pub trait HasAddress {
    fn get_address(&self) -> Address;

    fn get_address_string(&self) -> String {
        self.get_address().to_string()
    }
}

impl HasAddress for Address {
    fn get_address(&self) -> Address {
        *self
    }
}

impl<T: HasAddress> HasAddress for &T {
    fn get_address(&self) -> Address {
        HasAddress::get_address(*self)
    }
}

impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(AddressVisitor)
    }
}

struct AddressVisitor;

impl<'de> Visitor<'de> for AddressVisitor {
    type Value = Address;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("Sei address")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        v.parse().map_err(|e| E::custom(e))
    }
}

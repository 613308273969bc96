//! Table-driven dispatch between type-tagged payloads and typed variants.

use std::{any::TypeId, collections::HashMap, fmt::Debug};

use prost::Message;
use serde::{de::Error as _, Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{DiscriminatorTable, RegistryError},
    Codec,
};

/// An amino JSON envelope: `{"type": "cosmos-sdk/MsgSend", "value": {...}}`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct JsonEnvelope {
    /// Amino discriminator
    #[serde(rename = "type")]
    pub type_: String,
    /// Variant-specific fields
    pub value: Value,
}

/// One concrete message or proposal type.
///
/// Encoding is a capability of the variant itself. Decoding receives the
/// [Codec] so that variants embedding other polymorphic payloads can
/// resolve them through the registries instead of hard-coding a table.
pub trait Variant: Clone + Debug + PartialEq + Send + Sync + 'static {
    /// Discriminator used in amino JSON envelopes.
    const TYPE_AMINO: &'static str;
    /// Discriminator used in protobuf `Any` envelopes.
    const TYPE_URL: &'static str;
    /// Protobuf wire representation.
    type Proto: Message + Default;

    /// Fails only for variants holding payloads that were received as JSON
    /// and have no protobuf encoding to fall back on.
    fn to_proto(&self) -> anyhow::Result<Self::Proto>;

    fn from_proto(proto: Self::Proto, codec: &Codec) -> anyhow::Result<Self>;

    /// The JSON `value` of this variant's envelope.
    fn to_json(&self) -> serde_json::Result<Value>;

    fn from_json(value: Value, codec: &Codec) -> anyhow::Result<Self>;

    fn to_proto_bytes(&self) -> anyhow::Result<Vec<u8>> {
        Ok(self.to_proto()?.encode_to_vec())
    }

    fn pack_any(&self) -> anyhow::Result<prost_types::Any> {
        Ok(prost_types::Any {
            type_url: Self::TYPE_URL.to_owned(),
            value: self.to_proto_bytes()?,
        })
    }

    fn to_json_envelope(&self) -> serde_json::Result<JsonEnvelope> {
        Ok(JsonEnvelope {
            type_: Self::TYPE_AMINO.to_owned(),
            value: self.to_json()?,
        })
    }
}

/// A closed set of variants sharing a common capability, such as "is a
/// transaction message". Implemented by the `variant_family!` macro.
pub trait Family: Clone + Debug + PartialEq + Send + Sync + Sized + 'static {
    /// Human readable family name used in errors and logs.
    const LABEL: &'static str;

    /// Descriptors of every known variant, in registration order.
    fn descriptors() -> Vec<Descriptor<Self>>;

    /// Runtime identity of the contained variant, keying the reverse lookup.
    fn variant_id(&self) -> TypeId;

    fn variant_name(&self) -> &'static str;

    fn type_amino(&self) -> &'static str;

    fn type_url(&self) -> &'static str;

    fn to_json_value(&self) -> serde_json::Result<Value>;

    fn to_proto_bytes(&self) -> anyhow::Result<Vec<u8>>;

    fn to_json_envelope(&self) -> serde_json::Result<JsonEnvelope> {
        Ok(JsonEnvelope {
            type_: self.type_amino().to_owned(),
            value: self.to_json_value()?,
        })
    }

    fn pack_any(&self) -> anyhow::Result<prost_types::Any> {
        Ok(prost_types::Any {
            type_url: self.type_url().to_owned(),
            value: self.to_proto_bytes()?,
        })
    }
}

/// How to find and build one variant of family `F`.
pub struct Descriptor<F> {
    type_amino: &'static str,
    type_url: &'static str,
    variant_id: TypeId,
    variant_name: &'static str,
    from_json: fn(Value, &Codec) -> anyhow::Result<F>,
    from_proto: fn(&[u8], &Codec) -> anyhow::Result<F>,
}

impl<F> Debug for Descriptor<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Descriptor")
            .field("variant", &self.variant_name)
            .field("type_amino", &self.type_amino)
            .field("type_url", &self.type_url)
            .finish()
    }
}

impl<F: 'static> Descriptor<F> {
    /// Describe `T` under its own discriminators.
    pub fn of<T: Variant + Into<F>>() -> Self {
        Self::new::<T>(T::TYPE_AMINO, T::TYPE_URL)
    }

    /// Describe `T` under explicit discriminators, e.g. a chain-specific alias.
    pub fn new<T: Variant + Into<F>>(type_amino: &'static str, type_url: &'static str) -> Self {
        Descriptor {
            type_amino,
            type_url,
            variant_id: TypeId::of::<T>(),
            variant_name: short_type_name::<T>(),
            from_json: decode_json_as::<T, F>,
            from_proto: decode_proto_as::<T, F>,
        }
    }

    pub fn type_amino(&self) -> &'static str {
        self.type_amino
    }

    pub fn type_url(&self) -> &'static str {
        self.type_url
    }

    pub fn variant_id(&self) -> TypeId {
        self.variant_id
    }

    pub fn variant_name(&self) -> &'static str {
        self.variant_name
    }
}

fn short_type_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

fn decode_json_as<T: Variant + Into<F>, F>(value: Value, codec: &Codec) -> anyhow::Result<F> {
    T::from_json(value, codec).map(Into::into)
}

fn decode_proto_as<T: Variant + Into<F>, F>(bytes: &[u8], codec: &Codec) -> anyhow::Result<F> {
    let proto = <T::Proto as Message>::decode(bytes)?;
    T::from_proto(proto, codec).map(Into::into)
}

/// Immutable discriminator tables for one [Family].
///
/// The amino table, the type URL table, and the reverse table keyed by
/// variant identity are all built from the same descriptor list in
/// [Registry::new], so they cannot disagree.
pub struct Registry<F> {
    descriptors: Vec<Descriptor<F>>,
    by_amino: HashMap<&'static str, usize>,
    by_type_url: HashMap<&'static str, usize>,
    by_variant: HashMap<TypeId, usize>,
}

impl<F> Debug for Registry<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.descriptors).finish()
    }
}

impl<F: Family> Registry<F> {
    /// Build the tables, rejecting any duplicated discriminator or variant.
    pub fn new(descriptors: Vec<Descriptor<F>>) -> Result<Self, RegistryError> {
        let mut by_amino = HashMap::with_capacity(descriptors.len());
        let mut by_type_url = HashMap::with_capacity(descriptors.len());
        let mut by_variant = HashMap::with_capacity(descriptors.len());

        for (idx, desc) in descriptors.iter().enumerate() {
            if let Some(first) = by_amino.insert(desc.type_amino, idx) {
                return Err(RegistryError::DuplicateDiscriminator {
                    family: F::LABEL,
                    table: DiscriminatorTable::Json,
                    discriminator: desc.type_amino.to_owned(),
                    first,
                    second: idx,
                });
            }
            if let Some(first) = by_type_url.insert(desc.type_url, idx) {
                return Err(RegistryError::DuplicateDiscriminator {
                    family: F::LABEL,
                    table: DiscriminatorTable::Binary,
                    discriminator: desc.type_url.to_owned(),
                    first,
                    second: idx,
                });
            }
            if by_variant.insert(desc.variant_id, idx).is_some() {
                return Err(RegistryError::DuplicateVariant {
                    family: F::LABEL,
                    variant: desc.variant_name,
                });
            }
        }

        tracing::debug!(
            "Built {} registry with {} variants",
            F::LABEL,
            descriptors.len()
        );

        Ok(Registry {
            descriptors,
            by_amino,
            by_type_url,
            by_variant,
        })
    }

    /// Build a registry containing every variant of the family.
    pub fn known() -> Result<Self, RegistryError> {
        Self::new(F::descriptors())
    }

    pub fn descriptors(&self) -> &[Descriptor<F>] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn lookup_amino(&self, type_amino: &str) -> Option<&Descriptor<F>> {
        self.by_amino
            .get(type_amino)
            .map(|idx| &self.descriptors[*idx])
    }

    pub fn lookup_type_url(&self, type_url: &str) -> Option<&Descriptor<F>> {
        self.by_type_url
            .get(type_url)
            .map(|idx| &self.descriptors[*idx])
    }

    fn lookup_value(&self, value: &F) -> Result<&Descriptor<F>, RegistryError> {
        self.by_variant
            .get(&value.variant_id())
            .map(|idx| &self.descriptors[*idx])
            .ok_or_else(|| RegistryError::UnregisteredVariant {
                family: F::LABEL,
                variant: value.variant_name(),
            })
    }

    /// Amino discriminator this registry uses for the given value.
    pub fn type_amino_of(&self, value: &F) -> Option<&'static str> {
        self.lookup_value(value).ok().map(|desc| desc.type_amino)
    }

    /// Type URL this registry uses for the given value.
    pub fn type_url_of(&self, value: &F) -> Option<&'static str> {
        self.lookup_value(value).ok().map(|desc| desc.type_url)
    }

    fn unknown(&self, discriminator: &str) -> RegistryError {
        RegistryError::UnknownVariant {
            family: F::LABEL,
            discriminator: discriminator.to_owned(),
        }
    }

    fn malformed(&self, discriminator: &str, source: anyhow::Error) -> RegistryError {
        RegistryError::MalformedPayload {
            family: F::LABEL,
            discriminator: discriminator.to_owned(),
            source,
        }
    }

    fn invalid_envelope(&self, source: serde_json::Error) -> RegistryError {
        RegistryError::InvalidEnvelope {
            family: F::LABEL,
            source,
        }
    }

    /// Decode an amino JSON envelope `{"type": ..., "value": ...}`.
    pub fn decode_json(&self, codec: &Codec, envelope: Value) -> Result<F, RegistryError> {
        let envelope =
            serde_json::from_value(envelope).map_err(|source| self.invalid_envelope(source))?;
        self.decode_envelope(codec, envelope)
    }

    /// Decode an already-split [JsonEnvelope].
    pub fn decode_envelope(
        &self,
        codec: &Codec,
        JsonEnvelope { type_, value }: JsonEnvelope,
    ) -> Result<F, RegistryError> {
        let desc = self.lookup_amino(&type_).ok_or_else(|| self.unknown(&type_))?;
        (desc.from_json)(value, codec).map_err(|source| self.malformed(&type_, source))
    }

    /// Decode a protobuf payload given its type URL.
    pub fn decode_any(
        &self,
        codec: &Codec,
        type_url: &str,
        payload: &[u8],
    ) -> Result<F, RegistryError> {
        let desc = self
            .lookup_type_url(type_url)
            .ok_or_else(|| self.unknown(type_url))?;
        (desc.from_proto)(payload, codec).map_err(|source| self.malformed(type_url, source))
    }

    /// Decode a protobuf `Any` container.
    pub fn unpack_any(&self, codec: &Codec, any: &prost_types::Any) -> Result<F, RegistryError> {
        self.decode_any(codec, &any.type_url, &any.value)
    }

    /// Decode an already-parsed message in the LCD's proto-JSON form, where
    /// the type URL sits in an `@type` field next to the message fields.
    pub fn decode_proto_json(&self, codec: &Codec, object: Value) -> Result<F, RegistryError> {
        let mut fields = match object {
            Value::Object(fields) => fields,
            other => {
                return Err(self.invalid_envelope(serde_json::Error::custom(format!(
                    "expected a JSON object, found {other}"
                ))))
            }
        };
        let type_url = match fields.remove("@type") {
            Some(Value::String(type_url)) => type_url,
            _ => {
                return Err(self.invalid_envelope(serde_json::Error::custom(
                    "missing string field @type",
                )))
            }
        };
        let desc = self
            .lookup_type_url(&type_url)
            .ok_or_else(|| self.unknown(&type_url))?;
        (desc.from_json)(Value::Object(fields), codec)
            .map_err(|source| self.malformed(&type_url, source))
    }

    /// Decode a nested value that may use either JSON form: an object with
    /// an `@type` field goes through [Self::decode_proto_json], anything else
    /// through [Self::decode_json].
    pub fn decode_tagged(&self, codec: &Codec, value: Value) -> Result<F, RegistryError> {
        if value.get("@type").is_some() {
            self.decode_proto_json(codec, value)
        } else {
            self.decode_json(codec, value)
        }
    }

    /// Encode to an amino JSON envelope, taking the discriminator from this registry.
    pub fn encode_json(&self, value: &F) -> Result<JsonEnvelope, RegistryError> {
        let desc = self.lookup_value(value)?;
        let json = value
            .to_json_value()
            .map_err(|e| self.malformed(desc.type_amino, e.into()))?;
        Ok(JsonEnvelope {
            type_: desc.type_amino.to_owned(),
            value: json,
        })
    }

    /// Encode to a protobuf `Any`, taking the type URL from this registry.
    pub fn encode_any(&self, value: &F) -> Result<prost_types::Any, RegistryError> {
        let desc = self.lookup_value(value)?;
        let bytes = value
            .to_proto_bytes()
            .map_err(|e| self.malformed(desc.type_url, e))?;
        Ok(prost_types::Any {
            type_url: desc.type_url.to_owned(),
            value: bytes,
        })
    }
}

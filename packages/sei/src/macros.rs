/// Implement [crate::Variant] for a message type.
///
/// The JSON shape always comes from the type's serde implementation. With a
/// fourth argument, the protobuf form is a separate wire type reached through
/// `TryFrom<&T>` (or `From<&T>`) and `TryFrom<Wire>`; without it, the type is its own wire type.
macro_rules! impl_variant {
    ($ty:ty, $amino:literal, $url:literal, $proto:ty) => {
        impl $crate::registry::Variant for $ty {
            const TYPE_AMINO: &'static str = $amino;
            const TYPE_URL: &'static str = $url;
            type Proto = $proto;

            fn to_proto(&self) -> anyhow::Result<Self::Proto> {
                <$proto>::try_from(self).map_err(anyhow::Error::from)
            }

            fn from_proto(proto: Self::Proto, _: &$crate::Codec) -> anyhow::Result<Self> {
                <$ty>::try_from(proto).map_err(anyhow::Error::from)
            }

            fn to_json(&self) -> serde_json::Result<serde_json::Value> {
                serde_json::to_value(self)
            }

            fn from_json(value: serde_json::Value, _: &$crate::Codec) -> anyhow::Result<Self> {
                serde_json::from_value(value).map_err(anyhow::Error::from)
            }
        }
    };
    ($ty:ty, $amino:literal, $url:literal) => {
        impl $crate::registry::Variant for $ty {
            const TYPE_AMINO: &'static str = $amino;
            const TYPE_URL: &'static str = $url;
            type Proto = $ty;

            fn to_proto(&self) -> anyhow::Result<Self::Proto> {
                Ok(self.clone())
            }

            fn from_proto(proto: Self::Proto, _: &$crate::Codec) -> anyhow::Result<Self> {
                Ok(proto)
            }

            fn to_json(&self) -> serde_json::Result<serde_json::Value> {
                serde_json::to_value(self)
            }

            fn from_json(value: serde_json::Value, _: &$crate::Codec) -> anyhow::Result<Self> {
                serde_json::from_value(value).map_err(anyhow::Error::from)
            }
        }
    };
}

/// Declare a closed family of variants.
///
/// Generates the family enum, `From` conversions from every variant, and the
/// [crate::Family] implementation whose descriptor list feeds both lookup
/// tables of a [crate::Registry]. Listing a type here is the only place it
/// gets wired in.
macro_rules! variant_family {
    (
        $(#[$meta:meta])*
        $vis:vis enum $family:ident ($label:literal) {
            $($variant:ident($ty:ty),)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis enum $family {
            $($variant($ty),)+
        }

        $(
            impl From<$ty> for $family {
                fn from(value: $ty) -> Self {
                    $family::$variant(value)
                }
            }
        )+

        impl $crate::registry::Family for $family {
            const LABEL: &'static str = $label;

            fn descriptors() -> Vec<$crate::registry::Descriptor<Self>> {
                vec![$($crate::registry::Descriptor::of::<$ty>(),)+]
            }

            fn variant_id(&self) -> std::any::TypeId {
                match self {
                    $($family::$variant(_) => std::any::TypeId::of::<$ty>(),)+
                }
            }

            fn variant_name(&self) -> &'static str {
                match self {
                    $($family::$variant(_) => stringify!($variant),)+
                }
            }

            fn type_amino(&self) -> &'static str {
                match self {
                    $($family::$variant(_) => <$ty as $crate::registry::Variant>::TYPE_AMINO,)+
                }
            }

            fn type_url(&self) -> &'static str {
                match self {
                    $($family::$variant(_) => <$ty as $crate::registry::Variant>::TYPE_URL,)+
                }
            }

            fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
                match self {
                    $($family::$variant(value) => $crate::registry::Variant::to_json(value),)+
                }
            }

            fn to_proto_bytes(&self) -> anyhow::Result<Vec<u8>> {
                match self {
                    $($family::$variant(value) => $crate::registry::Variant::to_proto_bytes(value),)+
                }
            }
        }
    };
}

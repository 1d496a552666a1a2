/// Implements `serde::Serialize` and `serde::Deserialize` for a `strum`
/// vocabulary enumeration, so it travels over the wire as its string token.
///
/// Unrecognized tokens fail deserialization, unless a fallback member
/// is supplied, in which case they decode as that member.
///
/// ```rust,ignore
/// use routers_directions::model::CongestionLevel;
/// routers_directions::impl_token_serde!(CongestionLevel);
/// ```
pub mod token_macro {
    #[macro_export]
    macro_rules! impl_token_serde {
        (@serialize $ty:ty) => {
            impl ::serde::Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: ::serde::Serializer,
                {
                    serializer.serialize_str(AsRef::<str>::as_ref(self))
                }
            }
        };
        ($ty:ty) => {
            $crate::impl_token_serde!(@serialize $ty);

            impl<'de> ::serde::Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: ::serde::Deserializer<'de>,
                {
                    let token = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                    token.parse::<$ty>().map_err(|_| {
                        <D::Error as ::serde::de::Error>::custom(format!(
                            "unrecognized {} token `{token}`",
                            stringify!($ty)
                        ))
                    })
                }
            }
        };
        ($ty:ty, fallback = $fallback:expr) => {
            $crate::impl_token_serde!(@serialize $ty);

            impl<'de> ::serde::Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: ::serde::Deserializer<'de>,
                {
                    let token = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                    Ok(token.parse::<$ty>().unwrap_or($fallback))
                }
            }
        };
    }

    pub use impl_token_serde;
}

//! coded
//!
//! Code-backed enumerations and their wire (de)serialization.
//!
//! # Design
//!
//! Many server values are closed sets whose wire spelling differs from the
//! symbolic name: `ChannelType::Private` travels as `"P"`, `ContentType::Json`
//! as `"application/json"`. Each such type implements [`CodedEnum`], which
//! gives it:
//!
//! - [`CodedEnum::code`]: total mapping from variant to wire code, written as
//!   an exhaustive `match` so a value outside the variant set cannot exist.
//! - [`CodedEnum::resolve`]: lookup from wire code to variant over the static
//!   `VARIANTS` table. Exact, case-sensitive comparison; the first declared
//!   variant wins if codes ever collide. A miss is `None`, not an error.
//!
//! # Field policy
//!
//! Model fields holding coded values use [`lenient`] (single value) or
//! [`space_separated`] (role lists). An unknown but well-formed code becomes
//! `None` (or is dropped from the list) and a `warn` event is emitted so that
//! server-side additions are visible in logs. A token of the wrong JSON type
//! is still a hard decode error.
//!
//! Callers that want strictness use [`CodedEnum::resolve_strict`], `FromStr`,
//! or deserialize the enum type directly, all of which reject unknown codes.
//!
//! # Example
//!
//! ```
//! use mattermost_client::coded::CodedEnum;
//! use mattermost_client::model::ContentType;
//!
//! assert_eq!(ContentType::Json.code(), "application/json");
//! assert_eq!(ContentType::resolve("application/json"), Some(ContentType::Json));
//! assert_eq!(ContentType::resolve("text/plain"), None);
//! ```

use std::fmt;

use serde::de::Deserializer;
use serde::Deserialize;
use thiserror::Error;

/// Errors from strict code resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// The code is well-formed but matches no variant.
    #[error("unknown {kind} code: {code:?}")]
    Unresolved {
        /// Enumeration type name
        kind: &'static str,
        /// The offending wire code
        code: String,
    },
}

/// A closed enumeration whose variants each carry a fixed wire code.
///
/// Implementations are generated by the crate-internal `coded_enum!` macro;
/// `VARIANTS` lists every variant in declaration order.
pub trait CodedEnum: Copy + Eq + fmt::Debug + 'static {
    /// Type name used in diagnostics.
    const NAME: &'static str;

    /// All variants, in declaration order.
    const VARIANTS: &'static [Self];

    /// The wire code for this variant.
    fn code(self) -> &'static str;

    /// Resolve a wire code to its variant.
    ///
    /// Returns `None` for unknown codes, including the empty string.
    fn resolve(code: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.code() == code)
    }

    /// Resolve a possibly absent wire code.
    fn resolve_opt(code: Option<&str>) -> Option<Self> {
        code.and_then(Self::resolve)
    }

    /// Resolve a wire code, failing on a miss.
    ///
    /// # Errors
    ///
    /// Returns `CodeError::Unresolved` if no variant carries `code`.
    fn resolve_strict(code: &str) -> Result<Self, CodeError> {
        Self::resolve(code).ok_or_else(|| CodeError::Unresolved {
            kind: Self::NAME,
            code: code.to_string(),
        })
    }
}

/// Resolve a wire code for any coded enumeration.
pub fn resolve<T: CodedEnum>(code: &str) -> Option<T> {
    T::resolve(code)
}

/// Resolve a wire code, logging non-empty misses.
fn resolve_or_warn<T: CodedEnum>(code: &str) -> Option<T> {
    let resolved = T::resolve(code);
    if resolved.is_none() && !code.is_empty() {
        tracing::warn!(kind = T::NAME, code, "unresolved wire code, treating as absent");
    }
    resolved
}

/// Split a space-separated code list, dropping unknown entries.
pub fn split_codes<T: CodedEnum>(raw: &str) -> Vec<T> {
    raw.split_whitespace().filter_map(resolve_or_warn).collect()
}

/// Join variants into a space-separated code list.
pub fn join_codes<T: CodedEnum>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.code())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strict deserialization: the token must be a string naming a known code.
pub fn deserialize_strict<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: CodedEnum,
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    T::resolve_strict(&raw).map_err(serde::de::Error::custom)
}

/// Field codec for `Option<T>`: unknown codes become `None`.
///
/// Use with `#[serde(default, with = "crate::coded::lenient")]`.
pub mod lenient {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::CodedEnum;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: CodedEnum,
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_str(v.code()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: CodedEnum,
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(super::resolve_or_warn))
    }
}

/// Field codec for `Vec<T>` carried as one space-separated string.
///
/// `null` and `""` decode to an empty list.
pub mod space_separated {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::CodedEnum;

    #[allow(clippy::ptr_arg)]
    pub fn serialize<T, S>(values: &Vec<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: CodedEnum,
        S: Serializer,
    {
        serializer.serialize_str(&super::join_codes(values))
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        T: CodedEnum,
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(super::split_codes).unwrap_or_default())
    }
}

/// Declare a coded enumeration.
///
/// Generates the enum, its [`CodedEnum`] impl, `Display` (the code),
/// `FromStr` (strict), and serde impls writing and strictly reading the code.
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $code:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant
            ),+
        }

        impl $crate::coded::CodedEnum for $name {
            const NAME: &'static str = stringify!($name);
            const VARIANTS: &'static [Self] = &[$($name::$variant),+];

            fn code(self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::coded::CodedEnum::code(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::coded::CodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as $crate::coded::CodedEnum>::resolve_strict(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::coded::CodedEnum::code(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                $crate::coded::deserialize_strict(deserializer)
            }
        }
    };
}

pub(crate) use coded_enum;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    coded_enum! {
        /// Test enumeration with a deliberate duplicate code.
        enum Shade {
            Light => "l",
            Dark => "d",
            AlsoLight => "l",
        }
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Swatch {
        #[serde(default, with = "lenient")]
        shade: Option<Shade>,
        #[serde(default, with = "space_separated")]
        layers: Vec<Shade>,
    }

    #[test]
    fn code_of_each_variant() {
        assert_eq!(Shade::Light.code(), "l");
        assert_eq!(Shade::Dark.code(), "d");
        assert_eq!(Shade::AlsoLight.code(), "l");
    }

    #[test]
    fn first_declared_wins_on_duplicate_codes() {
        assert_eq!(Shade::resolve("l"), Some(Shade::Light));
    }

    #[test]
    fn resolve_misses() {
        assert_eq!(Shade::resolve(""), None);
        assert_eq!(Shade::resolve("L"), None);
        assert_eq!(Shade::resolve(" l"), None);
        assert_eq!(Shade::resolve_opt(None), None);
        assert_eq!(Shade::resolve_opt(Some("d")), Some(Shade::Dark));
        assert_eq!(resolve::<Shade>("x"), None);
    }

    #[test]
    fn resolve_strict_reports_kind_and_code() {
        let err = Shade::resolve_strict("x").unwrap_err();
        assert_eq!(
            err,
            CodeError::Unresolved {
                kind: "Shade",
                code: "x".to_string()
            }
        );
        assert_eq!(err.to_string(), "unknown Shade code: \"x\"");
        assert_eq!("d".parse::<Shade>().unwrap(), Shade::Dark);
    }

    #[test]
    fn display_is_code() {
        assert_eq!(Shade::Dark.to_string(), "d");
    }

    #[test]
    fn serializes_as_bare_string() {
        assert_eq!(serde_json::to_string(&Shade::Dark).unwrap(), "\"d\"");
        let swatch = Swatch {
            shade: Some(Shade::Dark),
            layers: vec![Shade::Light, Shade::Dark],
        };
        assert_eq!(
            serde_json::to_string(&swatch).unwrap(),
            r#"{"shade":"d","layers":"l d"}"#
        );
    }

    #[test]
    fn strict_deserialize_rejects_unknown() {
        assert_eq!(serde_json::from_str::<Shade>("\"d\"").unwrap(), Shade::Dark);
        let err = serde_json::from_str::<Shade>("\"q\"").unwrap_err();
        assert!(err.to_string().contains("unknown Shade code"));
    }

    #[test]
    fn lenient_field_turns_unknown_into_none() {
        let swatch: Swatch = serde_json::from_str(r#"{"shade":"q","layers":""}"#).unwrap();
        assert_eq!(swatch.shade, None);
        assert!(swatch.layers.is_empty());
    }

    #[test]
    fn lenient_field_accepts_null_and_missing() {
        let swatch: Swatch = serde_json::from_str(r#"{"shade":null,"layers":null}"#).unwrap();
        assert_eq!(swatch.shade, None);
        assert!(swatch.layers.is_empty());

        let swatch: Swatch = serde_json::from_str("{}").unwrap();
        assert_eq!(swatch.shade, None);
    }

    #[test]
    fn lenient_field_rejects_wrong_token_type() {
        assert!(serde_json::from_str::<Swatch>(r#"{"shade":3}"#).is_err());
        assert!(serde_json::from_str::<Swatch>(r#"{"shade":{"code":"d"}}"#).is_err());
        assert!(serde_json::from_str::<Swatch>(r#"{"layers":["d"]}"#).is_err());
    }

    #[test]
    fn space_separated_drops_unknown_tokens() {
        let swatch: Swatch = serde_json::from_str(r#"{"layers":"d  nope l"}"#).unwrap();
        assert_eq!(swatch.layers, vec![Shade::Dark, Shade::Light]);
    }

    #[test]
    fn join_and_split() {
        assert_eq!(join_codes::<Shade>(&[]), "");
        assert_eq!(join_codes(&[Shade::Dark, Shade::Dark]), "d d");
        assert_eq!(split_codes::<Shade>("d l"), vec![Shade::Dark, Shade::Light]);
    }
}

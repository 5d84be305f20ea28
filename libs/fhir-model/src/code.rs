//! Coded elements and value sets
//!
//! A coded element is a primitive whose value is drawn from a closed value
//! set. The value set itself is a plain Rust enum implementing [`CodeValue`];
//! the element shape (id, extension, value) is [`Coded<C>`], which is just
//! [`Primitive`] over the enum. String-to-constant mapping happens in one
//! place, `CodeValue::from_code`, and rejects anything outside the set.

use crate::error::Result;
use crate::primitive::{Primitive, PrimitiveValue};
use crate::validation;

/// A coded element bound to the value set `C`.
pub type Coded<C> = Primitive<C>;

/// A closed enumeration of legal codes.
///
/// Implementations are generated by the [`value_set!`] macro; every variant
/// is a typed constant for one legal code.
pub trait CodeValue: Copy + Eq + std::hash::Hash + 'static {
    /// Name of the value set, used in error messages.
    const VALUE_SET: &'static str;

    /// The canonical code string for this constant.
    fn as_str(&self) -> &'static str;

    /// Maps a code string to its constant, failing with
    /// [`crate::Error::UnrecognizedCode`] when no constant matches.
    fn from_code(code: &str) -> Result<Self>;

    /// All constants of the value set, in declaration order.
    fn values() -> &'static [Self];
}

impl<C: CodeValue + PrimitiveValue> Coded<C> {
    /// Builds a coded element from a code string, rejecting strings that
    /// violate the code lexical rules or fall outside the value set.
    pub fn of(code: &str) -> Result<Self> {
        validation::check_code(code)?;
        Ok(Self::from(C::from_code(code)?))
    }

    /// The canonical code string of the value, if present.
    pub fn code_str(&self) -> Option<&'static str> {
        self.value.map(|v| v.as_str())
    }
}

/// Defines a value-set enum: variants, code strings, [`CodeValue`] and
/// [`PrimitiveValue`] impls, `Display`/`FromStr`, and serde as the bare
/// code string.
macro_rules! value_set {
    (
        $(#[$meta:meta])*
        $name:ident ($value_set:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::code::CodeValue for $name {
            const VALUE_SET: &'static str = $value_set;

            fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $code ),+
                }
            }

            fn from_code(code: &str) -> $crate::error::Result<Self> {
                match code {
                    $( $code => Ok(Self::$variant), )+
                    other => Err($crate::error::Error::UnrecognizedCode {
                        code: other.to_string(),
                        value_set: Self::VALUE_SET,
                    }),
                }
            }

            fn values() -> &'static [Self] {
                &[ $( Self::$variant ),+ ]
            }
        }

        impl $crate::primitive::PrimitiveValue for $name {
            const TYPE_NAME: &'static str = "code";

            fn accept_value(&self, name: &str, visitor: &mut dyn $crate::visitor::Visitor) {
                visitor.visit_string(name, $crate::code::CodeValue::as_str(self));
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::code::CodeValue::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                $crate::code::CodeValue::from_code(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::code::CodeValue::as_str(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let code = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                $crate::code::CodeValue::from_code(&code).map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use value_set;

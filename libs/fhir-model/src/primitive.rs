//! Primitive elements
//!
//! FHIR primitives are not bare scalars: every primitive element may carry
//! an id and extensions alongside (or instead of) its value. [`Primitive<T>`]
//! is the generic container for that shape; the FHIR primitive types are
//! aliases over it.
//!
//! A primitive serializes as its bare value when it has no id/extension and
//! as an `{id, extension, value}` object otherwise. This is a structural
//! JSON form, not the FHIR wire encoding (which is out of scope here).

use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::element::Element;
use crate::error::Result;
use crate::types::Extension;
use crate::validation;
use crate::visitor::{accept_all, Visitable, Visitor};

/// A primitive element: optional id, extensions, and an optional value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Primitive<T> {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub value: Option<T>,
}

pub type Boolean = Primitive<bool>;
pub type Integer = Primitive<i32>;
pub type UnsignedInt = Primitive<u32>;
pub type PositiveInt = Primitive<u32>;
pub type Decimal = Primitive<rust_decimal::Decimal>;

// The string-valued primitives all share one representation; the declared
// kind lives in the field that holds them. Temporal values are carried as
// validated-by-convention strings rather than chrono types.
pub type FhirString = Primitive<String>;
pub type Code = Primitive<String>;
pub type Uri = Primitive<String>;
pub type Url = Primitive<String>;
pub type Canonical = Primitive<String>;
pub type Id = Primitive<String>;
pub type Markdown = Primitive<String>;
pub type Date = Primitive<String>;
pub type DateTime = Primitive<String>;
pub type Instant = Primitive<String>;
pub type Time = Primitive<String>;
pub type Base64Binary = Primitive<String>;

/// Scalar payloads a primitive element can carry. Supplies the FHIR type
/// name and routes the value to the matching terminal visitor hook.
pub trait PrimitiveValue {
    const TYPE_NAME: &'static str;

    fn accept_value(&self, name: &str, visitor: &mut dyn Visitor);
}

impl PrimitiveValue for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn accept_value(&self, name: &str, visitor: &mut dyn Visitor) {
        visitor.visit_boolean(name, *self);
    }
}

impl PrimitiveValue for i32 {
    const TYPE_NAME: &'static str = "integer";

    fn accept_value(&self, name: &str, visitor: &mut dyn Visitor) {
        visitor.visit_integer(name, i64::from(*self));
    }
}

impl PrimitiveValue for u32 {
    const TYPE_NAME: &'static str = "unsignedInt";

    fn accept_value(&self, name: &str, visitor: &mut dyn Visitor) {
        visitor.visit_integer(name, i64::from(*self));
    }
}

impl PrimitiveValue for String {
    const TYPE_NAME: &'static str = "string";

    fn accept_value(&self, name: &str, visitor: &mut dyn Visitor) {
        visitor.visit_string(name, self);
    }
}

impl PrimitiveValue for rust_decimal::Decimal {
    const TYPE_NAME: &'static str = "decimal";

    fn accept_value(&self, name: &str, visitor: &mut dyn Visitor) {
        visitor.visit_decimal(name, *self);
    }
}

impl<T> Default for Primitive<T> {
    fn default() -> Self {
        Self {
            id: None,
            extension: Vec::new(),
            value: None,
        }
    }
}

impl<T> From<T> for Primitive<T> {
    fn from(value: T) -> Self {
        Self {
            id: None,
            extension: Vec::new(),
            value: Some(value),
        }
    }
}

impl From<&str> for Primitive<String> {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl<T> Primitive<T> {
    pub fn builder() -> PrimitiveBuilder<T> {
        PrimitiveBuilder::default()
    }

    pub fn to_builder(&self) -> PrimitiveBuilder<T>
    where
        T: Clone,
    {
        PrimitiveBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            value: self.value.clone(),
        }
    }
}

impl Primitive<String> {
    /// The value as a borrowed string, if present.
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Staging object for a [`Primitive`]; `build()` enforces ele-1.
#[derive(Debug, Clone)]
pub struct PrimitiveBuilder<T> {
    id: Option<String>,
    extension: Vec<Extension>,
    value: Option<T>,
}

impl<T> Default for PrimitiveBuilder<T> {
    fn default() -> Self {
        Self {
            id: None,
            extension: Vec::new(),
            value: None,
        }
    }
}

impl<T> PrimitiveBuilder<T> {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.extension.push(extension);
        self
    }

    pub fn set_extension(mut self, extension: Vec<Extension>) -> Self {
        self.extension = extension;
        self
    }

    pub fn value(mut self, value: impl Into<T>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<Primitive<T>>
    where
        T: PrimitiveValue,
    {
        let primitive = Primitive {
            id: self.id,
            extension: self.extension,
            value: self.value,
        };
        validation::check_element_strings(&primitive)?;
        validation::require_value_or_children(&primitive)?;
        Ok(primitive)
    }
}

impl<T: PrimitiveValue> Element for Primitive<T> {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl<T: PrimitiveValue> Visitable for Primitive<T> {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.extension, "extension", visitor);
                if let Some(value) = &self.value {
                    value.accept_value("value", visitor);
                }
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

impl<T: Serialize> Serialize for Primitive<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.id.is_none() && self.extension.is_empty() {
            match &self.value {
                Some(value) => value.serialize(serializer),
                None => serializer.serialize_none(),
            }
        } else {
            let len = usize::from(self.id.is_some())
                + usize::from(!self.extension.is_empty())
                + usize::from(self.value.is_some());
            let mut state = serializer.serialize_struct("Primitive", len)?;
            if let Some(id) = &self.id {
                state.serialize_field("id", id)?;
            }
            if !self.extension.is_empty() {
                state.serialize_field("extension", &self.extension)?;
            }
            if let Some(value) = &self.value {
                state.serialize_field("value", value)?;
            }
            state.end()
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Primitive<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        use serde::de::Error as _;

        let raw = serde_json::Value::deserialize(deserializer)?;
        match raw {
            serde_json::Value::Null => Ok(Self::default()),
            serde_json::Value::Object(map) => {
                let mut primitive = Self::default();
                for (key, value) in map {
                    match key.as_str() {
                        "id" => {
                            primitive.id = serde_json::from_value(value).map_err(D::Error::custom)?
                        }
                        "extension" => {
                            primitive.extension =
                                serde_json::from_value(value).map_err(D::Error::custom)?
                        }
                        "value" => {
                            primitive.value =
                                serde_json::from_value(value).map_err(D::Error::custom)?
                        }
                        _ => {}
                    }
                }
                Ok(primitive)
            }
            scalar => {
                let value: T = serde_json::from_value(scalar).map_err(D::Error::custom)?;
                Ok(Self::from(value))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn bare_value_round_trips_as_scalar() {
        let b = Boolean::from(true);
        let json = serde_json::to_value(&b).unwrap();
        assert_eq!(json, serde_json::json!(true));
        let back: Boolean = serde_json::from_value(json).unwrap();
        assert_eq!(back, b);
    }

    #[test]
    fn extended_primitive_uses_object_form() {
        let s = FhirString::builder().id("s1").value("hello").build().unwrap();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "s1", "value": "hello" }));
        let back: FhirString = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn empty_primitive_fails_ele_1() {
        let err = FhirString::builder().build().unwrap_err();
        assert!(matches!(err, Error::MissingValueOrChildren("string")));
        // An id alone is not a child; extensions are.
        assert!(FhirString::builder().id("only-id").build().is_err());
    }

    #[test]
    fn build_rejects_invalid_string_values() {
        let err = FhirString::builder()
            .value("bad\u{0}value")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidString(_)));
    }

    #[test]
    fn to_builder_round_trip_preserves_equality() {
        let d = Decimal::from(rust_decimal::Decimal::new(25, 1));
        let rebuilt = d.to_builder().build().unwrap();
        assert_eq!(d, rebuilt);
    }
}
